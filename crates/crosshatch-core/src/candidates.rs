//! Candidate sets as fixed-width bitmasks.

use serde::{Deserialize, Serialize};

use crate::geometry::Geometry;

/// Set of values still possible for an empty cell.
///
/// Bit `v - 1` is set when value `v` is a candidate. The mask width covers
/// every edge length up to [`Geometry::MAX_EDGE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CandidateSet(u32);

impl CandidateSet {
    /// The empty set.
    pub fn empty() -> Self {
        Self(0)
    }

    /// All values for the given geometry.
    pub fn all(geometry: Geometry) -> Self {
        Self((1u32 << geometry.edge()) - 1)
    }

    /// Add a value.
    pub fn insert(&mut self, value: u8) {
        self.0 |= 1 << (value - 1);
    }

    /// Remove a value. Removing an absent value is a no-op.
    pub fn remove(&mut self, value: u8) {
        self.0 &= !(1 << (value - 1));
    }

    /// Remove every value.
    pub fn clear(&mut self) {
        self.0 = 0;
    }

    /// Whether the value is present.
    pub fn contains(self, value: u8) -> bool {
        self.0 & (1 << (value - 1)) != 0
    }

    /// Number of candidates.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether no candidates remain.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The single member, if the set has exactly one.
    pub fn sole(self) -> Option<u8> {
        if self.0.count_ones() == 1 {
            Some(self.0.trailing_zeros() as u8 + 1)
        } else {
            None
        }
    }

    /// Members in ascending order.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (1..=32u8).filter(move |&v| self.contains(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_remove_contains() {
        let mut set = CandidateSet::empty();
        assert!(set.is_empty());
        set.insert(4);
        set.insert(9);
        assert!(set.contains(4));
        assert!(set.contains(9));
        assert!(!set.contains(5));
        assert_eq!(set.len(), 2);

        set.remove(4);
        assert!(!set.contains(4));
        // idempotent
        set.remove(4);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_all_covers_edge() {
        let set = CandidateSet::all(Geometry::classic());
        assert_eq!(set.len(), 9);
        assert!(set.contains(1));
        assert!(set.contains(9));
        assert!(!set.contains(10));
    }

    #[test]
    fn test_sole() {
        let mut set = CandidateSet::empty();
        assert_eq!(set.sole(), None);
        set.insert(7);
        assert_eq!(set.sole(), Some(7));
        set.insert(2);
        assert_eq!(set.sole(), None);
    }

    #[test]
    fn test_iter_ascending() {
        let mut set = CandidateSet::empty();
        set.insert(8);
        set.insert(1);
        set.insert(5);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![1, 5, 8]);
    }
}
