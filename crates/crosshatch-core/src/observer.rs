//! Solving events and the observer interface.
//!
//! The engine itself never prints or logs; it reports deduction placements
//! and the final outcome through a [`SolveObserver`] injected by the caller.
//! Backtracking trial placements and undos are silent.

use serde::{Deserialize, Serialize};

use crate::grid::Grid;

/// Deduction technique that produced a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Technique {
    NakedSingle,
    HiddenSingle,
}

impl std::fmt::Display for Technique {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Technique::NakedSingle => write!(f, "Naked single"),
            Technique::HiddenSingle => write!(f, "Hidden single"),
        }
    }
}

/// One committed deduction placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Technique that found the value.
    pub technique: Technique,
    /// The placed value.
    pub value: u8,
    /// Zero-based row of the cell.
    pub row: usize,
    /// Zero-based column of the cell.
    pub col: usize,
    /// Filled-cell count after this placement.
    pub filled: usize,
}

/// Receiver for solving events.
///
/// Both methods default to no-ops, so headless solving needs no observer
/// code at all. `finished` fires exactly once per solve; on failure the
/// grid it receives retains every deduction placement while every search
/// trial has been undone.
pub trait SolveObserver {
    /// A deduction strategy committed a value.
    fn placed(&mut self, grid: &Grid, placement: &Placement) {
        let _ = (grid, placement);
    }

    /// The solve concluded, successfully or not.
    fn finished(&mut self, grid: &Grid, solved: bool) {
        let _ = (grid, solved);
    }
}

/// Observer that records the full trace, for tests and JSON output.
#[derive(Debug, Clone, Default)]
pub struct TraceRecorder {
    /// Every deduction placement, in order.
    pub placements: Vec<Placement>,
    /// Final outcome, once `finished` has fired.
    pub solved: Option<bool>,
    /// Grid state at `finished`.
    pub final_grid: Option<Grid>,
}

impl SolveObserver for TraceRecorder {
    fn placed(&mut self, _grid: &Grid, placement: &Placement) {
        self.placements.push(placement.clone());
    }

    fn finished(&mut self, grid: &Grid, solved: bool) {
        self.solved = Some(solved);
        self.final_grid = Some(grid.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_technique_display() {
        assert_eq!(Technique::NakedSingle.to_string(), "Naked single");
        assert_eq!(Technique::HiddenSingle.to_string(), "Hidden single");
    }

    #[test]
    fn test_placement_serde_roundtrip() {
        let placement = Placement {
            technique: Technique::HiddenSingle,
            value: 4,
            row: 0,
            col: 1,
            filled: 31,
        };
        let json = serde_json::to_string(&placement).unwrap();
        assert!(json.contains("\"HiddenSingle\""));
        let back: Placement = serde_json::from_str(&json).unwrap();
        assert_eq!(back, placement);
    }

    #[test]
    fn test_recorder_collects_events() {
        let mut recorder = TraceRecorder::default();
        let grid = Grid::classic();
        let placement = Placement {
            technique: Technique::NakedSingle,
            value: 9,
            row: 8,
            col: 8,
            filled: 1,
        };
        recorder.placed(&grid, &placement);
        recorder.finished(&grid, false);
        assert_eq!(recorder.placements, vec![placement]);
        assert_eq!(recorder.solved, Some(false));
        assert_eq!(recorder.final_grid.as_ref().unwrap(), &grid);
    }
}
