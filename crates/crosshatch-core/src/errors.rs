//! Error types for grid construction and puzzle parsing.

use thiserror::Error;

use crate::geometry::Geometry;

/// Rejected grid geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Edge length of zero.
    #[error("grid edge length must be at least 1")]
    ZeroEdge,
    /// Blocks cannot tile the grid unless the edge length is a perfect square.
    #[error("grid edge length {0} is not a perfect square")]
    NotSquare(usize),
    /// Edge length beyond what the candidate bitmask can represent.
    #[error("grid edge length {0} exceeds the supported maximum of {}", Geometry::MAX_EDGE)]
    TooLarge(usize),
}

/// Rejected puzzle text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A character that is neither a cell value, an empty-cell marker, nor framing.
    #[error("unrecognized character {0:?} in puzzle text")]
    UnrecognizedCharacter(char),
    /// Wrong number of cell characters for the grid size.
    #[error("expected {expected} cell values, found {found}")]
    WrongCellCount { expected: usize, found: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GeometryError::NotSquare(8).to_string(),
            "grid edge length 8 is not a perfect square"
        );
        assert_eq!(
            GeometryError::TooLarge(36).to_string(),
            "grid edge length 36 exceeds the supported maximum of 25"
        );
        assert_eq!(
            ParseError::UnrecognizedCharacter('x').to_string(),
            "unrecognized character 'x' in puzzle text"
        );
        assert_eq!(
            ParseError::WrongCellCount { expected: 81, found: 80 }.to_string(),
            "expected 81 cell values, found 80"
        );
    }
}
