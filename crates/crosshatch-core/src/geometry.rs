//! Grid geometry: edge length and block size.

use serde::{Deserialize, Serialize};

use crate::errors::GeometryError;

/// Edge and block dimensions of a square grid.
///
/// The edge length must be a perfect square so that blocks tile the grid
/// evenly; the block side is its integer square root (9 -> 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Geometry {
    edge: usize,
    block: usize,
}

impl Geometry {
    /// Largest supported edge length (bounded by the candidate bitmask width).
    pub const MAX_EDGE: usize = 25;

    /// Validate an edge length and derive the block size.
    pub fn new(edge: usize) -> Result<Self, GeometryError> {
        if edge == 0 {
            return Err(GeometryError::ZeroEdge);
        }
        if edge > Self::MAX_EDGE {
            return Err(GeometryError::TooLarge(edge));
        }
        match (1..=edge).find(|b| b * b == edge) {
            Some(block) => Ok(Self { edge, block }),
            None => Err(GeometryError::NotSquare(edge)),
        }
    }

    /// The standard 9x9 grid with 3x3 blocks.
    pub fn classic() -> Self {
        Self { edge: 9, block: 3 }
    }

    /// Cells per row (and values per house).
    pub fn edge(self) -> usize {
        self.edge
    }

    /// Side length of a block.
    pub fn block(self) -> usize {
        self.block
    }

    /// Total cell count (edge squared).
    pub fn cell_count(self) -> usize {
        self.edge * self.edge
    }

    /// All placeable values, ascending.
    pub fn values(self) -> std::ops::RangeInclusive<u8> {
        1..=self.edge as u8
    }

    /// Top-left corner of the block containing the given cell.
    pub fn block_origin(self, row: usize, col: usize) -> (usize, usize) {
        (
            (row / self.block) * self.block,
            (col / self.block) * self.block,
        )
    }
}
