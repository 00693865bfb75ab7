//! The two singles strategies.
//!
//! Both scan cells in row-major order and stop after the first placement,
//! so repeated runs on the same grid produce the same trace.

use super::Engine;
use crate::grid::Grid;
use crate::observer::{SolveObserver, Technique};

impl<O: SolveObserver> Engine<'_, O> {
    /// Solve one cell whose candidate set has exactly one member.
    /// Returns whether a placement occurred.
    pub(crate) fn try_naked_singles(&mut self) -> bool {
        let edge = self.grid.geometry().edge();
        for row in 0..edge {
            for col in 0..edge {
                if !self.grid.is_empty(row, col) {
                    continue;
                }
                if let Some(value) = self.grid.candidates(row, col).sole() {
                    self.place(Technique::NakedSingle, value, row, col);
                    return true;
                }
            }
        }
        false
    }

    /// Solve one cell holding a candidate that no other cell in one of its
    /// houses can still take. Returns whether a placement occurred.
    pub(crate) fn try_hidden_singles(&mut self) -> bool {
        let edge = self.grid.geometry().edge();
        for row in 0..edge {
            for col in 0..edge {
                if !self.grid.is_empty(row, col) {
                    continue;
                }
                for value in self.grid.candidates(row, col).iter() {
                    if is_hidden_single(self.grid, value, row, col) {
                        self.place(Technique::HiddenSingle, value, row, col);
                        return true;
                    }
                }
            }
        }
        false
    }
}

/// Whether `value` is absent from every other cell's candidate set in at
/// least one house of `(row, col)`. Houses are checked row, then column,
/// then block, short-circuiting on the first that confirms.
fn is_hidden_single(grid: &Grid, value: u8, row: usize, col: usize) -> bool {
    absent_from_row(grid, value, row, col)
        || absent_from_col(grid, value, row, col)
        || absent_from_block(grid, value, row, col)
}

fn absent_from_row(grid: &Grid, value: u8, row: usize, skip_col: usize) -> bool {
    (0..grid.geometry().edge()).all(|c| c == skip_col || !grid.candidates(row, c).contains(value))
}

fn absent_from_col(grid: &Grid, value: u8, skip_row: usize, col: usize) -> bool {
    (0..grid.geometry().edge()).all(|r| r == skip_row || !grid.candidates(r, col).contains(value))
}

fn absent_from_block(grid: &Grid, value: u8, row: usize, col: usize) -> bool {
    let geometry = grid.geometry();
    let (rstart, cstart) = geometry.block_origin(row, col);
    for r in rstart..rstart + geometry.block() {
        for c in cstart..cstart + geometry.block() {
            if !(r == row && c == col) && grid.candidates(r, c).contains(value) {
                return false;
            }
        }
    }
    true
}
