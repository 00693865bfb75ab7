//! Cell and grid model.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::candidates::CandidateSet;
use crate::errors::ParseError;
use crate::geometry::Geometry;

/// One cell: a placed value (0 = empty) plus its remaining candidates.
///
/// The candidate set is meaningful only while the cell is empty and the
/// deduction phase is running; placing a value clears it, and the
/// backtracking phase neither reads nor maintains it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cell {
    value: u8,
    candidates: CandidateSet,
}

impl Cell {
    /// The placed value, or 0 if empty.
    pub fn value(&self) -> u8 {
        self.value
    }

    /// The remaining candidates.
    pub fn candidates(&self) -> CandidateSet {
        self.candidates
    }
}

/// A square grid of cells plus a running count of filled cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    geometry: Geometry,
    cells: Vec<Cell>,
    filled: usize,
}

impl Grid {
    /// An all-empty grid with the given geometry.
    pub fn empty(geometry: Geometry) -> Self {
        Self {
            geometry,
            cells: vec![Cell::default(); geometry.cell_count()],
            filled: 0,
        }
    }

    /// An all-empty 9x9 grid.
    pub fn classic() -> Self {
        Self::empty(Geometry::classic())
    }

    /// Parse a classic 9x9 puzzle from its text form.
    ///
    /// `0` and `.` mark empty cells; whitespace and the `|`/`*` framing of
    /// the pretty-printed form are ignored, so both the single-line and the
    /// block renderings parse.
    pub fn from_givens(text: &str) -> Result<Self, ParseError> {
        let geometry = Geometry::classic();
        let mut grid = Self::empty(geometry);
        let mut count = 0;

        for ch in text.chars() {
            if ch.is_whitespace() || ch == '|' || ch == '*' {
                continue;
            }
            let value = match ch {
                '.' | '0' => 0,
                '1'..='9' => ch as u8 - b'0',
                other => return Err(ParseError::UnrecognizedCharacter(other)),
            };
            if count < grid.cells.len() {
                grid.cells[count].value = value;
                if value != 0 {
                    grid.filled += 1;
                }
            }
            count += 1;
        }

        if count != geometry.cell_count() {
            return Err(ParseError::WrongCellCount {
                expected: geometry.cell_count(),
                found: count,
            });
        }
        Ok(grid)
    }

    /// The single-line text form: one character per cell, `0` for empty.
    /// Inverse of [`Grid::from_givens`].
    pub fn givens_string(&self) -> String {
        self.cells
            .iter()
            .map(|cell| match cell.value {
                0 => '0',
                v => cell_char(v),
            })
            .collect()
    }

    /// The grid's geometry.
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Value at the given cell, 0 if empty.
    pub fn value(&self, row: usize, col: usize) -> u8 {
        self.cells[self.index(row, col)].value
    }

    /// Whether the cell holds no value.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.value(row, col) == 0
    }

    /// Number of filled cells.
    pub fn filled_count(&self) -> usize {
        self.filled
    }

    /// Whether every cell is filled.
    pub fn is_full(&self) -> bool {
        self.filled == self.geometry.cell_count()
    }

    /// Remaining candidates for the cell.
    pub fn candidates(&self, row: usize, col: usize) -> CandidateSet {
        self.cells[self.index(row, col)].candidates
    }

    /// Compute each empty cell's candidates from scratch: all values minus
    /// those already placed in its row, column, and block. Runs once, before
    /// deduction begins.
    pub fn init_candidates(&mut self) {
        for row in 0..self.geometry.edge() {
            for col in 0..self.geometry.edge() {
                if !self.is_empty(row, col) {
                    continue;
                }
                let mut set = CandidateSet::all(self.geometry);
                for value in self.house_values(row, col) {
                    set.remove(value);
                }
                let idx = self.index(row, col);
                self.cells[idx].candidates = set;
            }
        }
    }

    /// Set or clear a cell's value, keeping the filled count in step.
    /// Candidates are left untouched.
    pub(crate) fn set_value(&mut self, row: usize, col: usize, value: u8) {
        let idx = self.index(row, col);
        let old = self.cells[idx].value;
        if old == 0 && value != 0 {
            self.filled += 1;
        } else if old != 0 && value == 0 {
            self.filled -= 1;
        }
        self.cells[idx].value = value;
    }

    pub(crate) fn clear_candidates(&mut self, row: usize, col: usize) {
        let idx = self.index(row, col);
        self.cells[idx].candidates.clear();
    }

    pub(crate) fn remove_candidate(&mut self, row: usize, col: usize, value: u8) {
        let idx = self.index(row, col);
        self.cells[idx].candidates.remove(value);
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.geometry.edge() + col
    }

    /// Placed values in the cell's row, column, and block (with repeats).
    fn house_values(&self, row: usize, col: usize) -> Vec<u8> {
        let edge = self.geometry.edge();
        let block = self.geometry.block();
        let (rstart, cstart) = self.geometry.block_origin(row, col);
        let mut values = Vec::new();

        for c in 0..edge {
            values.push(self.value(row, c));
        }
        for r in 0..edge {
            values.push(self.value(r, col));
        }
        for r in rstart..rstart + block {
            for c in cstart..cstart + block {
                values.push(self.value(r, c));
            }
        }
        values.retain(|&v| v != 0);
        values
    }
}

/// Character for a cell value: `.` for empty, digits for 1-9, letters above.
pub fn cell_char(value: u8) -> char {
    match value {
        0 => '.',
        1..=9 => (b'0' + value) as char,
        v => (b'A' + v - 10) as char,
    }
}

/// Separator line between block rows, e.g. `|***|***|***|` for 3x3 blocks.
pub fn row_separator(block: usize) -> String {
    let mut sep = String::from("|");
    for _ in 0..block {
        for _ in 0..block {
            sep.push('*');
        }
        sep.push('|');
    }
    sep
}

impl fmt::Display for Grid {
    /// The fixed-width block form:
    ///
    /// ```text
    /// |***|***|***|
    /// |.3.|...|...|
    /// ...
    /// |***|***|***|
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let edge = self.geometry.edge();
        let block = self.geometry.block();
        let sep = row_separator(block);

        for row in 0..edge {
            if row % block == 0 {
                writeln!(f, "{sep}")?;
            }
            write!(f, "|")?;
            for col in 0..edge {
                write!(f, "{}", cell_char(self.value(row, col)))?;
                if (col + 1) % block == 0 {
                    write!(f, "|")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "{sep}")
    }
}
