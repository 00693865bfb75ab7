//! Solver orchestrator.
//!
//! Alternates the two singles strategies until neither applies, then falls
//! back to exhaustive backtracking. Every deduction placement flows through
//! the placement engine, which propagates eliminations and emits events.

mod backtrack;
mod singles;

use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::observer::{Placement, SolveObserver, Technique};

/// Final result of a solve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A completed, constraint-valid grid.
    Solved(Grid),
    /// Every branch was exhausted without completing the grid.
    Unsolvable,
}

/// Counters describing how a solve went.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveStats {
    /// Placements found as naked singles.
    pub naked_singles: usize,
    /// Placements found as hidden singles.
    pub hidden_singles: usize,
    /// Whether the backtracking fallback was invoked.
    pub used_search: bool,
}

/// Outcome plus statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveReport {
    pub outcome: Outcome,
    pub stats: SolveStats,
}

/// Unit struct solver — stateless, all state is per-call.
pub struct Solver;

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a new solver.
    pub fn new() -> Self {
        Self
    }

    /// Solve the puzzle headless. The input grid is never mutated.
    pub fn solve(&self, grid: &Grid) -> SolveReport {
        struct Headless;
        impl SolveObserver for Headless {}
        self.solve_with_observer(grid, &mut Headless)
    }

    /// Solve the puzzle, reporting placements and the outcome to `observer`.
    pub fn solve_with_observer<O: SolveObserver>(
        &self,
        grid: &Grid,
        observer: &mut O,
    ) -> SolveReport {
        let mut working = grid.clone();
        let mut stats = SolveStats::default();

        // Already-full input: success with zero strategy scans and zero
        // placement events.
        if working.is_full() {
            observer.finished(&working, true);
            return SolveReport {
                outcome: Outcome::Solved(working),
                stats,
            };
        }

        working.init_candidates();
        {
            let mut engine = Engine {
                grid: &mut working,
                observer: &mut *observer,
                stats: &mut stats,
            };
            loop {
                if engine.try_naked_singles() {
                    continue;
                }
                if engine.grid.is_full() {
                    break;
                }
                if engine.try_hidden_singles() {
                    continue;
                }
                break;
            }
        }

        if working.is_full() {
            observer.finished(&working, true);
            return SolveReport {
                outcome: Outcome::Solved(working),
                stats,
            };
        }

        // Deduction is exhausted; hand over to the search. From here on
        // candidate sets are neither read nor maintained.
        stats.used_search = true;
        let solved = backtrack::search(&mut working, 0, 0);
        observer.finished(&working, solved);
        let outcome = if solved {
            Outcome::Solved(working)
        } else {
            Outcome::Unsolvable
        };
        SolveReport { outcome, stats }
    }
}

/// Deduction-phase state: the working grid, the observer, and counters.
///
/// Owns the placement engine; the singles strategies live in
/// [`singles`] as further impl blocks.
pub(crate) struct Engine<'a, O: SolveObserver> {
    pub(crate) grid: &'a mut Grid,
    pub(crate) observer: &'a mut O,
    pub(crate) stats: &'a mut SolveStats,
}

impl<O: SolveObserver> Engine<'_, O> {
    /// Commit `value` at `(row, col)`: set the cell, clear its candidates,
    /// and remove `value` from every empty peer in the row, column, and
    /// block. Emits one placement event.
    ///
    /// Calling this on a filled cell is a strategy bug and panics.
    pub(crate) fn place(&mut self, technique: Technique, value: u8, row: usize, col: usize) {
        assert!(
            self.grid.is_empty(row, col),
            "placement target ({row},{col}) is already filled"
        );
        self.grid.set_value(row, col, value);
        self.grid.clear_candidates(row, col);

        let geometry = self.grid.geometry();
        let edge = geometry.edge();
        for c in 0..edge {
            if c != col && self.grid.is_empty(row, c) {
                self.grid.remove_candidate(row, c, value);
            }
        }
        for r in 0..edge {
            if r != row && self.grid.is_empty(r, col) {
                self.grid.remove_candidate(r, col, value);
            }
        }
        // Block cells already visited as row or column peers are removed
        // again; removal is idempotent.
        let (rstart, cstart) = geometry.block_origin(row, col);
        for r in rstart..rstart + geometry.block() {
            for c in cstart..cstart + geometry.block() {
                if !(r == row && c == col) && self.grid.is_empty(r, c) {
                    self.grid.remove_candidate(r, c, value);
                }
            }
        }

        match technique {
            Technique::NakedSingle => self.stats.naked_singles += 1,
            Technique::HiddenSingle => self.stats.hidden_singles += 1,
        }
        let placement = Placement {
            technique,
            value,
            row,
            col,
            filled: self.grid.filled_count(),
        };
        self.observer.placed(self.grid, &placement);
    }
}
