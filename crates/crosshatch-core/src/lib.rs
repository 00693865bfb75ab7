//! Sudoku solving engine: singles deduction with a backtracking fallback.
//!
//! The solver models the pencil-and-paper workflow — maintain candidate
//! sets, commit naked and hidden singles until neither applies — and then
//! hands any remainder to an exhaustive backtracking search, so every
//! solvable puzzle gets an answer. Deduction placements are reported
//! through an injected [`SolveObserver`]; all scans run in fixed row-major
//! order, so identical input always yields an identical trace.
//!
//! ```
//! use crosshatch_core::{Grid, Outcome, Solver};
//!
//! let grid = Grid::from_givens(
//!     "530070000600195000098000060800060003400803001700020006060000280000419005000080079",
//! )
//! .unwrap();
//! let report = Solver::new().solve(&grid);
//! match report.outcome {
//!     Outcome::Solved(solution) => assert!(solution.is_full()),
//!     Outcome::Unsolvable => unreachable!(),
//! }
//! ```

pub mod candidates;
pub mod errors;
pub mod geometry;
pub mod grid;
pub mod observer;
pub mod solver;


pub use candidates::CandidateSet;
pub use errors::{GeometryError, ParseError};
pub use geometry::Geometry;
pub use grid::{Cell, Grid};
pub use observer::{Placement, SolveObserver, Technique, TraceRecorder};
pub use solver::{Outcome, SolveReport, SolveStats, Solver};
