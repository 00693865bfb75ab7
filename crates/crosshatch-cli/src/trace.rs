//! JSON solve trace for `--trace-json`.

use crosshatch_core::{Outcome, Placement, SolveReport};
use serde::Serialize;

/// One JSON object covering the whole solve.
#[derive(Debug, Serialize)]
pub struct Trace {
    /// Deduction placements in order; search trials are not traced.
    pub placements: Vec<Placement>,
    pub outcome: TraceOutcome,
    pub used_search: bool,
    /// The completed grid as 81 cell characters, or null on failure.
    pub grid: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TraceOutcome {
    Solved,
    Unsolvable,
}

impl Trace {
    pub fn new(placements: Vec<Placement>, report: &SolveReport) -> Self {
        let (outcome, grid) = match &report.outcome {
            Outcome::Solved(solution) => (TraceOutcome::Solved, Some(solution.givens_string())),
            Outcome::Unsolvable => (TraceOutcome::Unsolvable, None),
        };
        Self {
            placements,
            outcome,
            used_search: report.stats.used_search,
            grid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crosshatch_core::{Grid, Solver, TraceRecorder};

    const SOLUTION: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    #[test]
    fn test_trace_json_shape_for_a_solve() {
        // Blank one cell so exactly one naked single lands.
        let mut givens = SOLUTION.to_string();
        givens.replace_range(0..1, "0");
        let grid = Grid::from_givens(&givens).unwrap();

        let mut recorder = TraceRecorder::default();
        let report = Solver::new().solve_with_observer(&grid, &mut recorder);
        let trace = Trace::new(recorder.placements, &report);

        let json: serde_json::Value = serde_json::from_str(
            &serde_json::to_string_pretty(&trace).unwrap(),
        )
        .unwrap();
        assert_eq!(json["outcome"], "Solved");
        assert_eq!(json["used_search"], false);
        assert_eq!(json["grid"], SOLUTION);
        assert_eq!(json["placements"].as_array().unwrap().len(), 1);
        assert_eq!(json["placements"][0]["technique"], "NakedSingle");
        assert_eq!(json["placements"][0]["value"], 5);
        assert_eq!(json["placements"][0]["row"], 0);
        assert_eq!(json["placements"][0]["col"], 0);
        assert_eq!(json["placements"][0]["filled"], 81);
    }

    #[test]
    fn test_trace_json_on_failure_has_null_grid() {
        // (0,0) blanked, (1,0) changed to 5: only 5 fits row 0 and the
        // column forbids it.
        let mut givens = SOLUTION.to_string();
        givens.replace_range(0..1, "0");
        givens.replace_range(9..10, "5");
        let grid = Grid::from_givens(&givens).unwrap();

        let mut recorder = TraceRecorder::default();
        let report = Solver::new().solve_with_observer(&grid, &mut recorder);
        let trace = Trace::new(recorder.placements, &report);

        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&trace).unwrap()).unwrap();
        assert_eq!(json["outcome"], "Unsolvable");
        assert_eq!(json["used_search"], true);
        assert!(json["grid"].is_null());
    }
}
