//! Basic example of using the solving engine

use crosshatch_core::{Grid, Outcome, Placement, SolveObserver, Solver};

/// Observer that prints one line per deduction placement.
struct Narrator;

impl SolveObserver for Narrator {
    fn placed(&mut self, _grid: &Grid, placement: &Placement) {
        println!(
            "{} {} placed at ({},{})",
            placement.technique, placement.value, placement.row, placement.col
        );
    }
}

fn main() {
    // Parse a puzzle from a string
    let puzzle_string =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    let puzzle = Grid::from_givens(puzzle_string).expect("valid puzzle text");

    println!("Puzzle:");
    println!("{}", puzzle);
    println!("Given cells: {}", puzzle.filled_count());

    // Solve it, narrating each deduction step
    println!("\nSolving...\n");
    let solver = Solver::new();
    let report = solver.solve_with_observer(&puzzle, &mut Narrator);

    println!(
        "\n{} naked singles, {} hidden singles, search {}",
        report.stats.naked_singles,
        report.stats.hidden_singles,
        if report.stats.used_search { "used" } else { "not needed" }
    );

    match report.outcome {
        Outcome::Solved(solution) => {
            println!("\nSolution:");
            println!("{}", solution);
        }
        Outcome::Unsolvable => println!("\nNo solution found"),
    }
}
