//! `crosshatch` — solve a sudoku from the command line.
//!
//! Reads a puzzle from the argument list, a file, or stdin, runs the
//! solving engine, and narrates each deduction placement the way a
//! newspaper solver would, grid after grid.

mod render;
mod trace;

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use crosshatch_core::{Grid, Outcome, Placement, SolveObserver, Solver};

#[derive(Debug, Parser)]
#[command(
    name = "crosshatch",
    version,
    about = "Solve a sudoku by singles deduction with a backtracking fallback"
)]
struct Args {
    /// Puzzle as 81 cell characters; `0` or `.` marks an empty cell.
    /// Whitespace and `|`/`*` framing are ignored.
    puzzle: Option<String>,

    /// Read the puzzle text from a file instead (`-` for stdin)
    #[arg(short, long, value_name = "PATH", conflicts_with = "puzzle")]
    file: Option<PathBuf>,

    /// Suppress per-placement output; print only the final outcome
    #[arg(short, long)]
    quiet: bool,

    /// Disable colors and styling
    #[arg(long)]
    plain: bool,

    /// After solving, write the placement trace plus outcome as JSON to stdout
    #[arg(long)]
    trace_json: bool,
}

/// Prints each placement as it lands and keeps the trace for `--trace-json`.
struct ConsoleObserver {
    quiet: bool,
    plain: bool,
    placements: Vec<Placement>,
}

impl SolveObserver for ConsoleObserver {
    fn placed(&mut self, grid: &Grid, placement: &Placement) {
        if !self.quiet {
            println!();
            println!(
                "Solved # {}: {} {} placed at ({},{})",
                placement.filled, placement.technique, placement.value, placement.row, placement.col
            );
            render::print_grid(grid, Some((placement.row, placement.col)), self.plain);
        }
        self.placements.push(placement.clone());
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let text = match load_puzzle_text(&args) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("crosshatch: {err}");
            return ExitCode::from(2);
        }
    };
    let grid = match Grid::from_givens(&text) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("crosshatch: {err}");
            return ExitCode::from(2);
        }
    };
    log::debug!(
        "parsed a {0}x{0} puzzle with {1} givens",
        grid.geometry().edge(),
        grid.filled_count()
    );

    let mut observer = ConsoleObserver {
        quiet: args.quiet,
        plain: args.plain,
        placements: Vec::new(),
    };
    let started = Instant::now();
    let report = Solver::new().solve_with_observer(&grid, &mut observer);
    log::info!(
        "solve took {:.1?}: {} naked singles, {} hidden singles, search {}",
        started.elapsed(),
        report.stats.naked_singles,
        report.stats.hidden_singles,
        if report.stats.used_search { "used" } else { "not needed" }
    );

    let code = match &report.outcome {
        Outcome::Solved(solution) => {
            println!();
            if report.stats.used_search {
                println!("Solution:");
            } else {
                println!("Solution (obtained without backtracking):");
            }
            render::print_grid(solution, None, args.plain);
            ExitCode::SUCCESS
        }
        Outcome::Unsolvable => {
            println!();
            println!(" ATTEMPT FAILED!");
            println!();
            ExitCode::from(1)
        }
    };

    if args.trace_json {
        let trace = trace::Trace::new(observer.placements, &report);
        match serde_json::to_string_pretty(&trace) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("crosshatch: {err}");
                return ExitCode::from(2);
            }
        }
    }
    code
}

/// The puzzle text from the positional argument, `--file`, or stdin.
fn load_puzzle_text(args: &Args) -> io::Result<String> {
    if let Some(puzzle) = &args.puzzle {
        return Ok(puzzle.clone());
    }
    match &args.file {
        Some(path) if path.as_os_str() == "-" => read_stdin(),
        Some(path) => fs::read_to_string(path),
        None => read_stdin(),
    }
}

fn read_stdin() -> io::Result<String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse_positional_puzzle() {
        let puzzle = "0".repeat(81);
        let args = Args::parse_from(["crosshatch", "--quiet", puzzle.as_str()]);
        assert!(args.quiet);
        assert!(!args.plain);
        assert_eq!(args.puzzle.as_deref(), Some(puzzle.as_str()));
    }

    #[test]
    fn test_args_reject_puzzle_and_file_together() {
        let result = Args::try_parse_from(["crosshatch", "-f", "puzzle.txt", "123"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_puzzle_prefers_positional() {
        let args = Args::parse_from(["crosshatch", "530070000"]);
        assert_eq!(load_puzzle_text(&args).unwrap(), "530070000");
    }
}
