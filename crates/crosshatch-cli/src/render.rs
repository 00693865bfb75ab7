//! Terminal grid rendering in the fixed-width block form.

use crossterm::style::Stylize;
use crosshatch_core::grid::{cell_char, row_separator};
use crosshatch_core::Grid;

/// Print the grid, optionally highlighting the most recent placement.
///
/// With `plain` set the output is exactly the grid's `Display` form, safe
/// for pipes and tests.
pub fn print_grid(grid: &Grid, highlight: Option<(usize, usize)>, plain: bool) {
    let geometry = grid.geometry();
    let sep = row_separator(geometry.block());

    for row in 0..geometry.edge() {
        if row % geometry.block() == 0 {
            println!("{sep}");
        }
        print!("|");
        for col in 0..geometry.edge() {
            let ch = cell_char(grid.value(row, col));
            if !plain && highlight == Some((row, col)) {
                print!("{}", ch.green().bold());
            } else {
                print!("{ch}");
            }
            if (col + 1) % geometry.block() == 0 {
                print!("|");
            }
        }
        println!();
    }
    println!("{sep}");
}
