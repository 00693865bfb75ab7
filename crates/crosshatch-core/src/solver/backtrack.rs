//! Exhaustive backtracking search.
//!
//! The guaranteed fallback once deduction stalls. Works purely on placed
//! values: candidate sets are neither read nor written here, so the stale
//! sets left behind by the deduction phase are harmless.

use crate::grid::Grid;

/// Depth-first search over the remaining cells in row-major order, trying
/// values ascending at each empty cell and undoing on failure.
///
/// Returns whether a full valid completion was reached. On failure the grid
/// is restored to the state it had on entry. Recursion depth is bounded by
/// the cell count.
pub(crate) fn search(grid: &mut Grid, mut row: usize, mut col: usize) -> bool {
    let geometry = grid.geometry();
    if col == geometry.edge() {
        // Finished with this row; wrap to the next.
        col = 0;
        row += 1;
        if row == geometry.edge() {
            // Entire grid has been filled.
            return true;
        }
    }

    if !grid.is_empty(row, col) {
        return search(grid, row, col + 1);
    }

    for value in geometry.values() {
        if valid_insertion(grid, value, row, col) {
            grid.set_value(row, col, value);
            if search(grid, row, col + 1) {
                return true;
            }
            // Failed downstream; undo the trial.
            grid.set_value(row, col, 0);
        }
    }
    false
}

/// Whether placing `value` at `(row, col)` would leave the grid free of
/// duplicates, checked by direct scan of the full column, row, and block.
pub(crate) fn valid_insertion(grid: &Grid, value: u8, row: usize, col: usize) -> bool {
    let geometry = grid.geometry();
    let edge = geometry.edge();

    for r in 0..edge {
        if grid.value(r, col) == value {
            return false;
        }
    }
    for c in 0..edge {
        if grid.value(row, c) == value {
            return false;
        }
    }
    let (rstart, cstart) = geometry.block_origin(row, col);
    for r in rstart..rstart + geometry.block() {
        for c in cstart..cstart + geometry.block() {
            if grid.value(r, c) == value {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUZZLE: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";

    #[test]
    fn test_valid_insertion() {
        let grid = Grid::from_givens(PUZZLE).unwrap();
        // 5 already sits in row 0 and block 0.
        assert!(!valid_insertion(&grid, 5, 0, 2));
        // 9 sits in column 8 (row 8).
        assert!(!valid_insertion(&grid, 9, 0, 8));
        // 8 sits in block 8 (row 6, col 7).
        assert!(!valid_insertion(&grid, 8, 8, 6));
        assert!(valid_insertion(&grid, 1, 0, 2));
    }

    #[test]
    fn test_search_completes_a_puzzle() {
        let mut grid = Grid::from_givens(PUZZLE).unwrap();
        assert!(search(&mut grid, 0, 0));
        assert!(grid.is_full());
        assert_eq!(
            grid.givens_string(),
            "534678912672195348198342567859761423426853791713924856961537284287419635345286179"
        );
    }

    #[test]
    fn test_search_restores_grid_on_failure() {
        // (0,0) is blank; its row allows only 5, and the altered given at
        // (1,0) blocks 5 through the column, so no value fits.
        let puzzle =
            "034678912572195348198342567859761423426853791713924856961537284287419635345286179";
        let mut grid = Grid::from_givens(puzzle).unwrap();
        let before = grid.filled_count();
        assert!(!search(&mut grid, 0, 0));
        assert_eq!(grid.filled_count(), before);
        assert!(grid.is_empty(0, 0));
    }
}
