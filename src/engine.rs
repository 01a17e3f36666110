//! Move engine for the 2048 grid.
//!
//! Every directional move is built from a single canonical primitive,
//! "move left" (`compress`, `merge`, `compress`), plus two structural
//! transforms:
//! - `reverse` mirrors each row, turning a right move into a left move.
//! - `transpose` swaps rows and columns, turning up/down into left/right.
//!
//! All moves mutate the grid in place and return whether any tile moved or
//! merged. The running best score is threaded through as `&mut u32` and is
//! raised whenever a merge produces a larger tile.
use crate::grid::{Grid, Row, GRID_SIZE};
use std::fmt;

/// A directional input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

/// Slides every non-zero value toward index 0, keeping their order, and
/// fills the tail with zeros.
///
/// Returns `true` if any value changed position.
///
/// # Examples
/// ```
/// use twenty48::engine::compress;
/// let mut row = [0, 2, 0, 4];
/// assert!(compress(&mut row));
/// assert_eq!(row, [2, 4, 0, 0]);
/// assert!(!compress(&mut row));
/// ```
pub fn compress(row: &mut Row) -> bool {
    let mut compressed = [0; GRID_SIZE];
    let mut changed = false;
    let mut pos = 0; // next free slot from the left
    for (j, &value) in row.iter().enumerate() {
        if value != 0 {
            compressed[pos] = value;
            // A value only moves if there was a gap somewhere before it.
            if j != pos {
                changed = true;
            }
            pos += 1;
        }
    }
    *row = compressed;
    changed
}

/// Merges adjacent equal pairs, scanning left to right.
///
/// For each pair `(j, j + 1)` of equal non-zero values, `j` becomes the
/// doubled value and `j + 1` becomes empty, so a freshly merged tile never
/// merges again in the same pass: `[2, 2, 2, 2]` gives `[4, 0, 4, 0]`.
/// `best_score` is raised to the doubled value when it is larger. A pair
/// whose double would not fit in a `u32` is left alone.
///
/// Returns `true` if at least one merge happened.
pub fn merge(row: &mut Row, best_score: &mut u32) -> bool {
    let mut changed = false;
    for j in 0..GRID_SIZE - 1 {
        let value = row[j];
        if value != 0 && value == row[j + 1] {
            let Some(merged) = value.checked_mul(2) else {
                continue;
            };
            row[j] = merged;
            // Emptying j + 1 means the next step compares 0 with j + 2, so the
            // new tile at j can't be picked up again in this pass.
            row[j + 1] = 0;
            changed = true;
            if merged > *best_score {
                *best_score = merged;
            }
        }
    }
    changed
}

/// Mirrors every row of the grid.
pub fn reverse(grid: &mut Grid) {
    for row in grid.rows_mut().iter_mut() {
        row.reverse();
    }
}

/// Swaps rows and columns.
pub fn transpose(grid: &mut Grid) {
    let cells = grid.rows_mut();
    // Walk the upper triangle only; each swap handles its mirror cell too,
    // and the diagonal stays put.
    for r in 0..GRID_SIZE {
        for c in (r + 1)..GRID_SIZE {
            let tmp = cells[r][c];
            cells[r][c] = cells[c][r];
            cells[c][r] = tmp;
        }
    }
}

/// Moves all tiles left: compress, merge, compress.
///
/// Returns `true` if the grid changed.
///
/// # Examples
/// ```
/// use twenty48::engine::move_left;
/// use twenty48::grid::Grid;
///
/// let mut grid = Grid::from_values([
///     [2, 2, 0, 0],
///     [0, 0, 0, 0],
///     [0, 0, 0, 0],
///     [0, 0, 0, 0],
/// ]);
/// let mut best = 0;
/// assert!(move_left(&mut grid, &mut best));
/// assert_eq!(grid.values()[0], [4, 0, 0, 0]);
/// assert_eq!(best, 4);
/// ```
pub fn move_left(grid: &mut Grid, best_score: &mut u32) -> bool {
    let mut changed = false;
    for row in grid.rows_mut().iter_mut() {
        let slid = compress(row);
        let merged = merge(row, best_score);
        compress(row); // close the gaps merges left behind
        changed |= slid || merged;
    }
    changed
}

/// Moves all tiles right by mirroring around a left move.
pub fn move_right(grid: &mut Grid, best_score: &mut u32) -> bool {
    reverse(grid);
    let changed = move_left(grid, best_score);
    reverse(grid);
    changed
}

/// Moves all tiles up by transposing around a left move.
pub fn move_up(grid: &mut Grid, best_score: &mut u32) -> bool {
    transpose(grid);
    let changed = move_left(grid, best_score);
    transpose(grid);
    changed
}

/// Moves all tiles down by transposing around a right move.
pub fn move_down(grid: &mut Grid, best_score: &mut u32) -> bool {
    transpose(grid);
    let changed = move_right(grid, best_score);
    transpose(grid);
    changed
}

/// Dispatches to the move for `direction`.
pub fn apply_direction(grid: &mut Grid, direction: Direction, best_score: &mut u32) -> bool {
    match direction {
        Direction::Up => move_up(grid, best_score),
        Direction::Down => move_down(grid, best_score),
        Direction::Left => move_left(grid, best_score),
        Direction::Right => move_right(grid, best_score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_row_grid(row: Row) -> Grid {
        Grid::from_values([row, [0; GRID_SIZE], [0; GRID_SIZE], [0; GRID_SIZE]])
    }

    #[test]
    fn test_compress_slides_in_order() {
        let mut row = [0, 4, 0, 2];
        assert!(compress(&mut row));
        assert_eq!(row, [4, 2, 0, 0]);
    }

    #[test]
    fn test_compress_is_idempotent() {
        let rows = [
            [0, 0, 0, 0],
            [2, 0, 0, 0],
            [0, 0, 0, 2],
            [2, 0, 4, 0],
            [0, 8, 8, 8],
            [2, 4, 8, 16],
        ];
        for original in rows {
            let mut row = original;
            compress(&mut row);
            assert!(!compress(&mut row), "second compress changed {:?}", original);
        }
    }

    #[test]
    fn test_compress_packed_row_reports_no_change() {
        let mut row = [2, 4, 0, 0];
        assert!(!compress(&mut row));
        assert_eq!(row, [2, 4, 0, 0]);
    }

    #[test]
    fn test_merge_pairs_do_not_cascade() {
        let mut row = [2, 2, 2, 2];
        let mut best = 0;
        assert!(merge(&mut row, &mut best));
        assert_eq!(row, [4, 0, 4, 0]);
        assert_eq!(best, 4);
    }

    #[test]
    fn test_merge_no_equal_neighbours() {
        let mut row = [2, 4, 2, 4];
        let mut best = 0;
        assert!(!merge(&mut row, &mut best));
        assert_eq!(row, [2, 4, 2, 4]);
        assert_eq!(best, 0);
    }

    #[test]
    fn test_merge_ignores_empty_pairs() {
        let mut row = [0, 0, 0, 0];
        let mut best = 0;
        assert!(!merge(&mut row, &mut best));
    }

    #[test]
    fn test_merge_keeps_larger_best_score() {
        let mut row = [2, 2, 0, 0];
        let mut best = 64;
        assert!(merge(&mut row, &mut best));
        assert_eq!(best, 64);
    }

    #[test]
    fn test_merge_produces_powers_of_two() {
        let mut best = 0;
        for exp in 2..16 {
            let value = 1u32 << exp;
            let mut row = [value, value, value / 2, value / 2];
            merge(&mut row, &mut best);
            for v in row {
                assert!(v == 0 || v.is_power_of_two(), "{} in {:?}", v, row);
            }
        }
    }

    #[test]
    fn test_merge_skips_pair_that_would_overflow() {
        let huge = 1u32 << 31;
        let mut row = [huge, huge, 2, 2];
        let mut best = 0;
        assert!(merge(&mut row, &mut best));
        assert_eq!(row, [huge, huge, 4, 0]);
        assert_eq!(best, 4);

        let mut grid = single_row_grid([huge, huge, 0, 0]);
        assert!(!move_left(&mut grid, &mut best));
        assert_eq!(grid.values()[0], [huge, huge, 0, 0]);
    }

    #[test]
    fn test_move_left_four_equal() {
        let mut grid = single_row_grid([2, 2, 2, 2]);
        let mut best = 0;
        assert!(move_left(&mut grid, &mut best));
        assert_eq!(grid.values()[0], [4, 4, 0, 0]);
    }

    #[test]
    fn test_move_left_gap_then_merge() {
        let mut grid = single_row_grid([2, 0, 2, 4]);
        let mut best = 0;
        assert!(move_left(&mut grid, &mut best));
        assert_eq!(grid.values()[0], [4, 4, 0, 0]);
        assert_eq!(best, 4);
    }

    #[test]
    fn test_move_left_merged_tile_does_not_merge_again() {
        let mut grid = single_row_grid([4, 2, 2, 0]);
        let mut best = 0;
        assert!(move_left(&mut grid, &mut best));
        assert_eq!(grid.values()[0], [4, 4, 0, 0]);
    }

    #[test]
    fn test_move_without_change() {
        let mut grid = Grid::from_values([
            [2, 4, 0, 0],
            [8, 0, 0, 0],
            [0, 0, 0, 0],
            [16, 2, 4, 8],
        ]);
        let before = grid;
        let mut best = 0;
        assert!(!move_left(&mut grid, &mut best));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_move_right() {
        let mut grid = single_row_grid([2, 2, 4, 0]);
        let mut best = 0;
        assert!(move_right(&mut grid, &mut best));
        assert_eq!(grid.values()[0], [0, 0, 4, 4]);
    }

    #[test]
    fn test_move_right_merges_from_the_right_edge() {
        let mut grid = single_row_grid([2, 2, 2, 0]);
        let mut best = 0;
        assert!(move_right(&mut grid, &mut best));
        assert_eq!(grid.values()[0], [0, 0, 2, 4]);
    }

    #[test]
    fn test_move_up_and_down() {
        let start = Grid::from_values([
            [2, 0, 0, 0],
            [0, 0, 0, 0],
            [2, 0, 0, 8],
            [4, 0, 0, 0],
        ]);

        let mut up = start;
        let mut best = 0;
        assert!(move_up(&mut up, &mut best));
        assert_eq!(
            up.values(),
            [[4, 0, 0, 8], [4, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]
        );

        let mut down = start;
        assert!(move_down(&mut down, &mut best));
        assert_eq!(
            down.values(),
            [[0, 0, 0, 0], [0, 0, 0, 0], [4, 0, 0, 0], [4, 0, 0, 8]]
        );
        assert_eq!(best, 4);
    }

    #[test]
    fn test_left_then_right_restores_order_without_merges() {
        let mut grid = Grid::from_values([
            [2, 0, 4, 8],
            [0, 16, 0, 2],
            [0, 0, 0, 0],
            [32, 0, 0, 64],
        ]);
        let non_zero = |g: &Grid| -> Vec<Vec<u32>> {
            g.values()
                .iter()
                .map(|row| row.iter().copied().filter(|&v| v != 0).collect())
                .collect()
        };
        let before = non_zero(&grid);
        let mut best = 0;
        move_left(&mut grid, &mut best);
        move_right(&mut grid, &mut best);
        assert_eq!(non_zero(&grid), before);
        assert_eq!(best, 0);
    }

    #[test]
    fn test_transpose_twice_is_identity() {
        let original = Grid::from_values([
            [1, 2, 3, 4],
            [5, 6, 7, 8],
            [9, 10, 11, 12],
            [13, 14, 15, 16],
        ]);
        let mut grid = original;
        transpose(&mut grid);
        assert_eq!(grid.get(0, 1), 5);
        assert_eq!(grid.get(3, 0), 4);
        transpose(&mut grid);
        assert_eq!(grid, original);
    }

    #[test]
    fn test_reverse() {
        let mut grid = single_row_grid([2, 4, 8, 16]);
        reverse(&mut grid);
        assert_eq!(grid.values()[0], [16, 8, 4, 2]);
    }

    #[test]
    fn test_apply_direction_dispatch() {
        let start = single_row_grid([0, 0, 0, 2]);
        let mut best = 0;

        let mut left = start;
        assert!(apply_direction(&mut left, Direction::Left, &mut best));
        assert_eq!(left.get(0, 0), 2);

        let mut right = start;
        assert!(!apply_direction(&mut right, Direction::Right, &mut best));

        let mut down = start;
        assert!(apply_direction(&mut down, Direction::Down, &mut best));
        assert_eq!(down.get(3, 3), 2);

        let mut up = start;
        assert!(!apply_direction(&mut up, Direction::Up, &mut best));
    }

    #[test]
    fn test_direction_display() {
        let names: Vec<String> = Direction::ALL.iter().map(|d| d.to_string()).collect();
        assert_eq!(names, vec!["up", "down", "left", "right"]);
    }
}
