//! The 4x4 tile grid.
//!
//! A `Grid` is plain data: sixteen `u32` cells addressed row-major as
//! `(row, col)`, where `0` means the cell is empty. It performs no game
//! logic on its own; the move engine, spawn policy and evaluator all work
//! through the accessors defined here.
use std::fmt;

/// Width and height of the square grid.
pub const GRID_SIZE: usize = 4;

/// Reaching this tile value wins the game.
pub const WIN_TILE: u32 = 2048;

/// Largest tile a grid may hold. Doubling it still fits in a `u32`.
pub const MAX_TILE: u32 = 1 << 30;

/// One row (or, after a transpose, one column) of the grid.
pub type Row = [u32; GRID_SIZE];

/// A 4x4 matrix of tile values.
///
/// Cells are either `0` (empty) or a power of two. Only moves and spawns
/// write non-zero values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [Row; GRID_SIZE],
}

impl Grid {
    /// Creates a grid with every cell empty.
    ///
    /// # Examples
    /// ```
    /// use twenty48::grid::{Grid, GRID_SIZE};
    /// let grid = Grid::new_empty();
    /// assert_eq!(grid.empty_cells().len(), GRID_SIZE * GRID_SIZE);
    /// ```
    pub fn new_empty() -> Self {
        Grid {
            cells: [[0; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Creates a grid from a predefined set of values.
    ///
    /// The values are taken as-is. This is meant for tests and for front ends
    /// that load a saved position; `utils::grid_from_str_array` validates
    /// text input before calling it.
    pub fn from_values(values: [Row; GRID_SIZE]) -> Self {
        Grid { cells: values }
    }

    /// Returns the value at `(r, c)`.
    ///
    /// # Panics
    /// Panics if `r` or `c` is not below `GRID_SIZE`.
    pub fn get(&self, r: usize, c: usize) -> u32 {
        self.cells[r][c]
    }

    /// Sets the value at `(r, c)`.
    ///
    /// # Panics
    /// Panics if `r` or `c` is not below `GRID_SIZE`.
    pub fn set(&mut self, r: usize, c: usize, value: u32) {
        self.cells[r][c] = value;
    }

    /// Returns a copy of all sixteen values, row-major.
    pub fn values(&self) -> [Row; GRID_SIZE] {
        self.cells
    }

    /// Empties every cell.
    pub fn reset_all(&mut self) {
        self.cells = [[0; GRID_SIZE]; GRID_SIZE];
    }

    /// Coordinates of all empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut empty = Vec::new();
        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                if self.cells[r][c] == 0 {
                    empty.push((r, c));
                }
            }
        }
        empty
    }

    /// `true` when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&v| v != 0)
    }

    /// The largest tile on the grid, `0` for an empty grid.
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Number of non-empty cells.
    pub fn tile_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v != 0).count()
    }

    pub(crate) fn rows(&self) -> &[Row; GRID_SIZE] {
        &self.cells
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [Row; GRID_SIZE] {
        &mut self.cells
    }
}

impl fmt::Display for Grid {
    /// Right-aligned values, one row per line, `.` for empty cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                if value == 0 {
                    write!(f, "{:>5}", ".")?;
                } else {
                    write!(f, "{:>5}", value)?;
                }
            }
            if r < GRID_SIZE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_empty_grid() {
        let grid = Grid::new_empty();
        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                assert_eq!(grid.get(r, c), 0);
            }
        }
        assert!(!grid.is_full());
        assert_eq!(grid.tile_count(), 0);
        assert_eq!(grid.max_tile(), 0);
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::new_empty();
        grid.set(1, 2, 8);
        grid.set(3, 3, 2);
        assert_eq!(grid.get(1, 2), 8);
        assert_eq!(grid.get(3, 3), 2);
        assert_eq!(grid.get(0, 0), 0);
        assert_eq!(grid.tile_count(), 2);
        assert_eq!(grid.max_tile(), 8);
    }

    #[test]
    #[should_panic]
    fn test_get_out_of_bounds_panics() {
        let grid = Grid::new_empty();
        grid.get(GRID_SIZE, 0);
    }

    #[test]
    #[should_panic]
    fn test_set_out_of_bounds_panics() {
        let mut grid = Grid::new_empty();
        grid.set(0, GRID_SIZE, 2);
    }

    #[test]
    fn test_values_is_a_snapshot() {
        let mut grid = Grid::new_empty();
        grid.set(0, 0, 4);
        let snapshot = grid.values();
        grid.set(0, 0, 8);
        assert_eq!(snapshot[0][0], 4);
        assert_eq!(grid.get(0, 0), 8);
    }

    #[test]
    fn test_reset_all() {
        let mut grid = Grid::from_values([[2; GRID_SIZE]; GRID_SIZE]);
        assert!(grid.is_full());
        grid.reset_all();
        assert_eq!(grid, Grid::new_empty());
    }

    #[test]
    fn test_empty_cells_row_major() {
        let grid = Grid::from_values([
            [2, 0, 2, 2],
            [2, 2, 2, 2],
            [2, 2, 2, 0],
            [2, 2, 2, 2],
        ]);
        assert_eq!(grid.empty_cells(), vec![(0, 1), (2, 3)]);
    }

    #[test]
    fn test_display() {
        let grid = Grid::from_values([
            [2, 0, 0, 0],
            [0, 2048, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 4],
        ]);
        let expected = "    2     .     .     .\n    .  2048     .     .\n    .     .     .     .\n    .     .     .     4";
        assert_eq!(grid.to_string(), expected);
    }
}
