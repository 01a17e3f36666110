//! Win/loss classification.
use crate::grid::{Grid, GRID_SIZE, WIN_TILE};
use std::fmt;

/// Outcome of inspecting a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// A tile reached `WIN_TILE`.
    Won,
    /// At least one move is still possible.
    Ongoing,
    /// The grid is full and no two neighbours are equal.
    Lost,
}

impl GameStatus {
    /// `true` for `Won` and `Lost`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GameStatus::Won => "won",
            GameStatus::Ongoing => "ongoing",
            GameStatus::Lost => "lost",
        };
        f.write_str(label)
    }
}

/// Classifies `grid`. The first matching rule wins:
/// 1. any cell equals `WIN_TILE` → `Won` (even on a stuck grid)
/// 2. any cell is empty → `Ongoing`
/// 3. any horizontal or vertical neighbours are equal → `Ongoing`
/// 4. otherwise → `Lost`
///
/// # Examples
/// ```
/// use twenty48::evaluator::{evaluate, GameStatus};
/// use twenty48::grid::Grid;
///
/// let stuck = Grid::from_values([
///     [2, 4, 2, 4],
///     [4, 2, 4, 2],
///     [2, 4, 2, 4],
///     [4, 2, 4, 2],
/// ]);
/// assert_eq!(evaluate(&stuck), GameStatus::Lost);
/// ```
pub fn evaluate(grid: &Grid) -> GameStatus {
    if grid.rows().iter().flatten().any(|&v| v == WIN_TILE) {
        return GameStatus::Won;
    }
    if !grid.is_full() {
        return GameStatus::Ongoing;
    }
    if has_adjacent_equal(grid) {
        return GameStatus::Ongoing;
    }
    GameStatus::Lost
}

/// `true` if any two horizontally or vertically adjacent cells hold the same
/// value, including pairs along the last row and last column.
pub fn has_adjacent_equal(grid: &Grid) -> bool {
    let cells = grid.rows();
    for r in 0..GRID_SIZE {
        for c in 0..GRID_SIZE {
            let value = cells[r][c];
            if c + 1 < GRID_SIZE && cells[r][c + 1] == value {
                return true;
            }
            if r + 1 < GRID_SIZE && cells[r + 1][c] == value {
                return true;
            }
        }
    }
    false
}
