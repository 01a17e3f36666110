use crate::engine::Direction;
use crate::error::{GameError, Result};
use crate::grid::{Grid, GRID_SIZE, MAX_TILE};

/// Parses an array of string slices into a `Grid`.
///
/// Each string slice is one row, starting from row 0, holding up to
/// `GRID_SIZE` whitespace-separated tile values. `.` and `0` both mean an
/// empty cell. Missing rows and missing trailing values are left empty.
///
/// # Returns
/// * `Ok(Grid)` if every token is `.` or a tile value (0 or a power of two
///   from 2 up to `MAX_TILE`).
/// * `Err(GameError)` if there are more than `GRID_SIZE` rows, a row has
///   more than `GRID_SIZE` values, a token is not a number, or a number is
///   not a valid tile.
///
/// # Examples
/// ```
/// use twenty48::utils::grid_from_str_array;
///
/// let grid = grid_from_str_array(&["2 2 . .", ". 4"]).unwrap();
/// assert_eq!(grid.get(0, 1), 2);
/// assert_eq!(grid.get(1, 1), 4);
/// assert_eq!(grid.get(3, 3), 0);
///
/// assert!(grid_from_str_array(&["2 3"]).is_err());
/// ```
pub fn grid_from_str_array(s: &[&str]) -> Result<Grid> {
    if s.len() > GRID_SIZE {
        return Err(GameError::TooManyRows {
            expected: GRID_SIZE,
            found: s.len(),
        });
    }

    let mut values = [[0; GRID_SIZE]; GRID_SIZE];
    for (r, row_str) in s.iter().enumerate() {
        let tokens: Vec<&str> = row_str.split_whitespace().collect();
        if tokens.len() > GRID_SIZE {
            return Err(GameError::RowTooLong {
                row: r,
                expected: GRID_SIZE,
                found: tokens.len(),
            });
        }

        for (c, token) in tokens.into_iter().enumerate() {
            if token == "." {
                continue;
            }
            let value: u32 = token.parse().map_err(|_| GameError::InvalidToken {
                token: token.to_string(),
                row: r,
                col: c,
            })?;
            // 1 is 2^0 but never a tile; anything past MAX_TILE could not merge.
            if value == 1 || value > MAX_TILE || (value != 0 && !value.is_power_of_two()) {
                return Err(GameError::InvalidTileValue {
                    value,
                    row: r,
                    col: c,
                });
            }
            values[r][c] = value;
        }
    }
    Ok(Grid::from_values(values))
}

/// Maps keyboard-style input to a direction.
///
/// Accepts `w`/`a`/`s`/`d`, vi-style `k`/`h`/`j`/`l` and the full words
/// `up`/`left`/`down`/`right`, case-insensitively.
pub fn parse_direction(input: &str) -> Result<Direction> {
    match input.trim().to_ascii_lowercase().as_str() {
        "w" | "k" | "up" => Ok(Direction::Up),
        "a" | "h" | "left" => Ok(Direction::Left),
        "s" | "j" | "down" => Ok(Direction::Down),
        "d" | "l" | "right" => Ok(Direction::Right),
        _ => Err(GameError::UnknownDirection(input.trim().to_string())),
    }
}
