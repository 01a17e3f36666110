use thiserror::Error;

/// Recoverable failures raised by the text helpers.
///
/// Game play itself never fails: out-of-range coordinates panic, moves on a
/// finished session are no-ops and spawning on a full grid is skipped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid number of rows. Expected at most {expected}, found {found}")]
    TooManyRows { expected: usize, found: usize },
    #[error("Row {row} is too long. Expected at most {expected} values, found {found}")]
    RowTooLong {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Unrecognized token '{token}' in row {row} col {col}")]
    InvalidToken { token: String, row: usize, col: usize },
    #[error("Tile value {value} in row {row} col {col} is not 0 or a power of two")]
    InvalidTileValue { value: u32, row: usize, col: usize },
    #[error("Unknown direction '{0}'")]
    UnknownDirection(String),
    #[error("Unknown variant '{0}', expected one of: normal, hard, easy, competition")]
    UnknownVariant(String),
}

pub type Result<T> = core::result::Result<T, GameError>;
