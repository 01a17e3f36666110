//! # 2048 Game Library
//!
//! This library provides the core game logic for the 2048 sliding-tile
//! puzzle: the 4x4 grid, the move engine, tile spawning, win/loss detection
//! and a session controller that ties them together for one play-through.
//!
//! It is used by two binaries:
//! - `human_player`: Interactive gameplay from the command line, with a mode
//!   selection screen and a "play again?" prompt after each game.
//! - `simulate`: Plays seeded sessions with random inputs for each rule
//!   variant and prints summary statistics.
//!
//! Rule variants (normal, hard, easy, competition) are configuration, not
//! separate engines; see `session::VariantConfig`.
//!
//! ## Modules
//! - `grid`: The `Grid` data structure and its constants.
//! - `engine`: `compress`, `merge`, `reverse`, `transpose` and the four directional moves.
//! - `spawn`: Random tile placement with a caller-supplied generator.
//! - `evaluator`: `GameStatus` and the `evaluate` classifier.
//! - `session`: `Session`, `Variant` and the values handed to front ends.
//! - `error`: The crate's error type.
//! - `utils`: Parsing grids and directions from text.

pub mod engine;
pub mod error;
pub mod evaluator;
pub mod grid;
pub mod session;
pub mod spawn;
pub mod utils;

pub use crate::engine::Direction;
pub use crate::error::{GameError, Result};
pub use crate::evaluator::GameStatus;
pub use crate::grid::Grid;
pub use crate::session::{MoveOutcome, Session, Snapshot, Variant, VariantConfig};
