//! Session controller: one play-through of 2048.
//!
//! A `Session` owns its `Grid`, the best score, an optional move counter and
//! the current `GameStatus`. Rule variants are plain data (`VariantConfig`);
//! the controller reads the config and never branches on the variant name.
use crate::engine::{apply_direction, Direction};
use crate::error::GameError;
use crate::evaluator::{evaluate, GameStatus};
use crate::grid::{Grid, Row, GRID_SIZE};
use crate::spawn::{add_new_tile, place_initial_tiles};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::str::FromStr;

/// A named rule set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    Normal,
    /// Currently plays exactly like `Normal`.
    Hard,
    Easy,
    Competition,
}

/// The rules a variant boils down to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VariantConfig {
    /// Value of the tile spawned after every changing move.
    pub spawn_value: u32,
    /// Number of tiles placed at start and on reset.
    pub initial_tiles: usize,
    /// Value of each starting tile.
    pub initial_value: u32,
    /// Whether the session tracks a move counter.
    pub counts_moves: bool,
}

impl Variant {
    pub const ALL: [Variant; 4] = [
        Variant::Normal,
        Variant::Hard,
        Variant::Easy,
        Variant::Competition,
    ];

    /// Returns the rule set for this variant.
    ///
    /// # Examples
    /// ```
    /// use twenty48::session::Variant;
    /// let easy = Variant::Easy.config();
    /// assert_eq!(easy.spawn_value, 8);
    /// assert_eq!(easy.initial_tiles, 1);
    /// ```
    pub fn config(&self) -> VariantConfig {
        match self {
            Variant::Normal | Variant::Hard => VariantConfig {
                spawn_value: 2,
                initial_tiles: 2,
                initial_value: 2,
                counts_moves: false,
            },
            Variant::Easy => VariantConfig {
                spawn_value: 8,
                initial_tiles: 1,
                initial_value: 8,
                counts_moves: false,
            },
            Variant::Competition => VariantConfig {
                spawn_value: 2,
                initial_tiles: 2,
                initial_value: 2,
                counts_moves: true,
            },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Variant::Normal => "normal",
            Variant::Hard => "hard",
            Variant::Easy => "easy",
            Variant::Competition => "competition",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Variant::ALL
            .into_iter()
            .find(|v| v.name() == wanted)
            .ok_or_else(|| GameError::UnknownVariant(s.to_string()))
    }
}

/// Result of `Session::apply_move`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Whether the grid changed (and therefore a tile was spawned).
    pub changed: bool,
    /// Status after the move.
    pub status: GameStatus,
}

/// Read-only view of a session for rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub values: [Row; GRID_SIZE],
    pub best_score: u32,
    /// `Some` only for variants that count moves.
    pub move_count: Option<u32>,
    pub status: GameStatus,
}

/// One play-through.
///
/// Inputs are processed one at a time: move, spawn if anything changed,
/// count the move, then re-evaluate. Once the status is `Won` or `Lost`,
/// moves are ignored until `reset`.
///
/// # Examples
/// ```
/// use twenty48::engine::Direction;
/// use twenty48::evaluator::GameStatus;
/// use twenty48::session::{Session, Variant};
///
/// let mut session = Session::with_seed(Variant::Competition, 11);
/// assert_eq!(session.grid().tile_count(), 2);
///
/// let outcome = session.apply_move(Direction::Left);
/// let expected = if outcome.changed { 1 } else { 0 };
/// assert_eq!(session.move_count(), Some(expected));
/// assert_eq!(outcome.status, GameStatus::Ongoing);
/// ```
#[derive(Clone, Debug)]
pub struct Session<R: Rng = SmallRng> {
    variant: Variant,
    config: VariantConfig,
    grid: Grid,
    best_score: u32,
    moves: u32,
    status: GameStatus,
    rng: R,
}

impl Session<SmallRng> {
    /// Starts a session whose spawns are seeded from the operating system.
    pub fn new(variant: Variant) -> Self {
        Session::with_rng(variant, SmallRng::from_entropy())
    }

    /// Starts a reproducible session.
    pub fn with_seed(variant: Variant, seed: u64) -> Self {
        Session::with_rng(variant, SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Session<R> {
    /// Starts a session that draws spawns from `rng`.
    pub fn with_rng(variant: Variant, rng: R) -> Self {
        let mut session = Session {
            variant,
            config: variant.config(),
            grid: Grid::new_empty(),
            best_score: 0,
            moves: 0,
            status: GameStatus::Ongoing,
            rng,
        };
        session.reset();
        session
    }

    /// Starts a session from a fixed position instead of the variant's
    /// starting tiles. The status is evaluated immediately.
    pub fn from_grid(variant: Variant, grid: Grid, rng: R) -> Self {
        Session {
            variant,
            config: variant.config(),
            grid,
            best_score: 0,
            moves: 0,
            status: evaluate(&grid),
            rng,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn config(&self) -> &VariantConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Largest tile ever produced by a merge. Survives `reset`.
    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    /// Changing moves since the last reset, for variants that count them.
    pub fn move_count(&self) -> Option<u32> {
        self.config.counts_moves.then_some(self.moves)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Applies one directional input.
    ///
    /// On a finished session this does nothing and reports the terminal
    /// status with `changed == false`.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        if self.status.is_terminal() {
            log::debug!("ignoring {} on a finished session ({})", direction, self.status);
            return MoveOutcome {
                changed: false,
                status: self.status,
            };
        }

        let changed = apply_direction(&mut self.grid, direction, &mut self.best_score);
        if changed {
            add_new_tile(&mut self.grid, self.config.spawn_value, &mut self.rng);
            if self.config.counts_moves {
                self.moves += 1;
            }
        }
        self.status = evaluate(&self.grid);
        log::debug!(
            "{} move {}: changed={}, status={}, best={}",
            self.variant,
            direction,
            changed,
            self.status,
            self.best_score
        );
        if self.status.is_terminal() {
            log::info!(
                "{} game {} with best tile {}",
                self.variant,
                self.status,
                self.best_score
            );
        }

        MoveOutcome {
            changed,
            status: self.status,
        }
    }

    /// Read-only copy of everything a front end needs to draw.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            values: self.grid.values(),
            best_score: self.best_score,
            move_count: self.move_count(),
            status: self.status,
        }
    }

    /// Clears the grid, places the variant's starting tiles and zeroes the
    /// move counter. The best score is kept.
    pub fn reset(&mut self) {
        self.grid.reset_all();
        place_initial_tiles(
            &mut self.grid,
            self.config.initial_tiles,
            self.config.initial_value,
            &mut self.rng,
        );
        self.moves = 0;
        self.status = GameStatus::Ongoing;
        log::debug!("{} session reset, best score {}", self.variant, self.best_score);
    }
}
