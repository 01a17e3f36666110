//! Tile spawning.
//!
//! This is the only source of randomness in the game. The generator is
//! always supplied by the caller, so a seeded `SmallRng` makes a whole
//! session reproducible.
use crate::grid::Grid;
use rand::seq::SliceRandom;
use rand::Rng;

/// Places `spawn_value` on an empty cell chosen uniformly at random.
///
/// Returns the chosen `(row, col)`, or `None` when the grid is full; a full
/// grid is left untouched.
///
/// # Examples
/// ```
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
/// use twenty48::grid::Grid;
/// use twenty48::spawn::add_new_tile;
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let mut grid = Grid::new_empty();
/// let (r, c) = add_new_tile(&mut grid, 2, &mut rng).unwrap();
/// assert_eq!(grid.get(r, c), 2);
/// ```
pub fn add_new_tile<R: Rng + ?Sized>(
    grid: &mut Grid,
    spawn_value: u32,
    rng: &mut R,
) -> Option<(usize, usize)> {
    let empty = grid.empty_cells();
    let &(r, c) = empty.choose(rng)?;
    grid.set(r, c, spawn_value);
    log::trace!("spawned {} at ({}, {})", spawn_value, r, c);
    Some((r, c))
}

/// Spawns `count` tiles of `value`, stopping early if the grid fills up.
///
/// Returns how many tiles were placed.
pub fn place_initial_tiles<R: Rng + ?Sized>(
    grid: &mut Grid,
    count: usize,
    value: u32,
    rng: &mut R,
) -> usize {
    (0..count)
        .take_while(|_| add_new_tile(grid, value, rng).is_some())
        .count()
}
