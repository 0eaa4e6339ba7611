use rand::Rng;
use rand::seq::SliceRandom;

use crate::core::consts::SPAWN_TWO_PROBABILITY;
use crate::core::models::Grid;

/// Place a 2 (90%) or a 4 (10%) on a uniformly chosen empty cell.
///
/// A full grid comes back unchanged. That is not how to detect a finished
/// game; use `evaluate_state` for that.
pub fn spawn_tile<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Grid {
    let empty = grid.empty_cells();
    let Some(&(row, col)) = empty.choose(rng) else {
        return *grid;
    };

    let mut spawned = *grid;
    spawned.set(row, col, random_tile_value(rng));
    spawned
}

pub fn random_tile_value<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    if rng.gen_bool(SPAWN_TWO_PROBABILITY) { 2 } else { 4 }
}
