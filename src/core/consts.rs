pub const GRID_SIZE: usize = 4;
pub const WIN_TILE: u32 = 2048;
/// Largest tile a 4x4 board can hold: every cell doubling up from a spawned 4.
pub const MAX_TILE: u32 = 1 << 17;

/// Chance that a spawned tile is a 2 rather than a 4.
pub const SPAWN_TWO_PROBABILITY: f64 = 0.9;
pub const STARTING_TILES: usize = 2;
