use serde::{Deserialize, Serialize};

use crate::core::consts::GRID_SIZE;

/// One row (or oriented column) of the board.
pub type Line = [u32; GRID_SIZE];

/// The 4x4 board. `0` is an empty cell, anything else is a power of two.
///
/// The array type pins the dimensions; the constructors in `model_helpers`
/// and the deserializer reject cells that are not powers of two.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    pub(crate) cells: [Line; GRID_SIZE],
}

/// Unchecked wire form of `Grid`; deserialization goes through `Grid::from_rows`.
#[derive(Deserialize)]
pub(crate) struct RawGrid {
    pub(crate) cells: [Line; GRID_SIZE],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UserAction {
    Move(Direction),
    Restart,
    KeepPlaying,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

/// Result of resolving one move on a grid, before any tile is spawned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub grid: Grid,
    pub score_delta: u64,
    pub changed: bool,
}
