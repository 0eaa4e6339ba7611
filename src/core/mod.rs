//! The move engine: pure grid transforms plus the spawn and evaluation rules.

mod consts;
mod error;
mod evaluate;
mod model_helpers;
mod models;
mod orientation;
mod spawn;
mod update;

pub use consts::*;
pub use error::EngineError;
pub use evaluate::{evaluate_state, is_lost};
pub use models::{Direction, GameStatus, Grid, Line, MoveOutcome, UserAction};
pub use orientation::{Orientation, reverse_rows, rotate_clockwise, rotate_counter_clockwise};
pub use spawn::{random_tile_value, spawn_tile};
pub use update::{apply_move, apply_named_move, available_moves, slide_and_merge};
