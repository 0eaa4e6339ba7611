use crate::core::{GameStatus, Grid};
use crate::session::TurnReport;

pub struct GameRenderState {
    pub grid: Grid,
    pub score: u64,
    pub status: GameStatus,
    pub can_continue: bool,
    pub last_turn: Option<TurnReport>,
}
