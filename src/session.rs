//! One game's worth of state, threaded explicitly instead of living in globals.

use log::{debug, info};
use rand::Rng;
use serde::Serialize;

use crate::core::{
    Direction, GRID_SIZE, GameStatus, Grid, Line, STARTING_TILES, UserAction, apply_move,
    is_lost, spawn_tile,
};

/// What a single user action did to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnReport {
    /// The session is showing a win or loss; moves are dropped until restart.
    Ignored,
    /// The move did not change the grid. Nothing spawned, score untouched.
    NoChange,
    Moved {
        direction: Direction,
        score_delta: u64,
        status: GameStatus,
    },
    Restarted,
    Resumed,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    pub score: u64,
    pub max_tile: u32,
    pub status: GameStatus,
    pub has_won: bool,
    pub moves: u32,
    pub grid: [Line; GRID_SIZE],
}

pub struct GameSession<R: Rng> {
    grid: Grid,
    score: u64,
    status: GameStatus,
    has_won: bool,
    moves: u32,
    allow_continue: bool,
    rng: R,
}

impl<R: Rng> GameSession<R> {
    /// Fresh game: empty grid, score 0, two spawned tiles.
    pub fn new(rng: R, allow_continue: bool) -> Self {
        let mut session = Self::with_grid(Grid::EMPTY, rng, allow_continue);
        session.restart();
        session
    }

    /// Start from a given grid without spawning anything.
    pub fn with_grid(grid: Grid, rng: R, allow_continue: bool) -> Self {
        GameSession {
            grid,
            score: 0,
            status: GameStatus::Playing,
            has_won: false,
            moves: 0,
            allow_continue,
            rng,
        }
    }

    pub fn restart(&mut self) {
        self.grid = Grid::EMPTY;
        self.score = 0;
        self.status = GameStatus::Playing;
        self.has_won = false;
        self.moves = 0;
        for _ in 0..STARTING_TILES {
            self.grid = spawn_tile(&self.grid, &mut self.rng);
        }
        info!("New game started");
        debug!("Starting grid:\n{}", self.grid);
    }

    pub fn handle_action(&mut self, action: UserAction) -> TurnReport {
        match action {
            UserAction::Move(direction) => self.apply(direction),
            UserAction::Restart => {
                self.restart();
                TurnReport::Restarted
            }
            UserAction::KeepPlaying => {
                if self.keep_playing() {
                    TurnReport::Resumed
                } else {
                    TurnReport::Ignored
                }
            }
        }
    }

    /// Resolve one move: slide, and if anything changed, score, spawn and re-evaluate.
    pub fn apply(&mut self, direction: Direction) -> TurnReport {
        if self.status != GameStatus::Playing {
            debug!("Ignoring {} while {:?}", direction, self.status);
            return TurnReport::Ignored;
        }

        let outcome = apply_move(&self.grid, direction);
        if !outcome.changed {
            debug!("Move {} changed nothing", direction);
            return TurnReport::NoChange;
        }

        self.score += outcome.score_delta;
        self.moves += 1;
        self.grid = spawn_tile(&outcome.grid, &mut self.rng);
        self.status = self.next_status();
        debug!(
            "Move {} scored {} (total {}), status {:?}",
            direction, outcome.score_delta, self.score, self.status
        );

        match self.status {
            GameStatus::Won => info!(
                "Reached {} after {} moves, score {}",
                self.grid.max_tile(),
                self.moves,
                self.score
            ),
            GameStatus::Lost => {
                info!("No moves left after {} moves, score {}", self.moves, self.score)
            }
            GameStatus::Playing => {}
        }

        TurnReport::Moved {
            direction,
            score_delta: outcome.score_delta,
            status: self.status,
        }
    }

    /// Dismiss the win overlay and keep sliding. The win stays latched, so it
    /// is never reported again this session.
    pub fn keep_playing(&mut self) -> bool {
        if self.status != GameStatus::Won || !self.allow_continue {
            return false;
        }
        self.status = if is_lost(&self.grid) {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        };
        info!("Continuing past the win, status {:?}", self.status);
        true
    }

    fn next_status(&mut self) -> GameStatus {
        if !self.has_won && self.grid.has_winning_tile() {
            self.has_won = true;
            GameStatus::Won
        } else if is_lost(&self.grid) {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn has_won(&self) -> bool {
        self.has_won
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn allows_continue(&self) -> bool {
        self.allow_continue
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            score: self.score,
            max_tile: self.grid.max_tile(),
            status: self.status,
            has_won: self.has_won,
            moves: self.moves,
            grid: *self.grid.rows(),
        }
    }
}
