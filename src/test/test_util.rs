pub use dissimilar::diff as __diff;
use crate::core::{Direction, Grid, MoveOutcome, apply_move};

#[macro_export]
macro_rules! assert_eq_text {
    ($left:expr, $right:expr) => {
        $crate::assert_eq_text!($left, $right,)
    };
    ($left:expr, $right:expr, $($tt:tt)*) => {{
        let left = $left;
        let right = $right;
        if left != right {
            if left.trim() == right.trim() {
                std::eprintln!("Left:\n{:?}\n\nRight:\n{:?}\n\nWhitespace difference\n", left, right);
            } else {
                let diff = $crate::test::test_util::__diff(left, right);
                std::eprintln!("Left:\n{}\n\nRight:\n{}\n\nDiff:\n{}\n", left, right, $crate::test::test_util::format_diff(diff));
            }
            std::eprintln!($($tt)*);
            panic!("text differs");
        }
    }};
}

pub fn format_diff(chunks: Vec<dissimilar::Chunk>) -> String {
    let mut buf = String::new();
    for chunk in chunks {
        let formatted = match chunk {
            dissimilar::Chunk::Equal(text) => text.into(),
            dissimilar::Chunk::Delete(text) => format!("\x1b[41m{}\x1b[0m", text),
            dissimilar::Chunk::Insert(text) => format!("\x1b[42m{}\x1b[0m", text),
        };
        buf.push_str(&formatted);
    }
    buf
}

/// Parse a fixture board, normalising spacing so fixtures can be column aligned.
pub fn board(text: &str) -> Grid {
    text.parse()
        .unwrap_or_else(|e| panic!("bad fixture board: {e}\n{text}"))
}

/// A grid and its running score, driven through the engine without spawning.
pub struct GameTestState {
    pub grid: Grid,
    pub score: u64,
}

impl GameTestState {
    pub fn new(text: &str) -> Self {
        Self {
            grid: board(text),
            score: 0,
        }
    }

    pub fn grid_to_string(&self) -> String {
        self.grid.to_string()
    }

    pub fn assert_move(&mut self, direction: Direction) -> MoveOutcome {
        let outcome = self.try_move(direction);
        assert!(
            outcome.changed,
            "Expected {} to change the board:\n{}",
            direction,
            self.grid_to_string()
        );
        outcome
    }

    pub fn assert_moves(&mut self, directions: &[Direction]) {
        for &dir in directions {
            self.assert_move(dir);
        }
    }

    pub fn try_move(&mut self, direction: Direction) -> MoveOutcome {
        let outcome = apply_move(&self.grid, direction);
        if outcome.changed {
            self.grid = outcome.grid;
            self.score += outcome.score_delta;
        }
        outcome
    }

    pub fn assert_matches(&self, expected: &str) {
        let expected = board(expected).to_string();
        let actual = self.grid_to_string();
        crate::assert_eq_text!(expected.as_str(), actual.as_str());
    }
}
