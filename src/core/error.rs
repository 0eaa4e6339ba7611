use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A direction name outside up/down/left/right.
    InvalidDirection(String),
    /// A cell value that is neither empty nor a power of two.
    InvalidTile { row: usize, col: usize, value: u32 },
    /// A textual board that is not 4x4.
    InvalidShape { rows: usize, cols: usize },
    /// A textual board cell that is not a number or `.`.
    InvalidToken(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidDirection(name) => {
                write!(f, "invalid direction '{name}', expected up, down, left or right")
            }
            EngineError::InvalidTile { row, col, value } => {
                write!(f, "invalid tile {value} at row {row}, col {col}")
            }
            EngineError::InvalidShape { rows, cols } => {
                write!(f, "board must be 4x4, got {rows} rows with {cols} columns")
            }
            EngineError::InvalidToken(token) => write!(f, "invalid board token '{token}'"),
        }
    }
}

impl std::error::Error for EngineError {}
