use std::fmt;
use std::str::FromStr;

use crate::core::consts::{GRID_SIZE, MAX_TILE, WIN_TILE};
use crate::core::error::EngineError;
use crate::core::models::{Direction, Grid, Line, RawGrid};

impl Grid {
    pub const EMPTY: Grid = Grid {
        cells: [[0; GRID_SIZE]; GRID_SIZE],
    };

    /// Build a grid from rows. Cells must be 0 or a power of two in `2..=MAX_TILE`.
    pub fn from_rows(rows: [Line; GRID_SIZE]) -> Result<Grid, EngineError> {
        for (row, line) in rows.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(EngineError::InvalidTile { row, col, value });
                }
            }
        }
        Ok(Grid { cells: rows })
    }

    pub fn rows(&self) -> &[Line; GRID_SIZE] {
        &self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[row][col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: u32) {
        debug_assert!(is_valid_tile(value), "tile {value} is not a power of two");
        self.cells[row][col] = value;
    }

    /// Empty cells as (row, col), row-major.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut empty = Vec::new();
        for (i, row) in self.cells.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                if value == 0 {
                    empty.push((i, j));
                }
            }
        }
        empty
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&value| value != 0)
    }

    pub fn max_tile(&self) -> u32 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    pub fn contains(&self, value: u32) -> bool {
        self.cells.iter().flatten().any(|&v| v == value)
    }

    pub fn has_winning_tile(&self) -> bool {
        self.contains(WIN_TILE)
    }

    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().flatten().map(|&v| v as u64).sum()
    }
}

fn is_valid_tile(value: u32) -> bool {
    value == 0 || ((2..=MAX_TILE).contains(&value) && value.is_power_of_two())
}

impl TryFrom<RawGrid> for Grid {
    type Error = EngineError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        Grid::from_rows(raw.cells)
    }
}

/// Parses a whitespace separated board, one row per line. `.` and `0` are empty.
/// Blank lines are skipped so fixtures can be written as indented raw strings.
impl FromStr for Grid {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows: Vec<Line> = Vec::new();
        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() != GRID_SIZE {
                return Err(EngineError::InvalidShape {
                    rows: rows.len() + 1,
                    cols: tokens.len(),
                });
            }

            let mut row = [0; GRID_SIZE];
            for (j, token) in tokens.iter().enumerate() {
                row[j] = match *token {
                    "." => 0,
                    other => other
                        .parse::<u32>()
                        .map_err(|_| EngineError::InvalidToken(other.to_string()))?,
                };
            }
            rows.push(row);
        }

        let rows: [Line; GRID_SIZE] = rows.try_into().map_err(|rows: Vec<Line>| {
            EngineError::InvalidShape {
                rows: rows.len(),
                cols: GRID_SIZE,
            }
        })?;
        Grid::from_rows(rows)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let cells: Vec<String> = row
                .iter()
                .map(|&v| if v == 0 { ".".to_string() } else { v.to_string() })
                .collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.cells.iter()).finish()
    }
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl FromStr for Direction {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(EngineError::InvalidDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
