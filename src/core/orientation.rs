//! Reversible grid transforms that let every direction reuse the slide-left primitive.

use crate::core::consts::GRID_SIZE;
use crate::core::models::{Direction, Grid};

pub type Transform = fn(&Grid) -> Grid;

/// A direction expressed as "transform to the left-facing frame, then undo".
#[derive(Clone, Copy)]
pub struct Orientation {
    pub forward: Transform,
    pub inverse: Transform,
}

impl Direction {
    /// The orientation table: each direction mapped to its (forward, inverse) pair.
    pub fn orientation(self) -> Orientation {
        match self {
            Direction::Left => Orientation {
                forward: identity,
                inverse: identity,
            },
            Direction::Right => Orientation {
                forward: reverse_rows,
                inverse: reverse_rows,
            },
            Direction::Up => Orientation {
                forward: rotate_counter_clockwise,
                inverse: rotate_clockwise,
            },
            Direction::Down => Orientation {
                forward: rotate_clockwise,
                inverse: rotate_counter_clockwise,
            },
        }
    }
}

pub fn identity(grid: &Grid) -> Grid {
    *grid
}

pub fn reverse_rows(grid: &Grid) -> Grid {
    let mut cells = grid.cells;
    for row in cells.iter_mut() {
        row.reverse();
    }
    Grid { cells }
}

/// 90 degrees clockwise: `new[c][N-1-r] = old[r][c]`.
pub fn rotate_clockwise(grid: &Grid) -> Grid {
    let mut cells = [[0; GRID_SIZE]; GRID_SIZE];
    for r in 0..GRID_SIZE {
        for c in 0..GRID_SIZE {
            cells[c][GRID_SIZE - 1 - r] = grid.cells[r][c];
        }
    }
    Grid { cells }
}

/// Three clockwise turns.
pub fn rotate_counter_clockwise(grid: &Grid) -> Grid {
    rotate_clockwise(&rotate_clockwise(&rotate_clockwise(grid)))
}

#[cfg(test)]
mod test {
    use super::*;

    fn sample() -> Grid {
        Grid::from_rows([
            [2, 4, 8, 16],
            [32, 64, 128, 256],
            [512, 1024, 2048, 4096],
            [0, 2, 0, 4],
        ])
        .unwrap()
    }

    #[test]
    fn test_rotate_clockwise_moves_first_row_to_last_column() {
        let rotated = rotate_clockwise(&sample());
        assert_eq!(rotated.rows()[0], [0, 512, 32, 2]);
        assert_eq!(rotated.rows()[3], [4, 4096, 256, 16]);
    }

    #[test]
    fn test_four_rotations_are_identity() {
        let grid = sample();
        let mut rotated = grid;
        for _ in 0..4 {
            rotated = rotate_clockwise(&rotated);
        }
        assert_eq!(rotated, grid);
    }

    #[test]
    fn test_every_orientation_round_trips() {
        let grid = sample();
        for dir in Direction::ALL {
            let orientation = dir.orientation();
            let back = (orientation.inverse)(&(orientation.forward)(&grid));
            assert_eq!(back, grid, "{dir} does not round trip");
        }
    }

    #[test]
    fn test_reverse_rows_is_an_involution() {
        let grid = sample();
        assert_eq!(reverse_rows(&reverse_rows(&grid)), grid);
        assert_eq!(reverse_rows(&grid).rows()[0], [16, 8, 4, 2]);
    }
}
