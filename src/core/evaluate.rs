use crate::core::consts::GRID_SIZE;
use crate::core::models::{GameStatus, Grid};

/// Classify a grid. Stateless: latching the win is the session's job.
pub fn evaluate_state(grid: &Grid) -> GameStatus {
    if grid.has_winning_tile() {
        GameStatus::Won
    } else if is_lost(grid) {
        GameStatus::Lost
    } else {
        GameStatus::Playing
    }
}

/// No empty cell and no equal neighbours. Each adjacent pair is checked once,
/// looking right and down from every cell.
pub fn is_lost(grid: &Grid) -> bool {
    if !grid.is_full() {
        return false;
    }

    for r in 0..GRID_SIZE {
        for c in 0..GRID_SIZE {
            let value = grid.get(r, c);
            if c + 1 < GRID_SIZE && grid.get(r, c + 1) == value {
                return false;
            }
            if r + 1 < GRID_SIZE && grid.get(r + 1, c) == value {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::update::available_moves;

    fn checkerboard() -> Grid {
        Grid::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]).unwrap()
    }

    #[test]
    fn test_checkerboard_is_lost() {
        assert_eq!(evaluate_state(&checkerboard()), GameStatus::Lost);
        assert!(available_moves(&checkerboard()).is_empty());
    }

    #[test]
    fn test_checkerboard_with_hole_is_playing() {
        let mut grid = checkerboard();
        grid.cells[3][3] = 0;
        assert_eq!(evaluate_state(&grid), GameStatus::Playing);
    }

    #[test]
    fn test_full_grid_with_vertical_pair_is_playing() {
        let mut grid = checkerboard();
        grid.cells[3][0] = 2;
        assert_eq!(evaluate_state(&grid), GameStatus::Playing);
        assert!(!available_moves(&grid).is_empty());
    }

    #[test]
    fn test_full_grid_with_horizontal_pair_in_last_row_is_playing() {
        let mut grid = checkerboard();
        grid.cells[3][3] = 4;
        grid.cells[2][3] = 8;
        assert_eq!(evaluate_state(&grid), GameStatus::Playing);
    }

    #[test]
    fn test_2048_wins() {
        let grid = Grid::from_rows([[2048, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
        assert_eq!(evaluate_state(&grid), GameStatus::Won);
    }

    #[test]
    fn test_win_takes_precedence_over_loss() {
        let mut grid = checkerboard();
        grid.cells[0][0] = 2048;
        assert!(is_lost(&grid));
        assert_eq!(evaluate_state(&grid), GameStatus::Won);
    }

    #[test]
    fn test_tiles_past_2048_do_not_win() {
        let grid = Grid::from_rows([[4096, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
        assert_eq!(evaluate_state(&grid), GameStatus::Playing);
    }

    #[test]
    fn test_empty_grid_is_playing() {
        assert_eq!(evaluate_state(&Grid::EMPTY), GameStatus::Playing);
    }
}
