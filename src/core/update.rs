use crate::core::consts::GRID_SIZE;
use crate::core::error::EngineError;
use crate::core::models::{Direction, Grid, Line, MoveOutcome};

/// Slide one line toward index 0 and merge equal neighbours in a single pass.
///
/// A tile produced by a merge is never merged again in the same call, so
/// `[2, 2, 2, 2]` becomes `[4, 4, 0, 0]`. Returns the new line and the sum of
/// the merged values.
pub fn slide_and_merge(line: Line) -> (Line, u64) {
    let compacted: Vec<u32> = line.iter().copied().filter(|&v| v != 0).collect();

    let mut result = [0; GRID_SIZE];
    let mut out = 0;
    let mut score_delta = 0;
    let mut i = 0;
    while i < compacted.len() {
        if i + 1 < compacted.len() && compacted[i] == compacted[i + 1] {
            let merged = compacted[i] * 2;
            result[out] = merged;
            score_delta += merged as u64;
            i += 2;
        } else {
            result[out] = compacted[i];
            i += 1;
        }
        out += 1;
    }

    (result, score_delta)
}

/// Resolve a full move. No tile is spawned here.
pub fn apply_move(grid: &Grid, direction: Direction) -> MoveOutcome {
    let orientation = direction.orientation();
    let mut oriented = (orientation.forward)(grid);

    let mut score_delta = 0;
    for row in oriented.cells.iter_mut() {
        let (merged, row_delta) = slide_and_merge(*row);
        *row = merged;
        score_delta += row_delta;
    }

    let moved = (orientation.inverse)(&oriented);
    let changed = moved != *grid;
    MoveOutcome {
        grid: moved,
        score_delta,
        changed,
    }
}

/// Like [`apply_move`], for callers holding a direction name rather than a [`Direction`].
pub fn apply_named_move(grid: &Grid, direction: &str) -> Result<MoveOutcome, EngineError> {
    let direction = direction.parse::<Direction>()?;
    Ok(apply_move(grid, direction))
}

/// Directions that would change the grid.
pub fn available_moves(grid: &Grid) -> Vec<Direction> {
    Direction::ALL
        .iter()
        .copied()
        .filter(|&dir| apply_move(grid, dir).changed)
        .collect()
}
