//! Turning pointer gestures into directions.

use crate::core::Direction;

/// Displacement below this on both axes is a tap, not a swipe.
pub const MIN_SWIPE_DISTANCE: f32 = 30.0;

/// Approximate pixel size of a terminal cell, used to scale mouse drags.
pub const CELL_WIDTH_PX: f32 = 8.0;
pub const CELL_HEIGHT_PX: f32 = 16.0;

/// Classify a displacement by its dominant axis. Ties go to the vertical axis.
/// `dy` grows downward, as in screen coordinates.
pub fn classify_swipe(dx: f32, dy: f32, min_distance: f32) -> Option<Direction> {
    if dx.abs() < min_distance && dy.abs() < min_distance {
        return None;
    }

    if dx.abs() > dy.abs() {
        if dx > 0.0 {
            Some(Direction::Right)
        } else {
            Some(Direction::Left)
        }
    } else if dy > 0.0 {
        Some(Direction::Down)
    } else {
        Some(Direction::Up)
    }
}

/// A mouse drag between two terminal cells, as `(column, row)`.
pub fn classify_drag(start: (u16, u16), end: (u16, u16), min_distance: f32) -> Option<Direction> {
    let dx = (end.0 as f32 - start.0 as f32) * CELL_WIDTH_PX;
    let dy = (end.1 as f32 - start.1 as f32) * CELL_HEIGHT_PX;
    classify_swipe(dx, dy, min_distance)
}
