//! Compile-time settings. Nothing here is read at runtime.

use std::time::Duration;

pub const WINDOW_TITLE: &str = "Game of Life";
pub const WINDOW_WIDTH: usize = 800;
pub const WINDOW_HEIGHT: usize = 600;
pub const CELL_SIZE: usize = 10;

pub const GRID_WIDTH: usize = WINDOW_WIDTH / CELL_SIZE;
pub const GRID_HEIGHT: usize = WINDOW_HEIGHT / CELL_SIZE;

/// Delay after the first frame
pub const INITIAL_FRAME_DELAY: Duration = Duration::from_millis(100);
/// The delay never drops below this
pub const MIN_FRAME_DELAY: Duration = Duration::from_millis(10);
/// Amount shaved off the delay after every frame
pub const FRAME_DELAY_STEP: Duration = Duration::from_millis(1);
