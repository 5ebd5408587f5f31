mod cell;
mod color;
mod grid;
mod patterns;

pub use cell::Cell;
pub use color::Rgb;
pub use grid::{Grid, NEIGHBOR_OFFSETS, majority_color};
pub use patterns::{Pattern, presets};
