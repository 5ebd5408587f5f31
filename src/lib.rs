// Compile-time settings
pub mod config;

// Domain layer - Core simulation logic
pub mod domain;

// Application layer - Host loop coordination
pub mod application;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, Rgb, Pattern, presets};
pub use application::{GameState, FrameDelay, FrameOutcome, Presenter};
pub use input::MacroquadPresenter;
