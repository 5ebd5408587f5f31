mod game_state;
mod pacing;
mod presenter;

#[cfg(test)]
pub(crate) mod mock;

pub use game_state::GameState;
pub use pacing::FrameDelay;
pub use presenter::{FrameOutcome, Presenter};
