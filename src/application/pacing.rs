use std::time::Duration;

use crate::config::{FRAME_DELAY_STEP, INITIAL_FRAME_DELAY, MIN_FRAME_DELAY};

/// Per-frame sleep that shrinks by a fixed step down to a floor,
/// so the simulation speeds up the longer it runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameDelay {
    current: Duration,
    floor: Duration,
    step: Duration,
}

impl FrameDelay {
    pub const fn new(start: Duration, floor: Duration, step: Duration) -> Self {
        Self { current: start, floor, step }
    }

    /// How long to pause after the current frame
    pub const fn current(&self) -> Duration {
        self.current
    }

    pub fn is_at_floor(&self) -> bool {
        self.current <= self.floor
    }

    /// Shorten the delay by one step, stopping at the floor
    pub fn accelerate(&mut self) {
        if self.current > self.floor {
            self.current = self.current.saturating_sub(self.step).max(self.floor);
        }
    }
}

impl Default for FrameDelay {
    fn default() -> Self {
        Self::new(INITIAL_FRAME_DELAY, MIN_FRAME_DELAY, FRAME_DELAY_STEP)
    }
}
