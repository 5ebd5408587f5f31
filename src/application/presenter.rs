use std::time::Duration;

use crate::domain::Rgb;

/// The window side of the simulation: quit polling, drawing and pacing.
/// The engine never talks to a windowing library directly.
pub trait Presenter {
    /// Drain pending window events; false once a quit was requested
    fn should_continue(&mut self) -> bool;

    /// Draw one frame from the live cells `(x, y, color)`
    fn draw(&mut self, live: &mut dyn Iterator<Item = (usize, usize, Rgb)>);

    /// Block between frames
    fn pause(&mut self, delay: Duration);
}

/// What the host loop should do after a frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Quit,
}
