use std::time::Duration;

use super::Presenter;
use crate::domain::Rgb;

/// Presenter that records everything and quits after a set number of frames
pub struct MockPresenter {
    frames_left: usize,
    frames: Vec<Vec<(usize, usize, Rgb)>>,
    pauses: Vec<Duration>,
    calls: Vec<&'static str>,
}

impl MockPresenter {
    pub fn new(frames: usize) -> Self {
        Self {
            frames_left: frames,
            frames: Vec::new(),
            pauses: Vec::new(),
            calls: Vec::new(),
        }
    }

    pub fn frames(&self) -> &[Vec<(usize, usize, Rgb)>] {
        &self.frames
    }

    pub fn pauses(&self) -> &[Duration] {
        &self.pauses
    }

    /// Presenter methods in the order they were called
    pub fn calls(&self) -> &[&'static str] {
        &self.calls
    }
}

impl Presenter for MockPresenter {
    fn should_continue(&mut self) -> bool {
        self.calls.push("poll");
        if self.frames_left == 0 {
            return false;
        }
        self.frames_left -= 1;
        true
    }

    fn draw(&mut self, live: &mut dyn Iterator<Item = (usize, usize, Rgb)>) {
        self.calls.push("draw");
        self.frames.push(live.collect());
    }

    fn pause(&mut self, delay: Duration) {
        self.calls.push("pause");
        self.pauses.push(delay);
    }
}
