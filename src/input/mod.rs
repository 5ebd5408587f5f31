use std::time::Duration;

use macroquad::prelude::*;

use crate::application::Presenter;
use crate::domain::Rgb;
use crate::rendering;

/// Presenter backed by the macroquad window.
/// Closing the window only raises a quit request; the loop decides when to stop.
pub struct MacroquadPresenter;

impl MacroquadPresenter {
    /// Must be created inside the macroquad main future
    pub fn new() -> Self {
        prevent_quit();
        Self
    }
}

impl Default for MacroquadPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Presenter for MacroquadPresenter {
    fn should_continue(&mut self) -> bool {
        !is_quit_requested()
    }

    fn draw(&mut self, live: &mut dyn Iterator<Item = (usize, usize, Rgb)>) {
        rendering::draw_cells(live);
    }

    fn pause(&mut self, delay: Duration) {
        std::thread::sleep(delay);
    }
}
