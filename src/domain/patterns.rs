use super::{Cell, Grid, Rgb};

/// Represents a pattern that can be stamped onto the grid
#[derive(Clone)]
pub struct Pattern {
    pub name: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>,  // Relative coordinates of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let width = cells.iter().map(|(x, _)| *x).max().unwrap_or(0) + 1;
        let height = cells.iter().map(|(_, y)| *y).max().unwrap_or(0) + 1;
        Self { name, width, height, cells }
    }

    /// Stamp the pattern at (x, y) in a single color, wrapping around the edges
    pub fn place_on(&self, grid: &mut Grid, x: usize, y: usize, color: Rgb) {
        let (w, h) = grid.dimensions();
        for (dx, dy) in &self.cells {
            grid.set((x + dx) % w, (y + dy) % h, Cell::alive(color));
        }
    }
}

/// Small library of classic shapes
pub mod presets {
    use super::*;

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            vec![
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ]
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            vec![
                (0, 1), (1, 1), (2, 1),
            ]
        )
    }

    /// Glider - simplest spaceship, moves diagonally (period 4)
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ]
        )
    }

    /// R-pentomino - long-lived methuselah, keeps a grid busy
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            vec![
                (1, 0), (2, 0),
                (0, 1), (1, 1),
                (1, 2),
            ]
        )
    }

    pub fn all_patterns() -> Vec<Pattern> {
        vec![block(), blinker(), glider(), r_pentomino()]
    }
}
