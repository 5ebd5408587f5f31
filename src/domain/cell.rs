use super::Rgb;

/// Cell is the unit of the colored Game of Life.
/// The color is only meaningful while alive; a dead cell keeps its last
/// color until it is reborn and overwritten.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Cell {
    pub alive: bool,
    pub color: Rgb,
}

impl Cell {
    pub const DEAD: Cell = Cell::dead(Rgb::BLACK);

    pub const fn alive(color: Rgb) -> Self {
        Self { alive: true, color }
    }

    pub const fn dead(color: Rgb) -> Self {
        Self { alive: false, color }
    }

    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        self.alive
    }

    /// Compute the next state from the live neighbor count (B3/S23):
    /// 1. Live cell with 2-3 neighbors survives with its color
    /// 2. Dead cell with exactly 3 neighbors is born with `birth_color()`
    /// 3. Everything else is dead, color untouched
    ///
    /// `birth_color` is only called on a birth.
    pub fn evolve(self, neighbors: u8, birth_color: impl FnOnce() -> Rgb) -> Self {
        match (self.alive, neighbors) {
            (true, 2 | 3) => self,
            (false, 3) => Cell::alive(birth_color()),
            _ => Cell::dead(self.color),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::DEAD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::new(255, 0, 0);
    const BLUE: Rgb = Rgb::new(0, 0, 255);

    fn no_birth() -> Rgb {
        panic!("birth color requested without a birth")
    }

    #[test]
    fn test_underpopulation() {
        assert_eq!(Cell::alive(RED).evolve(0, no_birth), Cell::dead(RED));
        assert_eq!(Cell::alive(RED).evolve(1, no_birth), Cell::dead(RED));
    }

    #[test]
    fn test_survival_keeps_color() {
        assert_eq!(Cell::alive(RED).evolve(2, no_birth), Cell::alive(RED));
        assert_eq!(Cell::alive(RED).evolve(3, no_birth), Cell::alive(RED));
    }

    #[test]
    fn test_overpopulation() {
        assert_eq!(Cell::alive(RED).evolve(4, no_birth), Cell::dead(RED));
        assert_eq!(Cell::alive(RED).evolve(8, no_birth), Cell::dead(RED));
    }

    #[test]
    fn test_reproduction_takes_birth_color() {
        assert_eq!(Cell::dead(RED).evolve(3, || BLUE), Cell::alive(BLUE));
    }

    #[test]
    fn test_dead_stays_dead_with_stale_color() {
        for n in [0, 1, 2, 4, 5, 6, 7, 8] {
            assert_eq!(Cell::dead(RED).evolve(n, no_birth), Cell::dead(RED));
        }
    }
}
