use super::{Cell, Rgb};
use rand::Rng;
use rayon::prelude::*;

/// Neighbor offsets in enumeration order: dx outer, dy inner, (0, 0) skipped.
/// Dominant color ties are resolved by this order, so it must not change.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Grid owns the toroidal cell matrix.
///
/// Cells live in one flat row-major buffer. A second buffer of the same size
/// receives each new generation and is then swapped in, so a step always
/// reads a frozen snapshot of the previous generation.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    back: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells dead and black
    pub fn new(width: usize, height: usize) -> Self {
        assert!(
            width > 0 && height > 0,
            "grid dimensions must be non-zero, got {width}x{height}"
        );
        Self {
            width,
            height,
            cells: vec![Cell::DEAD; width * height],
            back: vec![Cell::DEAD; width * height],
        }
    }

    /// Create a grid and seed it from `rng`
    pub fn seeded<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> Self {
        let mut grid = Self::new(width, height);
        grid.seed(rng);
        grid
    }

    /// Give every cell a fair coin flip for life and a uniform random color.
    /// The color is drawn for dead cells too.
    pub fn seed<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cells.iter_mut().for_each(|cell| {
            let alive = rng.random_bool(0.5);
            let color = Rgb::random(rng);
            *cell = Cell { alive, color };
        });
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.width && y < self.height).then(|| self.cells[self.get_index(x, y)])
    }

    /// Set cell at position; out-of-bounds writes are ignored
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.get_index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Cell at any integer position, wrapped onto the torus
    pub fn get_wrapped(&self, x: isize, y: isize) -> Cell {
        let nx = x.rem_euclid(self.width as isize) as usize;
        let ny = y.rem_euclid(self.height as isize) as usize;
        self.cells[self.get_index(nx, ny)]
    }

    /// The 8 wrapped neighbors of (x, y) in `NEIGHBOR_OFFSETS` order.
    /// On grids narrower than 3 the same cell can appear more than once.
    pub fn neighbors(&self, x: usize, y: usize) -> impl Iterator<Item = Cell> + '_ {
        NEIGHBOR_OFFSETS
            .iter()
            .map(move |&(dx, dy)| self.get_wrapped(x as isize + dx, y as isize + dy))
    }

    /// Count live neighbors using toroidal wrapping
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        self.neighbors(x, y).filter(|cell| cell.is_alive()).count() as u8
    }

    /// Most common color among the live neighbors of (x, y), black if none
    pub fn dominant_color(&self, x: usize, y: usize) -> Rgb {
        let colors: Vec<Rgb> = self
            .neighbors(x, y)
            .filter(|cell| cell.is_alive())
            .map(|cell| cell.color)
            .collect();
        majority_color(&colors)
    }

    /// Next state of (x, y), read from this grid only
    fn next_cell(&self, x: usize, y: usize) -> Cell {
        let current = self.cells[self.get_index(x, y)];
        let neighbors = self.count_live_neighbors(x, y);
        current.evolve(neighbors, || self.dominant_color(x, y))
    }

    fn write_row(&self, y: usize, row: &mut [Cell]) {
        row.iter_mut()
            .enumerate()
            .for_each(|(x, slot)| *slot = self.next_cell(x, y));
    }

    fn write_generation(&self, dest: &mut [Cell]) {
        dest.chunks_mut(self.width)
            .enumerate()
            .for_each(|(y, row)| self.write_row(y, row));
    }

    fn with_cells(&self, cells: Vec<Cell>) -> Self {
        Self {
            width: self.width,
            height: self.height,
            cells,
            back: Vec::new(),
        }
    }

    /// Pure functional evolution - returns new grid (serial)
    pub fn evolve(&self) -> Self {
        let mut next = vec![Cell::DEAD; self.cells.len()];
        self.write_generation(&mut next);
        self.with_cells(next)
    }

    /// Parallel evolution using rayon.
    /// Each row of the destination is written by exactly one task; every task
    /// reads only this grid.
    pub fn evolve_parallel(&self) -> Self {
        let mut next = vec![Cell::DEAD; self.cells.len()];
        next.par_chunks_mut(self.width)
            .enumerate()
            .for_each(|(y, row)| self.write_row(y, row));
        self.with_cells(next)
    }

    /// Advance one generation in place: fill the back buffer from the
    /// current cells, then swap the buffers.
    pub fn advance(&mut self) {
        let mut next = std::mem::take(&mut self.back);
        next.resize(self.cells.len(), Cell::DEAD);
        self.write_generation(&mut next);
        self.back = std::mem::replace(&mut self.cells, next);
    }

    /// Number of live cells
    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions (row-major)
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx % self.width, idx / self.width, cell))
    }

    /// Positions and colors of the live cells, for drawing
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize, Rgb)> + '_ {
        self.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(x, y, cell)| (x, y, cell.color))
    }
}

/// Equality covers dimensions and the current generation only
impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.cells == other.cells
    }
}

impl Eq for Grid {}

/// Majority vote over at most 8 colors.
/// The first color to reach a strictly higher count wins, so ties go to
/// whichever color came first in `colors`.
pub fn majority_color(colors: &[Rgb]) -> Rgb {
    let mut dominant = Rgb::BLACK;
    let mut max_count = 0;
    for &color in colors {
        let count = colors.iter().filter(|&&other| other == color).count();
        if count > max_count {
            max_count = count;
            dominant = color;
        }
    }
    dominant
}
