use std::time::Instant;

use log::{debug, info, trace};
use rand::Rng;

use super::{FrameDelay, FrameOutcome, Presenter};
use crate::config::{GRID_HEIGHT, GRID_WIDTH};
use crate::domain::Grid;

/// GameState owns everything the host loop carries between frames.
/// This is the application layer that coordinates domain logic.
pub struct GameState {
    pub grid: Grid,
    pub generation: u64,
    pub delay: FrameDelay,
    pub last_evolution_time_ms: f32,  // Evolution performance metric
}

impl GameState {
    /// Seed a full-size grid from `rng`
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let grid = Grid::seeded(GRID_WIDTH, GRID_HEIGHT, rng);
        log_initial_population(&grid);
        Self::with_grid(grid)
    }

    /// Seed from the thread-local OS-seeded generator; every run differs
    pub fn from_entropy() -> Self {
        Self::new(&mut rand::rng())
    }

    /// Start from an existing grid, generation 0
    pub fn with_grid(grid: Grid) -> Self {
        Self {
            grid,
            generation: 0,
            delay: FrameDelay::default(),
            last_evolution_time_ms: 0.0,
        }
    }

    /// Compute the next generation
    pub fn step(&mut self) {
        let start = Instant::now();
        self.grid.advance();
        self.last_evolution_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.generation += 1;
        trace!(
            "generation {} in {:.3}ms, {} alive",
            self.generation,
            self.last_evolution_time_ms,
            self.grid.count_alive()
        );
    }

    /// One pass of the host loop: poll, step, draw, pause.
    /// A quit request is honoured before any work is done.
    /// The macroquad host shows the drawn frame at `next_frame().await`, so the
    /// pause runs before the frame appears rather than after it.
    pub fn run_frame<P: Presenter + ?Sized>(&mut self, presenter: &mut P) -> FrameOutcome {
        if !presenter.should_continue() {
            info!("quit requested after {} generations", self.generation);
            return FrameOutcome::Quit;
        }

        self.step();
        presenter.draw(&mut self.grid.live_cells());
        presenter.pause(self.delay.current());
        self.delay.accelerate();

        FrameOutcome::Continue
    }
}

fn log_initial_population(grid: &Grid) {
    let (width, height) = grid.dimensions();
    info!(
        "seeded {}x{} grid, {} cells alive",
        width,
        height,
        grid.count_alive()
    );
    for (x, y, color) in grid.live_cells() {
        debug!("Cell[{}][{}] - Color: ({}, {}, {})", x, y, color.r, color.g, color.b);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rand::{SeedableRng, rngs::StdRng};
    use test_log::test;

    use super::*;
    use crate::application::mock::MockPresenter;
    use crate::domain::{Rgb, presets};

    #[test]
    fn test_new_uses_canvas_grid() {
        let state = GameState::new(&mut StdRng::seed_from_u64(1));
        assert_eq!(state.grid.dimensions(), (80, 60));
        assert_eq!(state.generation, 0);
        assert!(state.grid.count_alive() > 0);
    }

    #[test]
    fn test_from_entropy_seeds_full_grid() {
        let state = GameState::from_entropy();
        assert_eq!(state.grid.dimensions(), (80, 60));
        assert_eq!(state.generation, 0);
        assert_eq!(state.delay, FrameDelay::default());
    }

    #[test]
    fn test_new_is_reproducible_with_seed() {
        let a = GameState::new(&mut StdRng::seed_from_u64(17));
        let b = GameState::new(&mut StdRng::seed_from_u64(17));
        assert_eq!(a.grid, b.grid);
    }

    #[test]
    fn test_step_advances_generation() {
        let mut state = GameState::new(&mut StdRng::seed_from_u64(2));
        let expected = state.grid.evolve();
        state.step();
        assert_eq!(state.generation, 1);
        assert_eq!(state.grid, expected);
    }

    #[test]
    fn test_quit_skips_the_frame() {
        let mut state = GameState::new(&mut StdRng::seed_from_u64(3));
        let before = state.grid.clone();
        let mut presenter = MockPresenter::new(0);

        assert_eq!(state.run_frame(&mut presenter), FrameOutcome::Quit);
        assert_eq!(state.generation, 0);
        assert_eq!(state.grid, before);
        assert!(presenter.frames().is_empty());
        assert!(presenter.pauses().is_empty());
    }

    #[test]
    fn test_frame_draws_the_new_generation() {
        let mut grid = Grid::new(5, 5);
        presets::blinker().place_on(&mut grid, 1, 1, Rgb::new(10, 20, 30));
        let mut state = GameState::with_grid(grid);
        let mut presenter = MockPresenter::new(1);

        assert_eq!(state.run_frame(&mut presenter), FrameOutcome::Continue);
        let color = Rgb::new(10, 20, 30);
        assert_eq!(
            presenter.frames(),
            &[vec![(2, 1, color), (2, 2, color), (2, 3, color)]]
        );
        assert_eq!(presenter.pauses(), &[Duration::from_millis(100)]);
        assert_eq!(state.delay.current(), Duration::from_millis(99));
    }

    #[test]
    fn test_frame_polls_then_draws_then_pauses() {
        let mut state = GameState::new(&mut StdRng::seed_from_u64(6));
        let mut presenter = MockPresenter::new(2);
        while state.run_frame(&mut presenter) == FrameOutcome::Continue {}

        assert_eq!(
            presenter.calls(),
            &["poll", "draw", "pause", "poll", "draw", "pause", "poll"]
        );
    }

    #[test]
    fn test_loop_runs_until_quit_and_accelerates() {
        let mut state = GameState::new(&mut StdRng::seed_from_u64(4));
        let mut presenter = MockPresenter::new(120);

        let mut frames = 0;
        while state.run_frame(&mut presenter) == FrameOutcome::Continue {
            frames += 1;
        }

        assert_eq!(frames, 120);
        assert_eq!(state.generation, 120);
        let pauses = presenter.pauses();
        assert_eq!(pauses[0], Duration::from_millis(100));
        assert_eq!(pauses[1], Duration::from_millis(99));
        assert_eq!(pauses[90], Duration::from_millis(10));
        assert!(pauses.iter().all(|d| *d >= Duration::from_millis(10)));
        assert!(state.delay.is_at_floor());
    }

    #[test]
    fn test_empty_world_stays_empty() {
        let mut state = GameState::with_grid(Grid::new(80, 60));
        let mut presenter = MockPresenter::new(3);
        while state.run_frame(&mut presenter) == FrameOutcome::Continue {}

        assert_eq!(presenter.frames().len(), 3);
        assert!(presenter.frames().iter().all(Vec::is_empty));
    }
}
