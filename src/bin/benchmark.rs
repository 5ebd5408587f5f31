//! Performance benchmark comparing serial and row-parallel generation steps

use std::time::Instant;

use color_life::{Grid, Pattern, Rgb, presets};
use rand::{SeedableRng, rngs::StdRng};

fn seeded_grid(size: usize) -> Grid {
    let mut rng = StdRng::seed_from_u64(size as u64);
    Grid::seeded(size, size, &mut rng)
}

fn benchmark_advance(size: usize, iterations: u32) -> f64 {
    let mut grid = seeded_grid(size);

    let start = Instant::now();
    for _ in 0..iterations {
        grid.advance();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_evolve(size: usize, iterations: u32) -> f64 {
    let mut grid = seeded_grid(size);

    let start = Instant::now();
    for _ in 0..iterations {
        grid = grid.evolve();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_evolve_parallel(size: usize, iterations: u32) -> f64 {
    let mut grid = seeded_grid(size);

    let start = Instant::now();
    for _ in 0..iterations {
        grid = grid.evolve_parallel();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

/// Births dominate the cost of a step, so time each preset on its own
fn benchmark_pattern(pattern: &Pattern, size: usize, iterations: u32) -> (f64, usize) {
    let mut grid = Grid::new(size, size);
    pattern.place_on(&mut grid, size / 2, size / 2, Rgb::new(200, 80, 40));

    let start = Instant::now();
    for _ in 0..iterations {
        grid.advance();
    }
    let ms = start.elapsed().as_secs_f64() * 1000.0 / iterations as f64;
    (ms, grid.count_alive())
}

fn main() {
    println!("=== Color Life Performance Benchmark ===\n");

    let sizes = [80, 200, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>12} {:>10}",
        "Size", "Advance", "Evolve", "Evolve+Par", "Speedup");
    println!("{:-<60}", "");

    for size in sizes {
        let advance_ms = benchmark_advance(size, iterations);
        let evolve_ms = benchmark_evolve(size, iterations);
        let parallel_ms = benchmark_evolve_parallel(size, iterations);

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{}x{}", size, size),
            advance_ms,
            evolve_ms,
            parallel_ms,
            advance_ms / parallel_ms
        );
    }

    println!("\n=== Presets on 200x200, 500 generations ===\n");

    for pattern in presets::all_patterns() {
        let (ms, alive) = benchmark_pattern(&pattern, 200, 500);
        println!("{:>12} {:>8.3} ms/gen {:>8} alive", pattern.name, ms, alive);
    }
}
