//! Times generation steps for both boundary policies, with and without fade

use std::time::Instant;
use fading_life::domain::{self, Boundary, FadeConfig, Grid};
use rand::{SeedableRng, rngs::StdRng};

fn benchmark_step(size: usize, iterations: u32, boundary: Boundary, fade: Option<&FadeConfig>) -> f64 {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let mut grid = match Grid::create(size, size, 1, &mut rng) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("skipping {size}x{size}: {e}");
            return f64::NAN;
        }
    };

    let start = Instant::now();
    for _ in 0..iterations {
        domain::step(&mut grid, boundary, fade);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("Game of Life step benchmark");
    println!("===========================\n");

    let fade = FadeConfig::default();
    let sizes = [64, 128, 256, 512];
    let iterations = 50;

    println!(
        "{:>6} | {:>12} | {:>12} | {:>12}",
        "Size", "Clamped", "Toroidal", "Toroidal+Fade"
    );
    println!("{}", "-".repeat(52));

    for size in sizes {
        let clamped = benchmark_step(size, iterations, Boundary::Clamped, None);
        let toroidal = benchmark_step(size, iterations, Boundary::Toroidal, None);
        let faded = benchmark_step(size, iterations, Boundary::Toroidal, Some(&fade));
        println!(
            "{:>6} | {:>9.3} ms | {:>9.3} ms | {:>10.3} ms",
            size, clamped, toroidal, faded
        );
    }
}
