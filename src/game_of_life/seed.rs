//! Random soup generation

use super::Grid;
use rand::Rng;

/// Fills grids with random live cells
pub struct RandomSeeder;

impl RandomSeeder {
    /// Overwrite every cell; each is alive with probability `1 / (spawn_rate + 1)`
    pub fn randomize(grid: &mut Grid, spawn_rate: u32) {
        Self::randomize_with(grid, spawn_rate, &mut rand::rng());
    }

    /// Same as `randomize`, drawing from the given generator
    pub fn randomize_with<R: Rng + ?Sized>(grid: &mut Grid, spawn_rate: u32, rng: &mut R) {
        for cell in grid.cells_mut() {
            *cell = rng.random_range(0..=spawn_rate) == 0;
        }
    }
}
