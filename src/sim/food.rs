//! Food placement
//!
//! Rejection sampling: draw uniform cells until one is not under the snake.
//! The board is small and the snake rarely covers much of it, so the expected
//! number of draws stays close to one.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::grid::{Cell, Grid};
use super::state::Snake;

/// Picks free cells for food
#[derive(Debug, Clone)]
pub struct FoodPlacer {
    rng: Pcg32,
}

impl FoodPlacer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// A uniformly random cell of `grid` not occupied by `snake`.
    ///
    /// Returns `None` when the snake covers every cell.
    pub fn place(&mut self, grid: Grid, snake: &Snake) -> Option<Cell> {
        if grid.cell_count() == 0 || snake.len() >= grid.cell_count() {
            return None;
        }
        loop {
            let cell = Cell::new(
                self.rng.random_range(0..grid.cols) as i32,
                self.rng.random_range(0..grid.rows) as i32,
            );
            if !snake.contains(cell) {
                return Some(cell);
            }
        }
    }
}
