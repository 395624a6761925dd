//! Map generation

use anyhow::bail;
use log::info;
use rand::{rngs::StdRng, SeedableRng};

use crate::Grid;

/// Seeded maze generator
///
/// Owns the random source, so that the same seed always yields the same
/// sequence of mazes.
pub struct MazeGenerator {
    random: StdRng,
}

impl MazeGenerator {
    /// Smallest grid that still has an interior
    pub const MIN_SIZE: usize = 3;

    /// Create generator; without a seed the generator draws from entropy.
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
        }
    }

    /// Generate a `size × size` maze
    ///
    /// Returns error, if `size` is even or smaller than [Self::MIN_SIZE];
    /// those grids are not guaranteed to be solvable.
    pub fn generate(&mut self, size: usize) -> anyhow::Result<Grid> {
        if size < Self::MIN_SIZE {
            bail!("Maze size must be at least {}, got {}", Self::MIN_SIZE, size);
        }
        if size % 2 == 0 {
            bail!("Maze size must be odd, got {}", size);
        }

        let mut grid = Grid::new(size);
        grid.generate_maze(&mut self.random);
        info!("Generated maze of size {}", size);
        Ok(grid)
    }
}
