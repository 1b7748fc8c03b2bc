//! Seeded Bernoulli cell source.
//!
//! Uses a ChaCha8 RNG so that the same `(probability, seed)` pair produces
//! the same occupancy sequence on every platform.

use crate::error::GridError;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use voxlink_core::CellSource;

/// Independent, identically distributed occupancy bits with a fixed bias.
///
/// # Examples
///
/// ```
/// use voxlink_grid::{BernoulliSource, OccupancyGrid};
///
/// let mut source = BernoulliSource::new(0.3, 42).unwrap();
/// let grid = OccupancyGrid::generate(10, 10, 10, &mut source).unwrap();
/// assert!(grid.occupied_count() < grid.cell_count());
/// ```
#[derive(Debug, Clone)]
pub struct BernoulliSource {
    rng: ChaCha8Rng,
    probability: f64,
}

impl BernoulliSource {
    /// Seed used when none is configured.
    pub const DEFAULT_SEED: u64 = 5;

    /// Create a source yielding `true` with `probability`.
    ///
    /// Returns `Err(GridError::InvalidProbability)` if `probability` is NaN
    /// or outside `[0, 1]`.
    pub fn new(probability: f64, seed: u64) -> Result<Self, GridError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(GridError::InvalidProbability { value: probability });
        }
        Ok(Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            probability,
        })
    }

    /// An unbiased source (`probability = 0.5`).
    pub fn fair(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            probability: 0.5,
        }
    }

    /// The configured occupancy probability.
    pub fn probability(&self) -> f64 {
        self.probability
    }
}

impl Default for BernoulliSource {
    fn default() -> Self {
        Self::fair(Self::DEFAULT_SEED)
    }
}

impl CellSource for BernoulliSource {
    fn next_cell(&mut self) -> bool {
        self.rng.random_bool(self.probability)
    }
}
