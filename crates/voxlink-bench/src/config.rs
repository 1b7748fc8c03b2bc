//! Run configuration, validation, and error types.
//!
//! [`RunConfig`] describes one timing run: grid shape, fill probability,
//! seeds, and which strategies to time. [`validate()`](RunConfig::validate)
//! checks it before any grid is allocated.

use std::error::Error;
use std::fmt;

use voxlink_connect::Strategy;
use voxlink_grid::{Axis, BernoulliSource, GridError};

// ── RunConfig ──────────────────────────────────────────────────────

/// Parameters for a timed connectivity run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunConfig {
    /// Cells along X. Default: 400.
    pub nx: u32,
    /// Cells along Y. Default: 250.
    pub ny: u32,
    /// Cells along Z. Default: 100.
    pub nz: u32,
    /// Probability that a cell is occupied. Default: 0.5.
    pub fill_probability: f64,
    /// Seed for the occupancy source. Default: 5.
    pub grid_seed: u64,
    /// Seed for the union-find link policy. Default: 1.
    pub link_seed: u64,
    /// Strategies to time, in order. Default: both.
    pub strategies: Vec<Strategy>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            nx: 400,
            ny: 250,
            nz: 100,
            fill_probability: 0.5,
            grid_seed: BernoulliSource::DEFAULT_SEED,
            link_seed: voxlink_forest::CoinFlip::DEFAULT_SEED,
            strategies: Strategy::ALL.to_vec(),
        }
    }
}

impl RunConfig {
    /// Total cells the run would allocate, if it fits in `usize`.
    pub fn cell_count(&self) -> Option<usize> {
        (self.nx as usize)
            .checked_mul(self.ny as usize)?
            .checked_mul(self.nz as usize)
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (axis, n) in [(Axis::X, self.nx), (Axis::Y, self.ny), (Axis::Z, self.nz)] {
            if n == 0 {
                return Err(ConfigError::ZeroDimension { axis });
            }
        }
        if self.cell_count().is_none() {
            return Err(ConfigError::Grid(GridError::CellCountOverflow {
                nx: self.nx,
                ny: self.ny,
                nz: self.nz,
            }));
        }
        let p = self.fill_probability;
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(ConfigError::InvalidFillProbability { value: p });
        }
        if self.strategies.is_empty() {
            return Err(ConfigError::NoStrategies);
        }
        Ok(())
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`RunConfig::validate()`] or grid construction.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A grid dimension is zero.
    ZeroDimension {
        /// The offending axis.
        axis: Axis,
    },
    /// Fill probability is NaN, infinite, or outside `[0, 1]`.
    InvalidFillProbability {
        /// The invalid value.
        value: f64,
    },
    /// No strategy selected.
    NoStrategies,
    /// Grid construction failed.
    Grid(GridError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension { axis } => write!(f, "{axis} dimension must be positive"),
            Self::InvalidFillProbability { value } => {
                write!(f, "fill probability {value} is not in [0, 1]")
            }
            Self::NoStrategies => write!(f, "no strategy selected"),
            Self::Grid(e) => write!(f, "grid: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
