//! Timing harness and benchmark profiles for voxlink.
//!
//! - [`RunConfig`]: grid shape, fill probability, seeds and strategies for a
//!   timed run, with [`validate`](RunConfig::validate).
//! - [`run_timed`]: generates the grid and times the connect and catalog
//!   phases of each strategy separately.
//! - [`reference_grid`]: the mid-size grid the criterion benches use.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod harness;

pub use config::{ConfigError, RunConfig};
pub use harness::{run_timed, time_phases, RunReport, StrategyReport};

use voxlink_grid::{BernoulliSource, OccupancyGrid};

/// A 100x100x50 grid (500K cells) at the given fill probability.
///
/// Panics if `p` is not a valid probability.
pub fn reference_grid(p: f64, seed: u64) -> OccupancyGrid {
    let mut source = BernoulliSource::new(p, seed).expect("valid fill probability");
    OccupancyGrid::generate(100, 100, 50, &mut source).expect("reference dimensions fit")
}
