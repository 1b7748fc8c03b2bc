//! Occupancy grids for voxlink.
//!
//! This crate defines [`OccupancyGrid`], the immutable 3D boolean store that
//! both connectivity strategies read from, together with the flat-index
//! addressing scheme (`i + j * nx + k * nx * ny`) and the 6-adjacency helpers
//! built on it.
//!
//! # Population
//!
//! Grids are filled from any [`CellSource`](voxlink_core::CellSource). The
//! crate ships [`BernoulliSource`], a seeded ChaCha8 generator producing
//! independent cells with a fixed occupancy probability.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod axis;
pub mod error;
pub mod grid;
pub mod source;

#[cfg(test)]
pub(crate) mod compliance;

pub use axis::{Axis, Direction};
pub use error::GridError;
pub use grid::OccupancyGrid;
pub use source::BernoulliSource;
