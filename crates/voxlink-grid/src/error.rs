//! Error types for grid construction and addressing.

use crate::axis::Axis;
use std::fmt;

/// Errors arising from grid construction or cell lookups.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// Attempted to construct a grid with a zero-length axis.
    EmptyGrid,
    /// `nx * ny * nz` does not fit in a `usize`.
    CellCountOverflow {
        /// Requested X extent.
        nx: u32,
        /// Requested Y extent.
        ny: u32,
        /// Requested Z extent.
        nz: u32,
    },
    /// A coordinate component is at or beyond its axis bound.
    CoordOutOfRange {
        /// The axis that was out of range.
        axis: Axis,
        /// The offending component.
        value: u32,
        /// Exclusive upper bound of the axis.
        bound: u32,
    },
    /// A flat index is at or beyond the cell count.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of cells in the grid.
        cell_count: usize,
    },
    /// An explicit cell buffer does not match the grid extent.
    LengthMismatch {
        /// `nx * ny * nz`.
        expected: usize,
        /// Length of the supplied buffer.
        actual: usize,
    },
    /// An occupancy probability is NaN or outside `[0, 1]`.
    InvalidProbability {
        /// The rejected value.
        value: f64,
    },
}

impl GridError {
    /// Returns `true` for the two out-of-range lookup errors.
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            Self::CoordOutOfRange { .. } | Self::IndexOutOfRange { .. }
        )
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell on every axis"),
            Self::CellCountOverflow { nx, ny, nz } => {
                write!(f, "grid {nx}x{ny}x{nz} exceeds the addressable cell count")
            }
            Self::CoordOutOfRange { axis, value, bound } => {
                write!(f, "{axis} coordinate {value} out of range [0, {bound})")
            }
            Self::IndexOutOfRange { index, cell_count } => {
                write!(f, "cell index {index} out of range [0, {cell_count})")
            }
            Self::LengthMismatch { expected, actual } => {
                write!(f, "expected {expected} cells, got {actual}")
            }
            Self::InvalidProbability { value } => {
                write!(f, "occupancy probability must lie in [0, 1], got {value}")
            }
        }
    }
}

impl std::error::Error for GridError {}
