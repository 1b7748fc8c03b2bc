//! Connected-component discovery over occupancy grids.
//!
//! Two interchangeable strategies find the maximal 6-connected groups of
//! occupied cells in an [`OccupancyGrid`](voxlink_grid::OccupancyGrid):
//!
//! - [`FloodFill`]: scans cells in index order and grows each new component
//!   with an explicit, heap-backed depth-first work list.
//! - [`UnionFindSweep`]: scans occupied cells in index order, creating a
//!   singleton set per cell and uniting it with its already-seen `-X`, `-Y`
//!   and `-Z` neighbours.
//!
//! Both produce the same partition for the same grid. Each run has two phases,
//! [`build`](ConnectivityBuilder::build) and
//! [`catalog`](ConnectivityBuilder::catalog), so callers can time them
//! separately; [`connected_components`] runs both.
//!
//! ```
//! use voxlink_connect::{connected_components, Strategy};
//! use voxlink_grid::OccupancyGrid;
//!
//! // Two occupied columns separated by an empty one.
//! let grid = OccupancyGrid::from_fn(3, 2, 2, |c| c.i != 1).unwrap();
//! let a = connected_components(&grid, Strategy::FloodFill);
//! let b = connected_components(&grid, Strategy::UnionFindSweep);
//! assert_eq!(a.len(), 2);
//! assert!(a.same_partition(&b));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod builder;
pub mod catalog;
pub mod flood_fill;
pub mod sweep;

pub use builder::{connected_components, ConnectivityBuilder, ParseStrategyError, Strategy};
pub use catalog::ComponentCatalog;
pub use flood_fill::{FloodFill, FloodFillComponents};
pub use sweep::{sweep_into, UnionFindSweep};
