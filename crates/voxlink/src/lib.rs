//! Voxlink: 6-connected components of 3D occupancy grids.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! voxlink sub-crates. For most users, adding `voxlink` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use voxlink::prelude::*;
//!
//! // 20x20x20 grid, each cell occupied with probability 0.4.
//! let mut source = BernoulliSource::new(0.4, 7).unwrap();
//! let grid = OccupancyGrid::generate(20, 20, 20, &mut source).unwrap();
//!
//! let by_fill = connected_components(&grid, Strategy::FloodFill);
//! let by_sweep = connected_components(&grid, Strategy::UnionFindSweep);
//! assert!(by_fill.same_partition(&by_sweep));
//! assert_eq!(by_fill.total_cells(), grid.occupied_count());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `voxlink-core` | Cell indices, coordinates, component ids, `CellSource` |
//! | [`grid`] | `voxlink-grid` | Occupancy grids, addressing, adjacency, random fill |
//! | [`forest`] | `voxlink-forest` | Disjoint-set forests and link policies |
//! | [`connect`] | `voxlink-connect` | Flood fill, union-find sweep, component catalogs |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core ids and traits (`voxlink-core`).
pub use voxlink_core as types;

/// Occupancy grids (`voxlink-grid`).
///
/// [`grid::OccupancyGrid`] owns the cells and answers index, coordinate and
/// neighbour queries; [`grid::BernoulliSource`] fills one at random.
pub use voxlink_grid as grid;

/// Disjoint-set forests (`voxlink-forest`).
///
/// [`forest::DisjointSet`] works over any ordered element type;
/// [`forest::DenseDisjointSet`] is specialised for dense `usize` keys.
/// Both implement [`forest::UnionFind`].
pub use voxlink_forest as forest;

/// Connected-component strategies (`voxlink-connect`).
pub use voxlink_connect as connect;

/// Common imports for typical voxlink usage.
///
/// ```rust
/// use voxlink::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use voxlink_core::{CellCoord, CellIndex, CellSource, ComponentId};

    // Grid
    pub use voxlink_grid::{BernoulliSource, Direction, GridError, OccupancyGrid};

    // Forest
    pub use voxlink_forest::{CoinFlip, DenseDisjointSet, DisjointSet, LinkPolicy, UnionFind};

    // Connectivity
    pub use voxlink_connect::{
        connected_components, ComponentCatalog, ConnectivityBuilder, FloodFill, Strategy,
        UnionFindSweep,
    };
}
