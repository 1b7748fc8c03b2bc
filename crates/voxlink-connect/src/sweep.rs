//! Union-find sweep over backward neighbours.
//!
//! Occupied cells are visited once, in flat index order. Each becomes a
//! singleton set and is then united with every occupied neighbour in the
//! `-X`, `-Y` and `-Z` directions. Those neighbours precede the cell in scan
//! order, so they are already tracked when the cell is reached; the forward
//! half of each adjacency is covered when the later cell processes its own
//! backward links.

use crate::builder::ConnectivityBuilder;
use crate::catalog::ComponentCatalog;
use log::debug;
use voxlink_core::CellIndex;
use voxlink_forest::{CoinFlip, DenseDisjointSet, LinkPolicy, UnionFind};
use voxlink_grid::OccupancyGrid;

/// Sweep `grid` into any forest keyed by cell index.
///
/// Existing contents of `forest` are kept; cells already tracked are not
/// re-inserted. Only occupied neighbours are united, so entries the forest
/// already holds for unoccupied cells never link grid cells. Returns the
/// number of merges performed.
///
/// # Examples
///
/// ```
/// use voxlink_connect::sweep_into;
/// use voxlink_forest::{DisjointSet, UnionFind};
/// use voxlink_grid::OccupancyGrid;
///
/// let grid = OccupancyGrid::from_fn(4, 1, 1, |c| c.i != 2).unwrap();
/// let mut forest = DisjointSet::new();
/// sweep_into(&grid, &mut forest);
/// assert_eq!(forest.set_count(), 2);
/// assert!(forest.connected(0, 1));
/// assert!(!forest.is_tracked(2));
/// ```
pub fn sweep_into<F>(grid: &OccupancyGrid, forest: &mut F) -> usize
where
    F: UnionFind<Elem = CellIndex> + ?Sized,
{
    let cells = grid.cells();
    let mut merges = 0;
    for idx in grid.iter_occupied() {
        forest.make_set(idx);
        for nb in grid.backward_neighbours(idx) {
            if cells[nb] && forest.is_tracked(nb) && forest.union_sets(idx, nb) {
                merges += 1;
            }
        }
    }
    merges
}

/// Union-find sweep connectivity builder.
///
/// Each build starts from a fresh [`DenseDisjointSet`] sized to the grid,
/// linking with a clone of the configured policy. With the default seeded
/// [`CoinFlip`] the forest shape is reproducible run to run.
#[derive(Debug, Clone, Default)]
pub struct UnionFindSweep<L = CoinFlip> {
    policy: L,
}

impl UnionFindSweep {
    /// A sweep using the default seeded coin-flip policy.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<L: LinkPolicy + Clone> UnionFindSweep<L> {
    /// A sweep linking roots with `policy`.
    pub fn with_policy(policy: L) -> Self {
        Self { policy }
    }
}

impl<L: LinkPolicy + Clone> ConnectivityBuilder for UnionFindSweep<L> {
    type Output = DenseDisjointSet<L>;

    fn name(&self) -> &'static str {
        "union-find"
    }

    fn build(&mut self, grid: &OccupancyGrid) -> DenseDisjointSet<L> {
        let mut forest =
            DenseDisjointSet::with_universe_and_policy(grid.cell_count(), self.policy.clone());
        let merges = sweep_into(grid, &mut forest);
        debug!(
            "{}: tracked {} occupied cells of {}, {} merges",
            self.name(),
            forest.len(),
            grid.cell_count(),
            merges
        );
        forest
    }

    fn catalog(&self, mut output: DenseDisjointSet<L>) -> ComponentCatalog {
        ComponentCatalog::from_forest(&mut output)
    }
}
