//! Depth-first flood fill with an explicit work list.
//!
//! Cells are scanned in flat index order (X fastest, then Y, then Z). Each
//! unvisited occupied cell seeds a new component, which is grown by popping
//! cells off a heap-allocated stack and pushing their unvisited occupied
//! 6-neighbours. A single component may contain every cell in the grid, so
//! the traversal never recurses on the call stack.
//!
//! Every cell is marked visited the first time it is reached, occupied or
//! not, so no cell is examined twice.

use crate::builder::ConnectivityBuilder;
use crate::catalog::ComponentCatalog;
use log::debug;
use voxlink_core::CellIndex;
use voxlink_grid::OccupancyGrid;

/// Flood-fill connectivity builder.
///
/// The work list is kept between runs so repeated builds over grids of
/// similar size do not reallocate it.
#[derive(Debug, Clone, Default)]
pub struct FloodFill {
    stack: Vec<CellIndex>,
}

/// Components found by [`FloodFill`], in discovery order.
///
/// Component `n` is the one whose smallest member is the `n`-th seed reached
/// by the scan. Members are ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FloodFillComponents {
    components: Vec<Vec<CellIndex>>,
}

impl FloodFillComponents {
    /// Number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` if no occupied cell was found.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// The raw component lists.
    pub fn as_slice(&self) -> &[Vec<CellIndex>] {
        &self.components
    }

    /// Consume into the raw component lists.
    pub fn into_inner(self) -> Vec<Vec<CellIndex>> {
        self.components
    }
}

impl FloodFill {
    /// A builder with an empty work list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Grow one component from `seed`, which must be occupied and already
    /// marked visited.
    fn fill_from(
        &mut self,
        grid: &OccupancyGrid,
        visited: &mut [bool],
        seed: CellIndex,
    ) -> Vec<CellIndex> {
        let cells = grid.cells();
        let mut members = Vec::new();
        self.stack.push(seed);
        while let Some(idx) = self.stack.pop() {
            members.push(idx);
            for nb in grid.neighbours(idx) {
                if visited[nb] {
                    continue;
                }
                visited[nb] = true;
                if cells[nb] {
                    self.stack.push(nb);
                }
            }
        }
        members.sort_unstable();
        members
    }
}

impl ConnectivityBuilder for FloodFill {
    type Output = FloodFillComponents;

    fn name(&self) -> &'static str {
        "flood-fill"
    }

    fn build(&mut self, grid: &OccupancyGrid) -> FloodFillComponents {
        let cells = grid.cells();
        let mut visited = vec![false; cells.len()];
        let mut components = Vec::new();
        for seed in 0..cells.len() {
            if visited[seed] {
                continue;
            }
            visited[seed] = true;
            if !cells[seed] {
                continue;
            }
            components.push(self.fill_from(grid, &mut visited, seed));
        }
        debug!(
            "{}: scanned {} cells, found {} components",
            self.name(),
            cells.len(),
            components.len()
        );
        FloodFillComponents { components }
    }

    fn catalog(&self, output: FloodFillComponents) -> ComponentCatalog {
        ComponentCatalog::from_groups(output.components)
    }
}
