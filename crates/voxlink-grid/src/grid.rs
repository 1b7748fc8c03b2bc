//! The immutable 3D occupancy grid.

use crate::axis::{Axis, Direction};
use crate::error::GridError;
use log::debug;
use smallvec::SmallVec;
use voxlink_core::{CellCoord, CellIndex, CellSource};

/// A three-dimensional grid of occupied/unoccupied cells.
///
/// Each cell has coordinate `(i, j, k)` with `0 <= i < nx`, `0 <= j < ny`,
/// `0 <= k < nz`, and flat index `i + j * nx + k * nx * ny`. The mapping is a
/// bijection between coordinates and `0..nx * ny * nz`, and cells are stored
/// in flat index order (X fastest, then Y, then Z).
///
/// The grid is read-only once built.
///
/// # Examples
///
/// ```
/// use voxlink_grid::OccupancyGrid;
///
/// let grid = OccupancyGrid::from_fn(4, 3, 2, |c| c.i == c.j).unwrap();
/// assert_eq!(grid.cell_count(), 24);
///
/// let idx = grid.index(2, 1, 1).unwrap();
/// assert_eq!(idx, 2 + 1 * 4 + 1 * 12);
/// assert_eq!(grid.coordinates(idx).unwrap().to_array(), [2, 1, 1]);
///
/// // Interior cells have six neighbours, corners have three.
/// assert_eq!(grid.neighbours(0).len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct OccupancyGrid {
    nx: u32,
    ny: u32,
    nz: u32,
    /// Cells per Z slab (`nx * ny`).
    slab: usize,
    cells: Vec<bool>,
    occupied_count: usize,
}

impl OccupancyGrid {
    /// Build a grid of `nx × ny × nz` cells, drawing each occupancy bit from
    /// `source`.
    ///
    /// The source is called exactly once per cell, in flat index order.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if any extent is 0, or
    /// `Err(GridError::CellCountOverflow)` if the cell count does not fit in
    /// a `usize`.
    pub fn generate<S>(nx: u32, ny: u32, nz: u32, source: &mut S) -> Result<Self, GridError>
    where
        S: CellSource + ?Sized,
    {
        let n = checked_cell_count(nx, ny, nz)?;
        let cells: Vec<bool> = (0..n).map(|_| source.next_cell()).collect();
        let grid = Self::assemble(nx, ny, nz, cells);
        debug!(
            "generated {nx}x{ny}x{nz} grid: {} of {} cells occupied",
            grid.occupied_count,
            grid.cells.len()
        );
        Ok(grid)
    }

    /// Build a grid from an explicit cell buffer in flat index order.
    ///
    /// Returns `Err(GridError::LengthMismatch)` if `cells.len()` is not
    /// `nx * ny * nz`.
    pub fn from_cells(nx: u32, ny: u32, nz: u32, cells: Vec<bool>) -> Result<Self, GridError> {
        let n = checked_cell_count(nx, ny, nz)?;
        if cells.len() != n {
            return Err(GridError::LengthMismatch {
                expected: n,
                actual: cells.len(),
            });
        }
        Ok(Self::assemble(nx, ny, nz, cells))
    }

    /// Build a grid by evaluating `f` at every coordinate, in flat index order.
    pub fn from_fn(
        nx: u32,
        ny: u32,
        nz: u32,
        mut f: impl FnMut(CellCoord) -> bool,
    ) -> Result<Self, GridError> {
        let n = checked_cell_count(nx, ny, nz)?;
        let mut cells = Vec::with_capacity(n);
        for k in 0..nz {
            for j in 0..ny {
                for i in 0..nx {
                    cells.push(f(CellCoord::new(i, j, k)));
                }
            }
        }
        Ok(Self::assemble(nx, ny, nz, cells))
    }

    fn assemble(nx: u32, ny: u32, nz: u32, cells: Vec<bool>) -> Self {
        let occupied_count = cells.iter().filter(|&&c| c).count();
        Self {
            nx,
            ny,
            nz,
            slab: nx as usize * ny as usize,
            cells,
            occupied_count,
        }
    }

    /// Extent along the X axis.
    pub fn nx(&self) -> u32 {
        self.nx
    }

    /// Extent along the Y axis.
    pub fn ny(&self) -> u32 {
        self.ny
    }

    /// Extent along the Z axis.
    pub fn nz(&self) -> u32 {
        self.nz
    }

    /// `(nx, ny, nz)`.
    pub fn dims(&self) -> (u32, u32, u32) {
        (self.nx, self.ny, self.nz)
    }

    /// Total number of cells, `nx * ny * nz`.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.occupied_count
    }

    /// Occupancy bits in flat index order.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Flat indices of all occupied cells, ascending.
    pub fn iter_occupied(&self) -> impl Iterator<Item = CellIndex> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(idx, &occupied)| occupied.then_some(idx))
    }

    /// Flat index of `(i, j, k)`.
    ///
    /// Returns `Err(GridError::CoordOutOfRange)` naming the first axis whose
    /// component is at or beyond its bound.
    pub fn index(&self, i: u32, j: u32, k: u32) -> Result<CellIndex, GridError> {
        for (axis, value, bound) in [
            (Axis::X, i, self.nx),
            (Axis::Y, j, self.ny),
            (Axis::Z, k, self.nz),
        ] {
            if value >= bound {
                return Err(GridError::CoordOutOfRange { axis, value, bound });
            }
        }
        Ok(i as usize + j as usize * self.nx as usize + k as usize * self.slab)
    }

    /// Flat index of a [`CellCoord`].
    pub fn index_of(&self, coord: CellCoord) -> Result<CellIndex, GridError> {
        self.index(coord.i, coord.j, coord.k)
    }

    /// Coordinates of the cell at flat index `idx`.
    ///
    /// Returns `Err(GridError::IndexOutOfRange)` if `idx >= cell_count()`.
    pub fn coordinates(&self, idx: CellIndex) -> Result<CellCoord, GridError> {
        self.check_index(idx)?;
        let (i, j, k) = self.split(idx);
        Ok(CellCoord::new(i, j, k))
    }

    /// Occupancy of the cell at `(i, j, k)`.
    pub fn occupied(&self, i: u32, j: u32, k: u32) -> Result<bool, GridError> {
        let idx = self.index(i, j, k)?;
        Ok(self.cells[idx])
    }

    /// Occupancy of the cell at flat index `idx`.
    pub fn occupied_at(&self, idx: CellIndex) -> Result<bool, GridError> {
        self.check_index(idx)?;
        Ok(self.cells[idx])
    }

    /// The neighbour of `idx` in direction `dir`, or `None` at the boundary.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= cell_count()`.
    pub fn neighbour(&self, idx: CellIndex, dir: Direction) -> Option<CellIndex> {
        self.assert_index(idx);
        let (i, j, k) = self.split(idx);
        self.step(idx, (i, j, k), dir)
    }

    /// All in-bounds 6-neighbours of `idx`, in [`Direction::ALL`] order.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= cell_count()`.
    pub fn neighbours(&self, idx: CellIndex) -> SmallVec<[CellIndex; 6]> {
        self.assert_index(idx);
        let ijk = self.split(idx);
        Direction::ALL
            .iter()
            .filter_map(|&dir| self.step(idx, ijk, dir))
            .collect()
    }

    /// In-bounds neighbours of `idx` in the `-X`, `-Y` and `-Z` directions.
    ///
    /// These are exactly the neighbours that precede `idx` in scan order.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= cell_count()`.
    pub fn backward_neighbours(&self, idx: CellIndex) -> SmallVec<[CellIndex; 3]> {
        self.assert_index(idx);
        let ijk = self.split(idx);
        Direction::BACKWARD
            .iter()
            .filter_map(|&dir| self.step(idx, ijk, dir))
            .collect()
    }

    fn step(
        &self,
        idx: CellIndex,
        (i, j, k): (u32, u32, u32),
        dir: Direction,
    ) -> Option<CellIndex> {
        let row = self.nx as usize;
        match dir {
            Direction::Up => (k + 1 < self.nz).then(|| idx + self.slab),
            Direction::North => (j + 1 < self.ny).then(|| idx + row),
            Direction::East => (i + 1 < self.nx).then(|| idx + 1),
            Direction::Down => (k > 0).then(|| idx - self.slab),
            Direction::South => (j > 0).then(|| idx - row),
            Direction::West => (i > 0).then(|| idx - 1),
        }
    }

    /// Decompose an in-range flat index into `(i, j, k)`.
    fn split(&self, idx: CellIndex) -> (u32, u32, u32) {
        let k = idx / self.slab;
        let rem = idx % self.slab;
        let row = self.nx as usize;
        ((rem % row) as u32, (rem / row) as u32, k as u32)
    }

    fn check_index(&self, idx: CellIndex) -> Result<(), GridError> {
        if idx >= self.cells.len() {
            return Err(GridError::IndexOutOfRange {
                index: idx,
                cell_count: self.cells.len(),
            });
        }
        Ok(())
    }

    fn assert_index(&self, idx: CellIndex) {
        assert!(
            idx < self.cells.len(),
            "cell index {idx} out of range [0, {})",
            self.cells.len()
        );
    }
}

/// `nx * ny * nz`, rejecting empty or unaddressable extents.
fn checked_cell_count(nx: u32, ny: u32, nz: u32) -> Result<usize, GridError> {
    if nx == 0 || ny == 0 || nz == 0 {
        return Err(GridError::EmptyGrid);
    }
    (nx as usize)
        .checked_mul(ny as usize)
        .and_then(|slab| slab.checked_mul(nz as usize))
        .ok_or(GridError::CellCountOverflow { nx, ny, nz })
}
