//! Grid addressing compliance test helpers.
//!
//! These functions verify that an [`OccupancyGrid`] satisfies the addressing
//! and adjacency invariants the connectivity strategies rely on. Reused by
//! every grid-shape test in this crate.

use crate::axis::Direction;
use crate::grid::OccupancyGrid;
use indexmap::IndexSet;
use voxlink_core::CellCoord;

/// Assert that `index(coordinates(idx)) == idx` for every cell.
pub fn assert_index_roundtrip(grid: &OccupancyGrid) {
    for idx in 0..grid.cell_count() {
        let c = grid.coordinates(idx).expect("in-range index");
        let back = grid.index_of(c).expect("in-range coordinate");
        assert_eq!(back, idx, "index({c}) = {back}, expected {idx}");
    }
}

/// Assert that enumerating coordinates in scan order yields `0, 1, 2, ...`.
pub fn assert_scan_order_is_flat_order(grid: &OccupancyGrid) {
    let (nx, ny, nz) = grid.dims();
    let mut expected = 0usize;
    for k in 0..nz {
        for j in 0..ny {
            for i in 0..nx {
                assert_eq!(grid.index(i, j, k).unwrap(), expected);
                expected += 1;
            }
        }
    }
    assert_eq!(expected, grid.cell_count());
}

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`, and that
/// every neighbour differs by exactly one along exactly one axis.
pub fn assert_neighbours_symmetric_and_unit(grid: &OccupancyGrid) {
    for idx in 0..grid.cell_count() {
        let a = grid.coordinates(idx).unwrap();
        for nb in grid.neighbours(idx) {
            assert!(
                grid.neighbours(nb).contains(&idx),
                "neighbour symmetry violated: {nb} in N({idx}) but not vice versa"
            );
            let b = grid.coordinates(nb).unwrap();
            assert_eq!(manhattan(a, b), 1, "{a} and {b} are not face-adjacent");
        }
    }
}

/// Assert that `neighbours` has no duplicates and that the per-direction
/// lookup agrees with it.
pub fn assert_neighbours_unique(grid: &OccupancyGrid) {
    for idx in 0..grid.cell_count() {
        let all = grid.neighbours(idx);
        let unique: IndexSet<_> = all.iter().collect();
        assert_eq!(unique.len(), all.len(), "duplicate neighbours of {idx}");
        let by_dir: Vec<_> = Direction::ALL
            .iter()
            .filter_map(|&d| grid.neighbour(idx, d))
            .collect();
        assert_eq!(by_dir, all.to_vec());
    }
}

/// Assert that backward neighbours are exactly the neighbours with a smaller
/// flat index.
pub fn assert_backward_neighbours_precede(grid: &OccupancyGrid) {
    for idx in 0..grid.cell_count() {
        let mut expected: Vec<_> = grid.neighbours(idx).into_iter().filter(|&n| n < idx).collect();
        let mut back = grid.backward_neighbours(idx).to_vec();
        expected.sort_unstable();
        back.sort_unstable();
        assert_eq!(back, expected, "backward neighbours of {idx}");
    }
}

/// Run all compliance checks on a grid.
pub fn run_full_compliance(grid: &OccupancyGrid) {
    assert_index_roundtrip(grid);
    assert_scan_order_is_flat_order(grid);
    assert_neighbours_symmetric_and_unit(grid);
    assert_neighbours_unique(grid);
    assert_backward_neighbours_precede(grid);
}

fn manhattan(a: CellCoord, b: CellCoord) -> u32 {
    a.i.abs_diff(b.i) + a.j.abs_diff(b.j) + a.k.abs_diff(b.k)
}
