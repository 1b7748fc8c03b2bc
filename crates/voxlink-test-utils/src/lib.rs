//! Test utilities for voxlink development.
//!
//! Provides a breadth-first reference [`oracle_components`] that shares no
//! adjacency code with the grid crate, helpers to put component lists into a
//! label-free canonical form, and pattern grids in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::VecDeque;

use voxlink_core::CellIndex;
use voxlink_grid::OccupancyGrid;

pub use fixtures::{checkerboard, empty, full, random_grid, z_slabs};

/// Reference components computed breadth-first from raw coordinates.
///
/// Neighbours are derived with plain `(i, j, k)` arithmetic against the
/// grid's dimensions rather than through
/// [`OccupancyGrid::neighbours`], so a bug there cannot hide here too.
/// Result is canonical: see [`normalize`].
pub fn oracle_components(grid: &OccupancyGrid) -> Vec<Vec<CellIndex>> {
    let (nx, ny, nz) = grid.dims();
    let (nx, ny, nz) = (nx as i64, ny as i64, nz as i64);
    let cells = grid.cells();
    let flat = |i: i64, j: i64, k: i64| (i + nx * (j + ny * k)) as usize;

    let mut seen = vec![false; cells.len()];
    let mut out = Vec::new();
    let mut queue = VecDeque::new();

    for k in 0..nz {
        for j in 0..ny {
            for i in 0..nx {
                let start = flat(i, j, k);
                if !cells[start] || seen[start] {
                    continue;
                }
                seen[start] = true;
                queue.push_back((i, j, k));
                let mut members = Vec::new();
                while let Some((ci, cj, ck)) = queue.pop_front() {
                    members.push(flat(ci, cj, ck));
                    for (di, dj, dk) in [
                        (1, 0, 0),
                        (-1, 0, 0),
                        (0, 1, 0),
                        (0, -1, 0),
                        (0, 0, 1),
                        (0, 0, -1),
                    ] {
                        let (a, b, c) = (ci + di, cj + dj, ck + dk);
                        if a < 0 || b < 0 || c < 0 || a >= nx || b >= ny || c >= nz {
                            continue;
                        }
                        let idx = flat(a, b, c);
                        if cells[idx] && !seen[idx] {
                            seen[idx] = true;
                            queue.push_back((a, b, c));
                        }
                    }
                }
                out.push(members);
            }
        }
    }
    normalize(out)
}

/// Sort each component, drop empty ones, and order components by their
/// smallest member.
pub fn normalize(mut components: Vec<Vec<CellIndex>>) -> Vec<Vec<CellIndex>> {
    components.retain(|c| !c.is_empty());
    for c in &mut components {
        c.sort_unstable();
    }
    components.sort_unstable_by_key(|c| c[0]);
    components
}

/// Assert `components` is exactly the 6-connected partition of `grid`'s
/// occupied cells.
///
/// Checks coverage and disjointness first so failures point at the
/// specific broken property, then compares with [`oracle_components`].
pub fn assert_valid_partition(grid: &OccupancyGrid, components: &[Vec<CellIndex>]) {
    let mut owner: Vec<Option<usize>> = vec![None; grid.cell_count()];
    for (n, members) in components.iter().enumerate() {
        assert!(!members.is_empty(), "component {n} is empty");
        for &idx in members {
            assert!(
                idx < grid.cell_count(),
                "component {n} holds out-of-range cell {idx}"
            );
            assert!(grid.cells()[idx], "component {n} holds unoccupied cell {idx}");
            if let Some(prev) = owner[idx] {
                panic!("cell {idx} appears in components {prev} and {n}");
            }
            owner[idx] = Some(n);
        }
    }
    for idx in grid.iter_occupied() {
        assert!(owner[idx].is_some(), "occupied cell {idx} is in no component");
    }
    assert_eq!(
        normalize(components.to_vec()),
        oracle_components(grid),
        "partition differs from breadth-first reference"
    );
}
