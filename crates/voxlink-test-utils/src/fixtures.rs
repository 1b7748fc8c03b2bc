//! Reusable pattern grids.
//!
//! - [`empty`]: nothing occupied (zero components).
//! - [`full`]: everything occupied (one component).
//! - [`checkerboard`]: cells with even `i + j + k`, no two of which touch.
//! - [`z_slabs`]: every other `k` layer occupied, one component per layer.
//! - [`random_grid`]: seeded Bernoulli fill.
//!
//! All panic on invalid dimensions; they are for tests only.

use voxlink_grid::{BernoulliSource, OccupancyGrid};

pub fn empty(nx: u32, ny: u32, nz: u32) -> OccupancyGrid {
    OccupancyGrid::from_fn(nx, ny, nz, |_| false).expect("valid fixture dimensions")
}

pub fn full(nx: u32, ny: u32, nz: u32) -> OccupancyGrid {
    OccupancyGrid::from_fn(nx, ny, nz, |_| true).expect("valid fixture dimensions")
}

pub fn checkerboard(nx: u32, ny: u32, nz: u32) -> OccupancyGrid {
    OccupancyGrid::from_fn(nx, ny, nz, |c| (c.i + c.j + c.k) % 2 == 0)
        .expect("valid fixture dimensions")
}

/// Layers `k = 0, 2, 4, ...` fully occupied.
pub fn z_slabs(nx: u32, ny: u32, nz: u32) -> OccupancyGrid {
    OccupancyGrid::from_fn(nx, ny, nz, |c| c.k % 2 == 0).expect("valid fixture dimensions")
}

/// Each cell occupied with probability `p`, reproducible from `seed`.
pub fn random_grid(nx: u32, ny: u32, nz: u32, p: f64, seed: u64) -> OccupancyGrid {
    let mut source = BernoulliSource::new(p, seed).expect("valid fixture probability");
    OccupancyGrid::generate(nx, ny, nz, &mut source).expect("valid fixture dimensions")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_counts() {
        assert_eq!(empty(3, 4, 5).occupied_count(), 0);
        assert_eq!(full(3, 4, 5).occupied_count(), 60);
        assert_eq!(checkerboard(4, 4, 4).occupied_count(), 32);
        assert_eq!(z_slabs(2, 3, 5).occupied_count(), 18);
    }

    #[test]
    fn random_grid_is_seeded() {
        let a = random_grid(6, 6, 6, 0.4, 17);
        let b = random_grid(6, 6, 6, 0.4, 17);
        assert_eq!(a.cells(), b.cells());
    }
}
