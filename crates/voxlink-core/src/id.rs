//! Strongly-typed identifiers and the [`CellIndex`] type alias.

use std::cmp::Ordering;
use std::fmt;

/// Flat index of a cell inside an occupancy grid.
///
/// For a grid of extent `(nx, ny, nz)` the cell at `(i, j, k)` has index
/// `i + j * nx + k * nx * ny`. This is the only key type the forests and
/// connectivity strategies depend on.
pub type CellIndex = usize;

/// Identifies a connected component within one connectivity result.
///
/// Ids are assigned sequentially from 0 by whichever strategy produced the
/// result. They are labels only: two strategies run over the same grid agree
/// on component *membership*, not on which id a component receives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(pub u32);

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ComponentId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

impl ComponentId {
    /// The id for the `position`-th component of a result.
    ///
    /// # Panics
    ///
    /// Panics if `position` does not fit in a `u32`. A grid would need more
    /// than four billion separate components for this to happen.
    pub fn from_position(position: usize) -> Self {
        match u32::try_from(position) {
            Ok(v) => Self(v),
            Err(_) => panic!("component position {position} exceeds u32::MAX"),
        }
    }

    /// The id as a `usize`, for indexing dense per-component tables.
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// A cell coordinate `(i, j, k)` along the X, Y and Z axes.
///
/// Ordering follows the grid's scan order (Z slowest, X fastest), so sorting
/// coordinates yields the same sequence as sorting their flat indices.
///
/// # Examples
///
/// ```
/// use voxlink_core::CellCoord;
///
/// let a = CellCoord::new(5, 0, 0);
/// let b = CellCoord::new(0, 1, 0);
/// assert!(a < b); // same slab, lower row
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellCoord {
    /// Position along the X axis.
    pub i: u32,
    /// Position along the Y axis.
    pub j: u32,
    /// Position along the Z axis.
    pub k: u32,
}

impl CellCoord {
    /// Build a coordinate from its three components.
    pub const fn new(i: u32, j: u32, k: u32) -> Self {
        Self { i, j, k }
    }

    /// The components as an `[i, j, k]` array.
    pub const fn to_array(self) -> [u32; 3] {
        [self.i, self.j, self.k]
    }
}

impl Ord for CellCoord {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.k, self.j, self.i).cmp(&(other.k, other.j, other.i))
    }
}

impl PartialOrd for CellCoord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<(u32, u32, u32)> for CellCoord {
    fn from((i, j, k): (u32, u32, u32)) -> Self {
        Self { i, j, k }
    }
}

impl From<[u32; 3]> for CellCoord {
    fn from([i, j, k]: [u32; 3]) -> Self {
        Self { i, j, k }
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.i, self.j, self.k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn component_id_display_and_from() {
        let id = ComponentId::from(7);
        assert_eq!(id, ComponentId(7));
        assert_eq!(id.to_string(), "7");
        assert_eq!(id.as_usize(), 7);
        assert_eq!(ComponentId::from_position(7), id);
    }

    #[test]
    fn coord_conversions_agree() {
        let a = CellCoord::from((1, 2, 3));
        let b = CellCoord::from([1, 2, 3]);
        assert_eq!(a, b);
        assert_eq!(a.to_array(), [1, 2, 3]);
        assert_eq!(a.to_string(), "(1, 2, 3)");
    }

    #[test]
    fn coord_order_is_scan_order() {
        let mut coords = vec![
            CellCoord::new(0, 0, 1),
            CellCoord::new(1, 1, 0),
            CellCoord::new(2, 0, 0),
            CellCoord::new(0, 1, 0),
        ];
        coords.sort();
        assert_eq!(
            coords,
            vec![
                CellCoord::new(2, 0, 0),
                CellCoord::new(0, 1, 0),
                CellCoord::new(1, 1, 0),
                CellCoord::new(0, 0, 1),
            ]
        );
    }

    proptest! {
        #[test]
        fn coord_order_matches_flat_index_order(
            a in (0u32..7, 0u32..5, 0u32..3),
            b in (0u32..7, 0u32..5, 0u32..3),
        ) {
            let flat = |(i, j, k): (u32, u32, u32)| i + j * 7 + k * 35;
            let ca = CellCoord::from(a);
            let cb = CellCoord::from(b);
            prop_assert_eq!(ca.cmp(&cb), flat(a).cmp(&flat(b)));
        }
    }
}
