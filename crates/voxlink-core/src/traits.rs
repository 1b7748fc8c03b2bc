//! Core abstraction traits for grid population.

/// A stream of occupancy bits used to populate a grid.
///
/// Grid construction calls [`next_cell`](CellSource::next_cell) exactly once
/// per cell, in flat index order, with no retries. A source that yields the
/// same sequence therefore always produces the same grid.
///
/// Any `FnMut() -> bool` closure is a `CellSource`, which is convenient for
/// tests and for callers with their own generator:
///
/// ```
/// use voxlink_core::CellSource;
///
/// let mut toggle = false;
/// let mut source = move || {
///     toggle = !toggle;
///     toggle
/// };
/// assert!(source.next_cell());
/// assert!(!source.next_cell());
/// ```
pub trait CellSource {
    /// Produce the occupancy bit for the next cell.
    fn next_cell(&mut self) -> bool;
}

impl<F: FnMut() -> bool> CellSource for F {
    fn next_cell(&mut self) -> bool {
        self()
    }
}
