//! Axes and the six face directions of a cubic cell.

use std::fmt;

/// One of the three grid axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The fastest-varying axis (`i`).
    X,
    /// The middle axis (`j`).
    Y,
    /// The slowest-varying axis (`k`).
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        };
        f.write_str(name)
    }
}

/// A step to one of the six face-adjacent cells.
///
/// Two cells are 6-adjacent iff their coordinates differ by exactly one
/// along exactly one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `+Z`.
    Up,
    /// `+Y`.
    North,
    /// `+X`.
    East,
    /// `-Z`.
    Down,
    /// `-Y`.
    South,
    /// `-X`.
    West,
}

impl Direction {
    /// All six directions, forward directions first.
    pub const ALL: [Direction; 6] = [
        Direction::Up,
        Direction::North,
        Direction::East,
        Direction::Down,
        Direction::South,
        Direction::West,
    ];

    /// The three directions pointing back along the scan order
    /// (`-X`, `-Y`, `-Z`).
    pub const BACKWARD: [Direction; 3] = [Direction::West, Direction::South, Direction::Down];

    /// The axis this direction moves along.
    pub fn axis(self) -> Axis {
        match self {
            Self::East | Self::West => Axis::X,
            Self::North | Self::South => Axis::Y,
            Self::Up | Self::Down => Axis::Z,
        }
    }

    /// Whether this direction increases its axis coordinate.
    pub fn is_forward(self) -> bool {
        matches!(self, Self::Up | Self::North | Self::East)
    }

    /// The direction pointing the other way.
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::North => Self::South,
            Self::East => Self::West,
            Self::Down => Self::Up,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_an_involution() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            assert_ne!(d.opposite(), d);
            assert_eq!(d.opposite().axis(), d.axis());
            assert_ne!(d.opposite().is_forward(), d.is_forward());
        }
    }

    #[test]
    fn backward_directions_cover_each_axis_once() {
        let axes: Vec<Axis> = Direction::BACKWARD.iter().map(|d| d.axis()).collect();
        assert!(axes.contains(&Axis::X));
        assert!(axes.contains(&Axis::Y));
        assert!(axes.contains(&Axis::Z));
        assert!(Direction::BACKWARD.iter().all(|d| !d.is_forward()));
    }

    #[test]
    fn axis_display() {
        assert_eq!(Axis::X.to_string(), "x");
        assert_eq!(Axis::Z.to_string(), "z");
    }
}
