//! The shared tile-grid coordinate type.

use serde::{Deserialize, Serialize};

/// An integer coordinate on the fabric grid.
///
/// Used everywhere a tile, routing-graph node, or timing arrival is
/// addressed: placement maps, routed nets, and the timing arrival/predecessor
/// tables all key off `Coord`, not an opaque id, since the fabric's own
/// `y * width + x` indexing is already a total order over valid positions.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct Coord {
    /// Column.
    pub x: u32,
    /// Row.
    pub y: u32,
}

impl Coord {
    /// Creates a coordinate from `(x, y)`.
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// The Manhattan distance between two coordinates.
    pub fn manhattan(self, other: Coord) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_distance() {
        assert_eq!(Coord::new(0, 0).manhattan(Coord::new(3, 4)), 7);
        assert_eq!(Coord::new(5, 5).manhattan(Coord::new(5, 5)), 0);
    }

    #[test]
    fn ordering_is_row_major() {
        assert!(Coord::new(1, 0) < Coord::new(0, 1));
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Coord::new(2, 3)), "(2, 3)");
    }
}
