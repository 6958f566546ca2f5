//! Errors produced by fabric construction and queries.

use thiserror::Error;

/// Failures that can occur while building or querying a [`crate::Fabric`](crate::Fabric).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FabricError {
    /// A coordinate was requested that lies outside the fabric's extent.
    #[error("tile ({x}, {y}) is out of bounds for a {width}x{height} fabric")]
    OutOfBounds {
        /// The requested column.
        x: u32,
        /// The requested row.
        y: u32,
        /// The fabric's width.
        width: u32,
        /// The fabric's height.
        height: u32,
    },
    /// A fabric was requested with a zero width or height.
    #[error("fabric dimensions must be non-zero, got {width}x{height}")]
    EmptyFabric {
        /// The requested width.
        width: u32,
        /// The requested height.
        height: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_display() {
        let e = FabricError::OutOfBounds {
            x: 5,
            y: 5,
            width: 4,
            height: 4,
        };
        assert_eq!(format!("{e}"), "tile (5, 5) is out of bounds for a 4x4 fabric");
    }

    #[test]
    fn empty_fabric_display() {
        let e = FabricError::EmptyFabric { width: 0, height: 4 };
        assert_eq!(format!("{e}"), "fabric dimensions must be non-zero, got 0x4");
    }
}
