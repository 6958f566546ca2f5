//! Errors produced by placement and routing.

use thiserror::Error;
use vfpga_common::InternalError;
use vfpga_fabric::TileType;

/// Failures raised while placing blocks onto a fabric.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
    /// There are more blocks of a given type than tiles to hold them.
    #[error("insufficient {tile_type} tiles: need {needed}, fabric has {available}")]
    Capacity {
        /// The tile type that ran out.
        tile_type: TileType,
        /// How many blocks of this type need a tile.
        needed: usize,
        /// How many tiles of this type the fabric has.
        available: usize,
    },
    /// Placement bookkeeping was found inconsistent mid-anneal.
    #[error(transparent)]
    Internal(#[from] InternalError),
}

/// Failures raised while routing a placed design.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoutingError {
    /// Congestion persisted after the iteration cap was reached.
    #[error(
        "routing failed to converge after {iterations} iterations: {overused_nodes} nodes over capacity, worst overage {worst_overage}"
    )]
    Divergence {
        /// The number of iterations attempted.
        iterations: usize,
        /// How many routing-graph nodes remained over capacity.
        overused_nodes: usize,
        /// The largest single overage observed (`occupancy - capacity`).
        worst_overage: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_display() {
        let e = PlacementError::Capacity {
            tile_type: TileType::Bram,
            needed: 3,
            available: 1,
        };
        assert_eq!(
            format!("{e}"),
            "insufficient BRAM tiles: need 3, fabric has 1"
        );
    }

    #[test]
    fn divergence_display() {
        let e = RoutingError::Divergence {
            iterations: 50,
            overused_nodes: 2,
            worst_overage: 3,
        };
        assert!(format!("{e}").contains("50 iterations"));
    }

    #[test]
    fn internal_wraps_invariant_violation() {
        let e: PlacementError = InternalError::new("block 4 has no recorded placement").into();
        assert!(format!("{e}").contains("block 4 has no recorded placement"));
    }
}
