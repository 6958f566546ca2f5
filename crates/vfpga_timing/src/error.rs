//! Timing-stage error type.

use thiserror::Error;
use vfpga_fabric::FabricError;

/// Errors raised while analyzing a routed design's timing.
#[derive(Debug, Error)]
pub enum TimingError {
    /// A net referenced a coordinate outside the fabric's bounds.
    #[error(transparent)]
    Fabric(#[from] FabricError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_fabric_error() {
        let fabric_err = FabricError::OutOfBounds {
            x: 5,
            y: 0,
            width: 3,
            height: 3,
        };
        let err: TimingError = fabric_err.into();
        assert!(err.to_string().contains("out of bounds") || err.to_string().contains("bounds"));
    }
}
