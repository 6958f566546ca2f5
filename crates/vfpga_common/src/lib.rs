//! Shared foundational types used across the virtual FPGA CAD back-end.
//!
//! Every stage (placement, routing, timing) can report an
//! [`InternalError`], the invariant-violation / programmer-error variant
//! that should never surface for well-formed input. Stage-specific errors
//! (capacity, divergence, malformed input) live in their own crates.

#![warn(missing_docs)]

pub mod coord;
pub mod result;

pub use coord::Coord;
pub use result::{InternalError, VfpgaResult};
