//! The virtual FPGA fabric: a grid of typed tiles.
//!
//! The fabric is a closed, flat model on purpose: a rectangular grid of
//! [`Tile`]s, each tagged with a [`TileType`]. There is no sub-tile site,
//! BEL, wire, or PIP hierarchy — placement addresses tiles directly, and
//! routing addresses a graph node per tile (see the routing crate for that
//! graph's construction).

#![warn(missing_docs)]

pub mod error;
pub mod types;

pub use error::FabricError;
pub use types::{Fabric, Tile, TileType};
