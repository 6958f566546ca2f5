//! Parsing and validation of `vfpga.toml` run configuration files.
//!
//! This crate reads the run configuration file and produces a strongly-typed
//! [`RunConfig`] threaded through every stage of the back-end flow.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str};
pub use types::{FabricConfig, PlacementConfig, RoutingConfig, RunConfig, TimingConfig};
