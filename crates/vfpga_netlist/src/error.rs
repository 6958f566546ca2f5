//! Errors produced while ingesting a netlist.

use thiserror::Error;

/// Failures raised while parsing or packing a netlist.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NetlistError {
    /// The JSON document was not a valid Yosys-style netlist dump.
    #[error("netlist malformed: {0}")]
    InputMalformed(String),
}
