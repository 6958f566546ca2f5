//! The packed logic block: the unit placement and routing operate on.

use serde::{Deserialize, Serialize};
use vfpga_fabric::TileType;

/// A packed design element, produced by the [`crate::packer`] and consumed
/// read-only by placement and routing.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct LogicBlock {
    /// A unique integer id, stable for the lifetime of one run.
    pub id: u32,
    /// The originating cell's instance name.
    pub name: String,
    /// The tile type this block requires.
    pub tile_type: TileType,
    /// Net names driving each input pin. Entries may be empty for
    /// unconnected inputs.
    pub input_nets: Vec<String>,
    /// The net name this block drives, if any.
    pub output_net: Option<String>,
    /// The net name clocking this block, if any.
    pub clock_net: Option<String>,
}
