//! Classifies parsed cells into packed [`LogicBlock`]s.

use vfpga_fabric::TileType;

use crate::block::LogicBlock;
use crate::parser::{NetBit, ParsedCell};

const OUTPUT_LIKE_PORTS: [&str; 4] = ["Q", "O", "Y", "Z"];
const CLOCK_PORT: &str = "CLK";

fn classify_tile_type(cell_type: &str) -> TileType {
    if cell_type.contains("$mem") || cell_type.contains("BRAM") {
        TileType::Bram
    } else if cell_type.contains("$mul") || cell_type.contains("DSP") {
        TileType::Dsp
    } else {
        // `$lut`, `DFF`, and anything unrecognised all land on the
        // general-purpose tile, matching the fabric's CLB-is-default rule.
        TileType::Clb
    }
}

fn first_net_name(bits: &[NetBit]) -> Option<String> {
    bits.iter().find_map(|bit| match bit {
        NetBit::Wire(i) => Some(format!("net_{i}")),
        NetBit::Const(_) => None,
    })
}

/// Packs parsed cells into logic blocks, assigning each a sequential id in
/// input order.
pub fn pack(cells: &[ParsedCell]) -> Vec<LogicBlock> {
    cells
        .iter()
        .enumerate()
        .map(|(index, cell)| pack_one(index as u32, cell))
        .collect()
}

fn pack_one(id: u32, cell: &ParsedCell) -> LogicBlock {
    let tile_type = classify_tile_type(&cell.cell_type);
    let mut input_nets = Vec::new();
    let mut output_net = None;
    let mut clock_net = None;

    for (port, bits) in &cell.connections {
        if port == CLOCK_PORT {
            clock_net = first_net_name(bits);
        } else if OUTPUT_LIKE_PORTS.contains(&port.as_str()) {
            if output_net.is_none() {
                output_net = first_net_name(bits);
            }
        } else if let Some(name) = first_net_name(bits) {
            input_nets.push(name);
        } else {
            input_nets.push(String::new());
        }
    }

    LogicBlock {
        id,
        name: cell.name.clone(),
        tile_type,
        input_nets,
        output_net,
        clock_net,
    }
}
