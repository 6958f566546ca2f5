//! Half-perimeter wirelength cost function.

use vfpga_common::Coord;
use vfpga_netlist::NetIndex;

use crate::placement::PlacementMap;

/// Computes total HPWL across every net with at least two placed pins.
///
/// A net's pins are its driver plus all its sinks. Nets driven by no block
/// (primary inputs) are skipped entirely, matching the handling of
/// unconnected driver pins. Single-pin nets contribute 0.
pub fn total_hpwl(placement: &PlacementMap, index: &NetIndex) -> f64 {
    index
        .net_names()
        .iter()
        .map(|net| net_hpwl(placement, index, net))
        .sum()
}

/// Computes the HPWL contribution of a single net.
pub fn net_hpwl(placement: &PlacementMap, index: &NetIndex, net: &str) -> f64 {
    let mut coords: Vec<Coord> = Vec::new();

    if let Some(driver) = index.driver(net) {
        if let Some(coord) = placement.get(driver) {
            coords.push(coord);
        }
    }
    for &sink in index.sinks(net) {
        if let Some(coord) = placement.get(sink) {
            coords.push(coord);
        }
    }

    if coords.len() < 2 {
        return 0.0;
    }

    let min_x = coords.iter().map(|c| c.x).min().unwrap();
    let max_x = coords.iter().map(|c| c.x).max().unwrap();
    let min_y = coords.iter().map(|c| c.y).min().unwrap();
    let max_y = coords.iter().map(|c| c.y).max().unwrap();

    ((max_x - min_x) + (max_y - min_y)) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use vfpga_fabric::TileType;
    use vfpga_netlist::LogicBlock;

    fn block(id: u32, output: Option<&str>, inputs: &[&str]) -> LogicBlock {
        LogicBlock {
            id,
            name: format!("b{id}"),
            tile_type: TileType::Clb,
            input_nets: inputs.iter().map(|s| s.to_string()).collect(),
            output_net: output.map(str::to_string),
            clock_net: None,
        }
    }

    #[test]
    fn hpwl_same_location_is_zero() {
        let blocks = vec![block(0, Some("n"), &[]), block(1, None, &["n"])];
        let index = NetIndex::build(&blocks);
        let mut placement = PlacementMap::default();
        placement.set(0, Coord::new(2, 2));
        placement.set(1, Coord::new(2, 2));
        assert_eq!(total_hpwl(&placement, &index), 0.0);
    }

    #[test]
    fn hpwl_different_locations() {
        let blocks = vec![block(0, Some("n"), &[]), block(1, None, &["n"])];
        let index = NetIndex::build(&blocks);
        let mut placement = PlacementMap::default();
        placement.set(0, Coord::new(0, 0));
        placement.set(1, Coord::new(5, 3));
        assert_eq!(total_hpwl(&placement, &index), 8.0);
    }

    #[test]
    fn single_pin_net_contributes_zero() {
        let blocks = vec![block(0, Some("n"), &[])];
        let index = NetIndex::build(&blocks);
        let mut placement = PlacementMap::default();
        placement.set(0, Coord::new(3, 3));
        assert_eq!(total_hpwl(&placement, &index), 0.0);
    }

    #[test]
    fn unsourced_net_contributes_zero() {
        let blocks = vec![block(0, None, &["n"])];
        let index = NetIndex::build(&blocks);
        let mut placement = PlacementMap::default();
        placement.set(0, Coord::new(1, 1));
        assert_eq!(total_hpwl(&placement, &index), 0.0);
    }

    #[test]
    fn empty_netlist_has_zero_cost() {
        let index = NetIndex::build(&[]);
        let placement = PlacementMap::default();
        assert_eq!(total_hpwl(&placement, &index), 0.0);
    }
}
