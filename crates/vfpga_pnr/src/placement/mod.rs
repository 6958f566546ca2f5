//! Simulated-annealing placement: assigns blocks to type-compatible tiles.

mod anneal;
pub mod cost;
mod random;

use std::collections::HashMap;

use vfpga_common::Coord;
use vfpga_diagnostics::DiagnosticSink;
use vfpga_fabric::{Fabric, TileType};
use vfpga_netlist::LogicBlock;

use crate::error::PlacementError;

/// A mapping from block id to the tile coordinate it occupies.
#[derive(Debug, Clone, Default)]
pub struct PlacementMap(HashMap<u32, Coord>);

impl PlacementMap {
    /// Creates an empty placement map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns `block_id` to `coord`, overwriting any previous assignment.
    pub fn set(&mut self, block_id: u32, coord: Coord) {
        self.0.insert(block_id, coord);
    }

    /// The coordinate a block occupies, if placed.
    pub fn get(&self, block_id: u32) -> Option<Coord> {
        self.0.get(&block_id).copied()
    }

    /// The number of placed blocks.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no block has been placed yet.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over all (block id, coord) assignments.
    pub fn iter(&self) -> impl Iterator<Item = (u32, Coord)> + '_ {
        self.0.iter().map(|(&id, &coord)| (id, coord))
    }

    /// The id of the block at `coord`, if any. Exclusivity means at most one.
    pub fn block_at(&self, coord: Coord) -> Option<u32> {
        self.0
            .iter()
            .find(|(_, &c)| c == coord)
            .map(|(&id, _)| id)
    }
}

/// Partitions a fabric's tiles by type, each list in row-major order.
fn partitions(fabric: &Fabric) -> HashMap<TileType, Vec<Coord>> {
    [TileType::Clb, TileType::Bram, TileType::Dsp, TileType::Io]
        .into_iter()
        .map(|t| (t, fabric.tiles_of_type(t)))
        .collect()
}

#[cfg(test)]
pub(crate) fn partitions_for_test(fabric: &Fabric) -> HashMap<TileType, Vec<Coord>> {
    partitions(fabric)
}

pub use anneal::AnnealingSchedule;

/// Places every block onto a type-compatible, exclusive tile, minimising
/// total HPWL via simulated annealing.
///
/// `seed` makes the run reproducible: the same fabric, blocks, and seed
/// always yield the same placement.
pub fn place(
    fabric: &Fabric,
    blocks: &[LogicBlock],
    seed: u64,
    schedule: &AnnealingSchedule,
    sink: &DiagnosticSink,
) -> Result<PlacementMap, PlacementError> {
    use rand::SeedableRng;
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    let parts = partitions(fabric);
    let mut placement = random::initial_placement(blocks, &parts, &mut rng)?;
    anneal::anneal(blocks, &parts, &mut placement, &mut rng, schedule, sink)?;
    Ok(placement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vfpga_netlist::LogicBlock;

    fn block(id: u32, tile_type: TileType, output: Option<&str>, inputs: &[&str]) -> LogicBlock {
        LogicBlock {
            id,
            name: format!("b{id}"),
            tile_type,
            input_nets: inputs.iter().map(|s| s.to_string()).collect(),
            output_net: output.map(str::to_string),
            clock_net: None,
        }
    }

    #[test]
    fn places_all_blocks_legally() {
        let fabric = Fabric::new(2, 2, 9, 9).unwrap();
        let blocks = vec![
            block(0, TileType::Clb, Some("n"), &[]),
            block(1, TileType::Clb, None, &["n"]),
        ];
        let sink = DiagnosticSink::new();
        let placement = place(&fabric, &blocks, 42, &AnnealingSchedule::default(), &sink).unwrap();
        assert_eq!(placement.len(), 2);
        let c0 = placement.get(0).unwrap();
        let c1 = placement.get(1).unwrap();
        assert_ne!(c0, c1);
    }

    #[test]
    fn insufficient_tiles_is_capacity_error() {
        let fabric = Fabric::new(1, 1, 9, 9).unwrap();
        let blocks = vec![
            block(0, TileType::Clb, None, &[]),
            block(1, TileType::Clb, None, &[]),
        ];
        let sink = DiagnosticSink::new();
        assert!(matches!(
            place(&fabric, &blocks, 1, &AnnealingSchedule::default(), &sink),
            Err(PlacementError::Capacity { .. })
        ));
    }

    #[test]
    fn reproducible_given_same_seed() {
        let fabric = Fabric::new(4, 4, 9, 9).unwrap();
        let blocks: Vec<_> = (0..6)
            .map(|i| block(i, TileType::Clb, None, &[]))
            .collect();
        let sink = DiagnosticSink::new();
        let a = place(&fabric, &blocks, 7, &AnnealingSchedule::default(), &sink).unwrap();
        let b = place(&fabric, &blocks, 7, &AnnealingSchedule::default(), &sink).unwrap();
        for i in 0..6 {
            assert_eq!(a.get(i), b.get(i));
        }
    }
}
