//! Seeded random initial placement.
//!
//! Shuffles each tile-type partition with the run's seeded PRNG, then walks
//! the block list assigning the next tile from the matching partition. This
//! yields a type-legal, exclusive starting placement before annealing begins.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;
use vfpga_common::Coord;
use vfpga_fabric::TileType;
use vfpga_netlist::LogicBlock;

use crate::error::PlacementError;
use crate::placement::PlacementMap;

pub(crate) fn initial_placement(
    blocks: &[LogicBlock],
    parts: &HashMap<TileType, Vec<Coord>>,
    rng: &mut impl Rng,
) -> Result<PlacementMap, PlacementError> {
    let mut shuffled: HashMap<TileType, Vec<Coord>> = parts.clone();
    for tiles in shuffled.values_mut() {
        tiles.shuffle(rng);
    }

    let mut cursors: HashMap<TileType, usize> = HashMap::new();
    let mut placement = PlacementMap::new();

    for block in blocks {
        let tiles = shuffled
            .get(&block.tile_type)
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        let cursor = cursors.entry(block.tile_type).or_insert(0);

        let Some(&coord) = tiles.get(*cursor) else {
            let needed = blocks
                .iter()
                .filter(|b| b.tile_type == block.tile_type)
                .count();
            return Err(PlacementError::Capacity {
                tile_type: block.tile_type,
                needed,
                available: tiles.len(),
            });
        };

        placement.set(block.id, coord);
        *cursor += 1;
    }

    Ok(placement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn block(id: u32, tile_type: TileType) -> LogicBlock {
        LogicBlock {
            id,
            name: format!("b{id}"),
            tile_type,
            input_nets: vec![],
            output_net: None,
            clock_net: None,
        }
    }

    #[test]
    fn assigns_every_block_a_distinct_coord() {
        let mut parts = HashMap::new();
        parts.insert(
            TileType::Clb,
            vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(0, 1), Coord::new(1, 1)],
        );
        let blocks: Vec<_> = (0..4).map(|i| block(i, TileType::Clb)).collect();
        let mut rng = rand::rngs::StdRng::seed_from_u64(1);
        let placement = initial_placement(&blocks, &parts, &mut rng).unwrap();

        let coords: std::collections::HashSet<_> = blocks.iter().map(|b| placement.get(b.id).unwrap()).collect();
        assert_eq!(coords.len(), 4);
    }

    #[test]
    fn exhausted_partition_is_capacity_error() {
        let mut parts = HashMap::new();
        parts.insert(TileType::Bram, vec![Coord::new(3, 0)]);
        let blocks = vec![block(0, TileType::Bram), block(1, TileType::Bram)];
        let mut rng = rand::rngs::StdRng::seed_from_u64(1);
        assert!(matches!(
            initial_placement(&blocks, &parts, &mut rng),
            Err(PlacementError::Capacity { .. })
        ));
    }

    #[test]
    fn missing_partition_for_type_is_capacity_error() {
        let parts = HashMap::new();
        let blocks = vec![block(0, TileType::Dsp)];
        let mut rng = rand::rngs::StdRng::seed_from_u64(1);
        assert!(matches!(
            initial_placement(&blocks, &parts, &mut rng),
            Err(PlacementError::Capacity { .. })
        ));
    }
}
