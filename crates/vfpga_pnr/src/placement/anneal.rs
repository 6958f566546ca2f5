//! Simulated annealing placement refinement.
//!
//! Starting from the random initial placement, repeatedly proposes a swap
//! or relocation and accepts or rejects it via the Metropolis criterion.
//! Temperature decreases geometrically, so late moves are accepted only if
//! they improve cost.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;
use vfpga_common::{Coord, InternalError, VfpgaResult};
use vfpga_diagnostics::{Diagnostic, DiagnosticSink};
use vfpga_fabric::TileType;
use vfpga_netlist::{LogicBlock, NetIndex};

use crate::placement::{cost, PlacementMap};

/// Final temperature; annealing stops once the schedule drops to or below
/// this value.
const FINAL_TEMPERATURE: f64 = 0.01;

/// Overrides for the annealing schedule, sourced from run configuration.
#[derive(Debug, Clone)]
pub struct AnnealingSchedule {
    /// Multiplier applied to temperature after each outer step.
    pub cooling_rate: f64,
    /// Inner moves per temperature step, as a multiplier of block count.
    pub moves_per_temp_multiplier: usize,
    /// Overrides the `100 * sqrt(N)` initial temperature when set.
    pub initial_temp_override: Option<f64>,
}

impl Default for AnnealingSchedule {
    fn default() -> Self {
        Self {
            cooling_rate: 0.95,
            moves_per_temp_multiplier: 10,
            initial_temp_override: None,
        }
    }
}

pub(crate) fn anneal(
    blocks: &[LogicBlock],
    parts: &HashMap<TileType, Vec<Coord>>,
    placement: &mut PlacementMap,
    rng: &mut impl Rng,
    schedule: &AnnealingSchedule,
    sink: &DiagnosticSink,
) -> VfpgaResult<()> {
    let num_cells = blocks.len();
    if num_cells < 2 {
        return Ok(());
    }

    let index = NetIndex::build(blocks);
    let mut temperature = schedule
        .initial_temp_override
        .unwrap_or_else(|| 100.0 * (num_cells as f64).sqrt());
    let moves_per_temp = (schedule.moves_per_temp_multiplier * num_cells).max(1);
    let mut current_cost = cost::total_hpwl(placement, &index);

    while temperature > FINAL_TEMPERATURE {
        for _ in 0..moves_per_temp {
            let Some(block) = blocks.choose(rng) else {
                continue;
            };
            let tiles = parts.get(&block.tile_type).map(Vec::as_slice).unwrap_or(&[]);
            if tiles.is_empty() {
                continue;
            }
            let target = *tiles.choose(rng).unwrap();
            let current_coord = placement.get(block.id).ok_or_else(|| {
                InternalError::new(format!(
                    "block {} has no recorded placement during annealing",
                    block.id
                ))
            })?;
            if target == current_coord {
                continue;
            }

            let swapped_with = placement.block_at(target);
            placement.set(block.id, target);
            if let Some(other_id) = swapped_with {
                placement.set(other_id, current_coord);
            }

            let new_cost = cost::total_hpwl(placement, &index);
            let delta = new_cost - current_cost;

            let accept = delta < 0.0 || rng.gen::<f64>() < (-delta / temperature).exp();
            if accept {
                current_cost = new_cost;
            } else {
                placement.set(block.id, current_coord);
                if let Some(other_id) = swapped_with {
                    placement.set(other_id, target);
                }
            }
        }

        temperature *= schedule.cooling_rate;
    }

    sink.emit(Diagnostic::note(format!(
        "final placement cost: {current_cost:.2}"
    )));
    Ok(())
}
