//! Longest-path static timing analysis over a routed design.
//!
//! Arrival times propagate forward from each net's source tile through its
//! routed path to every sink, Bellman-Ford style: relax every net each pass,
//! stop early once a pass makes no change. The fabric's own `W*H` tile count
//! bounds the number of passes needed for an acyclic signal-flow graph.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use vfpga_common::Coord;
use vfpga_fabric::{Fabric, TileType};
use vfpga_pnr::RoutedNet;

use crate::error::TimingError;

/// Arrival time contributed by a CLB's clock-to-Q delay.
pub const CLK_Q_PS: f64 = 100.0;
/// Arrival time contributed by a BRAM's read delay.
pub const READ_PS: f64 = 1000.0;
/// Arrival time contributed by a DSP's multiply delay.
pub const MUL_PS: f64 = 1500.0;
/// Setup time required at a capture register.
pub const SETUP_PS: f64 = 50.0;
/// Default 4-LUT logic delay, overridable via run configuration.
pub const DEFAULT_LUT_DELAY_PS: f64 = 200.0;
/// Routing delay per Manhattan hop between a net's source and a sink.
pub const HOP_DELAY_PS: f64 = 50.0;

/// The outcome of one static timing analysis: achievable frequency, the
/// critical path's delay, and the chain of tiles it passes through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingResult {
    /// The maximum clock frequency the design can sustain, in MHz.
    pub fmax_mhz: f64,
    /// The critical path's total delay, in nanoseconds.
    pub critical_path_delay_ns: f64,
    /// The source-to-sink chain of tiles realising the critical path.
    pub critical_path_nodes: Vec<Coord>,
}

fn source_arrival_ps(tile_type: TileType) -> f64 {
    match tile_type {
        TileType::Clb => CLK_Q_PS,
        TileType::Bram => READ_PS,
        TileType::Dsp => MUL_PS,
        TileType::Io => 0.0,
    }
}

fn sink_logic_delay_ps(tile_type: TileType, lut_delay_ps: f64) -> f64 {
    match tile_type {
        TileType::Clb => lut_delay_ps,
        TileType::Dsp => MUL_PS,
        TileType::Bram | TileType::Io => 0.0,
    }
}

/// Runs static timing analysis over `nets`, already routed on `fabric`.
///
/// Every tile starts out seeded with its own source-arrival constant (a
/// BRAM's `READ_PS`, a DSP's `MUL_PS`, ...) whether or not a net actually
/// drives it; an idle hard-block tile a net never touches can therefore
/// out-rank a short propagated chain as the reported critical path.
///
/// `lut_delay_ps` is the configurable 4-LUT logic delay (see
/// [`DEFAULT_LUT_DELAY_PS`]). Returns a [`TimingResult`] with an empty
/// critical path and zero delay/frequency only when the fabric has no
/// tiles at all.
pub fn analyze(
    fabric: &Fabric,
    nets: &[RoutedNet],
    lut_delay_ps: f64,
) -> Result<TimingResult, TimingError> {
    let mut arrival: BTreeMap<Coord, f64> = BTreeMap::new();
    let mut predecessor: BTreeMap<Coord, Coord> = BTreeMap::new();

    for tile in fabric.tiles() {
        arrival.insert(Coord::new(tile.x, tile.y), source_arrival_ps(tile.tile_type));
    }

    for net in nets {
        fabric.get_tile(net.source.x, net.source.y)?;
        for &sink_coord in &net.sinks {
            fabric.get_tile(sink_coord.x, sink_coord.y)?;
        }
    }

    let passes = (fabric.width() as usize)
        .saturating_mul(fabric.height() as usize)
        .max(1);

    for _ in 0..passes {
        let mut changed = false;
        for net in nets {
            let Some(&source_arrival) = arrival.get(&net.source) else {
                continue;
            };
            for &sink_coord in &net.sinks {
                let route_delay = HOP_DELAY_PS * net.source.manhattan(sink_coord) as f64;
                let sink_tile = fabric.get_tile(sink_coord.x, sink_coord.y)?;
                let logic_delay = sink_logic_delay_ps(sink_tile.tile_type, lut_delay_ps);
                let candidate = source_arrival + route_delay + logic_delay;

                let improves = match arrival.get(&sink_coord) {
                    Some(&current) => candidate > current,
                    None => true,
                };
                if improves {
                    arrival.insert(sink_coord, candidate);
                    predecessor.insert(sink_coord, net.source);
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }

    let worst = arrival
        .iter()
        .max_by(|a, b| a.1.partial_cmp(b.1).unwrap().then(a.0.cmp(b.0)));

    let Some((&worst_coord, &worst_arrival)) = worst else {
        return Ok(TimingResult {
            fmax_mhz: 0.0,
            critical_path_delay_ns: 0.0,
            critical_path_nodes: Vec::new(),
        });
    };

    let critical_path_delay_ns = (worst_arrival + SETUP_PS) / 1000.0;
    let fmax_mhz = if critical_path_delay_ns > 0.0 {
        1000.0 / critical_path_delay_ns
    } else {
        0.0
    };

    let critical_path_nodes = backtrace(&predecessor, worst_coord);

    Ok(TimingResult {
        fmax_mhz,
        critical_path_delay_ns,
        critical_path_nodes,
    })
}

/// Walks `predecessor` from `from` back to a source, guarding against a
/// revisited coord so a feedback cycle can never loop forever.
fn backtrace(predecessor: &BTreeMap<Coord, Coord>, from: Coord) -> Vec<Coord> {
    let mut path = vec![from];
    let mut current = from;
    while let Some(&prev) = predecessor.get(&current) {
        if path.contains(&prev) {
            break;
        }
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}
