//! PathFinder negotiated-congestion routing.
//!
//! Each iteration rips up every net, routes it fresh with a congestion-aware
//! Dijkstra search, then checks whether any node is over capacity. History
//! cost accumulates on contended nodes so later iterations steer around
//! them; present cost discourages sharing within one iteration.

use vfpga_common::Coord;
use vfpga_diagnostics::{Diagnostic, DiagnosticSink};
use vfpga_fabric::Fabric;
use vfpga_netlist::{LogicBlock, NetIndex};

use crate::error::RoutingError;
use crate::placement::PlacementMap;
use crate::routing::dijkstra;
use crate::routing::graph::RoutingGraph;

/// Iteration cap before routing is declared divergent, absent a
/// configuration override.
pub const MAX_ITERATIONS: usize = 50;

/// Overrides for the Pathfinder congestion-cost schedule, sourced from run
/// configuration.
#[derive(Debug, Clone)]
pub struct RoutingSchedule {
    /// Iteration cap before routing is declared divergent.
    pub max_iterations: usize,
    /// Starting present-congestion cost multiplier.
    pub initial_pres_fac: f64,
    /// Per-iteration growth factor applied to the present-congestion cost.
    pub pres_fac_growth: f64,
    /// Per-iteration increment applied to a contended node's history cost.
    pub hist_fac: f64,
}

impl Default for RoutingSchedule {
    fn default() -> Self {
        Self {
            max_iterations: MAX_ITERATIONS,
            initial_pres_fac: 0.5,
            pres_fac_growth: 1.5,
            hist_fac: 1.0,
        }
    }
}

/// A net after successful routing: its source, its sinks, and the full set
/// of graph nodes (as coords) it occupies.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutedNet {
    /// The driving tile.
    pub source: Coord,
    /// The sink tiles.
    pub sinks: Vec<Coord>,
    /// Every tile this net's route passes through, source and sinks
    /// included.
    pub path: Vec<Coord>,
}

struct WorkingNet {
    source_node: u32,
    sink_nodes: Vec<u32>,
    path: Vec<u32>,
}

/// Routes every net extracted from `blocks`' placement on `fabric`.
///
/// Nets with no driving block (primary inputs) or no sinks are skipped.
pub fn route(
    fabric: &Fabric,
    blocks: &[LogicBlock],
    placement: &PlacementMap,
    schedule: &RoutingSchedule,
    sink: &DiagnosticSink,
) -> Result<Vec<RoutedNet>, RoutingError> {
    let mut graph = RoutingGraph::build(fabric);
    let index = NetIndex::build(blocks);

    let mut nets: Vec<WorkingNet> = Vec::new();
    for net_name in index.net_names() {
        let Some(driver_id) = index.driver(&net_name) else {
            continue;
        };
        let sink_ids = index.sinks(&net_name);
        if sink_ids.is_empty() {
            continue;
        }
        let Some(driver_coord) = placement.get(driver_id) else {
            continue;
        };
        let sink_nodes: Vec<u32> = sink_ids
            .iter()
            .filter_map(|&id| placement.get(id))
            .map(|coord| graph.id_of(coord))
            .collect();
        if sink_nodes.is_empty() {
            continue;
        }
        nets.push(WorkingNet {
            source_node: graph.id_of(driver_coord),
            sink_nodes,
            path: Vec::new(),
        });
    }

    let mut pres_fac = schedule.initial_pres_fac;

    for iteration in 0..schedule.max_iterations {
        for net in &mut nets {
            for &node in &net.path {
                graph.nodes_mut()[node as usize].occupancy -= 1;
            }
            net.path.clear();
        }

        for net in &mut nets {
            let mut occupied = Vec::new();
            for &sink_node in &net.sink_nodes {
                match dijkstra::shortest_path(&graph, net.source_node, sink_node, pres_fac) {
                    Some(path) => occupied.extend(path),
                    None => {
                        sink.emit(Diagnostic::warning(format!(
                            "sink unreachable at {}",
                            graph.coord_of(sink_node)
                        )));
                    }
                }
            }
            occupied.sort_unstable();
            occupied.dedup();
            for &node in &occupied {
                graph.nodes_mut()[node as usize].occupancy += 1;
            }
            net.path = occupied;
        }

        let mut congested = false;
        let mut overused_nodes = 0usize;
        let mut worst_overage = 0u32;
        for node in graph.nodes_mut() {
            if node.occupancy > node.capacity {
                congested = true;
                overused_nodes += 1;
                let overage = node.occupancy - node.capacity;
                worst_overage = worst_overage.max(overage);
                node.hist_congestion_cost += overage as f64 * schedule.hist_fac;
            }
        }

        if !congested {
            return Ok(nets
                .iter()
                .map(|net| RoutedNet {
                    source: graph.coord_of(net.source_node),
                    sinks: net.sink_nodes.iter().map(|&n| graph.coord_of(n)).collect(),
                    path: net.path.iter().map(|&n| graph.coord_of(n)).collect(),
                })
                .collect());
        }

        if iteration == schedule.max_iterations - 1 {
            return Err(RoutingError::Divergence {
                iterations: schedule.max_iterations,
                overused_nodes,
                worst_overage,
            });
        }

        pres_fac *= schedule.pres_fac_growth;
    }

    unreachable!("loop above always returns on its final iteration")
}
