//! Pathfinder negotiated-congestion routing over a fabric's tile grid.

pub mod dijkstra;
pub mod graph;
pub mod pathfinder;

pub use graph::{RoutingGraph, RoutingNode};
pub use pathfinder::{route, RoutedNet, RoutingSchedule, MAX_ITERATIONS};
