//! Priority-queue shortest path search over the routing graph.
//!
//! Plain Dijkstra: no heuristic term. The router's cost function already
//! folds in congestion pressure, so there is nothing left for an admissible
//! heuristic to estimate cheaply.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::routing::graph::RoutingGraph;

#[derive(Clone, Copy, PartialEq, Debug)]
struct HeapEntry {
    cost: f64,
    node: u32,
}

impl Eq for HeapEntry {}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so `BinaryHeap`, a max-heap, pops the smallest cost first.
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Finds the cheapest path from `source` to `target` under the graph's
/// present entry costs. Returns the node sequence including both endpoints.
pub fn shortest_path(graph: &RoutingGraph, source: u32, target: u32, pres_fac: f64) -> Option<Vec<u32>> {
    let node_count = graph.nodes().len();
    let mut dist = vec![f64::INFINITY; node_count];
    let mut came_from: Vec<Option<u32>> = vec![None; node_count];
    let mut visited = vec![false; node_count];

    dist[source as usize] = 0.0;
    let mut heap = BinaryHeap::new();
    heap.push(HeapEntry { cost: 0.0, node: source });

    while let Some(HeapEntry { cost, node }) = heap.pop() {
        if visited[node as usize] {
            continue;
        }
        visited[node as usize] = true;
        if node == target {
            break;
        }
        for &next in &graph.node(node).neighbors {
            if visited[next as usize] {
                continue;
            }
            let candidate = cost + graph.entry_cost(next, pres_fac);
            if candidate < dist[next as usize] {
                dist[next as usize] = candidate;
                came_from[next as usize] = Some(node);
                heap.push(HeapEntry { cost: candidate, node: next });
            }
        }
    }

    if dist[target as usize].is_infinite() {
        return None;
    }

    let mut path = vec![target];
    let mut current = target;
    while let Some(prev) = came_from[current as usize] {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    Some(path)
}
