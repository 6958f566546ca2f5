//! The routing graph: one node per fabric tile, NSEW adjacency.

use vfpga_common::Coord;
use vfpga_fabric::Fabric;

/// One node of the routing graph.
#[derive(Debug, Clone)]
pub struct RoutingNode {
    /// The node's id, `y * width + x`.
    pub id: u32,
    /// The tile coordinate this node represents.
    pub coord: Coord,
    /// Ids of the orthogonal neighbours within bounds.
    pub neighbors: Vec<u32>,
    /// Fixed capacity; how many nets may occupy this node at once.
    pub capacity: u32,
    /// Current number of nets occupying this node.
    pub occupancy: u32,
    /// Fixed entry cost before congestion penalties.
    pub base_cost: f64,
    /// Accumulated history-congestion penalty, monotonically non-decreasing.
    pub hist_congestion_cost: f64,
}

/// A routing graph built once per router invocation.
#[derive(Debug, Clone)]
pub struct RoutingGraph {
    width: u32,
    height: u32,
    nodes: Vec<RoutingNode>,
}

impl RoutingGraph {
    /// Builds a routing graph with one node per tile of `fabric`.
    pub fn build(fabric: &Fabric) -> Self {
        let width = fabric.width();
        let height = fabric.height();
        let mut nodes = Vec::with_capacity((width * height) as usize);

        for y in 0..height {
            for x in 0..width {
                let id = node_id(x, y, width);
                let mut neighbors = Vec::with_capacity(4);
                if x > 0 {
                    neighbors.push(node_id(x - 1, y, width));
                }
                if x + 1 < width {
                    neighbors.push(node_id(x + 1, y, width));
                }
                if y > 0 {
                    neighbors.push(node_id(x, y - 1, width));
                }
                if y + 1 < height {
                    neighbors.push(node_id(x, y + 1, width));
                }
                nodes.push(RoutingNode {
                    id,
                    coord: Coord::new(x, y),
                    neighbors,
                    capacity: 1,
                    occupancy: 0,
                    base_cost: 1.0,
                    hist_congestion_cost: 0.0,
                });
            }
        }

        Self { width, height, nodes }
    }

    /// The graph's width, in nodes.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The graph's height, in nodes.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The node id for a coordinate: `y * width + x`.
    pub fn id_of(&self, coord: Coord) -> u32 {
        node_id(coord.x, coord.y, self.width)
    }

    /// The coordinate for a node id.
    pub fn coord_of(&self, id: u32) -> Coord {
        Coord::new(id % self.width, id / self.width)
    }

    /// All nodes, indexed by id.
    pub fn nodes(&self) -> &[RoutingNode] {
        &self.nodes
    }

    /// Mutable access to all nodes, indexed by id.
    pub fn nodes_mut(&mut self) -> &mut [RoutingNode] {
        &mut self.nodes
    }

    /// The node with the given id.
    pub fn node(&self, id: u32) -> &RoutingNode {
        &self.nodes[id as usize]
    }

    /// The cost of entering node `id` under the given present-congestion
    /// factor.
    pub fn entry_cost(&self, id: u32, pres_fac: f64) -> f64 {
        let node = self.node(id);
        let overage = (node.occupancy as i64 + 1 - node.capacity as i64).max(0) as f64;
        (node.base_cost + node.hist_congestion_cost) * (1.0 + overage * pres_fac)
    }
}

fn node_id(x: u32, y: u32, width: u32) -> u32 {
    y * width + x
}
