use std::collections::BinaryHeap;

use fixedbitset::FixedBitSet;
use hashbrown::HashMap;
use petgraph::{graph::NodeIndex, visit::EdgeRef};

use super::state::State;
use crate::{Topology, routing::CostMetric};

/// Cheapest walk between two nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WalkingPath {
    /// Nodes from start to target, both included
    nodes: Vec<NodeIndex>,
    cost: u32,
}

impl WalkingPath {
    pub(crate) fn nodes(&self) -> &[NodeIndex] {
        &self.nodes
    }

    pub(crate) fn cost(&self) -> u32 {
        self.cost
    }
}

/// Dijkstra's algorithm over the building graph with predecessor tracing.
/// Deactivated nodes are never entered.
/// Returns `None` when `target` cannot be reached from `start`.
pub(crate) fn dijkstra_path(
    topology: &Topology,
    start: NodeIndex,
    target: NodeIndex,
    metric: CostMetric,
) -> Option<WalkingPath> {
    let node_count = topology.node_count();
    let mut distances: HashMap<NodeIndex, u32> = HashMap::with_capacity(node_count);
    let mut predecessors: HashMap<NodeIndex, NodeIndex> = HashMap::with_capacity(node_count);
    let mut settled = FixedBitSet::with_capacity(node_count);
    let mut heap = BinaryHeap::new();

    // Start node has distance 0
    heap.push(State {
        cost: 0,
        node: start,
    });
    distances.insert(start, 0);

    while let Some(State { cost, node }) = heap.pop() {
        if node == target {
            break;
        }

        // Skip stale heap entries
        if settled.put(node.index()) {
            continue;
        }

        for edge in topology.edges(node) {
            let next = edge.target();
            if settled.contains(next.index()) {
                continue;
            }
            if !topology.node(next).is_some_and(|n| n.active) {
                continue;
            }

            let weight = match metric {
                CostMetric::Distance => edge.weight().distance,
                CostMetric::Time => edge.weight().estimated_time,
            };
            let Some(next_cost) = cost.checked_add(weight) else {
                continue;
            };

            match distances.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    heap.push(State {
                        cost: next_cost,
                        node: next,
                    });
                    predecessors.insert(next, node);
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        heap.push(State {
                            cost: next_cost,
                            node: next,
                        });
                        predecessors.insert(next, node);
                    }
                }
            }
        }
    }

    let cost = *distances.get(&target)?;
    log::trace!(
        "Dijkstra settled {} of {node_count} nodes",
        settled.count_ones(..)
    );

    // Follow predecessors backward from target to start
    let mut nodes = vec![target];
    let mut current = target;
    while current != start {
        current = *predecessors.get(&current)?;
        nodes.push(current);
    }
    nodes.reverse();

    Some(WalkingPath { nodes, cost })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Edge, EdgeDirection, GridPoint, Node, NodeKind};

    fn corridor() -> Topology {
        let mut topology = Topology::new();
        for (id, x) in [("A", 0), ("B", 1), ("C", 2), ("D", 3)] {
            topology
                .add_node(Node::new(id, id, 1, NodeKind::Intersection, GridPoint::new(x, 0)))
                .unwrap();
        }
        let edges = [
            ("A", "B", 10, 30),
            ("B", "D", 10, 30),
            ("A", "C", 15, 10),
            ("C", "D", 15, 10),
        ];
        for (from, to, distance, time) in edges {
            topology
                .add_edge(Edge::new(from, to, distance, time, EdgeDirection::Straight, "Walk"))
                .unwrap();
        }
        topology
    }

    fn ids(topology: &Topology, path: &WalkingPath) -> Vec<String> {
        path.nodes()
            .iter()
            .map(|&idx| topology.node(idx).unwrap().id.clone())
            .collect()
    }

    #[test]
    fn metric_selects_the_path() {
        let topology = corridor();
        let a = topology.node_index("A").unwrap();
        let d = topology.node_index("D").unwrap();

        let shortest = dijkstra_path(&topology, a, d, CostMetric::Distance).unwrap();
        assert_eq!(ids(&topology, &shortest), ["A", "B", "D"]);
        assert_eq!(shortest.cost(), 20);

        let fastest = dijkstra_path(&topology, a, d, CostMetric::Time).unwrap();
        assert_eq!(ids(&topology, &fastest), ["A", "C", "D"]);
        assert_eq!(fastest.cost(), 20);
    }

    #[test]
    fn edges_are_directed() {
        let topology = corridor();
        let a = topology.node_index("A").unwrap();
        let d = topology.node_index("D").unwrap();
        assert!(dijkstra_path(&topology, d, a, CostMetric::Distance).is_none());
    }

    #[test]
    fn start_equals_target() {
        let topology = corridor();
        let a = topology.node_index("A").unwrap();
        let path = dijkstra_path(&topology, a, a, CostMetric::Distance).unwrap();
        assert_eq!(path.nodes(), &[a]);
        assert_eq!(path.cost(), 0);
    }
}
