//! Directed building graph with an id index

use hashbrown::HashMap;
use petgraph::{
    Direction,
    graph::{DiGraph, EdgeReference, NodeIndex},
};

use super::components::{Edge, Node};
use crate::{DEFAULT_GRID_UNIT_METERS, Error, Meters};

/// Building topology
///
/// Nodes keep their insertion order, which is the order floor and kind
/// queries report them in.
#[derive(Debug, Clone)]
pub struct Topology {
    pub(crate) graph: DiGraph<Node, Edge>,
    index: HashMap<String, NodeIndex>,
    grid_unit_meters: Meters,
}

impl Default for Topology {
    fn default() -> Self {
        Self {
            graph: DiGraph::new(),
            index: HashMap::new(),
            grid_unit_meters: DEFAULT_GRID_UNIT_METERS,
        }
    }
}

impl Topology {
    pub fn new() -> Self {
        Self::default()
    }

    /// Meters per floor plan grid unit, used for distances between nodes
    pub fn grid_unit_meters(&self) -> Meters {
        self.grid_unit_meters
    }

    pub fn set_grid_unit_meters(&mut self, meters: Meters) {
        self.grid_unit_meters = meters;
    }

    /// Adds a node, rejecting duplicate ids
    pub fn add_node(&mut self, node: Node) -> Result<NodeIndex, Error> {
        if self.index.contains_key(&node.id) {
            return Err(Error::InvalidData(format!("Duplicate node id {}", node.id)));
        }
        if !node.coordinates.in_bounds() {
            return Err(Error::InvalidData(format!(
                "Node {} lies outside the floor plan grid at ({}, {})",
                node.id, node.coordinates.x, node.coordinates.y
            )));
        }
        let id = node.id.clone();
        let idx = self.graph.add_node(node);
        self.index.insert(id, idx);
        Ok(idx)
    }

    /// Adds an edge, replacing any earlier edge between the same ordered pair.
    /// Returns `true` when an existing edge was replaced.
    pub fn add_edge(&mut self, edge: Edge) -> Result<bool, Error> {
        if edge.distance == 0 || edge.estimated_time == 0 {
            return Err(Error::InvalidData(format!(
                "Edge {} -> {} must have positive distance and time",
                edge.from, edge.to
            )));
        }
        let from = self.require_index(&edge.from)?;
        let to = self.require_index(&edge.to)?;

        let replaced = self.graph.find_edge(from, to).is_some();
        if replaced {
            log::warn!(
                "Edge {} -> {} defined more than once, keeping the last definition",
                edge.from,
                edge.to
            );
        }
        self.graph.update_edge(from, to, edge);
        Ok(replaced)
    }

    fn require_index(&self, id: &str) -> Result<NodeIndex, Error> {
        self.node_index(id)
            .ok_or_else(|| Error::InvalidData(format!("Edge references unknown node {id}")))
    }

    /// Graph index of a node, active or not
    pub fn node_index(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    pub fn node(&self, idx: NodeIndex) -> Option<&Node> {
        self.graph.node_weight(idx)
    }

    /// Node by id regardless of its active flag
    pub fn node_any(&self, id: &str) -> Option<&Node> {
        self.node_index(id).and_then(|idx| self.node(idx))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// All nodes in insertion order, including deactivated ones
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.graph.node_weights()
    }

    /// Outgoing edges of a node in the underlying graph
    pub fn edges(&self, idx: NodeIndex) -> impl Iterator<Item = EdgeReference<'_, Edge>> {
        self.graph.edges_directed(idx, Direction::Outgoing)
    }

    /// Published edge between an ordered pair of nodes
    pub fn edge(&self, from: &str, to: &str) -> Option<&Edge> {
        let from = self.node_index(from)?;
        let to = self.node_index(to)?;
        self.graph
            .find_edge(from, to)
            .and_then(|e| self.graph.edge_weight(e))
    }

    /// Outgoing edges of a node, sorted by target id
    pub fn outgoing_edges(&self, id: &str) -> Vec<&Edge> {
        let Some(idx) = self.node_index(id) else {
            return Vec::new();
        };
        let mut edges: Vec<&Edge> = self.edges(idx).map(|e| e.weight()).collect();
        edges.sort_by(|a, b| a.to.cmp(&b.to));
        edges
    }
}
