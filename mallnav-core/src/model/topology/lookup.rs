//! Point lookups over the topology

use itertools::Itertools;

use super::{Node, NodeKind, Topology};
use crate::{Error, Floor, Meters};

/// Read access the route planner needs from a topology.
///
/// Both methods only ever report active nodes.
pub trait TopologyStore {
    /// Active node by its QR id
    fn resolve_node(&self, id: &str) -> Option<&Node>;

    /// Active nodes on `floor` of the given kind, in topology order
    fn find_nodes_by_floor_and_kind(&self, floor: Floor, kind: NodeKind) -> Vec<&Node>;
}

impl TopologyStore for Topology {
    fn resolve_node(&self, id: &str) -> Option<&Node> {
        self.node_any(id).filter(|node| node.active)
    }

    fn find_nodes_by_floor_and_kind(&self, floor: Floor, kind: NodeKind) -> Vec<&Node> {
        self.active_nodes()
            .filter(|node| node.floor == floor && node.kind == kind)
            .collect()
    }
}

impl Topology {
    pub fn active_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes().filter(|node| node.active)
    }

    /// Resolves a scanned QR code to its location
    pub fn validate_qr(&self, id: &str) -> Result<&Node, Error> {
        self.resolve_node(id)
            .ok_or_else(|| Error::not_found("Invalid QR code or location", id))
    }

    /// Active nodes on a floor ordered by grid position
    pub fn nodes_on_floor(&self, floor: Floor) -> Vec<&Node> {
        self.active_nodes()
            .filter(|node| node.floor == floor)
            .sorted_by_key(|node| (node.coordinates.x, node.coordinates.y))
            .collect()
    }

    /// Active nodes of a kind ordered by floor and grid position
    pub fn nodes_of_kind(&self, kind: NodeKind) -> Vec<&Node> {
        self.active_nodes()
            .filter(|node| node.kind == kind)
            .sorted_by_key(|node| position_key(node))
            .collect()
    }

    /// All active nodes ordered by floor and grid position
    pub fn all_nodes(&self) -> Vec<&Node> {
        self.active_nodes()
            .sorted_by_key(|node| position_key(node))
            .collect()
    }

    /// Other active nodes within `max_distance` meters, closest first.
    ///
    /// Distance is the grid Manhattan distance in the topology's grid unit
    /// and ignores floors.
    pub fn nearby_nodes(&self, id: &str, max_distance: Meters) -> Result<Vec<&Node>, Error> {
        let origin = self
            .resolve_node(id)
            .ok_or_else(|| Error::not_found("Location", id))?;
        let unit = self.grid_unit_meters();
        let distance_to =
            |node: &Node| origin.coordinates.manhattan(&node.coordinates).saturating_mul(unit);

        Ok(self
            .all_nodes()
            .into_iter()
            .filter(|node| node.id != origin.id && distance_to(node) <= max_distance)
            .sorted_by_key(|node| distance_to(node))
            .collect())
    }
}

fn position_key(node: &Node) -> (Floor, i32, i32) {
    (node.floor, node.coordinates.x, node.coordinates.y)
}
