use crate::{
    Error,
    model::{Node, NodeKind, TopologyStore},
};

/// Closest entrance on the same floor as `node_id`, by grid Manhattan distance.
/// The first entrance in topology order wins ties.
///
/// # Errors
///
/// [`Error::NotFound`] when the node is unknown or its floor has no entrance.
pub fn nearest_exit<'a, S>(store: &'a S, node_id: &str) -> Result<&'a Node, Error>
where
    S: TopologyStore + ?Sized,
{
    let location = store
        .resolve_node(node_id)
        .ok_or_else(|| Error::not_found("Location", node_id))?;

    store
        .find_nodes_by_floor_and_kind(location.floor, NodeKind::Entrance)
        .into_iter()
        .min_by_key(|exit| location.coordinates.manhattan(&exit.coordinates))
        .ok_or_else(|| Error::not_found("Exit", node_id))
}
