use hashbrown::HashSet;
use log::{debug, warn};

use crate::{
    Error, Meters,
    model::{Edge, EdgeDirection, Node, Topology},
    routing::{grid_meters, walking_time},
};

/// Adds derived walking edges for declared neighbour pairs. Neighbourhood is
/// symmetric: a pair listed by either node gets an edge in each direction
/// that has no published edge. Distances use the topology's grid unit.
/// Returns the number of edges added.
pub(crate) fn synthesize_missing_edges(
    topology: &mut Topology,
    walking_speed: f64,
) -> Result<usize, Error> {
    let unit = topology.grid_unit_meters();
    let missing = {
        let mut seen: HashSet<(&str, &str)> = HashSet::new();
        let mut missing = Vec::new();
        for node in topology.nodes() {
            for neighbour_id in &node.adjacency {
                let Some(neighbour) = topology.node_any(neighbour_id) else {
                    warn!("Node {} lists unknown neighbour {neighbour_id}", node.id);
                    continue;
                };
                if neighbour.id == node.id {
                    continue;
                }
                for (from, to) in [(node, neighbour), (neighbour, node)] {
                    if seen.insert((from.id.as_str(), to.id.as_str()))
                        && topology.edge(&from.id, &to.id).is_none()
                    {
                        missing.push(derived_edge(from, to, unit, walking_speed)?);
                    }
                }
            }
        }
        missing
    };

    let added = missing.len();
    for edge in missing {
        debug!("Derived edge {} -> {} ({}m)", edge.from, edge.to, edge.distance);
        topology.add_edge(edge)?;
    }
    Ok(added)
}

fn derived_edge(
    from: &Node,
    to: &Node,
    grid_unit_meters: Meters,
    walking_speed: f64,
) -> Result<Edge, Error> {
    let grid_units = from.coordinates.manhattan(&to.coordinates);
    let distance = grid_meters(grid_units, grid_unit_meters)?.max(1);
    let time = walking_time(distance, walking_speed).max(1);

    let dx = i64::from(to.coordinates.x) - i64::from(from.coordinates.x);
    let dy = i64::from(to.coordinates.y) - i64::from(from.coordinates.y);
    let direction = if from.floor != to.floor {
        if to.floor > from.floor {
            EdgeDirection::Up
        } else {
            EdgeDirection::Down
        }
    } else if dx.abs() > dy.abs() {
        if dx > 0 {
            EdgeDirection::Right
        } else {
            EdgeDirection::Left
        }
    } else {
        EdgeDirection::Straight
    };

    let edge = Edge::new(
        from.id.clone(),
        to.id.clone(),
        distance,
        time,
        direction,
        format!("Walk to {}", to.name),
    );
    Ok(if from.floor == to.floor {
        edge
    } else {
        edge.changing_floor()
    })
}
