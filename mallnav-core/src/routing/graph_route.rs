//! Shortest-path routing over the published edges
//!
//! Each traversed edge becomes one step carrying the edge's own instruction,
//! direction and landmarks. Escalator links are ordinary edges here, so any
//! number of floors is handled without a fixed landing node.

use log::debug;

use super::{
    PlannerConfig, RouteStep,
    dijkstra::{WalkingPath, dijkstra_path},
    direct_line::push_arrival,
    step::StepList,
};
use crate::{
    Error, Topology,
    model::{Node, NodeKind, TopologyStore},
};

/// Steps along the cheapest edge path from `start` to `destination`.
///
/// # Errors
///
/// [`Error::NoVerticalLink`] when floors differ and the start floor has no
/// vertical-transport node, [`Error::NoRoute`] for any other unreachable
/// destination.
pub(crate) fn plan_graph(
    topology: &Topology,
    config: &PlannerConfig,
    start: &Node,
    destination: &Node,
) -> Result<Vec<RouteStep>, Error> {
    if start.id == destination.id {
        let mut steps = StepList::default();
        push_arrival(&mut steps, destination);
        return Ok(steps.into_steps());
    }

    let (Some(from), Some(to)) = (
        topology.node_index(&start.id),
        topology.node_index(&destination.id),
    ) else {
        return Err(no_route(start, destination));
    };

    let path = dijkstra_path(topology, from, to, config.cost_metric).ok_or_else(|| {
        if start.floor != destination.floor
            && topology
                .find_nodes_by_floor_and_kind(start.floor, NodeKind::VerticalTransport)
                .is_empty()
        {
            Error::NoVerticalLink { floor: start.floor }
        } else {
            no_route(start, destination)
        }
    })?;

    debug!(
        "Graph route {} -> {} over {} edges, cost {}",
        start.id,
        destination.id,
        path.nodes().len() - 1,
        path.cost()
    );

    steps_from_path(topology, &path).ok_or_else(|| no_route(start, destination))
}

fn steps_from_path(topology: &Topology, path: &WalkingPath) -> Option<Vec<RouteStep>> {
    let mut steps = StepList::default();

    for pair in path.nodes().windows(2) {
        let from = topology.node(pair[0])?;
        let to = topology.node(pair[1])?;
        let edge = topology.edge(&from.id, &to.id)?;

        let landmark = if edge.landmarks.is_empty() {
            format!("Toward {}", to.name)
        } else {
            edge.landmarks.join(", ")
        };

        steps.push(
            edge.instruction.clone(),
            edge.direction.into(),
            landmark,
            &to.id,
            edge.distance,
            edge.estimated_time,
        );
    }

    Some(steps.into_steps())
}

fn no_route(start: &Node, destination: &Node) -> Error {
    Error::NoRoute {
        from: start.id.clone(),
        to: destination.id.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::{Edge, EdgeDirection, GridPoint},
        routing::{CostMetric, StepDirection},
    };

    fn building() -> Topology {
        let mut topology = Topology::new();
        let nodes = [
            Node::new("1E01", "Entrance", 1, NodeKind::Entrance, GridPoint::new(5, 0)),
            Node::new("1I01", "Info Desk", 1, NodeKind::Intersection, GridPoint::new(5, 2)),
            Node::new("1V01", "Escalator", 1, NodeKind::VerticalTransport, GridPoint::new(5, 5)),
            Node::new("2V01", "Escalator", 2, NodeKind::VerticalTransport, GridPoint::new(5, 5)),
            Node::new("2I01", "Hub", 2, NodeKind::Intersection, GridPoint::new(5, 4)),
            Node::new("3I01", "Roof", 3, NodeKind::Intersection, GridPoint::new(0, 0)),
        ];
        for node in nodes {
            topology.add_node(node).unwrap();
        }
        let edges = [
            Edge::new("1E01", "1I01", 25, 18, EdgeDirection::Straight, "Walk to Info Desk")
                .with_landmarks(["Information Desk on your right"]),
            Edge::new("1I01", "1V01", 15, 11, EdgeDirection::Straight, "Walk to escalator"),
            Edge::new("1V01", "2V01", 30, 25, EdgeDirection::Up, "Take escalator up")
                .changing_floor(),
            Edge::new("2V01", "2I01", 5, 4, EdgeDirection::Left, "Turn left to Hub"),
        ];
        for edge in edges {
            topology.add_edge(edge).unwrap();
        }
        topology
    }

    fn plan(topology: &Topology, from: &str, to: &str) -> Result<Vec<RouteStep>, Error> {
        let config = PlannerConfig {
            cost_metric: CostMetric::Distance,
            ..PlannerConfig::default()
        };
        let start = topology.resolve_node(from).unwrap();
        let destination = topology.resolve_node(to).unwrap();
        plan_graph(topology, &config, start, destination)
    }

    #[test]
    fn one_step_per_edge_across_floors() {
        let topology = building();
        let steps = plan(&topology, "1E01", "2I01").unwrap();

        let checkpoints: Vec<&str> = steps.iter().map(|s| s.checkpoint.as_str()).collect();
        assert_eq!(checkpoints, ["1I01", "1V01", "2V01", "2I01"]);
        assert_eq!(steps[0].landmark, "Information Desk on your right");
        assert_eq!(steps[1].landmark, "Toward Escalator");
        assert_eq!(steps[2].direction, StepDirection::Up);
        assert_eq!(steps[3].direction, StepDirection::Left);
        assert_eq!(steps.iter().map(|s| s.distance).sum::<u32>(), 75);
    }

    #[test]
    fn unreachable_node_is_no_route() {
        let topology = building();
        assert!(matches!(
            plan(&topology, "2I01", "1E01"),
            Err(Error::NoRoute { .. })
        ));
    }

    #[test]
    fn floor_without_vertical_link_is_reported() {
        let topology = building();
        assert!(matches!(
            plan(&topology, "3I01", "1E01"),
            Err(Error::NoVerticalLink { floor: 3 })
        ));
    }

    #[test]
    fn start_is_destination() {
        let topology = building();
        let steps = plan(&topology, "1I01", "1I01").unwrap();
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].direction, StepDirection::Arrived);
    }
}
