//! Direct-line routing
//!
//! Same-floor routes are the horizontal and vertical legs of the Manhattan
//! offset between the two nodes. Cross-floor routes walk to the first
//! escalator of the start floor, ride it to the configured landing node and
//! walk on from there. Walls, corridors and the published edges are not
//! consulted.

use log::debug;

use super::{PlannerConfig, RouteStep, StepDirection, grid_meters, step::StepList};
use crate::{
    Error,
    model::{Node, NodeKind, TopologyStore},
};

/// Steps from `start` to `destination` using the direct-line heuristic.
///
/// # Errors
///
/// Fails with [`Error::NoVerticalLink`] when a floor change is needed and the
/// start floor has no vertical-transport node, and with
/// [`Error::LandingUnresolved`] when the landing node is not in the store.
/// No steps are produced in either case.
pub fn plan_direct_line<S>(
    store: &S,
    config: &PlannerConfig,
    start: &Node,
    destination: &Node,
) -> Result<Vec<RouteStep>, Error>
where
    S: TopologyStore + ?Sized,
{
    if start.floor == destination.floor {
        same_floor_steps(config, start, destination)
    } else {
        cross_floor_steps(store, config, start, destination)
    }
}

fn same_floor_steps(
    config: &PlannerConfig,
    start: &Node,
    destination: &Node,
) -> Result<Vec<RouteStep>, Error> {
    let dx = i64::from(destination.coordinates.x) - i64::from(start.coordinates.x);
    let dy = i64::from(destination.coordinates.y) - i64::from(start.coordinates.y);
    let mut steps = StepList::default();

    if dx != 0 {
        let direction = if dx > 0 {
            StepDirection::Right
        } else {
            StepDirection::Left
        };
        push_leg(&mut steps, config, direction, dx.unsigned_abs(), destination)?;
    }

    if dy != 0 {
        let direction = if dy > 0 {
            StepDirection::Forward
        } else {
            StepDirection::Backward
        };
        push_leg(&mut steps, config, direction, dy.unsigned_abs(), destination)?;
    }

    if steps.is_empty() {
        push_arrival(&mut steps, destination);
    }

    Ok(steps.into_steps())
}

fn push_leg(
    steps: &mut StepList,
    config: &PlannerConfig,
    direction: StepDirection,
    grid_units: u64,
    destination: &Node,
) -> Result<(), Error> {
    let grid_units = u32::try_from(grid_units).map_err(|_| {
        Error::InvalidData(format!(
            "{grid_units} grid units to {} is out of range",
            destination.id
        ))
    })?;
    let distance = grid_meters(grid_units, config.grid_unit_meters)?;
    steps.push(
        format!("Walk {direction} {distance} meters"),
        direction,
        format!("Toward {}", destination.name),
        &destination.id,
        distance,
        config.walking_time(distance),
    );
    Ok(())
}

/// Single zero-length step for a walker already standing at the destination
pub(crate) fn push_arrival(steps: &mut StepList, destination: &Node) {
    steps.push(
        format!("You have arrived at {}", destination.name),
        StepDirection::Arrived,
        destination.name.clone(),
        &destination.id,
        0,
        0,
    );
}

fn cross_floor_steps<S>(
    store: &S,
    config: &PlannerConfig,
    start: &Node,
    destination: &Node,
) -> Result<Vec<RouteStep>, Error>
where
    S: TopologyStore + ?Sized,
{
    let escalator = store
        .find_nodes_by_floor_and_kind(start.floor, NodeKind::VerticalTransport)
        .into_iter()
        .next()
        .ok_or(Error::NoVerticalLink { floor: start.floor })?;

    let landing = store
        .resolve_node(&config.landing_node)
        .ok_or_else(|| Error::LandingUnresolved(config.landing_node.clone()))?;

    debug!(
        "Routing {} -> {} via escalator {} and landing {}",
        start.id, destination.id, escalator.id, landing.id
    );

    let mut steps = StepList::default();
    let floor_label = format!("Escalator to Floor {}", destination.floor);

    let to_escalator = config.grid_distance(start.coordinates, escalator.coordinates)?;
    steps.push(
        format!("Walk to escalator ({to_escalator}m)"),
        StepDirection::Straight,
        floor_label.clone(),
        &escalator.id,
        to_escalator,
        config.walking_time(to_escalator),
    );

    let ride_direction = if destination.floor > start.floor {
        StepDirection::Up
    } else {
        StepDirection::Down
    };
    steps.push(
        format!("Take escalator to Floor {}", destination.floor),
        ride_direction,
        floor_label,
        &landing.id,
        config.escalator_distance,
        config.escalator_time,
    );

    let to_destination = config.grid_distance(landing.coordinates, destination.coordinates)?;
    steps.push(
        format!("Walk to {} ({to_destination}m)", destination.name),
        StepDirection::Straight,
        destination.name.clone(),
        &destination.id,
        to_destination,
        config.walking_time(to_destination),
    );

    Ok(steps.into_steps())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Floor, model::GridPoint};

    /// Minimal store backed by a list, to exercise the planner without a graph
    struct NodeList(Vec<Node>);

    impl TopologyStore for NodeList {
        fn resolve_node(&self, id: &str) -> Option<&Node> {
            self.0.iter().find(|n| n.id == id && n.active)
        }

        fn find_nodes_by_floor_and_kind(&self, floor: Floor, kind: NodeKind) -> Vec<&Node> {
            self.0
                .iter()
                .filter(|n| n.active && n.floor == floor && n.kind == kind)
                .collect()
        }
    }

    fn node(id: &str, name: &str, floor: Floor, kind: NodeKind, x: i32, y: i32) -> Node {
        Node::new(id, name, floor, kind, GridPoint::new(x, y))
    }

    fn two_floors() -> NodeList {
        NodeList(vec![
            node("1E01", "Main Entrance", 1, NodeKind::Entrance, 5, 0),
            node("1S04", "Adidas", 1, NodeKind::Shop, 2, 6),
            node("1V01", "Main Escalator", 1, NodeKind::VerticalTransport, 5, 5),
            node("2E01", "Escalator Landing", 2, NodeKind::Entrance, 5, 5),
            node("2S01", "Food Court", 2, NodeKind::Shop, 8, 5),
            node("2S08", "Nail Salon", 2, NodeKind::Shop, 4, 2),
        ])
    }

    fn plan(store: &NodeList, from: &str, to: &str) -> Result<Vec<RouteStep>, Error> {
        let start = store.resolve_node(from).unwrap();
        let destination = store.resolve_node(to).unwrap();
        plan_direct_line(store, &PlannerConfig::default(), start, destination)
    }

    #[test]
    fn diagonal_offset_gives_two_legs() {
        let store = two_floors();
        let steps = plan(&store, "1E01", "1S04").unwrap();

        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].direction, StepDirection::Left);
        assert_eq!(steps[0].distance, 15);
        assert_eq!(steps[0].instruction, "Walk left 15 meters");
        assert_eq!(steps[1].direction, StepDirection::Forward);
        assert_eq!(steps[1].distance, 30);
        assert_eq!(steps[1].landmark, "Toward Adidas");
        assert!(steps.iter().all(|s| s.checkpoint == "1S04"));
        assert_eq!(steps.iter().map(|s| s.distance).sum::<u32>(), (3 + 6) * 5);
    }

    #[test]
    fn negative_offsets_walk_left_and_backward() {
        let store = two_floors();
        let steps = plan(&store, "1S04", "1E01").unwrap();
        assert_eq!(steps[0].direction, StepDirection::Right);
        assert_eq!(steps[1].direction, StepDirection::Backward);
        assert_eq!(steps[1].estimated_time, 22);
    }

    #[test]
    fn same_node_arrives_immediately() {
        let store = two_floors();
        let steps = plan(&store, "2S01", "2S01").unwrap();
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].direction, StepDirection::Arrived);
        assert_eq!(steps[0].distance, 0);
        assert_eq!(steps[0].estimated_time, 0);
        assert_eq!(steps[0].instruction, "You have arrived at Food Court");
    }

    #[test]
    fn floor_change_uses_escalator_and_landing() {
        let store = two_floors();
        let steps = plan(&store, "1E01", "2S01").unwrap();

        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].checkpoint, "1V01");
        assert_eq!(steps[0].distance, 25);
        assert_eq!(steps[0].estimated_time, 18);
        assert_eq!(steps[0].instruction, "Walk to escalator (25m)");
        assert_eq!(steps[1].direction, StepDirection::Up);
        assert_eq!((steps[1].distance, steps[1].estimated_time), (30, 25));
        assert_eq!(steps[1].checkpoint, "2E01");
        assert_eq!(steps[2].checkpoint, "2S01");
        assert_eq!(steps[2].distance, 15);
        assert_eq!(steps[2].estimated_time, 11);
        assert_eq!(steps[2].instruction, "Walk to Food Court (15m)");
    }

    #[test]
    fn missing_escalator_fails_before_any_step() {
        let mut store = two_floors();
        store.0.retain(|n| n.id != "1V01");
        assert!(matches!(
            plan(&store, "1E01", "2S01"),
            Err(Error::NoVerticalLink { floor: 1 })
        ));
    }

    #[test]
    fn missing_landing_is_reported() {
        let mut store = two_floors();
        store.0.retain(|n| n.id != "2E01");
        match plan(&store, "1E01", "2S08") {
            Err(Error::LandingUnresolved(id)) => assert_eq!(id, "2E01"),
            other => panic!("expected LandingUnresolved, got {other:?}"),
        }
    }
}
