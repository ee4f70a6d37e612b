use chrono::Utc;
use log::{debug, info};
use uuid::Uuid;

use super::{
    PlanOptions, PlannerConfig, RouteResult, RouteStrategy, direct_line::plan_direct_line,
    exit::nearest_exit, graph_route::plan_graph,
};
use crate::{
    Error, Topology,
    model::{Node, TopologyStore},
};

/// Plans walking routes over a borrowed topology
#[derive(Debug, Clone)]
pub struct RoutePlanner<'a> {
    topology: &'a Topology,
    config: PlannerConfig,
}

impl<'a> RoutePlanner<'a> {
    pub fn new(topology: &'a Topology, config: PlannerConfig) -> Self {
        Self { topology, config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn topology(&self) -> &'a Topology {
        self.topology
    }

    /// Computes the route from `start_id` to `destination_id`.
    ///
    /// Either a complete route is returned or an error, never a partial
    /// step list. Every call gets a fresh session id.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidData`] for unusable planner settings or a route whose
    /// totals overflow, [`Error::NotFound`] when either id does not name an
    /// active node, plus the strategy-specific failures of
    /// [`plan_direct_line`] and the graph search.
    pub fn plan_route(
        &self,
        start_id: &str,
        destination_id: &str,
        options: &PlanOptions,
    ) -> Result<RouteResult, Error> {
        self.config.validate()?;
        let start = self.resolve(start_id, "Start location")?;
        let destination = self.resolve(destination_id, "Destination location")?;

        if options.accessibility_needed {
            debug!("Accessibility routing requested but not supported, planning default route");
        }

        let steps = match self.config.strategy {
            RouteStrategy::DirectLine => {
                plan_direct_line(self.topology, &self.config, start, destination)?
            }
            RouteStrategy::Graph => plan_graph(self.topology, &self.config, start, destination)?,
        };

        let route = RouteResult::new(generate_session_id(), start_id, destination_id, steps)?;
        info!(
            "Planned {} route {} -> {}: {} steps, {}m, {}s",
            self.config.strategy,
            start_id,
            destination_id,
            route.step_count(),
            route.total_distance,
            route.total_time
        );
        Ok(route)
    }

    /// Closest same-floor entrance for emergency evacuation
    pub fn nearest_exit(&self, node_id: &str) -> Result<&'a Node, Error> {
        nearest_exit(self.topology, node_id)
    }

    fn resolve(&self, id: &str, what: &'static str) -> Result<&'a Node, Error> {
        self.topology
            .resolve_node(id)
            .ok_or_else(|| Error::not_found(what, id))
    }
}

/// `nav_<unix millis>_<9 random characters>`
fn generate_session_id() -> String {
    let random = Uuid::new_v4().simple().to_string();
    format!("nav_{}_{}", Utc::now().timestamp_millis(), &random[..9])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GridPoint, NodeKind};

    fn topology() -> Topology {
        let mut topology = Topology::new();
        topology
            .add_node(Node::new("1E01", "Entrance", 1, NodeKind::Entrance, GridPoint::new(5, 0)))
            .unwrap();
        topology
            .add_node(Node::new("1I01", "Info", 1, NodeKind::Intersection, GridPoint::new(5, 2)))
            .unwrap();
        topology
            .add_node(
                Node::new("1S99", "Closed", 1, NodeKind::Shop, GridPoint::new(1, 1)).deactivated(),
            )
            .unwrap();
        topology
    }

    #[test]
    fn unknown_or_inactive_nodes_are_not_found() {
        let topology = topology();
        let planner = RoutePlanner::new(&topology, PlannerConfig::default());

        match planner.plan_route("XXXX", "1I01", &PlanOptions::default()) {
            Err(Error::NotFound { what, id }) => {
                assert_eq!(what, "Start location");
                assert_eq!(id, "XXXX");
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
        assert!(matches!(
            planner.plan_route("1E01", "1S99", &PlanOptions::default()),
            Err(Error::NotFound {
                what: "Destination location",
                ..
            })
        ));
    }

    #[test]
    fn session_ids_differ_between_calls() {
        let topology = topology();
        let planner = RoutePlanner::new(&topology, PlannerConfig::default());
        let options = PlanOptions {
            accessibility_needed: true,
        };

        let first = planner.plan_route("1E01", "1I01", &options).unwrap();
        let second = planner.plan_route("1E01", "1I01", &options).unwrap();

        assert_ne!(first.session_id, second.session_id);
        assert!(first.session_id.starts_with("nav_"));
        assert_eq!(first.steps, second.steps);
        assert_eq!(first.total_distance, 10);
        assert_eq!(first.total_time, 8);
    }

    #[test]
    fn unusable_settings_fail_instead_of_panicking() {
        let mut topology = topology();
        topology
            .add_node(Node::new("1S01", "Far", 1, NodeKind::Shop, GridPoint::new(8, 6)))
            .unwrap();

        let stalled = PlannerConfig {
            walking_speed: 0.0,
            ..PlannerConfig::default()
        };
        let planner = RoutePlanner::new(&topology, stalled);
        assert!(matches!(
            planner.plan_route("1E01", "1S01", &PlanOptions::default()),
            Err(Error::InvalidData(_))
        ));

        let huge_grid = PlannerConfig {
            grid_unit_meters: u32::MAX,
            ..PlannerConfig::default()
        };
        let planner = RoutePlanner::new(&topology, huge_grid);
        assert!(matches!(
            planner.plan_route("1E01", "1S01", &PlanOptions::default()),
            Err(Error::InvalidData(_))
        ));
    }

    #[test]
    fn far_apart_nodes_fail_cleanly() {
        let mut topology = Topology::new();
        let west = GridPoint::new(-1_000_000, -1_000_000);
        let east = GridPoint::new(1_000_000, 1_000_000);
        topology
            .add_node(Node::new("1W01", "West", 1, NodeKind::Entrance, west))
            .unwrap();
        topology
            .add_node(Node::new("1E01", "East", 1, NodeKind::Entrance, east))
            .unwrap();

        let planner = RoutePlanner::new(&topology, PlannerConfig::default());
        // two legs of 2,000,000 grid units each
        let route = planner
            .plan_route("1W01", "1E01", &PlanOptions::default())
            .unwrap();
        assert_eq!(route.total_distance, 20_000_000);

        let wide = PlannerConfig {
            grid_unit_meters: 3_000,
            ..PlannerConfig::default()
        };
        let planner = RoutePlanner::new(&topology, wide);
        assert!(matches!(
            planner.plan_route("1W01", "1E01", &PlanOptions::default()),
            Err(Error::InvalidData(_))
        ));
    }
}
