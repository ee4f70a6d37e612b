//! Command handlers
//!
//! Each handler prints exactly one JSON document per line to `out` and
//! returns whether the command succeeded. Domain failures such as an unknown
//! QR code become a failure envelope; only setup problems are `Err`.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::Utc;
use mallnav_core::{
    Error as CoreError, MallModel, NavigationSession, PlanOptions, PlannerConfig, RoutePlanner,
    RouteStrategy, StoreFilter, create_mall_model,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::{
    cli::Commands,
    config::AppConfig,
    payload::{
        Envelope, ExitBody, Failure, LocateBody, LocationSummary, RouteBody, RouteSummary,
        WalkProgress,
    },
};

/// Loaded building plus planner settings
#[derive(Debug)]
pub struct App {
    model: MallModel,
    planner: PlannerConfig,
}

impl App {
    pub fn new(model: MallModel, planner: PlannerConfig) -> Self {
        Self { model, planner }
    }

    pub fn load(config: AppConfig) -> Result<Self> {
        config
            .planner
            .validate()
            .context("Invalid [planner] configuration")?;
        let topology = config
            .topology
            .clone()
            .with_metrics(config.planner.grid_unit_meters, config.planner.walking_speed);
        let model = create_mall_model(&topology).with_context(|| {
            format!(
                "Failed to load building data from {}",
                config.topology.data_dir.display()
            )
        })?;
        info!("{model}");
        Ok(Self::new(model, config.planner))
    }

    pub fn model(&self) -> &MallModel {
        &self.model
    }

    pub fn run(&self, command: Commands, out: &mut impl Write) -> Result<bool> {
        debug!("Running {command:?}");
        match command {
            Commands::Route {
                start,
                destination,
                accessible,
                strategy,
            } => self.route(&start, &destination, accessible, strategy, out),
            Commands::Exit { location } => self.exit(&location, out),
            Commands::Walk {
                start,
                destination,
                scans,
                strategy,
            } => self.walk(&start, &destination, &scans, strategy, out),
            Commands::Locate { qr_id, nearby } => self.locate(&qr_id, nearby, out),
            Commands::Stores {
                floor,
                category,
                search,
                promotions,
            } => {
                let filter = StoreFilter {
                    floor,
                    category,
                    search,
                };
                self.stores(filter, promotions, out)
            }
        }
    }

    fn planner(&self, strategy: Option<RouteStrategy>) -> RoutePlanner<'_> {
        let mut config = self.planner.clone();
        if let Some(strategy) = strategy {
            config.strategy = strategy;
        }
        RoutePlanner::new(&self.model.topology, config)
    }

    fn route(
        &self,
        start: &str,
        destination: &str,
        accessible: bool,
        strategy: Option<RouteStrategy>,
        out: &mut impl Write,
    ) -> Result<bool> {
        let options = PlanOptions {
            accessibility_needed: accessible,
        };
        match self.planner(strategy).plan_route(start, destination, &options) {
            Ok(route) => {
                let body = RouteBody {
                    route: RouteSummary::from(&route),
                };
                emit(out, &Envelope::ok(body))?;
                Ok(true)
            }
            Err(e) => fail_with(out, &e),
        }
    }

    fn exit(&self, location: &str, out: &mut impl Write) -> Result<bool> {
        match self.planner(None).nearest_exit(location) {
            Ok(exit) => {
                let body = ExitBody {
                    emergency_exit: LocationSummary::brief(exit),
                };
                emit(out, &Envelope::ok(body))?;
                Ok(true)
            }
            Err(e) => {
                debug!("No exit for {location}: {e}");
                fail(out, "No exit found")
            }
        }
    }

    fn walk(
        &self,
        start: &str,
        destination: &str,
        scans: &[String],
        strategy: Option<RouteStrategy>,
        out: &mut impl Write,
    ) -> Result<bool> {
        let route = match self
            .planner(strategy)
            .plan_route(start, destination, &PlanOptions::default())
        {
            Ok(route) => route,
            Err(e) => return fail_with(out, &e),
        };

        let mut session = NavigationSession::start(route);
        for scan in scans {
            let (next, result) = session.validate_checkpoint(scan);
            emit(out, &result)?;
            session = next;
        }

        let stats = session.stats(Utc::now());
        emit(out, &Envelope::ok(WalkProgress::new(&session, stats)))?;
        Ok(true)
    }

    fn locate(&self, qr_id: &str, nearby: Option<u32>, out: &mut impl Write) -> Result<bool> {
        let topology = &self.model.topology;
        let node = match topology.validate_qr(qr_id) {
            Ok(node) => node,
            Err(e) => return fail_with(out, &e),
        };

        let nearby_locations = match nearby {
            Some(max) => Some(
                topology
                    .nearby_nodes(qr_id, max)?
                    .into_iter()
                    .map(LocationSummary::brief)
                    .collect(),
            ),
            None => None,
        };
        let body = LocateBody {
            location: LocationSummary::full(node),
            nearby_locations,
        };
        emit(out, &Envelope::ok(body))?;
        Ok(true)
    }

    fn stores(&self, filter: StoreFilter, promotions: bool, out: &mut impl Write) -> Result<bool> {
        let directory = &self.model.directory;
        let mut listing = directory.stores(&filter);
        if promotions {
            let today = Utc::now().date_naive();
            listing
                .stores
                .retain(|store| store.has_running_promotion(today));
            listing.total = listing.stores.len();
        }
        emit(out, &Envelope::ok(listing))?;
        Ok(true)
    }
}

fn emit(out: &mut impl Write, value: &impl Serialize) -> Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn fail(out: &mut impl Write, error: impl ToString) -> Result<bool> {
    emit(out, &Failure::new(error))?;
    Ok(false)
}

fn fail_with(out: &mut impl Write, error: &CoreError) -> Result<bool> {
    debug!("Request failed: {error}");
    fail(out, error.client_message())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use mallnav_core::TopologyConfig;
    use serde_json::Value;

    use super::*;

    fn app() -> App {
        let data_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/reference");
        App::load(AppConfig {
            topology: TopologyConfig::new(data_dir),
            ..AppConfig::default()
        })
        .unwrap()
    }

    fn run(app: &App, command: Commands) -> (bool, Vec<Value>) {
        let mut out = Vec::new();
        let ok = app.run(command, &mut out).unwrap();
        let lines = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        (ok, lines)
    }

    #[test]
    fn route_prints_envelope() {
        let (ok, lines) = run(
            &app(),
            Commands::Route {
                start: "1E01".into(),
                destination: "2S01".into(),
                accessible: false,
                strategy: None,
            },
        );
        assert!(ok);
        assert_eq!(lines.len(), 1);
        let route = &lines[0]["route"];
        assert_eq!(route["total_distance"], "70m");
        assert_eq!(route["estimated_time"], "1 minutes");
        assert_eq!(route["steps"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn route_failure_is_not_an_error() {
        let (ok, lines) = run(
            &app(),
            Commands::Route {
                start: "XXXX".into(),
                destination: "2S01".into(),
                accessible: false,
                strategy: Some(RouteStrategy::Graph),
            },
        );
        assert!(!ok);
        assert_eq!(lines[0]["success"], false);
        assert_eq!(lines[0]["error"], "Start location not found");
    }

    #[test]
    fn unusable_planner_settings_are_rejected_on_load() {
        let data_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/reference");
        let mut config = AppConfig {
            topology: TopologyConfig::new(data_dir),
            ..AppConfig::default()
        };
        config.planner.walking_speed = 0.0;

        let err = App::load(config).unwrap_err();
        assert!(format!("{err:#}").contains("walking_speed"));
    }

    #[test]
    fn planner_grid_unit_reaches_the_topology() {
        let data_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/reference");
        let mut config = AppConfig {
            topology: TopologyConfig::new(data_dir),
            ..AppConfig::default()
        };
        config.planner.grid_unit_meters = 2;

        let app = App::load(config).unwrap();
        assert_eq!(app.model().topology.grid_unit_meters(), 2);
    }

    #[test]
    fn walk_prints_one_line_per_scan() {
        let (ok, lines) = run(
            &app(),
            Commands::Walk {
                start: "1E01".into(),
                destination: "2S01".into(),
                scans: vec!["1V01".into(), "ZZZZ".into(), "2E01".into(), "2S01".into()],
                strategy: None,
            },
        );
        assert!(ok);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[1]["success"], false);
        assert_eq!(lines[3]["isDestination"], true);
        assert_eq!(lines[4]["state"], "completed");
        assert_eq!(lines[4]["progress"], 100);
    }

    #[test]
    fn locate_with_neighbours() {
        let (ok, lines) = run(
            &app(),
            Commands::Locate {
                qr_id: "1I02".into(),
                nearby: Some(5),
            },
        );
        assert!(ok);
        assert_eq!(lines[0]["location"]["name"], "Central Plaza");
        assert_eq!(lines[0]["location"]["type"], "intersection");
        assert!(!lines[0]["nearby_locations"].as_array().unwrap().is_empty());
    }
}
