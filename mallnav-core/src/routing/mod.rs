//! Route planning between topology nodes

mod config;
mod dijkstra;
mod direct_line;
mod exit;
mod graph_route;
mod planner;
mod step;

pub(crate) use config::{grid_meters, validate_metrics, walking_time};
pub use config::{CostMetric, PlannerConfig, RouteStrategy};
pub use direct_line::plan_direct_line;
pub use exit::nearest_exit;
pub use planner::RoutePlanner;
pub use step::{PlanOptions, RouteResult, RouteStep, StepDirection};
