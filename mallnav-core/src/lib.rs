//! Indoor mall navigation core.
//!
//! Holds the building topology (nodes, directed edges, store records),
//! plans walking routes between QR-tagged nodes and tracks an in-progress
//! walk as the visitor scans checkpoints along the way.

pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;
pub mod tracking;

pub use error::Error;
pub use loading::{TopologyConfig, create_mall_model, create_topology};
pub use model::{
    Edge, EdgeDirection, GridPoint, MallModel, Node, NodeKind, Store, StoreDirectory, StoreFilter,
    StoreListing, Topology, TopologyStore,
};
pub use routing::{
    CostMetric, PlanOptions, PlannerConfig, RoutePlanner, RouteResult, RouteStep, RouteStrategy,
    StepDirection,
};
pub use tracking::{CheckpointOutcome, CheckpointResult, NavigationSession, SessionState};

/// Floor number, starting from 1
pub type Floor = u8;
/// Distance in meters
pub type Meters = u32;
/// Duration in seconds
pub type Seconds = u32;

/// Length of one grid unit of the floor plan in meters
pub const DEFAULT_GRID_UNIT_METERS: Meters = 5;
/// Average walking speed in meters per second
pub const DEFAULT_WALKING_SPEED: f64 = 1.4;
