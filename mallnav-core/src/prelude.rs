pub use crate::{DEFAULT_GRID_UNIT_METERS, DEFAULT_WALKING_SPEED};

// Re-export key components
pub use crate::loading::{TopologyConfig, create_mall_model, create_topology};
pub use crate::model::{
    Edge, EdgeDirection, GridPoint, MallModel, Node, NodeKind, OperatingHours, Promotion, Store,
    StoreDirectory, StoreFilter, StoreListing, Topology, TopologyStore,
};
pub use crate::routing::{
    CostMetric, PlanOptions, PlannerConfig, RoutePlanner, RouteResult, RouteStep, RouteStrategy,
    StepDirection, nearest_exit, plan_direct_line,
};
pub use crate::tracking::{
    CheckpointOutcome, CheckpointResult, NavigationSession, SessionState, SessionStats,
    validate_checkpoint,
};

pub use crate::Error;

// Core unit types
pub use crate::Floor;
pub use crate::Meters;
pub use crate::Seconds;
