//! Data model for indoor navigation
//!
//! Contains types and structures for representing a mall building.

pub mod mall_model;
pub mod stores;
pub mod topology;

// Re-export of the main model structure
pub use mall_model::MallModel;

// Re-export of basic types for convenience
pub use stores::{OperatingHours, Promotion, Store, StoreDirectory, StoreFilter, StoreListing};
pub use topology::{Edge, EdgeDirection, GridPoint, Node, NodeKind, Topology, TopologyStore};
