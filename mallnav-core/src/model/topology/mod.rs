//! Building graph - QR-tagged nodes connected by walking links

pub mod components;
pub mod lookup;
pub mod network;

pub use components::{Edge, EdgeDirection, GridPoint, MAX_GRID_COORDINATE, Node, NodeKind};
pub use lookup::TopologyStore;
pub use network::Topology;
