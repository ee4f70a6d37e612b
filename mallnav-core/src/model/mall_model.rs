use std::fmt;

use super::{StoreDirectory, Topology};

/// Everything known about one building: its walking graph and its stores
#[derive(Debug, Clone, Default)]
pub struct MallModel {
    pub topology: Topology,
    pub directory: StoreDirectory,
}

impl MallModel {
    pub fn new(topology: Topology, directory: StoreDirectory) -> Self {
        Self {
            topology,
            directory,
        }
    }

    pub fn node_count(&self) -> usize {
        self.topology.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.topology.edge_count()
    }

    pub fn store_count(&self) -> usize {
        self.directory.len()
    }
}

impl fmt::Display for MallModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MallModel with {} nodes, {} edges and {} stores",
            self.node_count(),
            self.edge_count(),
            self.store_count()
        )
    }
}
