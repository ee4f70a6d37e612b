use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{DEFAULT_GRID_UNIT_METERS, DEFAULT_WALKING_SPEED, Meters};

/// Where the topology files live and how they are completed on load
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopologyConfig {
    /// Directory holding `nodes.csv`, `edges.csv`, `stores.csv` and an
    /// optional `promotions.csv`
    pub data_dir: PathBuf,
    /// Derive walking edges for adjacency pairs that have no published edge
    pub synthesize_missing_edges: bool,
    /// Meters per grid unit for derived edges and nearby searches. Set from
    /// the planner settings so both strategies measure alike.
    #[serde(skip, default = "default_grid_unit_meters")]
    pub grid_unit_meters: Meters,
    /// Meters per second for derived edge times
    #[serde(skip, default = "default_walking_speed")]
    pub walking_speed: f64,
}

fn default_grid_unit_meters() -> Meters {
    DEFAULT_GRID_UNIT_METERS
}

fn default_walking_speed() -> f64 {
    DEFAULT_WALKING_SPEED
}

impl Default for TopologyConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data/reference"),
            synthesize_missing_edges: true,
            grid_unit_meters: DEFAULT_GRID_UNIT_METERS,
            walking_speed: DEFAULT_WALKING_SPEED,
        }
    }
}

impl TopologyConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_metrics(mut self, grid_unit_meters: Meters, walking_speed: f64) -> Self {
        self.grid_unit_meters = grid_unit_meters;
        self.walking_speed = walking_speed;
        self
    }

    pub fn nodes_path(&self) -> PathBuf {
        self.data_dir.join("nodes.csv")
    }

    pub fn edges_path(&self) -> PathBuf {
        self.data_dir.join("edges.csv")
    }

    pub fn stores_path(&self) -> PathBuf {
        self.data_dir.join("stores.csv")
    }

    pub fn promotions_path(&self) -> PathBuf {
        self.data_dir.join("promotions.csv")
    }
}
