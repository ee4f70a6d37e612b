//! TOML configuration
//!
//! ```toml
//! [topology]
//! data_dir = "data/reference"
//! synthesize_missing_edges = true
//!
//! [planner]
//! strategy = "graph"
//! cost_metric = "time"
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use mallnav_core::{PlannerConfig, TopologyConfig};
use serde::{Deserialize, Serialize};
use tracing::info;

/// File picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "mallnav.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub topology: TopologyConfig,
    pub planner: PlannerConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Explicit file, else `./mallnav.toml` if it exists, else defaults
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            info!("Loading configuration from {}", path.display());
            return Self::load(path);
        }

        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.exists() {
            info!("Loading configuration from {DEFAULT_CONFIG_FILE}");
            Self::load(local)
        } else {
            info!("Using default configuration");
            Ok(Self::default())
        }
    }

    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = data_dir {
            self.topology.data_dir = dir;
        }
        self
    }
}
