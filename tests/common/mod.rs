//! Shared helpers for the CLI integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use assert_cmd::Command;
pub use tempfile::TempDir;

/// Building data shipped with the repository
pub fn reference_data() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/reference")
}

/// A scratch working directory, so no stray `mallnav.toml` is picked up.
pub struct TestEnv {
    pub work_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            work_dir: TempDir::new().unwrap(),
        }
    }

    /// `mallnav` running in the scratch directory against the reference data
    pub fn mallnav(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_mallnav"));
        cmd.current_dir(self.work_dir.path());
        cmd.env_remove("MALLNAV_CONFIG");
        cmd.env("MALLNAV_DATA", reference_data());
        cmd
    }

    /// `mallnav` without a data directory override
    pub fn mallnav_bare(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_mallnav"));
        cmd.current_dir(self.work_dir.path());
        cmd.env_remove("MALLNAV_CONFIG");
        cmd.env_remove("MALLNAV_DATA");
        cmd
    }

    pub fn path(&self) -> &std::path::Path {
        self.work_dir.path()
    }
}

/// Parses every stdout line as JSON
pub fn json_lines(output: &[u8]) -> Vec<serde_json::Value> {
    String::from_utf8_lossy(output)
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}
