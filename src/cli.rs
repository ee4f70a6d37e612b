//! CLI argument definitions

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use mallnav_core::{Floor, Meters, RouteStrategy};

/// Indoor mall navigation with QR checkpoints
#[derive(Parser, Debug)]
#[command(name = "mallnav")]
#[command(author, version, about = "Plan and follow walking routes inside a mall", long_about = None)]
pub struct Cli {
    /// TOML configuration file. Defaults to ./mallnav.toml when present.
    #[arg(short, long, global = true, env = "MALLNAV_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory with nodes.csv, edges.csv and stores.csv. Overrides the
    /// configuration file.
    #[arg(short, long, global = true, env = "MALLNAV_DATA")]
    pub data: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Plan a route between two QR locations
    Route {
        /// QR id of the starting point
        start: String,
        /// QR id of the destination
        destination: String,
        /// Ask for an accessible route
        #[arg(long)]
        accessible: bool,
        /// Planning strategy: direct-line or graph
        #[arg(long)]
        strategy: Option<RouteStrategy>,
    },

    /// Nearest entrance on the same floor, for evacuation
    Exit {
        /// QR id of the current location
        location: String,
    },

    /// Plan a route and replay a sequence of checkpoint scans along it
    Walk {
        start: String,
        destination: String,
        /// Scanned QR ids, in scan order
        #[arg(required = true, num_args = 1..)]
        scans: Vec<String>,
        #[arg(long)]
        strategy: Option<RouteStrategy>,
    },

    /// Resolve a scanned QR code to its location
    Locate {
        qr_id: String,
        /// Also list locations within this many meters
        #[arg(long, value_name = "METERS")]
        nearby: Option<Meters>,
    },

    /// List stores, optionally filtered
    Stores {
        #[arg(long)]
        floor: Option<Floor>,
        /// Category substring, case-insensitive
        #[arg(long)]
        category: Option<String>,
        /// Name or description substring, case-insensitive
        #[arg(long)]
        search: Option<String>,
        /// Only stores with a promotion running today
        #[arg(long)]
        promotions: bool,
    },
}
