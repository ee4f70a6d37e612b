//! Command-line front end for the indoor mall navigator.
//!
//! The binary loads a building from CSV files, then plans routes, tracks a
//! walk over scanned checkpoints and answers location and store queries. All
//! answers are printed as JSON envelopes.

pub mod cli;
pub mod commands;
pub mod config;
pub mod payload;

pub use commands::App;
pub use config::AppConfig;
