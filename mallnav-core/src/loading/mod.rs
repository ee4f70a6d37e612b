//! Loading building data from CSV files and assembling the mall model

mod adjacency;
mod builder;
mod config;
pub mod feed;

pub use builder::{create_mall_model, create_topology};
pub use config::TopologyConfig;
