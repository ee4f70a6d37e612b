use log::{info, warn};

use super::adjacency::synthesize_missing_edges;
use super::config::TopologyConfig;
use super::feed::{directory_from_feed, topology_from_feed};
use crate::{Error, MallModel, Topology, routing::validate_metrics};

/// Loads the walking graph and the store directory of one building
///
/// # Errors
///
/// Returns an error if the data directory or a required file is missing, or
/// if the files describe an inconsistent graph
pub fn create_mall_model(config: &TopologyConfig) -> Result<MallModel, Error> {
    let topology = create_topology(config)?;

    info!("Processing store directory: {}", config.stores_path().display());
    let mut directory = directory_from_feed(config)?;
    directory.retain(|store| {
        let known = topology.contains(&store.node_id);
        if !known {
            warn!(
                "Dropping store {}: located at unknown node {}",
                store.id, store.node_id
            );
        }
        known
    });

    let model = MallModel::new(topology, directory);
    info!("{model} loaded successfully");
    Ok(model)
}

/// Loads only the walking graph
///
/// # Errors
///
/// See [`create_mall_model`]
pub fn create_topology(config: &TopologyConfig) -> Result<Topology, Error> {
    validate_config(config)?;

    info!("Processing topology data: {}", config.data_dir.display());
    let mut topology = topology_from_feed(config)?;
    topology.set_grid_unit_meters(config.grid_unit_meters);
    info!(
        "Loaded {} nodes and {} published edges",
        topology.node_count(),
        topology.edge_count()
    );

    if config.synthesize_missing_edges {
        let added = synthesize_missing_edges(&mut topology, config.walking_speed)?;
        info!("Derived {added} edges from node adjacency");
    }

    check_floor_changes(&topology);
    Ok(topology)
}

fn validate_config(config: &TopologyConfig) -> Result<(), Error> {
    validate_metrics(config.grid_unit_meters, config.walking_speed)?;

    if !config.data_dir.is_dir() {
        return Err(Error::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Data directory not found: {}", config.data_dir.display()),
        )));
    }

    for path in [
        config.nodes_path(),
        config.edges_path(),
        config.stores_path(),
    ] {
        if !path.exists() {
            return Err(Error::InvalidData(format!(
                "Required file not found: {}",
                path.display()
            )));
        }
    }

    Ok(())
}

/// `floor_change` must match whether the endpoints sit on different floors.
/// Published data is known to break this, so mismatches are only reported.
fn check_floor_changes(topology: &Topology) {
    let mut mismatches = 0usize;
    for node in topology.nodes() {
        for edge in topology.outgoing_edges(&node.id) {
            let Some(target) = topology.node_any(&edge.to) else {
                continue;
            };
            if edge.floor_change != (node.floor != target.floor) {
                mismatches += 1;
                warn!(
                    "Edge {} -> {} has floor_change={} but connects floors {} and {}",
                    edge.from, edge.to, edge.floor_change, node.floor, target.floor
                );
            }
        }
    }
    if mismatches > 0 {
        warn!("{mismatches} edges carry an inconsistent floor_change flag");
    }
}
