use hashbrown::HashMap;
use log::{info, warn};

use super::{
    parser::deserialize_feed_file,
    raw_types::{FeedEdge, FeedNode, FeedPromotion, FeedStore},
};
use crate::{
    Error,
    loading::config::TopologyConfig,
    model::{
        Edge, EdgeDirection, GridPoint, Node, NodeKind, Promotion, Store, StoreDirectory,
        Topology,
    },
};

/// Builds the walking graph from `nodes.csv` and `edges.csv`
pub fn topology_from_feed(config: &TopologyConfig) -> Result<Topology, Error> {
    let nodes: Vec<FeedNode> = deserialize_feed_file(&config.nodes_path())?;
    let edges: Vec<FeedEdge> = deserialize_feed_file(&config.edges_path())?;
    info!(
        "Read {} node rows and {} edge rows from {}",
        nodes.len(),
        edges.len(),
        config.data_dir.display()
    );

    let mut topology = Topology::new();
    for raw in nodes {
        let Some(kind) = parse_kind(&raw.kind) else {
            warn!("Skipping node {}: unknown type '{}'", raw.qr_id, raw.kind);
            continue;
        };
        let coordinates = GridPoint::new(raw.x, raw.y);
        let mut node = Node::new(raw.qr_id, raw.name, raw.floor, kind, coordinates)
            .with_landmarks(raw.nearby_landmarks)
            .with_adjacency(raw.connected_nodes);
        node.active = raw.is_active;
        topology.add_node(node)?;
    }

    for raw in edges {
        let Some(direction) = parse_direction(&raw.direction) else {
            warn!(
                "Skipping edge {} -> {}: unknown direction '{}'",
                raw.from_node, raw.to_node, raw.direction
            );
            continue;
        };
        let mut edge = Edge::new(
            raw.from_node,
            raw.to_node,
            raw.distance,
            raw.estimated_time,
            direction,
            raw.instructions,
        )
        .with_landmarks(raw.landmarks);
        edge.accessible = raw.is_accessible;
        edge.floor_change = raw.floor_change;
        topology.add_edge(edge)?;
    }

    Ok(topology)
}

/// Builds the store directory from `stores.csv` and the optional
/// `promotions.csv`
pub fn directory_from_feed(config: &TopologyConfig) -> Result<StoreDirectory, Error> {
    let rows: Vec<FeedStore> = deserialize_feed_file(&config.stores_path())?;

    let promotions_path = config.promotions_path();
    let mut promotions: HashMap<String, Vec<Promotion>> = HashMap::new();
    if promotions_path.exists() {
        let raw: Vec<FeedPromotion> = deserialize_feed_file(&promotions_path)?;
        for promo in raw {
            promotions.entry(promo.store_id).or_default().push(Promotion {
                title: promo.title,
                valid_until: promo.valid_until,
                active: promo.is_active,
            });
        }
    }

    let mut stores: Vec<Store> = rows
        .into_iter()
        .map(|raw| {
            let mut store =
                Store::new(raw.store_id, raw.name, raw.category, raw.floor, raw.qr_location);
            store.location = GridPoint::new(raw.x, raw.y);
            store.description = raw.description;
            store.contact = raw.contact;
            store.active = raw.is_active;
            let hours = &mut store.operating_hours;
            for (slot, value) in [
                (&mut hours.monday, raw.monday),
                (&mut hours.tuesday, raw.tuesday),
                (&mut hours.wednesday, raw.wednesday),
                (&mut hours.thursday, raw.thursday),
                (&mut hours.friday, raw.friday),
                (&mut hours.saturday, raw.saturday),
                (&mut hours.sunday, raw.sunday),
            ] {
                if !value.is_empty() {
                    *slot = value;
                }
            }
            store
        })
        .collect();

    for store in &mut stores {
        if let Some(list) = promotions.remove(&store.id) {
            store.promotions = list;
        }
    }
    for store_id in promotions.keys() {
        warn!("Promotions reference unknown store {store_id}");
    }

    Ok(StoreDirectory::new(stores))
}

fn parse_kind(raw: &str) -> Option<NodeKind> {
    match raw.to_ascii_lowercase().as_str() {
        "entrance" => Some(NodeKind::Entrance),
        "intersection" => Some(NodeKind::Intersection),
        "vertical" | "vertical-transport" | "escalator" | "elevator" => {
            Some(NodeKind::VerticalTransport)
        }
        "amenity" => Some(NodeKind::Amenity),
        "shop" | "store" => Some(NodeKind::Shop),
        _ => None,
    }
}

fn parse_direction(raw: &str) -> Option<EdgeDirection> {
    match raw.to_ascii_lowercase().as_str() {
        "straight" => Some(EdgeDirection::Straight),
        "left" => Some(EdgeDirection::Left),
        "right" => Some(EdgeDirection::Right),
        "up" => Some(EdgeDirection::Up),
        "down" => Some(EdgeDirection::Down),
        "diagonal" => Some(EdgeDirection::Diagonal),
        _ => None,
    }
}
