//! Building graph components - nodes, edges and grid coordinates

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Floor, Meters, Seconds};

/// Role a node plays inside the building
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Entrance,
    Intersection,
    /// Escalator or elevator landing linking floors
    #[serde(rename = "vertical", alias = "vertical-transport")]
    VerticalTransport,
    Amenity,
    Shop,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Entrance => "entrance",
            NodeKind::Intersection => "intersection",
            NodeKind::VerticalTransport => "vertical",
            NodeKind::Amenity => "amenity",
            NodeKind::Shop => "shop",
        };
        f.write_str(name)
    }
}

/// Largest absolute grid coordinate a node may have
pub const MAX_GRID_COORDINATE: u32 = 1_000_000;

/// Integer position on the floor plan grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance in grid units, saturating at `u32::MAX`
    pub fn manhattan(&self, other: &GridPoint) -> u32 {
        self.x
            .abs_diff(other.x)
            .saturating_add(self.y.abs_diff(other.y))
    }

    /// Whether both coordinates lie within [`MAX_GRID_COORDINATE`]
    pub fn in_bounds(&self) -> bool {
        self.x.unsigned_abs() <= MAX_GRID_COORDINATE
            && self.y.unsigned_abs() <= MAX_GRID_COORDINATE
    }
}

/// Building graph node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// QR payload identifying the node
    pub id: String,
    pub name: String,
    pub floor: Floor,
    pub kind: NodeKind,
    pub coordinates: GridPoint,
    /// Descriptive labels, not used for routing
    pub landmarks: Vec<String>,
    /// Ids of neighbouring nodes
    pub adjacency: Vec<String>,
    /// Deactivated nodes stay in the graph but are hidden from lookups
    pub active: bool,
}

impl Node {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        floor: Floor,
        kind: NodeKind,
        coordinates: GridPoint,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            floor,
            kind,
            coordinates,
            landmarks: Vec::new(),
            adjacency: Vec::new(),
            active: true,
        }
    }

    pub fn with_adjacency<I, S>(mut self, adjacency: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.adjacency = adjacency.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_landmarks<I, S>(mut self, landmarks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.landmarks = landmarks.into_iter().map(Into::into).collect();
        self
    }

    pub fn deactivated(mut self) -> Self {
        self.active = false;
        self
    }
}

/// Heading of a published walking link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeDirection {
    Straight,
    Left,
    Right,
    Up,
    Down,
    Diagonal,
}

/// Directed link between two adjacent nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub distance: Meters,
    pub direction: EdgeDirection,
    pub instruction: String,
    pub landmarks: Vec<String>,
    pub accessible: bool,
    pub floor_change: bool,
    pub estimated_time: Seconds,
}

impl Edge {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        distance: Meters,
        estimated_time: Seconds,
        direction: EdgeDirection,
        instruction: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            distance,
            direction,
            instruction: instruction.into(),
            landmarks: Vec::new(),
            accessible: true,
            floor_change: false,
            estimated_time,
        }
    }

    pub fn with_landmarks<I, S>(mut self, landmarks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.landmarks = landmarks.into_iter().map(Into::into).collect();
        self
    }

    pub fn changing_floor(mut self) -> Self {
        self.floor_change = true;
        self
    }
}
