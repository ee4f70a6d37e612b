//! JSON envelopes printed by the CLI
//!
//! Every answer is `{"success": true, ...}` or
//! `{"success": false, "error": "..."}`.

use mallnav_core::{
    Floor, GridPoint, NavigationSession, Node, NodeKind, RouteResult, RouteStep,
    tracking::SessionStats,
};
use serde::Serialize;

/// Successful answer with its body flattened next to `success`
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    #[serde(flatten)]
    pub body: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(body: T) -> Self {
        Self {
            success: true,
            body,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub success: bool,
    pub error: String,
}

impl Failure {
    pub fn new(error: impl ToString) -> Self {
        Self {
            success: false,
            error: error.to_string(),
        }
    }
}

/// Route as handed to the client, totals formatted for display
#[derive(Debug, Serialize)]
pub struct RouteSummary<'a> {
    pub session_id: &'a str,
    pub total_distance: String,
    pub estimated_time: String,
    pub steps: &'a [RouteStep],
    pub current_step: usize,
}

impl<'a> From<&'a RouteResult> for RouteSummary<'a> {
    fn from(route: &'a RouteResult) -> Self {
        Self {
            session_id: &route.session_id,
            total_distance: format!("{}m", route.total_distance),
            estimated_time: format!("{} minutes", route.total_minutes()),
            steps: &route.steps,
            current_step: route.current_step(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RouteBody<'a> {
    pub route: RouteSummary<'a>,
}

#[derive(Debug, Serialize)]
pub struct LocationSummary<'a> {
    pub qr_id: &'a str,
    pub name: &'a str,
    pub floor: Floor,
    pub coordinates: GridPoint,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nearby_landmarks: Option<&'a [String]>,
    #[serde(rename = "type")]
    pub kind: NodeKind,
}

impl<'a> LocationSummary<'a> {
    /// Location without its landmarks, as used for exits
    pub fn brief(node: &'a Node) -> Self {
        Self {
            qr_id: &node.id,
            name: &node.name,
            floor: node.floor,
            coordinates: node.coordinates,
            nearby_landmarks: None,
            kind: node.kind,
        }
    }

    pub fn full(node: &'a Node) -> Self {
        Self {
            nearby_landmarks: Some(&node.landmarks),
            ..Self::brief(node)
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ExitBody<'a> {
    pub emergency_exit: LocationSummary<'a>,
}

#[derive(Debug, Serialize)]
pub struct LocateBody<'a> {
    pub location: LocationSummary<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nearby_locations: Option<Vec<LocationSummary<'a>>>,
}

/// Closing line of a replayed walk
#[derive(Debug, Serialize)]
pub struct WalkProgress<'a> {
    pub session_id: &'a str,
    pub state: &'static str,
    pub current_step: usize,
    pub total_steps: usize,
    pub progress: u8,
    pub stats: SessionStats,
}

impl<'a> WalkProgress<'a> {
    pub fn new(session: &'a NavigationSession, stats: SessionStats) -> Self {
        Self {
            session_id: session.session_id(),
            state: session.state().as_str(),
            current_step: session.current_step(),
            total_steps: session.total_steps(),
            progress: session.progress(),
            stats,
        }
    }
}
