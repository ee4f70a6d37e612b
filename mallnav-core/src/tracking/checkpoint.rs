use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde::Serialize;

use super::session::{NavigationSession, SessionState, percentage};
use crate::{Error, routing::RouteStep};

/// How a scan moved the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckpointOutcome {
    /// Expected checkpoint, walk continues
    Advanced,
    /// Expected checkpoint of the final step
    Arrived,
    /// Another checkpoint of the route, pointer moved past it
    Recalculated,
    /// Id is not a checkpoint of the route
    UnknownCheckpoint,
    /// No active session to validate against
    InvalidSession,
}

/// Outcome of one scan, shaped for the client
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckpointResult {
    pub success: bool,
    pub is_correct_checkpoint: bool,
    pub is_destination: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_step: Option<RouteStep>,
    pub remaining_steps: usize,
    pub message: String,
    pub outcome: CheckpointOutcome,
    pub scanned: String,
}

impl CheckpointResult {
    fn failure(outcome: CheckpointOutcome, scanned: &str, remaining: usize, message: &str) -> Self {
        Self {
            success: false,
            is_correct_checkpoint: false,
            is_destination: false,
            next_step: None,
            remaining_steps: remaining,
            message: message.to_string(),
            outcome,
            scanned: scanned.to_string(),
        }
    }

    /// The failure as an [`Error`], `None` for successful scans
    pub fn error(&self) -> Option<Error> {
        match self.outcome {
            CheckpointOutcome::UnknownCheckpoint => {
                Some(Error::UnknownCheckpoint(self.scanned.clone()))
            }
            CheckpointOutcome::InvalidSession => Some(Error::InvalidSession),
            _ => None,
        }
    }
}

const NO_SESSION: &str = "No active navigation session";
const UNKNOWN_QR: &str = "Unknown QR code. Please scan the correct checkpoint.";
const ARRIVED: &str = "Congratulations! You have reached your destination!";

/// Validates a scan when the caller may not hold a session at all
pub fn validate_checkpoint(
    session: Option<NavigationSession>,
    scanned: &str,
) -> (Option<NavigationSession>, CheckpointResult) {
    match session {
        Some(session) => {
            let (session, result) = session.validate_checkpoint(scanned);
            (Some(session), result)
        }
        None => (
            None,
            CheckpointResult::failure(CheckpointOutcome::InvalidSession, scanned, 0, NO_SESSION),
        ),
    }
}

impl NavigationSession {
    /// Matches a scanned QR id against the route and returns the next state.
    ///
    /// Unknown ids and scans on a finished session leave the session as is.
    pub fn validate_checkpoint(self, scanned: &str) -> (Self, CheckpointResult) {
        self.validate_checkpoint_at(scanned, Utc::now())
    }

    pub fn validate_checkpoint_at(
        mut self,
        scanned: &str,
        at: DateTime<Utc>,
    ) -> (Self, CheckpointResult) {
        let SessionState::Active { current_step } = self.state else {
            debug!("Scan {scanned} on inactive session {}", self.session_id);
            let result =
                CheckpointResult::failure(CheckpointOutcome::InvalidSession, scanned, 0, NO_SESSION);
            return (self, result);
        };

        let total = self.steps.len();
        let expected = self
            .steps
            .get(current_step - 1)
            .map(|step| step.checkpoint.as_str());

        if expected == Some(scanned) {
            self.last_checkpoint = Some(at);
            if current_step == total {
                self.state = SessionState::Completed;
                self.progress = 100;
                info!("Session {} reached {}", self.session_id, self.destination);
                let result = CheckpointResult {
                    success: true,
                    is_correct_checkpoint: true,
                    is_destination: true,
                    next_step: None,
                    remaining_steps: 0,
                    message: ARRIVED.to_string(),
                    outcome: CheckpointOutcome::Arrived,
                    scanned: scanned.to_string(),
                };
                return (self, result);
            }

            let next = current_step + 1;
            self.state = SessionState::Active { current_step: next };
            self.progress = percentage(current_step, total);
            let next_step = self.steps[next - 1].clone();
            let result = CheckpointResult {
                success: true,
                is_correct_checkpoint: true,
                is_destination: false,
                message: format!("Great! Moving to step {next}. {}", next_step.instruction),
                next_step: Some(next_step),
                remaining_steps: total - current_step,
                outcome: CheckpointOutcome::Advanced,
                scanned: scanned.to_string(),
            };
            return (self, result);
        }

        let Some(k) = self.steps.iter().position(|step| step.checkpoint == scanned) else {
            warn!(
                "Session {}: {scanned} is not a checkpoint of this route",
                self.session_id
            );
            let result = CheckpointResult::failure(
                CheckpointOutcome::UnknownCheckpoint,
                scanned,
                total + 1 - current_step,
                UNKNOWN_QR,
            );
            return (self, result);
        };

        let reached = k + 1;
        self.last_checkpoint = Some(at);
        self.progress = percentage(reached, total);
        self.state = if reached == total {
            SessionState::Completed
        } else {
            SessionState::Active {
                current_step: reached + 1,
            }
        };
        debug!(
            "Session {}: off-route scan {scanned}, resuming from step {}",
            self.session_id,
            reached + 1
        );
        let result = CheckpointResult {
            success: true,
            is_correct_checkpoint: false,
            is_destination: false,
            next_step: None,
            remaining_steps: total - reached,
            message: format!(
                "You're at a different location. Route recalculated from step {}",
                reached + 1
            ),
            outcome: CheckpointOutcome::Recalculated,
            scanned: scanned.to_string(),
        };
        (self, result)
    }
}
