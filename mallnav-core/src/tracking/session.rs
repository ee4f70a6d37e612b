use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{Meters, Seconds, routing::RouteResult, routing::RouteStep};

/// Lifecycle of a navigation session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionState {
    /// Walking towards the checkpoint of `current_step` (1-based)
    Active { current_step: usize },
    /// Destination reached or walk marked complete
    Completed,
    /// Abandoned while `at_step` was current
    Cancelled { at_step: usize },
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Active { .. } => "active",
            SessionState::Completed => "completed",
            SessionState::Cancelled { .. } => "cancelled",
        }
    }
}

/// Ephemeral state of one walk along a planned route
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavigationSession {
    pub(super) session_id: String,
    pub(super) origin: String,
    pub(super) destination: String,
    pub(super) steps: Vec<RouteStep>,
    pub(super) state: SessionState,
    pub(super) progress: u8,
    pub(super) total_distance: Meters,
    pub(super) total_time: Seconds,
    pub(super) started_at: DateTime<Utc>,
    pub(super) last_checkpoint: Option<DateTime<Utc>>,
}

impl NavigationSession {
    /// Starts walking `route` now
    pub fn start(route: RouteResult) -> Self {
        Self::start_at(route, Utc::now())
    }

    pub fn start_at(route: RouteResult, started_at: DateTime<Utc>) -> Self {
        Self {
            session_id: route.session_id,
            origin: route.origin,
            destination: route.destination,
            steps: route.steps,
            state: SessionState::Active { current_step: 1 },
            progress: 0,
            total_distance: route.total_distance,
            total_time: route.total_time,
            started_at,
            last_checkpoint: None,
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn steps(&self) -> &[RouteStep] {
        &self.steps
    }

    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, SessionState::Active { .. })
    }

    /// Percentage of the route completed, 0 to 100
    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn total_distance(&self) -> Meters {
        self.total_distance
    }

    pub fn total_time(&self) -> Seconds {
        self.total_time
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn last_checkpoint(&self) -> Option<DateTime<Utc>> {
        self.last_checkpoint
    }

    /// 1-based step pointer; a completed session points one past the last step
    pub fn current_step(&self) -> usize {
        match self.state {
            SessionState::Active { current_step } => current_step,
            SessionState::Completed => self.total_steps() + 1,
            SessionState::Cancelled { at_step } => at_step,
        }
    }

    /// Step the walker is currently following
    pub fn current_route_step(&self) -> Option<&RouteStep> {
        match self.state {
            SessionState::Active { current_step } => self.steps.get(current_step - 1),
            _ => None,
        }
    }

    /// Step after the current one
    pub fn next_step(&self) -> Option<&RouteStep> {
        match self.state {
            SessionState::Active { current_step } => self.steps.get(current_step),
            _ => None,
        }
    }

    /// Steps after the current one
    pub fn remaining_steps(&self) -> &[RouteStep] {
        match self.state {
            SessionState::Active { current_step } => {
                &self.steps[current_step.min(self.steps.len())..]
            }
            _ => &[],
        }
    }

    /// Marks the walk as finished regardless of remaining checkpoints
    pub fn complete(mut self) -> Self {
        self.state = SessionState::Completed;
        self.progress = 100;
        self
    }

    pub fn cancel(mut self) -> Self {
        if let SessionState::Active { current_step } = self.state {
            self.state = SessionState::Cancelled {
                at_step: current_step,
            };
        }
        self
    }
}

/// round(100 * done / total), halves rounded up
#[allow(clippy::cast_possible_truncation)]
pub(super) fn percentage(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    ((200 * done + total) / (2 * total)).min(100) as u8
}
