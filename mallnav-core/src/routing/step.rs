//! Route steps and planning results

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Meters, Seconds, model::EdgeDirection};

/// Direction tag shown next to a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepDirection {
    Left,
    Right,
    Forward,
    Backward,
    Straight,
    Up,
    Down,
    Diagonal,
    Arrived,
}

impl fmt::Display for StepDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StepDirection::Left => "left",
            StepDirection::Right => "right",
            StepDirection::Forward => "forward",
            StepDirection::Backward => "backward",
            StepDirection::Straight => "straight",
            StepDirection::Up => "up",
            StepDirection::Down => "down",
            StepDirection::Diagonal => "diagonal",
            StepDirection::Arrived => "arrived",
        };
        f.write_str(name)
    }
}

impl From<EdgeDirection> for StepDirection {
    fn from(direction: EdgeDirection) -> Self {
        match direction {
            EdgeDirection::Straight => StepDirection::Straight,
            EdgeDirection::Left => StepDirection::Left,
            EdgeDirection::Right => StepDirection::Right,
            EdgeDirection::Up => StepDirection::Up,
            EdgeDirection::Down => StepDirection::Down,
            EdgeDirection::Diagonal => StepDirection::Diagonal,
        }
    }
}

/// One instruction of a computed route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteStep {
    /// 1-based position in the route
    pub step_number: usize,
    pub instruction: String,
    pub direction: StepDirection,
    pub landmark: String,
    /// Node the walker scans to confirm this step
    #[serde(rename = "checkpoint_qr")]
    pub checkpoint: String,
    pub distance: Meters,
    pub estimated_time: Seconds,
}

/// Appends steps while keeping their numbering contiguous
#[derive(Debug, Default)]
pub(crate) struct StepList {
    steps: Vec<RouteStep>,
}

impl StepList {
    pub(crate) fn push(
        &mut self,
        instruction: String,
        direction: StepDirection,
        landmark: String,
        checkpoint: &str,
        distance: Meters,
        estimated_time: Seconds,
    ) {
        self.steps.push(RouteStep {
            step_number: self.steps.len() + 1,
            instruction,
            direction,
            landmark,
            checkpoint: checkpoint.to_string(),
            distance,
            estimated_time,
        });
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub(crate) fn into_steps(self) -> Vec<RouteStep> {
        self.steps
    }
}

/// Options accepted with a route request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanOptions {
    /// Accepted for compatibility; routing does not take it into account
    #[serde(default)]
    pub accessibility_needed: bool,
}

/// Complete planned route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteResult {
    pub session_id: String,
    pub origin: String,
    pub destination: String,
    pub steps: Vec<RouteStep>,
    pub total_distance: Meters,
    /// Seconds
    pub total_time: Seconds,
}

impl RouteResult {
    /// Totals are the sums over `steps`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidData`] when a total does not fit in 32 bits
    pub(crate) fn new(
        session_id: String,
        origin: &str,
        destination: &str,
        steps: Vec<RouteStep>,
    ) -> Result<Self, Error> {
        let overflow = |what: &str| {
            Error::InvalidData(format!(
                "Route {origin} -> {destination} is too long: total {what} overflows"
            ))
        };
        let total_distance = steps
            .iter()
            .try_fold(0u32, |sum, s| sum.checked_add(s.distance))
            .ok_or_else(|| overflow("distance"))?;
        let total_time = steps
            .iter()
            .try_fold(0u32, |sum, s| sum.checked_add(s.estimated_time))
            .ok_or_else(|| overflow("time"))?;
        Ok(Self {
            session_id,
            origin: origin.to_string(),
            destination: destination.to_string(),
            steps,
            total_distance,
            total_time,
        })
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Walks always begin at the first step
    pub fn current_step(&self) -> usize {
        1
    }

    /// Total time rounded up to whole minutes
    pub fn total_minutes(&self) -> u32 {
        self.total_time.div_ceil(60)
    }
}
