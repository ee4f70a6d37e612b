use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    DEFAULT_GRID_UNIT_METERS, DEFAULT_WALKING_SPEED, Error, Meters, Seconds, model::GridPoint,
};

/// How routes are computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteStrategy {
    /// Two-leg Manhattan offset, escalator detour between floors
    #[default]
    DirectLine,
    /// Shortest path over the published edges
    Graph,
}

impl FromStr for RouteStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "direct-line" | "direct" => Ok(RouteStrategy::DirectLine),
            "graph" => Ok(RouteStrategy::Graph),
            other => Err(format!(
                "unknown route strategy '{other}', expected 'direct-line' or 'graph'"
            )),
        }
    }
}

impl fmt::Display for RouteStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteStrategy::DirectLine => f.write_str("direct-line"),
            RouteStrategy::Graph => f.write_str("graph"),
        }
    }
}

/// Edge weight minimized by the graph strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CostMetric {
    #[default]
    Distance,
    Time,
}

/// Route planner settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub strategy: RouteStrategy,
    pub cost_metric: CostMetric,
    /// Meters per floor plan grid unit
    pub grid_unit_meters: Meters,
    /// Meters per second
    pub walking_speed: f64,
    /// Fixed length of an escalator ride
    pub escalator_distance: Meters,
    /// Fixed duration of an escalator ride
    pub escalator_time: Seconds,
    /// Node where the direct-line strategy lands after a floor change
    pub landing_node: String,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            strategy: RouteStrategy::default(),
            cost_metric: CostMetric::default(),
            grid_unit_meters: DEFAULT_GRID_UNIT_METERS,
            walking_speed: DEFAULT_WALKING_SPEED,
            escalator_distance: 30,
            escalator_time: 25,
            landing_node: "2E01".to_string(),
        }
    }
}

impl PlannerConfig {
    pub fn with_strategy(mut self, strategy: RouteStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Rejects settings that would make distances or times meaningless
    ///
    /// # Errors
    ///
    /// [`Error::InvalidData`] naming the offending setting
    pub fn validate(&self) -> Result<(), Error> {
        validate_metrics(self.grid_unit_meters, self.walking_speed)?;
        if self.escalator_distance == 0 || self.escalator_time == 0 {
            return Err(Error::InvalidData(
                "escalator_distance and escalator_time must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Walking distance between two grid points
    ///
    /// # Errors
    ///
    /// [`Error::InvalidData`] when the distance does not fit in [`Meters`]
    pub fn grid_distance(&self, from: GridPoint, to: GridPoint) -> Result<Meters, Error> {
        grid_meters(from.manhattan(&to), self.grid_unit_meters)
    }

    /// Seconds needed to walk `distance`, rounded up
    pub fn walking_time(&self, distance: Meters) -> Seconds {
        walking_time(distance, self.walking_speed)
    }
}

pub(crate) fn validate_metrics(grid_unit_meters: Meters, walking_speed: f64) -> Result<(), Error> {
    if grid_unit_meters == 0 {
        return Err(Error::InvalidData(
            "grid_unit_meters must be positive".to_string(),
        ));
    }
    if !walking_speed.is_finite() || walking_speed <= 0.0 {
        return Err(Error::InvalidData(format!(
            "walking_speed must be a positive number of meters per second, got {walking_speed}"
        )));
    }
    Ok(())
}

/// `grid_units` converted to meters without overflowing
pub(crate) fn grid_meters(grid_units: u32, grid_unit_meters: Meters) -> Result<Meters, Error> {
    grid_units.checked_mul(grid_unit_meters).ok_or_else(|| {
        Error::InvalidData(format!(
            "{grid_units} grid units of {grid_unit_meters}m overflow the distance range"
        ))
    })
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn walking_time(distance: Meters, speed: f64) -> Seconds {
    (f64::from(distance) / speed).ceil() as Seconds
}
