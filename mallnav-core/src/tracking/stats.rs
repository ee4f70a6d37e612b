use chrono::{DateTime, Utc};
use serde::Serialize;

use super::session::{NavigationSession, SessionState};

/// Timing summary of a session
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SessionStats {
    pub elapsed_seconds: i64,
    pub estimated_remaining_seconds: Option<i64>,
    pub average_step_seconds: Option<i64>,
}

impl NavigationSession {
    /// Time spent so far, measured up to the last scanned checkpoint when
    /// there is one.
    pub fn stats(&self, now: DateTime<Utc>) -> SessionStats {
        let until = self.last_checkpoint.unwrap_or(now);
        let elapsed = (until - self.started_at).num_seconds().max(0);
        let progress = i64::from(self.progress);

        let estimated_remaining =
            (progress > 0).then(|| elapsed * (100 - progress) / progress);

        let completed_steps = match self.state {
            SessionState::Active { current_step } => current_step - 1,
            SessionState::Completed => self.steps.len(),
            SessionState::Cancelled { at_step } => at_step - 1,
        };
        let average = i64::try_from(completed_steps)
            .ok()
            .filter(|steps| *steps > 0)
            .map(|steps| elapsed / steps);

        SessionStats {
            elapsed_seconds: elapsed,
            estimated_remaining_seconds: estimated_remaining,
            average_step_seconds: average,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;
    use crate::routing::{RouteResult, RouteStep, StepDirection};

    fn route() -> RouteResult {
        let steps = ["A", "B", "C", "D"]
            .iter()
            .enumerate()
            .map(|(i, checkpoint)| RouteStep {
                step_number: i + 1,
                instruction: format!("Walk to {checkpoint}"),
                direction: StepDirection::Straight,
                landmark: String::new(),
                checkpoint: (*checkpoint).to_string(),
                distance: 10,
                estimated_time: 8,
            })
            .collect();
        RouteResult {
            session_id: "nav_stats".into(),
            origin: "START".into(),
            destination: "D".into(),
            steps,
            total_distance: 40,
            total_time: 32,
        }
    }

    #[test]
    fn fresh_session_has_no_estimate() {
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        let session = NavigationSession::start_at(route(), start);
        let stats = session.stats(start + Duration::seconds(30));
        assert_eq!(stats.elapsed_seconds, 30);
        assert_eq!(stats.estimated_remaining_seconds, None);
        assert_eq!(stats.average_step_seconds, None);
    }

    #[test]
    fn estimate_scales_with_progress() {
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        let session = NavigationSession::start_at(route(), start);
        let (session, _) = session.validate_checkpoint_at("A", start + Duration::seconds(20));
        let (session, _) = session.validate_checkpoint_at("B", start + Duration::seconds(60));

        // 2 of 4 steps done at 50 %, clock stopped at the last scan
        let stats = session.stats(start + Duration::seconds(500));
        assert_eq!(stats.elapsed_seconds, 60);
        assert_eq!(stats.estimated_remaining_seconds, Some(60));
        assert_eq!(stats.average_step_seconds, Some(30));
    }
}
