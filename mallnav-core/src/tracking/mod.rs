//! Progress tracking for a walk in progress
//!
//! A [`NavigationSession`] replays a planned route: every scanned QR code is
//! matched against the route checkpoints and moves the session to its next
//! state.

mod checkpoint;
mod session;
mod stats;

pub use checkpoint::{CheckpointOutcome, CheckpointResult, validate_checkpoint};
pub use session::{NavigationSession, SessionState};
pub use stats::SessionStats;
