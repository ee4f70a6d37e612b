use thiserror::Error;

use crate::Floor;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{what} not found: {id}")]
    NotFound { what: &'static str, id: String },
    #[error("No escalator found on floor {floor}")]
    NoVerticalLink { floor: Floor },
    #[error("Escalator landing {0} is missing from the topology")]
    LandingUnresolved(String),
    #[error("No walkable route from {from} to {to}")]
    NoRoute { from: String, to: String },
    #[error("Unknown checkpoint: {0}")]
    UnknownCheckpoint(String),
    #[error("No active navigation session")]
    InvalidSession,
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

impl Error {
    /// Message shown to clients. Drops the ids and floor numbers that the
    /// `Display` form carries for logs.
    pub fn client_message(&self) -> String {
        match self {
            Error::NotFound { what, .. } => format!("{what} not found"),
            Error::NoVerticalLink { .. } => "No escalator found on start floor".to_string(),
            other => other.to_string(),
        }
    }

    pub(crate) fn not_found(what: &'static str, id: &str) -> Self {
        Error::NotFound {
            what,
            id: id.to_string(),
        }
    }
}
