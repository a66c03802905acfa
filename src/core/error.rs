use thiserror::Error;

use crate::core::types::WorldId;

#[derive(Error, Debug)]
pub enum SimError {
    /// Malformed or missing world/entity references; raised before any mutation
    #[error("Validation error: {0}")]
    Validation(String),

    /// An invariant was broken by the tick itself. This is a bug, never retried.
    #[error("Consistency violation: {0}")]
    ConsistencyViolation(String),

    /// The persistence boundary could not load or commit; the tick was not applied
    #[error("Storage failure: {0}")]
    Storage(String),

    #[error("A tick is already running for world {0}")]
    TickInProgress(WorldId),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

impl SimError {
    /// Whether the caller may rerun the whole tick after this failure
    pub fn is_retryable(&self) -> bool {
        matches!(self, SimError::Storage(_) | SimError::TickInProgress(_))
    }
}

pub type Result<T> = std::result::Result<T, SimError>;
