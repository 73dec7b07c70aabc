//! Job definition store errors.

use thiserror::Error;

use crate::job::JobId;

#[derive(Debug, Error)]
pub enum StoreError {
    /// A definition with the same identity is already stored.
    #[error("Job definition already stored: {0}")]
    Conflict(JobId),

    #[error("Storage error: {0}")]
    Backend(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}
