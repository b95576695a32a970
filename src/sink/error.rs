//! Errors surfaced by submission sinks

use thiserror::Error;

/// Failure to hand a submission to its destination
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to encode submission: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write submission: {0}")]
    Io(#[from] std::io::Error),

    #[error("submission rejected: {0}")]
    Rejected(String),
}
