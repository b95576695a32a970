//! Trait abstraction for submission sinks to enable mocking in tests

use super::{SinkError, Submission};
use async_trait::async_trait;

/// Destination for completed form submissions
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// Deliver one submission. Errors are returned to the caller, never swallowed.
    async fn submit(&self, submission: &Submission) -> Result<(), SinkError>;
}
