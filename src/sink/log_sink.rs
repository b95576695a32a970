//! Sink that only records submissions in the log

use super::{SinkError, Submission, SubmissionSink};
use async_trait::async_trait;

/// Logs each submission as JSON. Used until a CRM endpoint is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

#[async_trait]
impl SubmissionSink for LogSink {
    async fn submit(&self, submission: &Submission) -> Result<(), SinkError> {
        let body = submission.to_json()?;
        tracing::info!(form = ?submission.form, id = %submission.id, "{} data: {body}", submission.form.label());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::FormKind;
    use crate::state::SubmissionRecord;

    #[tokio::test]
    async fn test_log_sink_accepts_submission() {
        let submission = Submission::new(FormKind::Contact, SubmissionRecord::default());
        assert!(LogSink.submit(&submission).await.is_ok());
    }

    #[test]
    fn test_log_sink_from_sync_context() {
        let record = SubmissionRecord::from_entries(
            vec![("email".to_string(), "a@b.co".to_string())],
            None,
        );
        let submission = Submission::new(FormKind::Newsletter, record);
        assert!(tokio_test::block_on(LogSink.submit(&submission)).is_ok());
    }
}
