//! Sink that appends submissions to a JSON-lines outbox file

use super::{SinkError, Submission, SubmissionSink};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// Appends one JSON object per line to a file
#[derive(Debug, Clone)]
pub struct OutboxSink {
    path: PathBuf,
}

impl OutboxSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SubmissionSink for OutboxSink {
    async fn submit(&self, submission: &Submission) -> Result<(), SinkError> {
        let mut line = submission.to_json()?;
        line.push('\n');

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        tracing::info!(id = %submission.id, path = %self.path.display(), "Queued submission in outbox");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::FormKind;
    use crate::state::SubmissionRecord;

    fn record(email: &str) -> SubmissionRecord {
        SubmissionRecord::from_entries(vec![("email".to_string(), email.to_string())], None)
    }

    #[tokio::test]
    async fn test_appends_one_line_per_submission() {
        let dir = tempfile::tempdir().unwrap();
        let sink = OutboxSink::new(dir.path().join("nested").join("outbox.jsonl"));

        sink.submit(&Submission::new(FormKind::Newsletter, record("a@b.co")))
            .await
            .unwrap();
        sink.submit(&Submission::new(FormKind::Newsletter, record("c@d.org")))
            .await
            .unwrap();

        let content = std::fs::read_to_string(sink.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["data"]["email"], "c@d.org");
    }

    #[tokio::test]
    async fn test_unwritable_path_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened for appending
        let sink = OutboxSink::new(dir.path());
        let result = sink
            .submit(&Submission::new(FormKind::Contact, record("a@b.co")))
            .await;
        assert!(matches!(result, Err(SinkError::Io(_))));
    }
}
