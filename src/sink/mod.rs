//! Submission sink module: the seam where completed forms leave the app

mod error;
mod log_sink;
mod outbox;
mod submission;
mod traits;

pub use error::SinkError;
pub use log_sink::LogSink;
pub use outbox::OutboxSink;
pub use submission::{FormKind, Submission};
pub use traits::SubmissionSink;

#[cfg(test)]
pub use traits::MockSubmissionSink;

use crate::config::{SinkKind, SiteConfig};
use anyhow::Result;

/// Build the sink selected in the configuration
pub fn from_config(config: &SiteConfig) -> Result<Box<dyn SubmissionSink>> {
    match config.sink_kind() {
        SinkKind::Log => Ok(Box::new(LogSink)),
        SinkKind::Outbox => {
            let path = config
                .outbox_path()
                .ok_or_else(|| anyhow::anyhow!("no data directory available for the outbox"))?;
            Ok(Box::new(OutboxSink::new(path)))
        }
    }
}
