use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::AppConfig;
use crate::{Error, Result};

/// Payload handed to a transport on a valid submit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub company: String,
    pub services: Vec<String>,
    pub budget: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

/// Delivers contact submissions somewhere
#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    /// Transport name for logging
    fn name(&self) -> &str;

    async fn send(&self, submission: &Submission) -> Result<()>;
}

/// Accepts everything and delivers nothing
#[derive(Debug, Default)]
pub struct NoopTransport;

#[async_trait]
impl SubmissionTransport for NoopTransport {
    fn name(&self) -> &str {
        "noop"
    }

    async fn send(&self, submission: &Submission) -> Result<()> {
        debug!(id = %submission.id, "Discarding contact submission (noop transport)");
        Ok(())
    }
}

/// Appends each submission as one JSON line to a local file
#[derive(Debug)]
pub struct OutboxTransport {
    path: PathBuf,
}

impl OutboxTransport {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[async_trait]
impl SubmissionTransport for OutboxTransport {
    fn name(&self) -> &str {
        "outbox"
    }

    async fn send(&self, submission: &Submission) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut line = serde_json::to_string(submission)?;
        line.push('\n');

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        info!(id = %submission.id, path = %self.path.display(), "Submission written to outbox");
        Ok(())
    }
}

/// Build the transport named in `contact.transport`
pub fn transport_from_config(config: &AppConfig) -> Result<Arc<dyn SubmissionTransport>> {
    match config.contact.transport.to_lowercase().as_str() {
        "noop" | "none" => Ok(Arc::new(NoopTransport)),
        "outbox" => Ok(Arc::new(OutboxTransport::new(config.outbox_path()))),
        other => {
            warn!("Unknown contact transport '{}'", other);
            Err(Error::Config(format!("unknown contact transport: {}", other)))
        }
    }
}
