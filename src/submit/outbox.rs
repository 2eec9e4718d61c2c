//! Append-only outbox submitter
//!
//! Each submission becomes one JSON line:
//! `{"id":..,"submitted_at":..,"payload":{..}}`.
//! The line is flushed and synced before the receipt is returned.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::errors::SubmitResult;
use super::payload::SubmissionPayload;
use super::{SubmissionReceipt, Submitter};

#[derive(Serialize)]
struct OutboxRecord<'a> {
    id: Uuid,
    submitted_at: DateTime<Utc>,
    payload: &'a SubmissionPayload,
}

#[derive(Debug, Clone)]
pub struct OutboxSubmitter {
    path: PathBuf,
}

impl OutboxSubmitter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Submitter for OutboxSubmitter {
    fn submit(&self, payload: &SubmissionPayload) -> SubmitResult<SubmissionReceipt> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let receipt = SubmissionReceipt {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
        };
        let record = OutboxRecord {
            id: receipt.id,
            submitted_at: receipt.submitted_at,
            payload,
        };

        let mut line = serde_json::to_vec(&record)?;
        line.push(b'\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(&line)?;
        file.flush()?;
        file.sync_all()?;

        Ok(receipt)
    }
}
