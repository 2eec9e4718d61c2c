//! Inspection submission
//!
//! The form controller hands a `SubmissionPayload` to a `Submitter`.
//! `HttpSubmitter` POSTs the fields to a configured endpoint;
//! `OutboxSubmitter` appends each submission to a local JSON-lines file
//! when no endpoint is configured.

mod errors;
mod http;
mod outbox;
mod payload;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

pub use errors::{SubmitError, SubmitResult};
pub use http::HttpSubmitter;
pub use outbox::OutboxSubmitter;
pub use payload::SubmissionPayload;

/// Proof that a submission was accepted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionReceipt {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
}

/// Destination for completed inspections
pub trait Submitter {
    fn submit(&self, payload: &SubmissionPayload) -> SubmitResult<SubmissionReceipt>;
}
