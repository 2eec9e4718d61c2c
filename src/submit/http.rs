//! HTTP form submitter
//!
//! POSTs the payload as `application/x-www-form-urlencoded` fields to the
//! configured endpoint. Delivery is fire-and-forget: any HTTP response
//! counts as submitted and only transport failures are errors.

use std::time::Duration;

use chrono::Utc;
use reqwest::blocking::Client;
use uuid::Uuid;

use super::errors::SubmitResult;
use super::payload::SubmissionPayload;
use super::{SubmissionReceipt, Submitter};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct HttpSubmitter {
    endpoint: String,
    client: Client,
}

impl HttpSubmitter {
    pub fn new(endpoint: impl Into<String>) -> SubmitResult<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Submitter for HttpSubmitter {
    fn submit(&self, payload: &SubmissionPayload) -> SubmitResult<SubmissionReceipt> {
        let receipt = SubmissionReceipt {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
        };

        // The response body and status are not inspected
        self.client
            .post(&self.endpoint)
            .form(payload.fields())
            .send()?;

        Ok(receipt)
    }
}
