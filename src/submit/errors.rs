//! Submission errors

use std::io;

use thiserror::Error;

pub type SubmitResult<T> = Result<T, SubmitError>;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Outbox I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Payload encoding failed: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Endpoint request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl SubmitError {
    /// Returns the string code for this error
    pub fn code(&self) -> &'static str {
        match self {
            SubmitError::Io(_) => "SITECHECK_SUBMIT_IO_ERROR",
            SubmitError::Encode(_) => "SITECHECK_SUBMIT_ENCODE_ERROR",
            SubmitError::Http(_) => "SITECHECK_SUBMIT_HTTP_ERROR",
        }
    }
}
