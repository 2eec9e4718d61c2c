//! Form controller errors
//!
//! These surface user input the controller refuses. Invalid *fact*
//! values are not errors; they unset the fact.

use thiserror::Error;

use crate::submit::SubmitError;

pub type FormResult<T> = Result<T, FormError>;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("Unknown fact: {0}")]
    UnknownFact(String),

    #[error("Unknown inspector field: {0}")]
    UnknownField(String),

    #[error("Invalid value '{value}' for {field}")]
    InvalidValue { field: String, value: String },

    #[error("Headquarters must be chosen before a branch")]
    HeadquartersRequired,

    #[error("Branch '{branch}' does not belong to '{headquarters}'")]
    BranchMismatch { branch: String, headquarters: String },

    #[error("Unknown check outcome: {0}")]
    UnknownOutcome(String),

    #[error("Checklist entry is not active under the current conditions: {0}")]
    InactiveKey(String),

    #[error("Form is not ready to submit: {0}")]
    NotReady(String),

    #[error("Submission failed: {0}")]
    Submission(#[from] SubmitError),
}

impl FormError {
    /// Returns the string code for this error
    pub fn code(&self) -> &'static str {
        match self {
            FormError::UnknownFact(_) => "SITECHECK_FORM_UNKNOWN_FACT",
            FormError::UnknownField(_) => "SITECHECK_FORM_UNKNOWN_FIELD",
            FormError::InvalidValue { .. } => "SITECHECK_FORM_INVALID_VALUE",
            FormError::HeadquartersRequired => "SITECHECK_FORM_HEADQUARTERS_REQUIRED",
            FormError::BranchMismatch { .. } => "SITECHECK_FORM_BRANCH_MISMATCH",
            FormError::UnknownOutcome(_) => "SITECHECK_FORM_UNKNOWN_OUTCOME",
            FormError::InactiveKey(_) => "SITECHECK_FORM_INACTIVE_KEY",
            FormError::NotReady(_) => "SITECHECK_FORM_NOT_READY",
            FormError::Submission(_) => "SITECHECK_FORM_SUBMISSION_FAILED",
        }
    }
}
