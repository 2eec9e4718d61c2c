//! CLI error types
//!
//! Every failure reaching the binary carries a `SITECHECK_CLI_*` code,
//! printed in the JSON error response and on stderr.

use std::fmt;
use std::io;

use crate::form::FormError;
use crate::store::StoreError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdout, report file)
    IoError,
    /// Input rejected by the form
    InvalidInput,
    /// Submission refused because the form is incomplete
    NotReady,
    /// Destructive command run without --yes
    ConfirmationRequired,
    /// Saved form could not be written
    StoreFailed,
    /// Submitter failed
    SubmitFailed,
}

impl CliErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "SITECHECK_CLI_CONFIG_ERROR",
            Self::IoError => "SITECHECK_CLI_IO_ERROR",
            Self::InvalidInput => "SITECHECK_CLI_INVALID_INPUT",
            Self::NotReady => "SITECHECK_CLI_NOT_READY",
            Self::ConfirmationRequired => "SITECHECK_CLI_CONFIRMATION_REQUIRED",
            Self::StoreFailed => "SITECHECK_CLI_STORE_FAILED",
            Self::SubmitFailed => "SITECHECK_CLI_SUBMIT_FAILED",
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::InvalidInput, msg)
    }

    pub fn confirmation_required(command: &str) -> Self {
        Self::new(
            CliErrorCode::ConfirmationRequired,
            format!("'{}' discards the current form. Re-run with --yes.", command),
        )
    }

    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<FormError> for CliError {
    fn from(e: FormError) -> Self {
        let code = match e {
            FormError::NotReady(_) => CliErrorCode::NotReady,
            FormError::Submission(_) => CliErrorCode::SubmitFailed,
            _ => CliErrorCode::InvalidInput,
        };
        Self::new(code, format!("[{}] {}", e.code(), e))
    }
}

impl From<StoreError> for CliError {
    fn from(e: StoreError) -> Self {
        Self::new(CliErrorCode::StoreFailed, e.to_string())
    }
}

pub type CliResult<T> = Result<T, CliError>;
