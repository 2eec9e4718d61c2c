//! Form store errors
//!
//! Error codes:
//! - SITECHECK_STORE_WRITE_FAILED
//! - SITECHECK_STORE_READ_FAILED
//! - SITECHECK_STORE_CORRUPTED: the stored form cannot be trusted and
//!   the caller should start from a blank form

use std::fmt;
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorCode {
    WriteFailed,
    ReadFailed,
    Corrupted,
}

impl StoreErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            StoreErrorCode::WriteFailed => "SITECHECK_STORE_WRITE_FAILED",
            StoreErrorCode::ReadFailed => "SITECHECK_STORE_READ_FAILED",
            StoreErrorCode::Corrupted => "SITECHECK_STORE_CORRUPTED",
        }
    }
}

impl fmt::Display for StoreErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Debug)]
pub struct StoreError {
    code: StoreErrorCode,
    message: String,
    source: Option<io::Error>,
}

impl StoreError {
    pub fn write_failed(message: impl Into<String>, source: io::Error) -> Self {
        Self {
            code: StoreErrorCode::WriteFailed,
            message: message.into(),
            source: Some(source),
        }
    }

    /// Write failure with no underlying I/O error (encoding)
    pub fn write_failed_no_source(message: impl Into<String>) -> Self {
        Self {
            code: StoreErrorCode::WriteFailed,
            message: message.into(),
            source: None,
        }
    }

    pub fn read_failed(message: impl Into<String>, source: io::Error) -> Self {
        Self {
            code: StoreErrorCode::ReadFailed,
            message: message.into(),
            source: Some(source),
        }
    }

    pub fn corrupted(message: impl Into<String>) -> Self {
        Self {
            code: StoreErrorCode::Corrupted,
            message: message.into(),
            source: None,
        }
    }

    pub fn code(&self) -> StoreErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_corruption(&self) -> bool {
        self.code == StoreErrorCode::Corrupted
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)?;
        if let Some(ref source) = self.source {
            write!(f, " ({})", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e as &(dyn std::error::Error + 'static))
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
