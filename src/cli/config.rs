//! CLI configuration
//!
//! A JSON file passed with `--config`. When the file does not exist the
//! defaults are used, so a fresh checkout works without one.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::observability::Severity;

use super::errors::{CliError, CliResult};

pub const DEFAULT_CONFIG_PATH: &str = "./sitecheck.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the saved form and the submission outbox
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Submissions are POSTed here; empty appends them to the outbox
    #[serde(default)]
    pub endpoint: String,

    /// Minimum log severity: trace, info, warn or error
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_data_dir() -> String {
    "./.sitecheck".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            endpoint: String::new(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file, falling back to defaults when the
    /// file is absent.
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(CliError::config_error(format!(
                    "Failed to read config: {}",
                    e
                )))
            }
        };

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> CliResult<()> {
        if self.data_dir.trim().is_empty() {
            return Err(CliError::config_error("data_dir must not be empty"));
        }

        self.severity()?;

        if !self.endpoint.is_empty()
            && !self.endpoint.starts_with("https://")
            && !self.endpoint.starts_with("http://")
        {
            return Err(CliError::config_error(format!(
                "Invalid endpoint: '{}'. Expected an http(s) URL.",
                self.endpoint
            )));
        }

        Ok(())
    }

    pub fn severity(&self) -> CliResult<Severity> {
        self.log_level.parse().map_err(|_| {
            CliError::config_error(format!(
                "Invalid log_level: '{}'. Expected trace, info, warn or error.",
                self.log_level
            ))
        })
    }

    pub fn data_path(&self) -> &Path {
        Path::new(&self.data_dir)
    }

    pub fn outbox_path(&self) -> PathBuf {
        self.data_path().join("outbox.jsonl")
    }
}
