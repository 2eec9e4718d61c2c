//! CLI argument definitions using clap
//!
//! Commands:
//! - sitecheck catalog
//! - sitecheck show
//! - sitecheck set-fact <fact> [value]
//! - sitecheck answer <key> <outcome>
//! - sitecheck answer <key> --clear
//! - sitecheck inspector <field> [value]
//! - sitecheck next [--after <index>]
//! - sitecheck report [--out <dir>]
//! - sitecheck submit --yes
//! - sitecheck reset --yes
//!
//! Every command accepts `--config <path>`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::config::DEFAULT_CONFIG_PATH;

/// Construction-site safety document inspection checklist
#[derive(Parser, Debug)]
#[command(name = "sitecheck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the full checklist catalog
    Catalog {
        /// Path to configuration file
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },

    /// Show the saved form, the active checklist and completion status
    Show {
        /// Path to configuration file
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },

    /// Set a construction condition; omit the value to clear it
    SetFact {
        /// Path to configuration file
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// status, cost, hazard-plan or safety-plan
        fact: String,

        /// Slug or label, e.g. in-progress or 공사중
        #[arg(default_value = "")]
        value: String,
    },

    /// Record an outcome for an item or `item.sub-item`
    Answer {
        /// Path to configuration file
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// Item key, or `item.sub-item` for multi-part items
        key: String,

        /// complied, not-complied or not-applicable (or 이행, 불이행, 해당없음)
        #[arg(required_unless_present = "clear")]
        outcome: Option<String>,

        /// Remove the recorded outcome instead
        #[arg(long, conflicts_with = "outcome")]
        clear: bool,
    },

    /// Set an inspector detail; omit the value to clear it
    Inspector {
        /// Path to configuration file
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// headquarters, branch, affiliation, district, date, name or project
        field: String,

        #[arg(default_value = "")]
        value: String,
    },

    /// Jump to the next incomplete checklist item
    Next {
        /// Path to configuration file
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// Cursor index returned by the previous call
        #[arg(long)]
        after: Option<usize>,
    },

    /// Render the plain-text inspection report
    Report {
        /// Path to configuration file
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// Directory to write the report file into
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Submit the completed form and clear it
    Submit {
        /// Path to configuration file
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// Confirm submission
        #[arg(long)]
        yes: bool,
    },

    /// Discard the saved form
    Reset {
        /// Path to configuration file
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// Confirm reset
        #[arg(long)]
        yes: bool,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
