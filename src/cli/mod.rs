//! CLI for the inspection form
//!
//! One command per invocation; the form is saved under the configured
//! data directory between invocations. Responses are single JSON objects
//! on stdout, log lines go to stderr.

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{
    answer, catalog, clear_answer, inspector, next, report, reset, run, run_command, set_fact,
    show, submit,
};
pub use config::{Config, DEFAULT_CONFIG_PATH};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{error_envelope, ok_envelope, write_error, write_response};
