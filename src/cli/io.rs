//! JSON output for CLI commands
//!
//! Every command prints exactly one JSON object on stdout:
//! `{"status":"ok","data":...}` or
//! `{"status":"error","code":...,"message":...}`. UTF-8 only.

use std::io::{self, Write};

use serde_json::Value;

use super::errors::CliResult;

pub fn ok_envelope(data: Value) -> Value {
    serde_json::json!({
        "status": "ok",
        "data": data
    })
}

pub fn error_envelope(code: &str, message: &str) -> Value {
    serde_json::json!({
        "status": "error",
        "code": code,
        "message": message
    })
}

/// Write a success response to stdout
pub fn write_response(data: Value) -> CliResult<()> {
    write_line(&ok_envelope(data))
}

/// Write an error response to stdout
pub fn write_error(code: &str, message: &str) -> CliResult<()> {
    write_line(&error_envelope(code, message))
}

fn write_line(response: &Value) -> CliResult<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, response)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelopes() {
        assert_eq!(ok_envelope(json!(1)), json!({"status": "ok", "data": 1}));
        assert_eq!(
            error_envelope("SITECHECK_CLI_IO_ERROR", "boom"),
            json!({"status": "error", "code": "SITECHECK_CLI_IO_ERROR", "message": "boom"})
        );
    }
}
