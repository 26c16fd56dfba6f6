//! JSON output for one-shot commands
//!
//! One JSON object per line on stdout, UTF-8 only.

use std::io::{self, Write};

use serde_json::Value;

use super::errors::CliResult;

/// Write a success response to stdout
pub fn write_response(data: Value) -> CliResult<()> {
    let response = success_envelope(data);

    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, &response)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}

fn success_envelope(data: Value) -> Value {
    serde_json::json!({
        "status": "ok",
        "data": data
    })
}
