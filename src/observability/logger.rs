//! Structured JSON logger for sfhb
//!
//! - One log line = one event
//! - `event` first, `severity` second, remaining keys sorted
//! - Synchronous, no buffering
//! - Events below the process-wide minimum severity are dropped

use std::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU8, Ordering};

use serde::{Deserialize, Serialize};

use super::events::Event;

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Debug-level detail
    Trace = 0,
    /// Normal operations
    Info = 1,
    /// Recoverable issues
    Warn = 2,
    /// Operation failures
    Error = 3,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }

    fn from_u8(value: u8) -> Self {
        match value {
            0 => Severity::Trace,
            1 => Severity::Info,
            2 => Severity::Warn,
            _ => Severity::Error,
        }
    }
}

impl Default for Severity {
    fn default() -> Self {
        Severity::Info
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

static MIN_SEVERITY: AtomicU8 = AtomicU8::new(Severity::Info as u8);

/// A structured logger that outputs JSON logs
pub struct Logger;

impl Logger {
    /// Drop events below `severity` from now on
    pub fn set_min_severity(severity: Severity) {
        MIN_SEVERITY.store(severity as u8, Ordering::Relaxed);
    }

    /// Current minimum severity
    pub fn min_severity() -> Severity {
        Severity::from_u8(MIN_SEVERITY.load(Ordering::Relaxed))
    }

    /// Log a typed event at its own severity.
    ///
    /// ERROR goes to stderr, everything else to stdout.
    pub fn emit(event: Event, fields: &[(&str, &str)]) {
        let severity = event.severity();
        let min = Self::min_severity();
        if severity >= Severity::Error {
            Self::log_to_writer(min, severity, event.as_str(), fields, &mut io::stderr());
        } else {
            Self::log_to_writer(min, severity, event.as_str(), fields, &mut io::stdout());
        }
    }

    fn log_to_writer<W: Write>(
        min: Severity,
        severity: Severity,
        event: &str,
        fields: &[(&str, &str)],
        writer: &mut W,
    ) {
        if severity < min {
            return;
        }

        let line = Self::render(severity, event, fields);

        // One write per line so concurrent handlers never interleave
        let _ = writer.write_all(line.as_bytes());
        let _ = writer.flush();
    }

    fn render(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        let mut output = String::with_capacity(256);

        output.push_str("{\"event\":");
        Self::push_json_string(&mut output, event);
        output.push_str(",\"severity\":");
        Self::push_json_string(&mut output, severity.as_str());

        let mut sorted_fields: Vec<_> = fields.iter().collect();
        sorted_fields.sort_by_key(|(k, _)| *k);

        for (key, value) in sorted_fields {
            output.push(',');
            Self::push_json_string(&mut output, key);
            output.push(':');
            Self::push_json_string(&mut output, value);
        }

        output.push_str("}\n");
        output
    }

    fn push_json_string(output: &mut String, s: &str) {
        match serde_json::to_string(s) {
            Ok(quoted) => output.push_str(&quoted),
            Err(_) => output.push_str("\"\""),
        }
    }
}

/// Capture logs to a buffer for testing
#[cfg(test)]
pub fn capture_log(
    min: Severity,
    severity: Severity,
    event: &str,
    fields: &[(&str, &str)],
) -> String {
    let mut buffer = Vec::new();
    Logger::log_to_writer(min, severity, event, fields, &mut buffer);
    String::from_utf8(buffer).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Trace < Severity::Info);
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
    }

    #[test]
    fn test_severity_config_names() {
        let s: Severity = serde_json::from_str("\"trace\"").unwrap();
        assert_eq!(s, Severity::Trace);
        assert_eq!(Severity::default(), Severity::Info);
        for s in [Severity::Trace, Severity::Info, Severity::Warn, Severity::Error] {
            assert_eq!(Severity::from_u8(s as u8), s);
        }
    }

    #[test]
    fn test_below_minimum_is_dropped() {
        let dropped = capture_log(Severity::Info, Severity::Trace, "STORE_LOADED", &[]);
        assert!(dropped.is_empty());

        let kept = capture_log(Severity::Trace, Severity::Trace, "STORE_LOADED", &[]);
        assert!(kept.contains("STORE_LOADED"));

        let warn = capture_log(Severity::Info, Severity::Warn, "AUTH_DISABLED", &[]);
        assert!(warn.contains("AUTH_DISABLED"));
    }

    #[test]
    fn test_log_json_format() {
        let output = capture_log(
            Severity::Info,
            Severity::Info,
            "ARTICLE_CREATED",
            &[("id", "abc")],
        );

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["event"], "ARTICLE_CREATED");
        assert_eq!(parsed["severity"], "INFO");
        assert_eq!(parsed["id"], "abc");
    }

    #[test]
    fn test_log_deterministic_ordering() {
        let output1 = capture_log(
            Severity::Info,
            Severity::Info,
            "TEST",
            &[("zebra", "1"), ("apple", "2"), ("mango", "3")],
        );
        let output2 = capture_log(
            Severity::Info,
            Severity::Info,
            "TEST",
            &[("apple", "2"), ("mango", "3"), ("zebra", "1")],
        );

        assert_eq!(output1, output2);

        let event_pos = output1.find("\"event\"").unwrap();
        let severity_pos = output1.find("\"severity\"").unwrap();
        let apple_pos = output1.find("apple").unwrap();
        let zebra_pos = output1.find("zebra").unwrap();
        assert!(event_pos < severity_pos);
        assert!(severity_pos < apple_pos);
        assert!(apple_pos < zebra_pos);
    }

    #[test]
    fn test_log_escapes_special_chars() {
        let output = capture_log(
            Severity::Info,
            Severity::Warn,
            "TEST",
            &[("path", "C:\\data\n\"quoted\"")],
        );

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["path"], "C:\\data\n\"quoted\"");
        assert_eq!(output.chars().filter(|c| *c == '\n').count(), 1);
    }
}
