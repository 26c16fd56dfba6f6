//! Observability events for sfhb
//!
//! Every log line names one of these events. Events are explicit and typed.

use std::fmt;

use super::logger::Severity;

/// Observable events in the article service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & Lifecycle
    /// Startup begins
    BootStart,
    /// Configuration resolved from file, environment and flags
    ConfigLoaded,
    /// No writer token configured
    AuthDisabled,
    /// HTTP listener bound
    ServerListening,
    /// Server stopped accepting connections
    ShutdownComplete,

    // Store
    /// Collection read from disk
    StoreLoaded,
    /// Collection could not be read
    LoadFailed,
    /// Collection could not be written; in-memory change rolled back
    PersistFailed,

    // Articles
    /// Article appended and persisted
    ArticleCreated,
    /// Article removed and persisted
    ArticleDeleted,
    /// Write rejected by the token gate
    WriteForbidden,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "BOOT_START",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::AuthDisabled => "AUTH_DISABLED",
            Event::ServerListening => "SERVER_LISTENING",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",

            Event::StoreLoaded => "STORE_LOADED",
            Event::LoadFailed => "LOAD_FAILED",
            Event::PersistFailed => "PERSIST_FAILED",

            Event::ArticleCreated => "ARTICLE_CREATED",
            Event::ArticleDeleted => "ARTICLE_DELETED",
            Event::WriteForbidden => "WRITE_FORBIDDEN",
        }
    }

    /// Severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::AuthDisabled | Event::WriteForbidden => Severity::Warn,
            Event::LoadFailed | Event::PersistFailed => Severity::Error,
            Event::StoreLoaded => Severity::Trace,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_events_have_string_representation() {
        let events = [
            Event::BootStart,
            Event::ConfigLoaded,
            Event::AuthDisabled,
            Event::ServerListening,
            Event::ShutdownComplete,
            Event::StoreLoaded,
            Event::LoadFailed,
            Event::PersistFailed,
            Event::ArticleCreated,
            Event::ArticleDeleted,
            Event::WriteForbidden,
        ];

        for event in events {
            let s = event.as_str();
            assert!(!s.is_empty());
            assert!(s.chars().all(|c| c.is_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_event_severity() {
        assert_eq!(Event::AuthDisabled.severity(), Severity::Warn);
        assert_eq!(Event::PersistFailed.severity(), Severity::Error);
        assert_eq!(Event::ArticleCreated.severity(), Severity::Info);
    }

    #[test]
    fn test_event_display() {
        assert_eq!(format!("{}", Event::BootStart), "BOOT_START");
        assert_eq!(format!("{}", Event::ArticleDeleted), "ARTICLE_DELETED");
    }
}
