//! Observable events for fixrow
//!
//! Events are explicit and typed.

use std::fmt;

use super::logger::Severity;

/// Observable events in fixrow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    /// Configuration loaded
    ConfigLoaded,

    // Catalog
    /// Table definitions loaded from disk
    SchemasLoaded,
    /// A table schema was registered
    SchemaRegistered,

    // Records
    /// Candidate tuple rejected by verification
    RecordRejected,
    /// Record encoded
    RecordEncoded,
    /// Record decoded
    RecordDecoded,
    /// Decode input shorter than the record size (FATAL)
    DecodeUnderrun,

    // CLI
    /// Command started
    CommandBegin,
    /// Command finished
    CommandComplete,
    /// Command stopped on an error
    CommandFailed,
}

impl Event {
    /// Returns the event name
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::SchemasLoaded => "SCHEMAS_LOADED",
            Event::SchemaRegistered => "SCHEMA_REGISTERED",
            Event::RecordRejected => "RECORD_REJECTED",
            Event::RecordEncoded => "RECORD_ENCODED",
            Event::RecordDecoded => "RECORD_DECODED",
            Event::DecodeUnderrun => "DECODE_UNDERRUN",
            Event::CommandBegin => "CLI_COMMAND_BEGIN",
            Event::CommandComplete => "CLI_COMMAND_COMPLETE",
            Event::CommandFailed => "CLI_COMMAND_FAILED",
        }
    }

    /// Returns the severity this event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::RecordEncoded | Event::RecordDecoded | Event::SchemaRegistered => {
                Severity::Trace
            }
            Event::RecordRejected => Severity::Warn,
            Event::CommandFailed => Severity::Error,
            Event::DecodeUnderrun => Severity::Fatal,
            _ => Severity::Info,
        }
    }

    /// Returns true if this event stops processing
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
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
    fn test_event_names() {
        assert_eq!(Event::SchemasLoaded.as_str(), "SCHEMAS_LOADED");
        assert_eq!(Event::RecordRejected.to_string(), "RECORD_REJECTED");
        assert_eq!(Event::CommandBegin.as_str(), "CLI_COMMAND_BEGIN");
    }

    #[test]
    fn test_event_severity() {
        assert_eq!(Event::RecordEncoded.severity(), Severity::Trace);
        assert_eq!(Event::RecordRejected.severity(), Severity::Warn);
        assert_eq!(Event::ConfigLoaded.severity(), Severity::Info);
        assert_eq!(Event::CommandFailed.severity(), Severity::Error);
        assert!(Event::DecodeUnderrun.is_fatal());
        assert!(!Event::RecordRejected.is_fatal());
    }
}
