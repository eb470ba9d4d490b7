//! Observability subsystem for fixrow
//!
//! This module provides:
//! - Structured logging (JSON lines on stderr)
//! - Codec metrics (atomic counters)
//! - Typed lifecycle and record events
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on encoding or decoding
//! 3. No async or background threads
//! 4. Deterministic output
//!
//! # Usage
//!
//! ```ignore
//! use fixrow::observability::{log_event_with_fields, CodecMetrics, Event};
//!
//! log_event_with_fields(Event::SchemasLoaded, &[("tables", "3")]);
//!
//! let metrics = CodecMetrics::new();
//! metrics.record_encoded(8);
//! ```

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{CodecMetrics, MetricsSnapshot};

/// Log an event with fields at its own severity
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
