//! Observability subsystem
//!
//! - Structured logging (JSON lines on stderr)
//! - Typed lifecycle events
//! - Per-session counters
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on query results
//! 3. No async or background threads
//! 4. Deterministic output
//!
//! # Usage
//!
//! ```ignore
//! use hyperlocal::observability::{log_event_with_fields, Event, SessionMetrics};
//!
//! log_event_with_fields(Event::QueryExecuted, &[("op", "rank"), ("rows", "10")]);
//!
//! let metrics = SessionMetrics::new();
//! metrics.record_executed(10);
//! ```

mod events;
mod logger;
mod metrics;
mod scope;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsSnapshot, SessionMetrics};
pub use scope::ObservationScope;

fn default_severity(event: Event) -> Severity {
    match event {
        e if e.is_fatal() => Severity::Fatal,
        Event::QueryRejected => Severity::Warn,
        _ => Severity::Info,
    }
}

/// Log a lifecycle event
pub fn log_event(event: Event) {
    Logger::log(default_severity(event), event.as_str(), &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(default_severity(event), event.as_str(), fields);
}
