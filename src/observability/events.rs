//! Observable events
//!
//! Events are explicit and typed. Dataset load begin/complete/failed are
//! emitted by `ObservationScope::new("DATASET_LOAD")`.

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    /// Configuration loaded (or defaults applied)
    ConfigLoaded,

    // Dataset
    /// Dataset load started
    DatasetLoadBegin,
    /// Dataset parsed and validated
    DatasetLoadComplete,
    /// Dataset present but malformed (FATAL)
    DatasetLoadFailed,
    /// No candidate path exists (FATAL)
    DatasetNotFound,

    // Session
    /// Session opened
    SessionStart,
    /// Session closed, counters attached
    SessionEnd,

    // Query
    /// Query executed successfully
    QueryExecuted,
    /// Query rejected at the request boundary
    QueryRejected,
    /// Query matched no rows
    EmptyResult,
}

impl Event {
    pub const ALL: [Event; 10] = [
        Event::ConfigLoaded,
        Event::DatasetLoadBegin,
        Event::DatasetLoadComplete,
        Event::DatasetLoadFailed,
        Event::DatasetNotFound,
        Event::SessionStart,
        Event::SessionEnd,
        Event::QueryExecuted,
        Event::QueryRejected,
        Event::EmptyResult,
    ];

    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",

            Event::DatasetLoadBegin => "DATASET_LOAD_BEGIN",
            Event::DatasetLoadComplete => "DATASET_LOAD_COMPLETE",
            Event::DatasetLoadFailed => "DATASET_LOAD_FAILED",
            Event::DatasetNotFound => "DATASET_NOT_FOUND",

            Event::SessionStart => "SESSION_START",
            Event::SessionEnd => "SESSION_END",

            Event::QueryExecuted => "QUERY_EXECUTED",
            Event::QueryRejected => "QUERY_REJECTED",
            Event::EmptyResult => "EMPTY_RESULT",
        }
    }

    /// Returns true if this event indicates a fatal condition
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::DatasetLoadFailed | Event::DatasetNotFound)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
