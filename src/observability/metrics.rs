//! Session counters
//!
//! - Counters only, monotonic
//! - Reset only when a session starts
//! - Relaxed atomics; exact totals, no cross-counter ordering

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Counters for one CLI session
#[derive(Debug, Default)]
pub struct SessionMetrics {
    queries_executed: AtomicU64,
    queries_rejected: AtomicU64,
    empty_results: AtomicU64,
    rows_returned: AtomicU64,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a successful query and the rows it returned
    pub fn record_executed(&self, rows: usize) {
        self.queries_executed.fetch_add(1, Ordering::Relaxed);
        self.rows_returned.fetch_add(rows as u64, Ordering::Relaxed);
    }

    pub fn increment_queries_rejected(&self) {
        self.queries_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_empty_results(&self) {
        self.empty_results.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            queries_executed: self.queries_executed.load(Ordering::Relaxed),
            queries_rejected: self.queries_rejected.load(Ordering::Relaxed),
            empty_results: self.empty_results.load(Ordering::Relaxed),
            rows_returned: self.rows_returned.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time copy of the session counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub queries_executed: u64,
    pub queries_rejected: u64,
    pub empty_results: u64,
    pub rows_returned: u64,
}

impl MetricsSnapshot {
    /// Counters as log fields
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("empty_results", self.empty_results.to_string()),
            ("queries_executed", self.queries_executed.to_string()),
            ("queries_rejected", self.queries_rejected.to_string()),
            ("rows_returned", self.rows_returned.to_string()),
        ]
    }
}
