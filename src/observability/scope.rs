//! ObservationScope for begin/complete logging
//!
//! - Logs `{name}_BEGIN` on creation
//! - Logs `{name}_COMPLETE` or `{name}_FAILED` when closed
//! - Logs `{name}_INCOMPLETE` if dropped without either

use std::cell::Cell;
use std::time::Instant;

use super::logger::Logger;

/// A scope that logs begin and end events around one operation
///
/// ```ignore
/// let scope = ObservationScope::new("DATASET_LOAD");
/// // ... load ...
/// scope.complete_with_fields(&[("rows", "42")]);
/// ```
pub struct ObservationScope<'a> {
    name: &'a str,
    completed: Cell<bool>,
    started: Instant,
}

impl<'a> ObservationScope<'a> {
    /// Logs `{name}_BEGIN` immediately
    pub fn new(name: &'a str) -> Self {
        Logger::info(&format!("{}_BEGIN", name), &[]);

        Self {
            name,
            completed: Cell::new(false),
            started: Instant::now(),
        }
    }

    pub fn complete(self) {
        self.complete_with_fields(&[]);
    }

    /// Logs `{name}_COMPLETE` with elapsed time and extra fields
    pub fn complete_with_fields(self, extra_fields: &[(&str, &str)]) {
        self.completed.set(true);
        let elapsed = self.elapsed_ms();

        let mut fields: Vec<(&str, &str)> = vec![("elapsed_ms", elapsed.as_str())];
        fields.extend(extra_fields.iter().copied());

        Logger::info(&format!("{}_COMPLETE", self.name), &fields);
    }

    /// Logs `{name}_FAILED` at ERROR
    pub fn fail(self, reason: &str) {
        self.completed.set(true);
        Logger::error(&format!("{}_FAILED", self.name), &[("reason", reason)]);
    }

    /// Logs `{name}_FAILED` at FATAL
    pub fn fail_fatal(self, reason: &str) {
        self.completed.set(true);
        Logger::fatal(&format!("{}_FAILED", self.name), &[("reason", reason)]);
    }

    pub fn is_completed(&self) -> bool {
        self.completed.get()
    }

    fn elapsed_ms(&self) -> String {
        self.started.elapsed().as_millis().to_string()
    }
}

impl Drop for ObservationScope<'_> {
    fn drop(&mut self) {
        if !self.completed.get() {
            Logger::warn(
                &format!("{}_INCOMPLETE", self.name),
                &[("reason", "scope dropped without completion")],
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_lifecycle() {
        let scope = ObservationScope::new("DATASET_LOAD");
        assert!(!scope.is_completed());
        scope.complete_with_fields(&[("path", "data/hyperlocal.csv"), ("rows", "3")]);
    }

    #[test]
    fn test_scope_elapsed_is_numeric() {
        let scope = ObservationScope::new("EXPORT");
        assert!(scope.elapsed_ms().parse::<u128>().is_ok());
        scope.complete();
    }

    #[test]
    fn test_scope_failure_paths() {
        ObservationScope::new("DATASET_LOAD").fail("Line 4: risk_score out of range");
        ObservationScope::new("DATASET_LOAD").fail_fatal("Could not find dataset");
    }

    #[test]
    fn test_scope_dropped_open() {
        let scope = ObservationScope::new("SERVE");
        drop(scope);
    }
}
