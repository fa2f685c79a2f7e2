//! Result types for query execution

use serde::Serialize;

use crate::dataset::{LocalityRecord, Table};

/// Result of executing a selection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutionResult {
    /// Rows in result order
    pub rows: Table,
    /// Number of rows examined
    pub scanned_count: usize,
    /// Number of rows satisfying the constraints, before the limit
    pub matched_count: usize,
    /// Number of rows returned
    pub returned_count: usize,
    /// Whether the limit truncated the result
    pub limit_applied: bool,
}

impl ExecutionResult {
    /// Creates an empty result
    pub fn empty() -> Self {
        Self {
            rows: Table::default(),
            scanned_count: 0,
            matched_count: 0,
            returned_count: 0,
            limit_applied: false,
        }
    }

    /// Returns true if no rows matched. An empty result is a valid outcome.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of results
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns an iterator over the rows
    pub fn iter(&self) -> impl Iterator<Item = &LocalityRecord> {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execution_result_empty() {
        let result = ExecutionResult::empty();
        assert!(result.is_empty());
        assert_eq!(result.len(), 0);
        assert!(!result.limit_applied);
    }
}
