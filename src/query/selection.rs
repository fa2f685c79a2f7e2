//! Selection: constraints plus optional sort and limit

use super::constraint::{ConstraintSet, Predicate};
use super::sort::SortSpec;

/// A filtered, optionally ranked and truncated view request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    /// Predicates (all combined with AND)
    pub constraints: ConstraintSet,
    /// Sort specification, single field
    pub sort: Option<SortSpec>,
    /// Maximum rows returned; `None` returns all
    pub limit: Option<usize>,
}

impl Selection {
    pub fn new(constraints: ConstraintSet) -> Self {
        Self {
            constraints,
            sort: None,
            limit: None,
        }
    }

    pub fn with_predicate(mut self, predicate: Predicate) -> Self {
        self.constraints.push(predicate);
        self
    }

    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}
