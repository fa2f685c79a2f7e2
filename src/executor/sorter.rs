//! Result sorting
//!
//! Stable sort on one numeric field. Rows whose key is missing sort last in
//! either direction.

use std::cmp::Ordering;

use crate::dataset::LocalityRecord;
use crate::query::{SortDirection, SortSpec};

/// Sorts rows
pub struct ResultSorter;

impl ResultSorter {
    /// Sorts rows according to the sort specification. Ties keep input order.
    pub fn sort(rows: &mut [LocalityRecord], sort_spec: &SortSpec) {
        rows.sort_by(|a, b| {
            Self::compare_keys(
                a.numeric(sort_spec.field),
                b.numeric(sort_spec.field),
                sort_spec.direction,
            )
        });
    }

    /// Compares two optional keys under `direction`, missing keys last
    pub fn compare_keys(a: Option<f64>, b: Option<f64>, direction: SortDirection) -> Ordering {
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(x), Some(y)) => {
                let ordering = x.partial_cmp(&y).unwrap_or(Ordering::Equal);
                match direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            }
        }
    }
}
