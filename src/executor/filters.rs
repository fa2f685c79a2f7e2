//! Predicate filtering
//!
//! Evaluates constraint sets against rows. No coercion: numeric bounds apply
//! to numeric fields only, set membership compares exact labels.

use crate::dataset::LocalityRecord;
use crate::query::{EmptySelection, Predicate};

/// Evaluates predicates against rows
pub struct PredicateFilter;

impl PredicateFilter {
    /// Checks if a row matches all predicates
    pub fn matches(row: &LocalityRecord, predicates: &[Predicate]) -> bool {
        predicates.iter().all(|pred| Self::matches_predicate(row, pred))
    }

    /// Checks if a row matches a single predicate
    fn matches_predicate(row: &LocalityRecord, predicate: &Predicate) -> bool {
        match predicate {
            Predicate::AtLeast { field, bound } => {
                // Missing value = no match
                row.numeric(*field).map_or(false, |v| v >= *bound)
            }
            Predicate::AtMost { field, bound } => {
                row.numeric(*field).map_or(false, |v| v <= *bound)
            }
            Predicate::OneOf {
                field,
                values,
                on_empty,
            } => {
                if values.is_empty() {
                    return *on_empty == EmptySelection::MatchAll;
                }
                let actual = row.category(*field);
                values.iter().any(|v| v == actual)
            }
            Predicate::NameContains(needle) => {
                if needle.is_empty() {
                    return true;
                }
                row.area_name
                    .to_lowercase()
                    .contains(&needle.to_lowercase())
            }
        }
    }
}
