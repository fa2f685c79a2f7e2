//! Query engine
//!
//! Pure operations over a table view. None of them mutates its input; every
//! result is freshly allocated.
//!
//! Execution flow for a selection (strict order):
//! 1. Filter rows strictly according to predicates
//! 2. Apply sort (if specified)
//! 3. Apply limit
//! 4. Return ordered results

use crate::advisor::{self, RoiAssumptions, RoiEstimate};
use crate::analytics::{self, Aggregate, GroupedTable, Summary};
use crate::dataset::{CategoricalField, Column, LocalityRecord, Table};
use crate::query::{ConstraintSet, QueryResult, Selection, SortSpec};

use super::filters::PredicateFilter;
use super::result::ExecutionResult;
use super::sorter::ResultSorter;

/// Stateless query engine
pub struct QueryEngine;

impl QueryEngine {
    /// Rows satisfying every predicate, in original relative order.
    ///
    /// An empty constraint set returns the input unchanged.
    pub fn filter(table: &Table, constraints: &ConstraintSet) -> Table {
        table
            .iter()
            .filter(|row| PredicateFilter::matches(row, constraints.predicates()))
            .cloned()
            .collect()
    }

    /// Stable sort on one numeric field, truncated to `limit`.
    ///
    /// `None` or a limit >= row count returns every row.
    pub fn rank_and_limit(table: &Table, sort: &SortSpec, limit: Option<usize>) -> Table {
        let mut rows = table.rows().to_vec();
        ResultSorter::sort(&mut rows, sort);
        if let Some(limit) = limit {
            rows.truncate(limit);
        }
        Table::new(rows)
    }

    /// Group-by over a categorical key
    pub fn group_aggregate(
        table: &Table,
        group_key: CategoricalField,
        metrics: &[Aggregate],
        order_by: Option<usize>,
    ) -> QueryResult<GroupedTable> {
        analytics::group_aggregate(table, group_key, metrics, order_by)
    }

    /// Correlation, descriptive statistics, category and missing counts
    pub fn derived_metrics(table: &Table, columns: &[Column]) -> Summary {
        analytics::derived_metrics(table, columns)
    }

    /// ROI estimate for a single row
    pub fn estimate_roi(
        row: &LocalityRecord,
        investment_budget_lakhs: f64,
        assumptions: &RoiAssumptions,
    ) -> RoiEstimate {
        advisor::estimate_roi(row, investment_budget_lakhs, assumptions)
    }

    /// Executes a selection: filter, then sort, then limit.
    ///
    /// Deterministic: same selection + same table = same result.
    pub fn execute(table: &Table, selection: &Selection) -> ExecutionResult {
        let mut rows = Self::filter(table, &selection.constraints).into_rows();
        let matched_count = rows.len();

        if let Some(sort) = &selection.sort {
            ResultSorter::sort(&mut rows, sort);
        }

        let limit_applied = selection.limit.map_or(false, |l| rows.len() > l);
        if let Some(limit) = selection.limit {
            rows.truncate(limit);
        }

        ExecutionResult {
            scanned_count: table.len(),
            matched_count,
            returned_count: rows.len(),
            limit_applied,
            rows: Table::new(rows),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::testing::record;
    use crate::dataset::NumericField;
    use crate::query::Predicate;

    fn table() -> Table {
        Table::new(vec![
            record("A", "Ludhiana", 20000.0, 70.0),
            record("B", "Patiala", 30000.0, 85.0),
            record("C", "Ludhiana", 15000.0, 55.0),
        ])
    }

    #[test]
    fn test_filter_reference_example() {
        let two = Table::new(vec![
            record("A", "Ludhiana", 20000.0, 70.0),
            record("B", "Patiala", 30000.0, 85.0),
        ]);
        let constraints =
            ConstraintSet::new().with(Predicate::at_most(NumericField::MonthlyRent, 25000.0));

        let out = QueryEngine::filter(&two, &constraints);
        assert_eq!(out.len(), 1);
        assert_eq!(out.rows()[0].area_id, "A");
    }

    #[test]
    fn test_filter_empty_constraints_unchanged() {
        let t = table();
        assert_eq!(QueryEngine::filter(&t, &ConstraintSet::new()), t);
    }

    #[test]
    fn test_filter_does_not_touch_input() {
        let t = table();
        let before = t.clone();
        let _ = QueryEngine::filter(
            &t,
            &ConstraintSet::new().with(Predicate::at_least(NumericField::EconomicHealthScore, 80.0)),
        );
        assert_eq!(t, before);
    }

    #[test]
    fn test_rank_and_limit() {
        let out = QueryEngine::rank_and_limit(
            &table(),
            &SortSpec::desc(NumericField::EconomicHealthScore),
            Some(2),
        );
        let ids: Vec<&str> = out.iter().map(|r| r.area_id.as_str()).collect();
        assert_eq!(ids, vec!["B", "A"]);
    }

    #[test]
    fn test_rank_limit_larger_than_table() {
        let out = QueryEngine::rank_and_limit(&table(), &SortSpec::asc(NumericField::MonthlyRent), Some(50));
        let ids: Vec<&str> = out.iter().map(|r| r.area_id.as_str()).collect();
        assert_eq!(ids, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_rank_zero_limit() {
        let out = QueryEngine::rank_and_limit(&table(), &SortSpec::asc(NumericField::MonthlyRent), Some(0));
        assert!(out.is_empty());
    }

    #[test]
    fn test_execute_counts() {
        let selection = Selection::default()
            .with_predicate(Predicate::at_most(NumericField::MonthlyRent, 25000.0))
            .with_sort(SortSpec::asc(NumericField::MonthlyRent))
            .with_limit(1);

        let result = QueryEngine::execute(&table(), &selection);
        assert_eq!(result.scanned_count, 3);
        assert_eq!(result.matched_count, 2);
        assert_eq!(result.returned_count, 1);
        assert!(result.limit_applied);
        assert_eq!(result.rows.rows()[0].area_id, "C");
    }

    #[test]
    fn test_execute_empty_result_is_not_error() {
        let selection = Selection::default()
            .with_predicate(Predicate::at_most(NumericField::MonthlyRent, 1.0));

        let result = QueryEngine::execute(&table(), &selection);
        assert!(result.is_empty());
        assert!(!result.limit_applied);
    }
}
