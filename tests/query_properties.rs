//! Query Engine Property Tests
//!
//! Tests for engine invariants over the fixture dataset:
//! - Filter output is a subsequence of its input
//! - Filtering is idempotent
//! - Ranked output is ordered, with missing keys last
//! - Limit yields min(limit, n) rows
//! - An empty constraint set returns the input unchanged

use hyperlocal::dataset::{
    CategoricalField, DataSource, DatasetLoader, CsvDataSource, NumericField, Table,
};
use hyperlocal::executor::QueryEngine;
use hyperlocal::query::{ConstraintSet, EmptySelection, Predicate, Selection, SortSpec};
use std::path::PathBuf;
use std::sync::Arc;

// =============================================================================
// Helper Functions
// =============================================================================

fn fixture_table() -> Arc<Table> {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let loader = DatasetLoader::with_candidates(dir, vec![PathBuf::from("localities.csv")]);
    CsvDataSource::new(loader).table().unwrap()
}

fn ids(table: &Table) -> Vec<&str> {
    table.iter().map(|r| r.area_id.as_str()).collect()
}

fn is_subsequence(sub: &[&str], full: &[&str]) -> bool {
    let mut it = full.iter();
    sub.iter().all(|s| it.any(|f| f == s))
}

fn mixed_constraints() -> ConstraintSet {
    ConstraintSet::new()
        .with(Predicate::at_most(NumericField::MonthlyRent, 25000.0))
        .with(Predicate::one_of(
            CategoricalField::LocalityType,
            ["Commercial", "Mixed"],
            EmptySelection::MatchNone,
        ))
}

// =============================================================================
// Filter Tests
// =============================================================================

/// Filter keeps the original relative order of the rows it keeps.
#[test]
fn test_filter_is_subsequence() {
    let table = fixture_table();
    let filtered = QueryEngine::filter(&table, &mixed_constraints());

    assert!(!filtered.is_empty());
    assert!(is_subsequence(&ids(&filtered), &ids(&table)));
}

/// Filtering an already filtered view changes nothing.
#[test]
fn test_filter_is_idempotent() {
    let table = fixture_table();
    let constraints = mixed_constraints();

    let once = QueryEngine::filter(&table, &constraints);
    let twice = QueryEngine::filter(&once, &constraints);
    assert_eq!(once, twice);
}

/// Empty constraint set returns every row in order.
#[test]
fn test_empty_constraints_return_input() {
    let table = fixture_table();
    let filtered = QueryEngine::filter(&table, &ConstraintSet::new());
    assert_eq!(&filtered, table.as_ref());
}

/// Inclusive upper bound on rent.
#[test]
fn test_filter_rent_bound() {
    let table = fixture_table();
    let constraints =
        ConstraintSet::new().with(Predicate::at_most(NumericField::MonthlyRent, 9000.0));
    let filtered = QueryEngine::filter(&table, &constraints);
    assert_eq!(ids(&filtered), vec!["LDH_003", "AMR_002", "JAL_002"]);
}

/// Empty selection honors the predicate's policy.
#[test]
fn test_empty_selection_policies() {
    let table = fixture_table();

    let all = ConstraintSet::new().with(Predicate::one_of(
        CategoricalField::City,
        Vec::<String>::new(),
        EmptySelection::MatchAll,
    ));
    assert_eq!(QueryEngine::filter(&table, &all).len(), table.len());

    let none = ConstraintSet::new().with(Predicate::one_of(
        CategoricalField::City,
        Vec::<String>::new(),
        EmptySelection::MatchNone,
    ));
    assert!(QueryEngine::filter(&table, &none).is_empty());
}

/// A numeric bound never matches a missing value.
#[test]
fn test_bound_skips_missing_values() {
    let table = fixture_table();
    let constraints =
        ConstraintSet::new().with(Predicate::at_least(NumericField::PedestrianCount15Min, 0.0));
    let filtered = QueryEngine::filter(&table, &constraints);

    assert_eq!(filtered.len(), table.len() - 1);
    assert!(!ids(&filtered).contains(&"PTA_002"));
}

/// Name search is case-insensitive.
#[test]
fn test_name_contains() {
    let table = fixture_table();
    let constraints = ConstraintSet::new().with(Predicate::name_contains("model"));
    let filtered = QueryEngine::filter(&table, &constraints);
    assert_eq!(ids(&filtered), vec!["LDH_002", "JAL_001"]);
}

// =============================================================================
// Rank Tests
// =============================================================================

/// Descending rank is ordered by the key.
#[test]
fn test_rank_is_sorted() {
    let table = fixture_table();
    let ranked = QueryEngine::rank_and_limit(
        &table,
        &SortSpec::desc(NumericField::EconomicHealthScore),
        None,
    );

    let scores: Vec<f64> = ranked.iter().map(|r| r.economic_health_score).collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(ranked.len(), table.len());
}

/// Rows missing the sort key come last in either direction.
#[test]
fn test_rank_missing_keys_last() {
    let table = fixture_table();

    for sort in [
        SortSpec::asc(NumericField::ExpectedReturn),
        SortSpec::desc(NumericField::ExpectedReturn),
    ] {
        let ranked = QueryEngine::rank_and_limit(&table, &sort, None);
        assert_eq!(ranked.rows().last().unwrap().area_id, "PTA_003");
    }
}

/// Limit yields min(limit, n) rows.
#[test]
fn test_rank_limit_length() {
    let table = fixture_table();
    let sort = SortSpec::desc(NumericField::FootfallScore);

    for limit in [0, 1, 3, table.len(), table.len() + 5] {
        let ranked = QueryEngine::rank_and_limit(&table, &sort, Some(limit));
        assert_eq!(ranked.len(), limit.min(table.len()));
    }
}

/// Top three by health score.
#[test]
fn test_rank_top_three() {
    let table = fixture_table();
    let ranked = QueryEngine::rank_and_limit(
        &table,
        &SortSpec::desc(NumericField::EconomicHealthScore),
        Some(3),
    );
    assert_eq!(ids(&ranked), vec!["AMR_001", "LDH_001", "PTA_001"]);
}

// =============================================================================
// Selection Tests
// =============================================================================

/// Execute reports scanned, matched and returned counts.
#[test]
fn test_execute_counts() {
    let table = fixture_table();
    let selection = Selection::new(mixed_constraints())
        .with_sort(SortSpec::asc(NumericField::RiskScore))
        .with_limit(2);

    let result = QueryEngine::execute(&table, &selection);
    assert_eq!(result.scanned_count, table.len());
    assert_eq!(result.matched_count, 7);
    assert_eq!(result.returned_count, 2);
    assert!(result.limit_applied);
    assert_eq!(ids(&result.rows), vec!["LDH_001", "PTA_001"]);
}

/// Execute never mutates the source table.
#[test]
fn test_execute_leaves_input_untouched() {
    let table = fixture_table();
    let before = table.as_ref().clone();

    let selection = Selection::default().with_sort(SortSpec::asc(NumericField::MonthlyRent));
    let _ = QueryEngine::execute(&table, &selection);

    assert_eq!(table.as_ref(), &before);
}
