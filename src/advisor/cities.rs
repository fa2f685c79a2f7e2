//! City comparison

use crate::analytics::{group_aggregate, Aggregate, GroupedTable};
use crate::dataset::{CategoricalField, NumericField, Table};
use crate::query::QueryResult;

/// Metrics reported per city, in output column order
pub const CITY_METRICS: [Aggregate; 4] = [
    Aggregate::Mean(NumericField::EconomicHealthScore),
    Aggregate::Mean(NumericField::MonthlyRent),
    Aggregate::Mean(NumericField::PropertyPriceSqft),
    Aggregate::Count,
];

/// Per-city means and counts, healthiest city first
pub fn compare_cities(view: &Table) -> QueryResult<GroupedTable> {
    group_aggregate(view, CategoricalField::City, &CITY_METRICS, Some(0))
}
