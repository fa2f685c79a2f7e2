//! Group-by aggregation
//!
//! One output row per distinct value of a categorical key. Groups are ordered
//! by the chosen aggregate descending; undefined values sort last and ties
//! fall back to ascending key.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::Serialize;

use crate::dataset::{CategoricalField, LocalityRecord, NumericField, Table};
use crate::query::{resolve, QueryError, QueryResult};

use super::stats;

/// An aggregate computed per group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregate {
    /// Mean of a numeric field, skipping missing values
    Mean(NumericField),
    /// Row count
    Count,
}

impl Aggregate {
    /// Output column label, e.g. `mean_monthly_rent` or `count`
    pub fn label(&self) -> String {
        match self {
            Aggregate::Mean(field) => format!("mean_{}", field),
            Aggregate::Count => "count".to_string(),
        }
    }

    /// Parses `count` or `mean:<field>`
    pub fn parse(spec: &str) -> QueryResult<Self> {
        if spec == "count" {
            return Ok(Aggregate::Count);
        }
        match spec.strip_prefix("mean:") {
            Some(field) => Ok(Aggregate::Mean(resolve::numeric_field(field)?)),
            None => Err(QueryError::InvalidParameter {
                name: "metrics",
                reason: format!("expected 'count' or 'mean:<field>', got '{}'", spec),
            }),
        }
    }

    fn compute(&self, members: &[&LocalityRecord]) -> Option<f64> {
        match self {
            Aggregate::Count => Some(members.len() as f64),
            Aggregate::Mean(field) => {
                let values: Vec<f64> = members.iter().filter_map(|r| r.numeric(*field)).collect();
                stats::mean(&values)
            }
        }
    }
}

/// One aggregated group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupRow {
    pub key: String,
    /// One value per requested aggregate, in request order
    pub values: Vec<Option<f64>>,
}

/// Result of a group-by
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedTable {
    pub group_key: &'static str,
    pub columns: Vec<String>,
    pub rows: Vec<GroupRow>,
}

impl GroupedTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Finds a group by key
    pub fn get(&self, key: &str) -> Option<&GroupRow> {
        self.rows.iter().find(|r| r.key == key)
    }
}

/// Groups `table` by `group_key` and computes `metrics` per group.
///
/// `order_by` indexes into `metrics`; `None` keeps ascending key order.
pub fn group_aggregate(
    table: &Table,
    group_key: CategoricalField,
    metrics: &[Aggregate],
    order_by: Option<usize>,
) -> QueryResult<GroupedTable> {
    if let Some(idx) = order_by {
        if idx >= metrics.len() {
            return Err(QueryError::InvalidParameter {
                name: "order_by",
                reason: format!("index {} out of range for {} metrics", idx, metrics.len()),
            });
        }
    }

    let mut groups: BTreeMap<&str, Vec<&LocalityRecord>> = BTreeMap::new();
    for row in table {
        groups.entry(row.category(group_key)).or_default().push(row);
    }

    let mut rows: Vec<GroupRow> = groups
        .into_iter()
        .map(|(key, members)| GroupRow {
            key: key.to_string(),
            values: metrics.iter().map(|m| m.compute(&members)).collect(),
        })
        .collect();

    if let Some(idx) = order_by {
        // stable: equal aggregates keep ascending key order
        rows.sort_by(|a, b| match (a.values[idx], b.values[idx]) {
            (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
    }

    Ok(GroupedTable {
        group_key: group_key.as_str(),
        columns: metrics.iter().map(Aggregate::label).collect(),
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::testing::record;

    fn table() -> Table {
        Table::new(vec![
            record("1", "Patiala", 10000.0, 40.0),
            record("2", "Ludhiana", 20000.0, 80.0),
            record("3", "Patiala", 30000.0, 60.0),
            record("4", "Amritsar", 15000.0, 70.0),
            record("5", "Ludhiana", 40000.0, 60.0),
        ])
    }

    #[test]
    fn test_one_row_per_distinct_key() {
        let grouped = group_aggregate(&table(), CategoricalField::City, &[Aggregate::Count], None).unwrap();
        assert_eq!(grouped.len(), 3);
        let keys: Vec<&str> = grouped.rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["Amritsar", "Ludhiana", "Patiala"]);
    }

    #[test]
    fn test_means_and_ordering() {
        let metrics = [
            Aggregate::Mean(NumericField::EconomicHealthScore),
            Aggregate::Mean(NumericField::MonthlyRent),
            Aggregate::Count,
        ];
        let grouped = group_aggregate(&table(), CategoricalField::City, &metrics, Some(0)).unwrap();

        let keys: Vec<&str> = grouped.rows.iter().map(|r| r.key.as_str()).collect();
        // Ludhiana 70, Amritsar 70, Patiala 50: the tie keeps key order
        assert_eq!(keys, vec!["Amritsar", "Ludhiana", "Patiala"]);

        let ludhiana = grouped.get("Ludhiana").unwrap();
        assert_eq!(ludhiana.values, vec![Some(70.0), Some(30000.0), Some(2.0)]);
        assert_eq!(
            grouped.columns,
            vec!["mean_economic_health_score", "mean_monthly_rent", "count"]
        );
    }

    #[test]
    fn test_undefined_mean_sorts_last() {
        let mut a = record("1", "A", 1.0, 50.0);
        a.expected_return = None;
        let mut b = record("2", "B", 1.0, 50.0);
        b.expected_return = Some(3.0);

        let grouped = group_aggregate(
            &Table::new(vec![a, b]),
            CategoricalField::City,
            &[Aggregate::Mean(NumericField::ExpectedReturn)],
            Some(0),
        )
        .unwrap();

        assert_eq!(grouped.rows[0].key, "B");
        assert_eq!(grouped.rows[1].values, vec![None]);
    }

    #[test]
    fn test_order_by_out_of_range() {
        let result = group_aggregate(&table(), CategoricalField::City, &[Aggregate::Count], Some(1));
        assert!(matches!(result, Err(QueryError::InvalidParameter { .. })));
    }

    #[test]
    fn test_parse_metric_spec() {
        assert_eq!(Aggregate::parse("count"), Ok(Aggregate::Count));
        assert_eq!(
            Aggregate::parse("mean:monthly_rent"),
            Ok(Aggregate::Mean(NumericField::MonthlyRent))
        );
        assert!(Aggregate::parse("sum:monthly_rent").is_err());
    }

    #[test]
    fn test_empty_table() {
        let grouped = group_aggregate(&Table::default(), CategoricalField::City, &[Aggregate::Count], Some(0)).unwrap();
        assert!(grouped.is_empty());
    }
}
