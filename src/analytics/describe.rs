//! Descriptive statistics, category counts and missing-value counts

use serde::Serialize;

use crate::dataset::{CategoricalField, Column, NumericField, Table};

use super::stats;

/// count / mean / std / min / quartiles / max of one numeric column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnStats {
    pub column: &'static str,
    pub count: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    #[serde(rename = "25%")]
    pub q25: Option<f64>,
    #[serde(rename = "50%")]
    pub q50: Option<f64>,
    #[serde(rename = "75%")]
    pub q75: Option<f64>,
    pub max: Option<f64>,
}

impl ColumnStats {
    pub fn compute(table: &Table, field: NumericField) -> Self {
        let mut values = table.values(field);
        values.sort_by(|a, b| a.total_cmp(b));

        Self {
            column: field.as_str(),
            count: values.len(),
            mean: stats::mean(&values),
            std: stats::sample_std(&values),
            min: values.first().copied(),
            q25: stats::quantile(&values, 0.25),
            q50: stats::quantile(&values, 0.5),
            q75: stats::quantile(&values, 0.75),
            max: values.last().copied(),
        }
    }
}

/// Frequency of each label in a categorical column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCounts {
    pub column: &'static str,
    /// (label, count), count descending, ties by first appearance
    pub counts: Vec<(String, usize)>,
}

impl CategoryCounts {
    pub fn compute(table: &Table, field: CategoricalField) -> Self {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for row in table {
            let label = row.category(field);
            match counts.iter_mut().find(|(l, _)| l == label) {
                Some((_, n)) => *n += 1,
                None => counts.push((label.to_string(), 1)),
            }
        }
        counts.sort_by(|a, b| b.1.cmp(&a.1));

        Self {
            column: field.as_str(),
            counts,
        }
    }

    pub fn get(&self, label: &str) -> Option<usize> {
        self.counts.iter().find(|(l, _)| l == label).map(|(_, n)| *n)
    }
}

/// Number of missing cells in a column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingCount {
    pub column: &'static str,
    pub missing: usize,
}

impl MissingCount {
    pub fn compute(table: &Table, column: Column) -> Self {
        Self {
            column: column.as_str(),
            missing: table.iter().filter(|r| r.is_missing(column)).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::testing::record;
    use crate::dataset::AreaType;

    #[test]
    fn test_column_stats() {
        let table = Table::new(vec![
            record("1", "X", 10000.0, 40.0),
            record("2", "X", 20000.0, 60.0),
            record("3", "X", 30000.0, 80.0),
            record("4", "X", 40000.0, 100.0),
        ]);

        let s = ColumnStats::compute(&table, NumericField::MonthlyRent);
        assert_eq!(s.count, 4);
        assert_eq!(s.mean, Some(25000.0));
        assert_eq!(s.min, Some(10000.0));
        assert_eq!(s.q25, Some(17500.0));
        assert_eq!(s.q50, Some(25000.0));
        assert_eq!(s.q75, Some(32500.0));
        assert_eq!(s.max, Some(40000.0));
        let std = s.std.unwrap();
        assert!((std - 12909.944487358056).abs() < 1e-6);
    }

    #[test]
    fn test_column_stats_empty() {
        let s = ColumnStats::compute(&Table::default(), NumericField::MonthlyRent);
        assert_eq!(s.count, 0);
        assert_eq!(s.mean, None);
        assert_eq!(s.std, None);
        assert_eq!(s.min, None);
    }

    #[test]
    fn test_category_counts_order() {
        let mut rural = record("1", "X", 1.0, 50.0);
        rural.area_type = AreaType::Rural;
        let mut semi = record("2", "X", 1.0, 50.0);
        semi.area_type = AreaType::SemiUrban;
        let urban_a = record("3", "X", 1.0, 50.0);
        let urban_b = record("4", "X", 1.0, 50.0);

        let table = Table::new(vec![rural, semi, urban_a, urban_b]);
        let counts = CategoryCounts::compute(&table, CategoricalField::AreaType);

        assert_eq!(
            counts.counts,
            vec![
                ("Urban".to_string(), 2),
                ("Rural".to_string(), 1),
                ("Semi-Urban".to_string(), 1),
            ]
        );
        assert_eq!(counts.get("Semi-Urban"), Some(1));
    }

    #[test]
    fn test_missing_count() {
        let mut a = record("1", "X", 1.0, 50.0);
        a.recommended_business = None;
        a.expected_return = None;
        let b = record("2", "X", 1.0, 50.0);

        let table = Table::new(vec![a, b]);
        assert_eq!(MissingCount::compute(&table, Column::RecommendedBusiness).missing, 1);
        assert_eq!(MissingCount::compute(&table, Column::ExpectedReturn).missing, 1);
        assert_eq!(MissingCount::compute(&table, Column::City).missing, 0);
    }
}
