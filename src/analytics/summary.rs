//! Derived metrics over a table view

use serde::Serialize;

use crate::dataset::{Column, ColumnKind, NumericField, Table};

use super::correlation::CorrelationMatrix;
use super::describe::{CategoryCounts, ColumnStats, MissingCount};

/// Everything the statistics panel shows for one view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub row_count: usize,
    pub correlation: CorrelationMatrix,
    pub statistics: Vec<ColumnStats>,
    pub category_counts: Vec<CategoryCounts>,
    pub missing: Vec<MissingCount>,
}

impl Summary {
    /// Total missing cells over the displayed columns
    pub fn total_missing(&self) -> usize {
        self.missing.iter().map(|m| m.missing).sum()
    }

    pub fn statistics_for(&self, field: NumericField) -> Option<&ColumnStats> {
        self.statistics.iter().find(|s| s.column == field.as_str())
    }
}

/// Computes the summary of `table` for the displayed `columns`.
///
/// The correlation matrix always covers [`NumericField::CORRELATED`];
/// statistics, category counts and missing counts follow `columns`.
pub fn derived_metrics(table: &Table, columns: &[Column]) -> Summary {
    let mut statistics = Vec::new();
    let mut category_counts = Vec::new();

    for column in columns {
        match column.kind() {
            ColumnKind::Numeric(field) => statistics.push(ColumnStats::compute(table, field)),
            ColumnKind::Categorical(field) => {
                category_counts.push(CategoryCounts::compute(table, field))
            }
            ColumnKind::Text => {}
        }
    }

    Summary {
        row_count: table.len(),
        correlation: CorrelationMatrix::compute(table, &NumericField::CORRELATED),
        statistics,
        category_counts,
        missing: columns
            .iter()
            .map(|c| MissingCount::compute(table, *c))
            .collect(),
    }
}
