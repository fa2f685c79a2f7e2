//! Overview KPIs for a filtered view

use serde::Serialize;

use crate::analytics::{group_aggregate, stats, Aggregate};
use crate::dataset::{CategoricalField, InvestmentCategory, NumericField, Table};
use crate::executor::QueryEngine;
use crate::query::{QueryResult, SortSpec};

/// Headline numbers of a view, relative to the full table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    pub total_locations: usize,
    /// Share of the full table, in percent
    pub share_of_total_pct: Option<f64>,
    pub avg_health_score: Option<f64>,
    /// View average minus full-table average
    pub avg_health_delta: Option<f64>,
    pub high_potential_count: usize,
    /// High-potential share of the view, in percent
    pub high_potential_pct: Option<f64>,
    /// City with the highest mean health score
    pub top_city: Option<String>,
    /// Best areas by health score, descending
    pub top_areas: Table,
}

/// Computes the overview of `view` against `full`
pub fn overview(full: &Table, view: &Table, top_n: usize) -> QueryResult<Overview> {
    let total = view.len();
    let avg = stats::mean(&view.values(NumericField::EconomicHealthScore));
    let full_avg = stats::mean(&full.values(NumericField::EconomicHealthScore));

    let high_potential_count = view
        .iter()
        .filter(|r| r.investment_category == InvestmentCategory::HighPotential)
        .count();

    let by_city = group_aggregate(
        view,
        CategoricalField::City,
        &[Aggregate::Mean(NumericField::EconomicHealthScore)],
        Some(0),
    )?;
    let top_city = by_city.rows.into_iter().next().map(|row| row.key);

    Ok(Overview {
        total_locations: total,
        share_of_total_pct: percent(total, full.len()),
        avg_health_score: avg,
        avg_health_delta: avg.zip(full_avg).map(|(v, f)| v - f),
        high_potential_count,
        high_potential_pct: percent(high_potential_count, total),
        top_city,
        top_areas: QueryEngine::rank_and_limit(
            view,
            &SortSpec::desc(NumericField::EconomicHealthScore),
            Some(top_n),
        ),
    })
}

fn percent(part: usize, whole: usize) -> Option<f64> {
    if whole == 0 {
        return None;
    }
    Some(part as f64 / whole as f64 * 100.0)
}
