//! Investment finder
//!
//! Targeted search over the full table. Unchecking every option in a
//! category list excludes everything, so category predicates here use
//! `EmptySelection::MatchNone`. Leaving the city list unset searches the
//! first two cities of the table.

use serde::Serialize;

use std::collections::HashSet;

use crate::dataset::{CategoricalField, GrowthTrend, LocalityType, NumericField, Table};
use crate::executor::QueryEngine;
use crate::query::{ConstraintSet, EmptySelection, Predicate, Selection, SortSpec};

/// Cities searched when the caller leaves the list unset
pub const DEFAULT_CITY_COUNT: usize = 2;

/// Search criteria
#[derive(Debug, Clone, PartialEq)]
pub struct FinderCriteria {
    /// Monthly rent budget, in rupees
    pub max_rent: f64,
    pub min_health_score: f64,
    pub growth: Vec<GrowthTrend>,
    pub min_footfall: f64,
    /// `None` searches the first `DEFAULT_CITY_COUNT` distinct cities in table order
    pub cities: Option<Vec<String>>,
    pub locality_types: Vec<LocalityType>,
    pub max_risk: f64,
}

impl Default for FinderCriteria {
    fn default() -> Self {
        Self {
            max_rent: 25000.0,
            min_health_score: 60.0,
            growth: vec![GrowthTrend::Growing, GrowthTrend::Stable],
            min_footfall: 50.0,
            cities: None,
            locality_types: vec![LocalityType::Commercial, LocalityType::Mixed],
            max_risk: 50.0,
        }
    }
}

impl FinderCriteria {
    /// Cities this search covers on `table`
    pub fn cities_for(&self, table: &Table) -> Vec<String> {
        if let Some(cities) = &self.cities {
            return cities.clone();
        }
        let mut seen = HashSet::new();
        table
            .iter()
            .filter(|row| seen.insert(row.city.as_str()))
            .take(DEFAULT_CITY_COUNT)
            .map(|row| row.city.clone())
            .collect()
    }

    pub fn constraints(&self, table: &Table) -> ConstraintSet {
        ConstraintSet::new()
            .with(Predicate::at_most(NumericField::MonthlyRent, self.max_rent))
            .with(Predicate::at_least(
                NumericField::EconomicHealthScore,
                self.min_health_score,
            ))
            .with(Predicate::one_of(
                CategoricalField::BusinessGrowth,
                self.growth.iter().map(|g| g.as_str()),
                EmptySelection::MatchNone,
            ))
            .with(Predicate::at_least(NumericField::FootfallScore, self.min_footfall))
            .with(Predicate::one_of(
                CategoricalField::City,
                self.cities_for(table),
                EmptySelection::MatchNone,
            ))
            .with(Predicate::one_of(
                CategoricalField::LocalityType,
                self.locality_types.iter().map(|t| t.as_str()),
                EmptySelection::MatchNone,
            ))
            .with(Predicate::at_most(NumericField::RiskScore, self.max_risk))
    }
}

/// Finder outcome
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinderResult {
    /// Every matching row
    pub match_count: usize,
    /// Best matches by health score
    pub shortlist: Table,
}

impl FinderResult {
    pub fn is_empty(&self) -> bool {
        self.match_count == 0
    }
}

/// Runs the finder against `table`
pub fn find_opportunities(table: &Table, criteria: &FinderCriteria, shortlist: usize) -> FinderResult {
    let selection = Selection::new(criteria.constraints(table))
        .with_sort(SortSpec::desc(NumericField::EconomicHealthScore))
        .with_limit(shortlist);

    let result = QueryEngine::execute(table, &selection);

    FinderResult {
        match_count: result.matched_count,
        shortlist: result.rows,
    }
}
