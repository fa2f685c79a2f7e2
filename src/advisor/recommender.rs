//! Business recommender
//!
//! Filters by preferred area type and monthly budget, ranks by the caller's
//! priority and attaches an ROI estimate to each recommendation.

use serde::Serialize;

use crate::dataset::{AreaType, CategoricalField, LocalityRecord, NumericField, Table};
use crate::executor::QueryEngine;
use crate::query::{ConstraintSet, EmptySelection, Predicate, Selection, SortSpec};

use super::roi::{estimate_roi, RoiAssumptions, RoiEstimate};

/// What the caller optimises for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    HighFootfall,
    LowRent,
    Balanced,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::HighFootfall => "high_footfall",
            Priority::LowRent => "low_rent",
            Priority::Balanced => "balanced",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "high_footfall" => Some(Priority::HighFootfall),
            "low_rent" => Some(Priority::LowRent),
            "balanced" => Some(Priority::Balanced),
            _ => None,
        }
    }

    pub fn sort_spec(&self) -> SortSpec {
        match self {
            Priority::HighFootfall => SortSpec::desc(NumericField::FootfallScore),
            Priority::LowRent => SortSpec::asc(NumericField::MonthlyRent),
            Priority::Balanced => SortSpec::desc(NumericField::EconomicHealthScore),
        }
    }
}

/// A business idea to place
#[derive(Debug, Clone, PartialEq)]
pub struct RecommenderRequest {
    /// Free-form label, echoed back
    pub business_type: String,
    /// Total investment budget, in lakhs
    pub investment_budget_lakhs: f64,
    /// Monthly operating budget, in rupees; caps the rent
    pub monthly_budget: f64,
    /// `None` accepts any area type
    pub preferred_area: Option<AreaType>,
    pub priority: Priority,
}

impl Default for RecommenderRequest {
    fn default() -> Self {
        Self {
            business_type: "Restaurant/Cafe".to_string(),
            investment_budget_lakhs: 20.0,
            monthly_budget: 50000.0,
            preferred_area: Some(AreaType::Urban),
            priority: Priority::HighFootfall,
        }
    }
}

impl RecommenderRequest {
    pub fn constraints(&self) -> ConstraintSet {
        let mut set = ConstraintSet::new();
        if let Some(area) = self.preferred_area {
            set.push(Predicate::one_of(
                CategoricalField::AreaType,
                [area.as_str()],
                EmptySelection::MatchNone,
            ));
        }
        set.with(Predicate::at_most(NumericField::MonthlyRent, self.monthly_budget))
    }
}

/// One recommended locality with its ROI estimate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub rank: usize,
    pub locality: LocalityRecord,
    pub estimate: RoiEstimate,
}

/// Recommender outcome
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommenderResult {
    pub business_type: String,
    pub match_count: usize,
    pub recommendations: Vec<Recommendation>,
}

/// Runs the recommender against `table`
pub fn recommend(
    table: &Table,
    request: &RecommenderRequest,
    assumptions: &RoiAssumptions,
    top_n: usize,
) -> RecommenderResult {
    let selection = Selection::new(request.constraints())
        .with_sort(request.priority.sort_spec())
        .with_limit(top_n);

    let result = QueryEngine::execute(table, &selection);

    let recommendations = result
        .rows
        .into_rows()
        .into_iter()
        .enumerate()
        .map(|(i, locality)| {
            let estimate = estimate_roi(&locality, request.investment_budget_lakhs, assumptions);
            Recommendation {
                rank: i + 1,
                locality,
                estimate,
            }
        })
        .collect();

    RecommenderResult {
        business_type: request.business_type.clone(),
        match_count: result.matched_count,
        recommendations,
    }
}
