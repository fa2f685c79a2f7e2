//! Locality record: one row of the dataset
//!
//! Field names match the CSV header exactly. Categorical columns are closed
//! enumerations; an unknown label fails deserialization.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::errors::{DatasetError, DatasetResult};
use super::fields::{CategoricalField, Column, NumericField};

/// Degree of urbanisation of a locality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AreaType {
    Urban,
    #[serde(rename = "Semi-Urban")]
    SemiUrban,
    Rural,
}

impl AreaType {
    pub const ALL: [AreaType; 3] = [AreaType::Urban, AreaType::SemiUrban, AreaType::Rural];

    pub fn as_str(&self) -> &'static str {
        match self {
            AreaType::Urban => "Urban",
            AreaType::SemiUrban => "Semi-Urban",
            AreaType::Rural => "Rural",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == label)
    }
}

/// Dominant land use of a locality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocalityType {
    Commercial,
    Mixed,
    Residential,
}

impl LocalityType {
    pub const ALL: [LocalityType; 3] = [
        LocalityType::Commercial,
        LocalityType::Mixed,
        LocalityType::Residential,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LocalityType::Commercial => "Commercial",
            LocalityType::Mixed => "Mixed",
            LocalityType::Residential => "Residential",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == label)
    }
}

/// Investment tier, derived upstream from the health score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvestmentCategory {
    #[serde(rename = "High Potential")]
    HighPotential,
    #[serde(rename = "Moderate Potential")]
    ModeratePotential,
    #[serde(rename = "Low Potential")]
    LowPotential,
}

impl InvestmentCategory {
    pub const ALL: [InvestmentCategory; 3] = [
        InvestmentCategory::HighPotential,
        InvestmentCategory::ModeratePotential,
        InvestmentCategory::LowPotential,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InvestmentCategory::HighPotential => "High Potential",
            InvestmentCategory::ModeratePotential => "Moderate Potential",
            InvestmentCategory::LowPotential => "Low Potential",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == label)
    }
}

/// Business growth trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GrowthTrend {
    Growing,
    Stable,
    Declining,
}

impl GrowthTrend {
    pub const ALL: [GrowthTrend; 3] = [
        GrowthTrend::Growing,
        GrowthTrend::Stable,
        GrowthTrend::Declining,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GrowthTrend::Growing => "Growing",
            GrowthTrend::Stable => "Stable",
            GrowthTrend::Declining => "Declining",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == label)
    }
}

macro_rules! impl_label_display {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

impl_label_display!(AreaType, LocalityType, InvestmentCategory, GrowthTrend);

/// A single locality
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalityRecord {
    pub area_id: String,
    pub city: String,
    pub area_name: String,
    pub area_type: AreaType,
    pub locality_type: LocalityType,
    pub economic_health_score: f64,
    pub business_density_score: f64,
    pub footfall_score: f64,
    pub infrastructure_score: f64,
    pub property_value_score: f64,
    pub risk_score: f64,
    pub monthly_rent: f64,
    pub property_price_sqft: f64,
    pub investment_category: InvestmentCategory,
    pub business_growth: GrowthTrend,
    #[serde(default)]
    pub recommended_business: Option<String>,
    pub avg_daily_customers: f64,
    #[serde(default)]
    pub pedestrian_count_15min: Option<f64>,
    #[serde(default)]
    pub expected_return: Option<f64>,
}

impl LocalityRecord {
    /// Value of a numeric field, `None` when the optional cell is empty
    pub fn numeric(&self, field: NumericField) -> Option<f64> {
        match field {
            NumericField::EconomicHealthScore => Some(self.economic_health_score),
            NumericField::BusinessDensityScore => Some(self.business_density_score),
            NumericField::FootfallScore => Some(self.footfall_score),
            NumericField::InfrastructureScore => Some(self.infrastructure_score),
            NumericField::PropertyValueScore => Some(self.property_value_score),
            NumericField::RiskScore => Some(self.risk_score),
            NumericField::MonthlyRent => Some(self.monthly_rent),
            NumericField::PropertyPriceSqft => Some(self.property_price_sqft),
            NumericField::AvgDailyCustomers => Some(self.avg_daily_customers),
            NumericField::PedestrianCount15Min => self.pedestrian_count_15min,
            NumericField::ExpectedReturn => self.expected_return,
        }
    }

    /// Label of a categorical field
    pub fn category(&self, field: CategoricalField) -> &str {
        match field {
            CategoricalField::City => &self.city,
            CategoricalField::AreaType => self.area_type.as_str(),
            CategoricalField::LocalityType => self.locality_type.as_str(),
            CategoricalField::InvestmentCategory => self.investment_category.as_str(),
            CategoricalField::BusinessGrowth => self.business_growth.as_str(),
        }
    }

    /// Cell rendered as text, `None` for a missing value
    pub fn cell(&self, column: Column) -> Option<String> {
        match column {
            Column::AreaId => Some(self.area_id.clone()),
            Column::AreaName => Some(self.area_name.clone()),
            Column::RecommendedBusiness => self
                .recommended_business
                .as_ref()
                .filter(|s| !s.is_empty())
                .cloned(),
            Column::City => Some(self.city.clone()),
            Column::AreaType => Some(self.area_type.to_string()),
            Column::LocalityType => Some(self.locality_type.to_string()),
            Column::InvestmentCategory => Some(self.investment_category.to_string()),
            Column::BusinessGrowth => Some(self.business_growth.to_string()),
            Column::EconomicHealthScore => Some(self.economic_health_score.to_string()),
            Column::BusinessDensityScore => Some(self.business_density_score.to_string()),
            Column::FootfallScore => Some(self.footfall_score.to_string()),
            Column::InfrastructureScore => Some(self.infrastructure_score.to_string()),
            Column::PropertyValueScore => Some(self.property_value_score.to_string()),
            Column::RiskScore => Some(self.risk_score.to_string()),
            Column::MonthlyRent => Some(self.monthly_rent.to_string()),
            Column::PropertyPriceSqft => Some(self.property_price_sqft.to_string()),
            Column::AvgDailyCustomers => Some(self.avg_daily_customers.to_string()),
            Column::PedestrianCount15Min => self.pedestrian_count_15min.map(|v| v.to_string()),
            Column::ExpectedReturn => self.expected_return.map(|v| v.to_string()),
        }
    }

    /// Returns true if the cell holds no value
    pub fn is_missing(&self, column: Column) -> bool {
        self.cell(column).is_none()
    }

    /// Checks the row invariants. `line` is used for error context only.
    pub fn validate(&self, line: Option<u64>) -> DatasetResult<()> {
        if self.area_id.trim().is_empty() {
            return Err(DatasetError::malformed(line, "area_id is empty"));
        }

        for field in NumericField::ALL {
            if let Some(v) = self.numeric(field) {
                if !v.is_finite() {
                    return Err(DatasetError::malformed(
                        line,
                        format!("{} is not a finite number", field),
                    ));
                }
            }
        }

        for field in NumericField::SCORES {
            if let Some(v) = self.numeric(field) {
                if !(0.0..=100.0).contains(&v) {
                    return Err(DatasetError::malformed(
                        line,
                        format!("{} = {} is outside [0, 100]", field, v),
                    ));
                }
            }
        }

        for field in NumericField::NON_NEGATIVE {
            if let Some(v) = self.numeric(field) {
                if v < 0.0 {
                    return Err(DatasetError::malformed(
                        line,
                        format!("{} = {} is negative", field, v),
                    ));
                }
            }
        }

        Ok(())
    }
}
