//! Typed field names
//!
//! Column names only exist as strings at the request boundary and in the CSV
//! header. Everything past parsing addresses fields through these enums.

use std::fmt;

/// Numeric columns that can be filtered, ranked, averaged or correlated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NumericField {
    EconomicHealthScore,
    BusinessDensityScore,
    FootfallScore,
    InfrastructureScore,
    PropertyValueScore,
    RiskScore,
    MonthlyRent,
    PropertyPriceSqft,
    AvgDailyCustomers,
    PedestrianCount15Min,
    ExpectedReturn,
}

impl NumericField {
    pub const ALL: [NumericField; 11] = [
        NumericField::EconomicHealthScore,
        NumericField::BusinessDensityScore,
        NumericField::FootfallScore,
        NumericField::InfrastructureScore,
        NumericField::PropertyValueScore,
        NumericField::RiskScore,
        NumericField::MonthlyRent,
        NumericField::PropertyPriceSqft,
        NumericField::AvgDailyCustomers,
        NumericField::PedestrianCount15Min,
        NumericField::ExpectedReturn,
    ];

    /// Fields whose values are bounded to the 0-100 score range
    pub const SCORES: [NumericField; 6] = [
        NumericField::EconomicHealthScore,
        NumericField::BusinessDensityScore,
        NumericField::FootfallScore,
        NumericField::InfrastructureScore,
        NumericField::PropertyValueScore,
        NumericField::RiskScore,
    ];

    /// Fields that must never be negative
    pub const NON_NEGATIVE: [NumericField; 4] = [
        NumericField::MonthlyRent,
        NumericField::PropertyPriceSqft,
        NumericField::AvgDailyCustomers,
        NumericField::PedestrianCount15Min,
    ];

    /// Fields covered by the correlation matrix
    pub const CORRELATED: [NumericField; 7] = [
        NumericField::EconomicHealthScore,
        NumericField::BusinessDensityScore,
        NumericField::FootfallScore,
        NumericField::InfrastructureScore,
        NumericField::PropertyValueScore,
        NumericField::MonthlyRent,
        NumericField::PedestrianCount15Min,
    ];

    pub fn as_str(&self) -> &'static str {
        self.column().as_str()
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.as_str() == name)
    }

    /// The CSV column backing this field
    pub fn column(&self) -> Column {
        match self {
            NumericField::EconomicHealthScore => Column::EconomicHealthScore,
            NumericField::BusinessDensityScore => Column::BusinessDensityScore,
            NumericField::FootfallScore => Column::FootfallScore,
            NumericField::InfrastructureScore => Column::InfrastructureScore,
            NumericField::PropertyValueScore => Column::PropertyValueScore,
            NumericField::RiskScore => Column::RiskScore,
            NumericField::MonthlyRent => Column::MonthlyRent,
            NumericField::PropertyPriceSqft => Column::PropertyPriceSqft,
            NumericField::AvgDailyCustomers => Column::AvgDailyCustomers,
            NumericField::PedestrianCount15Min => Column::PedestrianCount15Min,
            NumericField::ExpectedReturn => Column::ExpectedReturn,
        }
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Categorical columns usable as set-membership filters and group keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoricalField {
    City,
    AreaType,
    LocalityType,
    InvestmentCategory,
    BusinessGrowth,
}

impl CategoricalField {
    pub const ALL: [CategoricalField; 5] = [
        CategoricalField::City,
        CategoricalField::AreaType,
        CategoricalField::LocalityType,
        CategoricalField::InvestmentCategory,
        CategoricalField::BusinessGrowth,
    ];

    pub fn as_str(&self) -> &'static str {
        self.column().as_str()
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.as_str() == name)
    }

    pub fn column(&self) -> Column {
        match self {
            CategoricalField::City => Column::City,
            CategoricalField::AreaType => Column::AreaType,
            CategoricalField::LocalityType => Column::LocalityType,
            CategoricalField::InvestmentCategory => Column::InvestmentCategory,
            CategoricalField::BusinessGrowth => Column::BusinessGrowth,
        }
    }
}

impl fmt::Display for CategoricalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every column of the dataset, in file order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    AreaId,
    City,
    AreaName,
    AreaType,
    LocalityType,
    EconomicHealthScore,
    BusinessDensityScore,
    FootfallScore,
    InfrastructureScore,
    PropertyValueScore,
    RiskScore,
    MonthlyRent,
    PropertyPriceSqft,
    InvestmentCategory,
    BusinessGrowth,
    RecommendedBusiness,
    AvgDailyCustomers,
    PedestrianCount15Min,
    ExpectedReturn,
}

/// Kind of values held by a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Numeric(NumericField),
    Categorical(CategoricalField),
    Text,
}

impl Column {
    pub const ALL: [Column; 19] = [
        Column::AreaId,
        Column::City,
        Column::AreaName,
        Column::AreaType,
        Column::LocalityType,
        Column::EconomicHealthScore,
        Column::BusinessDensityScore,
        Column::FootfallScore,
        Column::InfrastructureScore,
        Column::PropertyValueScore,
        Column::RiskScore,
        Column::MonthlyRent,
        Column::PropertyPriceSqft,
        Column::InvestmentCategory,
        Column::BusinessGrowth,
        Column::RecommendedBusiness,
        Column::AvgDailyCustomers,
        Column::PedestrianCount15Min,
        Column::ExpectedReturn,
    ];

    /// Columns shown by the explorer when the caller picks none explicitly
    pub const DEFAULT_DISPLAY: [Column; 5] = [
        Column::AreaName,
        Column::City,
        Column::EconomicHealthScore,
        Column::InvestmentCategory,
        Column::MonthlyRent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Column::AreaId => "area_id",
            Column::City => "city",
            Column::AreaName => "area_name",
            Column::AreaType => "area_type",
            Column::LocalityType => "locality_type",
            Column::EconomicHealthScore => "economic_health_score",
            Column::BusinessDensityScore => "business_density_score",
            Column::FootfallScore => "footfall_score",
            Column::InfrastructureScore => "infrastructure_score",
            Column::PropertyValueScore => "property_value_score",
            Column::RiskScore => "risk_score",
            Column::MonthlyRent => "monthly_rent",
            Column::PropertyPriceSqft => "property_price_sqft",
            Column::InvestmentCategory => "investment_category",
            Column::BusinessGrowth => "business_growth",
            Column::RecommendedBusiness => "recommended_business",
            Column::AvgDailyCustomers => "avg_daily_customers",
            Column::PedestrianCount15Min => "pedestrian_count_15min",
            Column::ExpectedReturn => "expected_return",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == name)
    }

    pub fn kind(&self) -> ColumnKind {
        if let Some(field) = NumericField::ALL.iter().find(|f| f.column() == *self) {
            return ColumnKind::Numeric(*field);
        }
        if let Some(field) = CategoricalField::ALL.iter().find(|f| f.column() == *self) {
            return ColumnKind::Categorical(*field);
        }
        ColumnKind::Text
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
