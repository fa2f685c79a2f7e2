//! Field-name resolution at the request boundary

use crate::dataset::{
    AreaType, CategoricalField, Column, GrowthTrend, InvestmentCategory, LocalityType, NumericField,
};

use super::errors::{QueryError, QueryResult};

/// Resolves a numeric field by column name
pub fn numeric_field(name: &str) -> QueryResult<NumericField> {
    NumericField::parse(name).ok_or_else(|| match Column::parse(name) {
        Some(_) => QueryError::WrongFieldKind {
            field: name.to_string(),
            expected: "numeric",
        },
        None => QueryError::UnknownField(name.to_string()),
    })
}

/// Resolves a categorical field by column name
pub fn categorical_field(name: &str) -> QueryResult<CategoricalField> {
    CategoricalField::parse(name).ok_or_else(|| match Column::parse(name) {
        Some(_) => QueryError::WrongFieldKind {
            field: name.to_string(),
            expected: "categorical",
        },
        None => QueryError::UnknownField(name.to_string()),
    })
}

/// Checks a label against the closed enumeration of `field`.
///
/// City is open; every other categorical field rejects unknown labels.
pub fn category_value(field: CategoricalField, value: &str) -> QueryResult<String> {
    let known = match field {
        CategoricalField::City => true,
        CategoricalField::AreaType => AreaType::parse(value).is_some(),
        CategoricalField::LocalityType => LocalityType::parse(value).is_some(),
        CategoricalField::InvestmentCategory => InvestmentCategory::parse(value).is_some(),
        CategoricalField::BusinessGrowth => GrowthTrend::parse(value).is_some(),
    };
    if known {
        Ok(value.to_string())
    } else {
        Err(QueryError::UnknownValue {
            field: field.as_str(),
            value: value.to_string(),
        })
    }
}

/// Resolves a list of display columns; an empty list is rejected
pub fn columns(names: &[String]) -> QueryResult<Vec<Column>> {
    if names.is_empty() {
        return Err(QueryError::EmptyColumnSelection);
    }
    names
        .iter()
        .map(|n| Column::parse(n).ok_or_else(|| QueryError::UnknownField(n.clone())))
        .collect()
}
