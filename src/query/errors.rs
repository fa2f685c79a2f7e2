//! Query validation errors
//!
//! Raised while turning caller input into typed constraints. All of them
//! reject the request; none affects the session.

use thiserror::Error;

/// Result type for query construction
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors building a query from caller input
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    /// Field name is not a column of the dataset
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Field exists but cannot be used this way
    #[error("Field '{field}' is not {expected}")]
    WrongFieldKind { field: String, expected: &'static str },

    /// Sort direction other than asc/desc
    #[error("Unknown sort direction: {0}")]
    UnknownDirection(String),

    /// Empty-selection policy other than all/none
    #[error("Unknown empty-selection policy: {0}")]
    UnknownEmptyPolicy(String),

    /// Predicate object does not hold exactly one operation
    #[error("Invalid predicate: {0}")]
    InvalidPredicate(String),

    /// Categorical value not in the closed enumeration
    #[error("Unknown value '{value}' for {field}")]
    UnknownValue { field: &'static str, value: String },

    /// No columns selected for display or export
    #[error("At least one column must be selected")]
    EmptyColumnSelection,

    /// Numeric parameter outside its accepted range
    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl QueryError {
    /// Stable error code for responses
    pub fn code(&self) -> &'static str {
        match self {
            QueryError::UnknownField(_) | QueryError::WrongFieldKind { .. } => {
                "HYPERLOCAL_UNKNOWN_FIELD"
            }
            QueryError::EmptyColumnSelection => "HYPERLOCAL_EMPTY_SELECTION",
            _ => "HYPERLOCAL_QUERY_INVALID",
        }
    }
}
