//! API error types
//!
//! API errors are pass-through: they preserve the original error codes
//! from lower subsystems (dataset, query).

use std::fmt;

use crate::dataset::DatasetError;
use crate::query::QueryError;

/// API error severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Request rejected, session continues
    Reject,
    /// Operation failed
    Error,
    /// System must halt
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Reject => write!(f, "REJECT"),
            Severity::Error => write!(f, "ERROR"),
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// API-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCode {
    /// Malformed JSON or missing/invalid parameter
    InvalidRequest,
    /// Unknown `op`
    UnknownOperation,
    /// `area_id` not present in the table
    UnknownArea,
    /// Result could not be encoded
    SerializationFailed,
}

impl ApiErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            ApiErrorCode::InvalidRequest => "HYPERLOCAL_INVALID_REQUEST",
            ApiErrorCode::UnknownOperation => "HYPERLOCAL_UNKNOWN_OPERATION",
            ApiErrorCode::UnknownArea => "HYPERLOCAL_UNKNOWN_AREA",
            ApiErrorCode::SerializationFailed => "HYPERLOCAL_SERIALIZATION_FAILED",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            ApiErrorCode::SerializationFailed => Severity::Error,
            _ => Severity::Reject,
        }
    }
}

impl fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// API error with preserved subsystem error information
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    /// Original error code string (from subsystem or API)
    code: String,
    message: String,
    severity: Severity,
}

impl ApiError {
    fn with_code(code: ApiErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code().to_string(),
            message: message.into(),
            severity: code.severity(),
        }
    }

    pub fn invalid_request(reason: impl Into<String>) -> Self {
        Self::with_code(ApiErrorCode::InvalidRequest, reason)
    }

    pub fn unknown_operation(op: impl Into<String>) -> Self {
        Self::with_code(
            ApiErrorCode::UnknownOperation,
            format!("Unknown operation: {}", op.into()),
        )
    }

    pub fn unknown_area(area_id: &str) -> Self {
        Self::with_code(ApiErrorCode::UnknownArea, format!("Unknown area_id: {}", area_id))
    }

    pub fn serialization(err: serde_json::Error) -> Self {
        Self::with_code(
            ApiErrorCode::SerializationFailed,
            format!("Failed to encode result: {}", err),
        )
    }

    /// Pass-through from the query model; always a rejection
    pub fn from_query_error(err: QueryError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
            severity: Severity::Reject,
        }
    }

    /// Pass-through from the dataset layer
    pub fn from_dataset_error(err: DatasetError) -> Self {
        Self {
            code: err.code().code().to_string(),
            message: err.message().to_string(),
            severity: if err.is_fatal() {
                Severity::Fatal
            } else {
                Severity::Error
            },
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self.severity, Severity::Fatal)
    }

    /// True for errors caused by the request itself
    pub fn is_rejection(&self) -> bool {
        matches!(self.severity, Severity::Reject)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<QueryError> for ApiError {
    fn from(err: QueryError) -> Self {
        Self::from_query_error(err)
    }
}

impl From<DatasetError> for ApiError {
    fn from(err: DatasetError) -> Self {
        Self::from_dataset_error(err)
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
