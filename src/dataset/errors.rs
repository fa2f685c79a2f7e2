//! Dataset error types
//!
//! Error codes:
//! - HYPERLOCAL_DATA_NOT_FOUND (FATAL)
//! - HYPERLOCAL_DATA_MALFORMED (FATAL)
//!
//! Both are raised once, at load time. There is no fallback dataset.

use std::fmt;
use std::path::PathBuf;

/// Severity levels for dataset errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Process cannot continue
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Dataset-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetErrorCode {
    /// None of the candidate locations holds the dataset
    DataNotFound,
    /// The dataset exists but cannot be parsed or violates a row invariant
    DataMalformed,
}

impl DatasetErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            DatasetErrorCode::DataNotFound => "HYPERLOCAL_DATA_NOT_FOUND",
            DatasetErrorCode::DataMalformed => "HYPERLOCAL_DATA_MALFORMED",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        Severity::Fatal
    }
}

impl fmt::Display for DatasetErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Dataset error with full context
#[derive(Debug)]
pub struct DatasetError {
    code: DatasetErrorCode,
    message: String,
    /// Line of the offending record (1-based, header is line 1)
    line: Option<u64>,
    source: Option<csv::Error>,
}

impl DatasetError {
    /// None of the candidates exist
    pub fn not_found(candidates: &[PathBuf]) -> Self {
        let tried = candidates
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            code: DatasetErrorCode::DataNotFound,
            message: format!("Could not find dataset in expected locations: [{}]", tried),
            line: None,
            source: None,
        }
    }

    /// Row-level invariant violation
    pub fn malformed(line: Option<u64>, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        let message = match line {
            Some(l) => format!("Line {}: {}", l, reason),
            None => reason,
        };
        Self {
            code: DatasetErrorCode::DataMalformed,
            message,
            line,
            source: None,
        }
    }

    /// Parse failure reported by the CSV reader
    pub fn from_csv(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line());
        let mut out = Self::malformed(line, err.to_string());
        out.source = Some(err);
        out
    }

    /// Returns the error code
    pub fn code(&self) -> DatasetErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the offending line if known
    pub fn line(&self) -> Option<u64> {
        self.line
    }

    /// Dataset errors are always fatal
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.code.severity(),
            self.code.code(),
            self.message
        )
    }
}

impl std::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Result type for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            DatasetErrorCode::DataNotFound.code(),
            "HYPERLOCAL_DATA_NOT_FOUND"
        );
        assert_eq!(
            DatasetErrorCode::DataMalformed.code(),
            "HYPERLOCAL_DATA_MALFORMED"
        );
    }

    #[test]
    fn test_not_found_lists_candidates() {
        let err = DatasetError::not_found(&[
            PathBuf::from("a.csv"),
            PathBuf::from("data/a.csv"),
        ]);
        assert!(err.is_fatal());
        assert!(err.message().contains("a.csv"));
        assert!(err.message().contains("data/a.csv"));
    }

    #[test]
    fn test_malformed_display() {
        let err = DatasetError::malformed(Some(7), "risk_score out of range");
        let display = format!("{}", err);
        assert!(display.contains("FATAL"));
        assert!(display.contains("HYPERLOCAL_DATA_MALFORMED"));
        assert!(display.contains("Line 7"));
        assert_eq!(err.line(), Some(7));
    }
}
