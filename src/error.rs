//! Custom error types for fiscal-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for fiscal-cli operations
#[derive(Error, Debug)]
pub enum FiscalError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV reading errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Malformed ledger input
    #[error("Parse error: {0}")]
    Parse(String),

    /// Validation errors for data models and settings
    #[error("Validation error: {0}")]
    Validation(String),

    /// Profit margin is undefined when no revenue was recorded
    #[error("Profit margin is undefined: total revenue is zero")]
    ZeroRevenue,

    /// Average transaction amount is undefined for an empty ledger
    #[error("Average transaction amount is undefined: ledger has no transactions")]
    EmptyLedger,

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl FiscalError {
    /// Check if this is a parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for FiscalError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for FiscalError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<serde_json::Error> for FiscalError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for fiscal-cli operations
pub type FiscalResult<T> = Result<T, FiscalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FiscalError::Parse("row 3: invalid date 'yesterday'".into());
        assert_eq!(
            err.to_string(),
            "Parse error: row 3: invalid date 'yesterday'"
        );
        assert!(err.is_parse());
    }

    #[test]
    fn test_arithmetic_errors_display() {
        assert_eq!(
            FiscalError::ZeroRevenue.to_string(),
            "Profit margin is undefined: total revenue is zero"
        );
        assert_eq!(
            FiscalError::EmptyLedger.to_string(),
            "Average transaction amount is undefined: ledger has no transactions"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let fiscal_err: FiscalError = io_err.into();
        assert!(matches!(fiscal_err, FiscalError::Io(_)));
    }
}
