//! Custom error types for the planner
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for planner operations
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// A month key that does not parse as YYYY-MM
    #[error("Invalid month key: {0}")]
    InvalidMonthKey(String),

    /// A calendar date that does not parse
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl PlannerError {
    /// Create a "not found" error for income entries
    pub fn income_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Income entry",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for expense entries
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense entry",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for wedding contributions
    pub fn contribution_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Contribution",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for wedding budget items
    pub fn budget_item_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Budget item",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for PlannerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PlannerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for planner operations
pub type PlannerResult<T> = Result<T, PlannerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PlannerError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_invalid_month_key_display() {
        let err = PlannerError::InvalidMonthKey("2024/01".into());
        assert_eq!(err.to_string(), "Invalid month key: 2024/01");
    }

    #[test]
    fn test_not_found_error() {
        let err = PlannerError::income_not_found("inc-12345678");
        assert_eq!(err.to_string(), "Income entry not found: inc-12345678");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let planner_err: PlannerError = io_err.into();
        assert!(matches!(planner_err, PlannerError::Io(_)));
    }
}
