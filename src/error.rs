//! Custom error types for housesplit
//!
//! The balance engine itself never fails; these errors come from the layers
//! around it (configuration, snapshot storage, draft validation, export).

use thiserror::Error;

use crate::models::{ExpenseValidationError, SettlementValidationError};

/// The main error type for housesplit operations
#[derive(Error, Debug)]
pub enum HouseholdError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for drafts and inputs
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Snapshot storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl HouseholdError {
    /// Create a "not found" error for households
    pub fn household_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Household",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for members
    pub fn member_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Member",
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

impl From<std::io::Error> for HouseholdError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for HouseholdError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for HouseholdError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Export(err.to_string())
    }
}

impl From<csv::Error> for HouseholdError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

impl From<ExpenseValidationError> for HouseholdError {
    fn from(err: ExpenseValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<SettlementValidationError> for HouseholdError {
    fn from(err: SettlementValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Result type alias for housesplit operations
pub type HouseholdResult<T> = Result<T, HouseholdError>;
