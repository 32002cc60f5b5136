//! Error types for Shopfront Admin
//!
//! This module provides unified error handling across the application,
//! covering schema validation failures, taxonomy lookups, and the
//! index-based operations of the variant field array.

use thiserror::Error;

/// The main error type for Shopfront Admin
#[derive(Debug, Error)]
pub enum AdminError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// General validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// A single field failed its schema rule
    #[error("Field validation failed for '{field}': {message}")]
    FieldValidation { field: String, message: String },

    /// An amount field holds text that does not parse as a number
    #[error("Invalid amount for '{field}': '{raw}' is not a number")]
    InvalidAmount { field: String, raw: String },

    /// A status value outside the fixed status set
    #[error("Invalid status: '{0}' (expected 'active' or 'inactive')")]
    InvalidStatus(String),

    // ========================================================================
    // Taxonomy Errors
    // ========================================================================
    /// Attempt to register a category key twice
    #[error("Duplicate category: '{0}' already exists")]
    DuplicateCategory(String),

    // ========================================================================
    // Collection Errors
    // ========================================================================
    /// Index-based field array operation out of range
    #[error("Index {index} out of bounds for list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    // ========================================================================
    // Serialization Errors
    // ========================================================================
    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AdminError {
    /// Create a general validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a field validation error
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::FieldValidation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Check if this is a validation error (field-level or record-level)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_)
                | Self::FieldValidation { .. }
                | Self::InvalidAmount { .. }
                | Self::InvalidStatus(_)
        )
    }
}

/// Result type alias using AdminError
pub type AdminResult<T> = Result<T, AdminError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = AdminError::validation("something is off");
        assert_eq!(err.to_string(), "Validation error: something is off");
    }

    #[test]
    fn test_field_error_display() {
        let err = AdminError::field("title", "Title is required");
        assert_eq!(
            err.to_string(),
            "Field validation failed for 'title': Title is required"
        );
    }

    #[test]
    fn test_index_error_display() {
        let err = AdminError::IndexOutOfBounds { index: 3, len: 2 };
        assert_eq!(err.to_string(), "Index 3 out of bounds for list of length 2");
    }

    #[test]
    fn test_is_validation() {
        assert!(AdminError::validation("x").is_validation());
        assert!(AdminError::field("price", "bad").is_validation());
        assert!(AdminError::InvalidStatus("archived".into()).is_validation());
        assert!(!AdminError::IndexOutOfBounds { index: 0, len: 0 }.is_validation());
    }
}
