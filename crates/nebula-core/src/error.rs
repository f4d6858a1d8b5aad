//! # Error Types
//!
//! Validation error types for nebula-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  nebula-core errors (this file)                                        │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  nebula-store errors (separate crate)                                  │
//! │  └── SubmissionError  - Contact uplink rejections                      │
//! │                                                                         │
//! │  Flow: ValidationError → SubmissionError → Frontend                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart mutations deliberately have NO error type: unknown ids are no-ops
//! and out-of-range decrements clamp. The only failures this crate can
//! report are malformed inputs from collaborators (catalog construction)
//! or from the user (contact form fields).
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, limits)
//! 3. Errors are enum variants, never String

use serde::Serialize;
use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when a supplied value doesn't meet requirements.
/// Used both for contact-form fields and for catalog construction.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g., malformed email address).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value must not be negative (e.g., a catalog price).
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Duplicate value (e.g., duplicate catalog item id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

impl ValidationError {
    /// The field this error refers to.
    ///
    /// The contact form renders errors next to the offending input, so
    /// every variant carries its field name.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooLong { field, .. }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::Negative { field }
            | ValidationError::Duplicate { field, .. } => field,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::TooLong {
            field: "message".to_string(),
            max: 2000,
        };
        assert_eq!(err.to_string(), "message must be at most 2000 characters");

        let err = ValidationError::Duplicate {
            field: "id".to_string(),
            value: "3".to_string(),
        };
        assert_eq!(err.to_string(), "id '3' already exists");
    }

    #[test]
    fn test_field_accessor() {
        let err = ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "missing @".to_string(),
        };
        assert_eq!(err.field(), "email");
    }
}
