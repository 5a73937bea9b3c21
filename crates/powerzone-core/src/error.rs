//! # Error Types
//!
//! Domain-specific error types for powerzone-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  powerzone-core errors (this file)                                      │
//! │  ├── ValidationError  - One field breaks one rule                       │
//! │  ├── FormErrors       - Every failing field of a form at once           │
//! │  └── CoreError        - Catalog and wizard failures                     │
//! │                                                                         │
//! │  storefront errors (apps/storefront)                                    │
//! │  └── StoreError       - Config loading, pending checkout                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart operations never fail, so there is no cart error here.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Failures outside a single form field.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A raw catalog payload is not valid JSON or has the wrong shape.
    #[error("Malformed catalog payload: {0}")]
    MalformedCatalog(#[from] serde_json::Error),

    /// A catalog record could not become a product.
    ///
    /// ## When This Occurs
    /// - `precio` is not a decimal amount
    /// - The record has no id or name
    #[error("Catalog record {record_id} rejected: {source}")]
    InvalidRecord {
        record_id: String,
        #[source]
        source: ValidationError,
    },

    /// Registration wizard only has steps 1 to 3.
    #[error("Registration step {0} does not exist")]
    InvalidStep(u8),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Several fields failed at once.
    #[error(transparent)]
    Form(#[from] FormErrors),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before anything reaches the remote API. The `field` is the
/// English field name; the client maps it to its own copy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Field has leading or trailing whitespace.
    #[error("{field} cannot start or end with spaces")]
    SurroundingWhitespace { field: String },

    /// Field allows letters and spaces only.
    #[error("{field} may only contain letters")]
    LettersOnly { field: String },

    /// Field length (in characters) is outside the allowed range.
    #[error("{field} must be between {min} and {max} characters")]
    LengthOutOfRange { field: String, min: usize, max: usize },

    /// Field is shorter than the minimum length (in characters).
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Confirmation field differs from the field it repeats.
    #[error("{field} must match {other}")]
    Mismatch { field: String, other: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., email without domain, non-numeric zip code).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::SurroundingWhitespace { field }
            | ValidationError::LettersOnly { field }
            | ValidationError::LengthOutOfRange { field, .. }
            | ValidationError::TooShort { field, .. }
            | ValidationError::Mismatch { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

// =============================================================================
// Form Errors
// =============================================================================

/// All failing fields of a form that reports every error at once.
///
/// The contact form shows one message under each invalid input, so it
/// needs the full list rather than the first failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} invalid field(s): {}", .errors.len(), summary(.errors))]
pub struct FormErrors {
    pub errors: Vec<ValidationError>,
}

impl FormErrors {
    /// Records a failure, if any.
    pub fn check(&mut self, result: Result<(), ValidationError>) {
        if let Err(e) = result {
            self.errors.push(e);
        }
    }

    /// Returns the error for a given field.
    pub fn for_field(&self, field: &str) -> Option<&ValidationError> {
        self.errors.iter().find(|e| e.field() == field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// `Ok(())` when nothing failed.
    pub fn into_result(self) -> Result<(), FormErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

fn summary(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "email".to_string(),
        };
        assert_eq!(err.to_string(), "email is required");

        let err = ValidationError::LengthOutOfRange {
            field: "password".to_string(),
            min: 8,
            max: 10,
        };
        assert_eq!(
            err.to_string(),
            "password must be between 8 and 10 characters"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }

    #[test]
    fn test_form_errors_collects_and_summarises() {
        let mut errors = FormErrors::default();
        errors.check(Ok(()));
        errors.check(Err(ValidationError::Required {
            field: "name".to_string(),
        }));
        errors.check(Err(ValidationError::Required {
            field: "message".to_string(),
        }));

        assert_eq!(errors.errors.len(), 2);
        assert!(errors.for_field("message").is_some());
        assert!(errors.for_field("email").is_none());
        assert_eq!(
            errors.to_string(),
            "2 invalid field(s): name is required; message is required"
        );
        assert!(errors.into_result().is_err());
    }

    #[test]
    fn test_empty_form_errors_is_ok() {
        assert!(FormErrors::default().into_result().is_ok());
    }
}
