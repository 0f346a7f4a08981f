//! # Domain Errors
//!
//! Error types for member benefit domain rules.
//!
//! # Examples
//!
//! ```
//! use benefit_consensus::domain::errors::DomainError;
//!
//! let err = DomainError::missing_field("copay");
//! assert_eq!(err.to_string(), "missing field: copay");
//! ```

use thiserror::Error;

/// Error type for domain operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Member identifier is not a positive integer.
    #[error("invalid member id: {0}")]
    InvalidMemberId(String),

    /// A provider response lacks an expected field.
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// A provider response carries a field of the wrong type.
    #[error("field type mismatch: {field} (found {found})")]
    FieldTypeMismatch {
        /// Field name.
        field: &'static str,
        /// Description of the value actually found.
        found: String,
    },

    /// A provider response is not a JSON object.
    #[error("unexpected response shape: expected object, found {0}")]
    UnexpectedShape(String),
}

impl DomainError {
    /// Creates an invalid member id error.
    #[must_use]
    pub fn invalid_member_id(message: impl Into<String>) -> Self {
        Self::InvalidMemberId(message.into())
    }

    /// Creates a missing field error.
    #[must_use]
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField(field)
    }

    /// Creates a field type mismatch error.
    #[must_use]
    pub fn field_type_mismatch(field: &'static str, found: impl Into<String>) -> Self {
        Self::FieldTypeMismatch {
            field,
            found: found.into(),
        }
    }

    /// Creates an unexpected shape error.
    #[must_use]
    pub fn unexpected_shape(found: impl Into<String>) -> Self {
        Self::UnexpectedShape(found.into())
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
