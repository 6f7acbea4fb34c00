//! Domain errors: violations of the token model itself.
//!
//! Anything that makes a token source unusable *before* any artifact is
//! generated lives here.  Orchestration failures (missing files, compiler
//! exits, splice markers) are `ApplicationError` in the application layer.

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (pass summaries keep them around)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// A numeric token field could not be parsed.  Never silently
    /// propagated as NaN — the offending field and raw value are reported.
    #[error("invalid token value for '{field}' of '{identifier}': {value:?}")]
    InvalidTokenValue {
        identifier: String,
        field: &'static str,
        value: String,
    },

    /// A token field normalized to a negative magnitude.  Only the derived
    /// margin-bottom may legitimately be negative.
    #[error("negative value for '{field}' of '{identifier}': {value}")]
    NegativeValue {
        identifier: String,
        field: &'static str,
        value: f64,
    },

    /// Two tokens in the same scale share an identifier.
    #[error("duplicate token identifier '{identifier}' in scale '{scale}'")]
    DuplicateIdentifier { scale: String, identifier: String },

    /// The token source is not valid JSON or is structurally wrong.
    #[error("invalid token source for scale '{scale}': {reason}")]
    InvalidSource { scale: String, reason: String },

    /// A scale declared no tokens at all.
    #[error("scale '{scale}' has no elements")]
    EmptyScale { scale: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidTokenValue {
                identifier,
                field,
                value,
            } => vec![
                format!("'{identifier}.{field}' is {value:?}"),
                "Token values must be a bare number or a \"<n>rem\" string".into(),
            ],
            Self::NegativeValue { field, .. } => vec![
                format!("'{field}' must be non-negative"),
                "Only the derived margin-bottom may go below zero".into(),
            ],
            Self::DuplicateIdentifier { identifier, .. } => vec![
                format!("Remove the duplicate '{identifier}' entry"),
                "Each element identifier must be unique within a scale".into(),
            ],
            Self::InvalidSource { .. } => vec![
                "Check that the file is valid JSON".into(),
                "Expected shape: { baselineUnit, font?, elements: { ... } }".into(),
            ],
            Self::EmptyScale { scale } => {
                vec![format!("Add at least one element to scale '{scale}'")]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidTokenValue { .. }
            | Self::NegativeValue { .. }
            | Self::DuplicateIdentifier { .. }
            | Self::EmptyScale { .. } => ErrorCategory::Validation,
            Self::InvalidSource { .. } => ErrorCategory::Validation,
        }
    }
}

/// Error categories for CLI display styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    External,
    Internal,
}
