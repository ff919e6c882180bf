//! Unified error handling for Mailgate Core.
//!
//! Per-email failures ([`ValidationError`]) are normally carried inside a
//! [`crate::validator::ValidationResult`] rather than propagated.
//! [`MailgateError`] is what callers propagate when building a validator
//! from external settings fails.

use thiserror::Error;

use crate::domain::{DomainError, ValidationError};

/// Root error type for Mailgate Core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MailgateError {
    /// An address failed format or policy checks.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The allow-list rejected a mutation.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A configured allow-list could not be turned into a validator.
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        #[source]
        source: DomainError,
    },
}

impl MailgateError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Validation(e) => e.suggestions(),
            Self::Domain(e) => e.suggestions(),
            Self::Configuration { source, .. } => {
                let mut hints = vec!["Fix the allowed_domains setting and try again".into()];
                hints.extend(source.suggestions());
                hints
            }
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Validation(e) => e.category(),
            Self::Domain(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Empty input or pattern mismatch.
    Format,
    /// Domain not on the allow-list.
    Policy,
    /// Bad argument to an allow-list operation.
    Input,
    /// Settings that produced an unusable validator.
    Configuration,
}

/// Result of building or configuring a validator.
pub type MailgateResult<T> = Result<T, MailgateError>;
