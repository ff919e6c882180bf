// ============================================================================
// domain/error.rs - VALIDATION AND ALLOW-LIST ERRORS
// ============================================================================

use thiserror::Error;

use crate::error::ErrorCategory;

/// Why a single email address was rejected.
///
/// The display strings are user-facing: the shell prints them verbatim in the
/// report column, so they must stay stable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    // ========================================================================
    // Input-format errors
    // ========================================================================
    #[error("Empty or invalid input")]
    EmptyInput,

    #[error("Invalid email format")]
    InvalidFormat,

    // ========================================================================
    // Domain-policy errors
    // ========================================================================
    #[error("Domain '{domain}' not allowed")]
    DomainNotAllowed { domain: String },
}

impl ValidationError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyInput => vec!["Enter at least one email address".into()],
            Self::InvalidFormat => vec![
                "Expected the form local@host.tld".into(),
                "Allowed local characters: letters, digits, . _ % + -".into(),
                "The top-level domain needs at least two letters".into(),
            ],
            Self::DomainNotAllowed { domain } => vec![
                format!("'{domain}' is not on the allow-list"),
                format!("Add it with: add {domain}"),
            ],
        }
    }

    /// Error category for display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyInput | Self::InvalidFormat => ErrorCategory::Format,
            Self::DomainNotAllowed { .. } => ErrorCategory::Policy,
        }
    }
}

/// Errors raised when mutating the allow-list.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Domain name must not be empty")]
    EmptyDomain,
}

impl DomainError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyDomain => vec![
                "Specify a domain, e.g. 'add example.com'".into(),
                "Check the allowed_domains list in your config file".into(),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Input
    }
}
