//! Email address value object and the fixed format pattern.
//!
//! An [`EmailAddress`] only exists once the raw input has been trimmed,
//! lowercased and matched against [`EMAIL_PATTERN`]. Domain policy (the
//! allow-list) is *not* checked here; see [`crate::validator`].

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::error::ValidationError;

/// Syntactic rule every address must satisfy before domain policy applies.
///
/// Local part: letters, digits, `.`, `_`, `%`, `+`, `-`.
/// Host part: letters, digits, `.`, `-`, followed by a TLD of 2+ letters.
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

static FORMAT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"));

/// The compiled [`EMAIL_PATTERN`].
pub fn format_pattern() -> &'static Regex {
    &FORMAT_PATTERN
}

/// A syntactically valid, normalized (trimmed + lowercase) email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress {
    local: String,
    domain: String,
}

impl EmailAddress {
    /// Parse raw user input against the default format pattern.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        Self::parse_with(raw, format_pattern())
    }

    /// Parse raw user input against `pattern`.
    ///
    /// Emptiness is checked *before* trimming, so whitespace-only input is a
    /// format error rather than an empty-input error.
    pub fn parse_with(raw: &str, pattern: &Regex) -> Result<Self, ValidationError> {
        if raw.is_empty() {
            return Err(ValidationError::EmptyInput);
        }

        let normalized = raw.trim().to_lowercase();
        if !pattern.is_match(&normalized) {
            return Err(ValidationError::InvalidFormat);
        }

        // The pattern admits exactly one '@', but a custom pattern might not.
        let (local, domain) = normalized
            .split_once('@')
            .ok_or(ValidationError::InvalidFormat)?;

        Ok(Self {
            local: local.to_owned(),
            domain: domain.to_owned(),
        })
    }

    pub fn local(&self) -> &str {
        &self.local
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.local, self.domain)
    }
}
