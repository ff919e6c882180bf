//! Email validator - single and batch validation plus allow-list management.
//!
//! [`EmailValidator`] is an explicit, owned object: the CLI constructs one at
//! startup and hands it to whatever needs it. There is no module-level
//! singleton.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use tracing::{debug, info};

use crate::domain::{
    AllowList, DomainError, EmailAddress, ValidationError, email::format_pattern,
};
use crate::error::{MailgateError, MailgateResult};

/// Separators between tokens in batch input: runs of `,`, `;` or whitespace.
static TOKEN_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,;\s]+").expect("separator regex is valid"));

/// Validates email strings against a fixed format pattern and a mutable
/// allow-list of domains.
#[derive(Debug, Clone)]
pub struct EmailValidator {
    allowed: AllowList,
    pattern: &'static Regex,
}

impl EmailValidator {
    /// Validator with the default allow-list (see [`crate::domain::DEFAULT_DOMAINS`]).
    pub fn new() -> Self {
        Self::with_allow_list(AllowList::default())
    }

    /// Validator whose allow-list is exactly `domains` (normalized).
    pub fn with_domains<I, S>(domains: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::with_allow_list(AllowList::from_domains(domains)?))
    }

    /// Like [`Self::with_domains`], for lists that come from settings rather
    /// than the caller: a bad entry is reported as a configuration error.
    pub fn from_configured<I, S>(domains: I) -> MailgateResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_domains(domains).map_err(|source| MailgateError::Configuration {
            message: format!("Invalid allowed domain list: {source}"),
            source,
        })
    }

    pub fn with_allow_list(allowed: AllowList) -> Self {
        Self {
            allowed,
            pattern: format_pattern(),
        }
    }

    /// Validate one address.
    ///
    /// Accepts `&str` or `Option<&str>`; `None` is treated like empty input.
    /// On success returns the (lowercase) domain.
    pub fn validate_email<'a>(
        &self,
        raw: impl Into<Option<&'a str>>,
    ) -> Result<String, ValidationError> {
        let Some(raw) = raw.into() else {
            return Err(ValidationError::EmptyInput);
        };

        let email = EmailAddress::parse_with(raw, self.pattern)?;
        if !self.allowed.contains_normalized(email.domain()) {
            debug!(domain = email.domain(), "domain rejected by allow-list");
            return Err(ValidationError::DomainNotAllowed {
                domain: email.domain().to_owned(),
            });
        }

        debug!(email = %email, "email accepted");
        Ok(email.domain().to_owned())
    }

    /// Validate every token in `text`, preserving input order.
    ///
    /// Tokens are separated by runs of commas, semicolons or whitespace;
    /// empty tokens are skipped. Failures are included in the output.
    pub fn validate_batch(&self, text: &str) -> Vec<ValidationResult> {
        let results: Vec<ValidationResult> = TOKEN_SEPARATOR
            .split(text.trim())
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(|token| ValidationResult {
                email: token.to_owned(),
                outcome: self.validate_email(token),
            })
            .collect();

        debug!(
            total = results.len(),
            valid = results.iter().filter(|r| r.is_valid()).count(),
            "batch validated"
        );
        results
    }

    /// Allow `domain`. Returns `false` if it was already allowed.
    pub fn add_domain(&mut self, domain: &str) -> Result<bool, DomainError> {
        let inserted = self.allowed.insert(domain)?;
        if inserted {
            info!(domain, "domain added to allow-list");
        }
        Ok(inserted)
    }

    /// Disallow `domain`. Absent domains are a no-op.
    pub fn remove_domain(&mut self, domain: &str) -> bool {
        let removed = self.allowed.remove(domain);
        if removed {
            info!(domain, "domain removed from allow-list");
        }
        removed
    }

    pub fn contains_domain(&self, domain: &str) -> bool {
        self.allowed.contains(domain)
    }

    /// Snapshot of the allow-list; mutating it does not affect the validator.
    pub fn list_domains(&self) -> HashSet<String> {
        self.allowed.snapshot()
    }

    pub fn sorted_domains(&self) -> Vec<String> {
        self.allowed.sorted()
    }

    pub fn allow_list(&self) -> &AllowList {
        &self.allowed
    }
}

impl Default for EmailValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of validating one token from a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// The token as it appeared in the input (trimmed, original case).
    pub email: String,
    /// `Ok(domain)` or the reason for rejection.
    pub outcome: Result<String, ValidationError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.outcome.is_ok()
    }

    /// The domain for valid results, the failure reason otherwise.
    pub fn message(&self) -> String {
        match &self.outcome {
            Ok(domain) => domain.clone(),
            Err(err) => err.to_string(),
        }
    }
}

impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationResult", 3)?;
        state.serialize_field("email", &self.email)?;
        state.serialize_field("valid", &self.is_valid())?;
        state.serialize_field("message", &self.message())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_default_domain() {
        let v = EmailValidator::new();
        assert_eq!(v.validate_email("user@gmail.com"), Ok("gmail.com".into()));
    }

    #[test]
    fn empty_and_none_are_empty_input() {
        let v = EmailValidator::new();
        assert_eq!(v.validate_email(""), Err(ValidationError::EmptyInput));
        assert_eq!(v.validate_email(None::<&str>), Err(ValidationError::EmptyInput));
    }

    #[test]
    fn unknown_domain_is_rejected() {
        let v = EmailValidator::new();
        assert_eq!(
            v.validate_email("user@unknown.tld"),
            Err(ValidationError::DomainNotAllowed {
                domain: "unknown.tld".into()
            })
        );
    }

    #[test]
    fn subdomain_of_allowed_domain_is_not_allowed() {
        let v = EmailValidator::new();
        assert!(matches!(
            v.validate_email("user@mail.gmail.com"),
            Err(ValidationError::DomainNotAllowed { .. })
        ));
    }

    #[test]
    fn batch_preserves_tokens_as_typed() {
        let v = EmailValidator::new();
        let results = v.validate_batch("  Bob@Yahoo.com ;; ");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].email, "Bob@Yahoo.com");
        assert_eq!(results[0].message(), "yahoo.com");
    }

    #[test]
    fn batch_of_separators_is_empty() {
        let v = EmailValidator::new();
        assert!(v.validate_batch(" ,; \t\n").is_empty());
        assert!(v.validate_batch("").is_empty());
    }

    #[test]
    fn added_domain_validates() {
        let mut v = EmailValidator::new();
        assert!(v.validate_email("a@corp.io").is_err());
        assert!(v.add_domain("Corp.IO").unwrap());
        assert_eq!(v.validate_email("a@corp.io"), Ok("corp.io".into()));
    }

    #[test]
    fn list_domains_is_a_copy() {
        let v = EmailValidator::new();
        let mut snapshot = v.list_domains();
        snapshot.insert("evil.com".into());
        snapshot.remove("gmail.com");
        assert!(!v.contains_domain("evil.com"));
        assert!(v.contains_domain("gmail.com"));
    }

    #[test]
    fn with_domains_replaces_defaults() {
        let v = EmailValidator::with_domains(["Example.com"]).unwrap();
        assert_eq!(v.sorted_domains(), vec!["example.com"]);
        assert!(v.validate_email("x@gmail.com").is_err());
    }

    #[test]
    fn from_configured_reports_blank_entry_as_configuration() {
        let err = EmailValidator::from_configured(["gmail.com", " "]).unwrap_err();
        assert_eq!(err.category(), crate::error::ErrorCategory::Configuration);
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid allowed domain list: Domain name must not be empty"
        );
    }

    #[test]
    fn result_serializes_flat() {
        let v = EmailValidator::new();
        let results = v.validate_batch("a@gmail.com bad");
        let json = serde_json::to_value(&results).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"email": "a@gmail.com", "valid": true, "message": "gmail.com"},
                {"email": "bad", "valid": false, "message": "Invalid email format"},
            ])
        );
    }
}
