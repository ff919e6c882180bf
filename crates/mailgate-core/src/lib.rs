//! Mailgate Core - email validation against a domain allow-list
//!
//! This crate holds the pure validation logic for the `mailgate` tool: the
//! fixed format pattern, the mutable allow-list of accepted domains, and the
//! single/batch validation operations built on top of them.
//!
//! ## Layout
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          mailgate-cli (binary)          │
//! │   shell, check, domains, config, ...    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │             EmailValidator              │
//! │  validate_email / validate_batch / ...  │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │      (EmailAddress, AllowList)          │
//! │        No I/O, no global state          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use mailgate_core::prelude::*;
//!
//! let mut validator = EmailValidator::new();
//! assert_eq!(validator.validate_email("Alice@Gmail.com").unwrap(), "gmail.com");
//!
//! validator.add_domain("example.org").unwrap();
//! let results = validator.validate_batch("a@example.org; b@nowhere.net");
//! assert!(results[0].is_valid());
//! assert!(!results[1].is_valid());
//! ```

pub mod domain;
pub mod error;
pub mod validator;

// Public API - what the CLI should use
pub mod prelude {
    pub use crate::domain::{AllowList, DEFAULT_DOMAINS, DomainError, EmailAddress, ValidationError};
    pub use crate::error::{ErrorCategory, MailgateError, MailgateResult};
    pub use crate::validator::{EmailValidator, ValidationResult};
}
