//! Core domain layer for Mailgate.
//!
//! Pure string and set logic. Nothing in here performs I/O or holds global
//! mutable state; the only shared item is the compiled format pattern, which
//! is immutable.

pub mod allow_list;
pub mod email;
pub mod error;

pub use allow_list::{AllowList, DEFAULT_DOMAINS};
pub use email::{EMAIL_PATTERN, EmailAddress};
pub use error::{DomainError, ValidationError};
