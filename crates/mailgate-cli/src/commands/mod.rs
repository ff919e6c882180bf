//! Subcommand handlers.  Each module exposes an `execute` function.

pub mod check;
pub mod completions;
pub mod config;
pub mod domains;
pub mod shell;

use mailgate_core::prelude::EmailValidator;

use crate::{
    cli::GlobalArgs,
    config::AppConfig,
    error::{CliError, CliResult},
};

/// Validator for this run: configured allow-list plus `--domain` extras.
///
/// A bad configured entry is a configuration error; a bad `--domain` value
/// is the user's.
pub fn build_validator(global: &GlobalArgs, config: &AppConfig) -> CliResult<EmailValidator> {
    let mut validator = config.validator()?;

    for domain in &global.domains {
        validator
            .add_domain(domain)
            .map_err(|e| CliError::InvalidInput {
                message: format!("--domain {domain:?}: {e}"),
            })?;
    }

    Ok(validator)
}
