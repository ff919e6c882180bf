//! `mailgate domains`: print the effective allow-list.

use mailgate_core::prelude::EmailValidator;

use crate::{cli::OutputFormat, error::CliResult, output::OutputManager, shell::domain_list_lines};

pub fn execute(validator: EmailValidator, output: OutputManager) -> CliResult<()> {
    match output.format() {
        OutputFormat::Json => {
            output.raw(&serde_json::to_string_pretty(&validator.sorted_domains())?)?;
        }
        _ => output.emit_all(&domain_list_lines(&validator))?,
    }
    Ok(())
}
