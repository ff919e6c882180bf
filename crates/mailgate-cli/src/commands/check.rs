//! `mailgate check`: validate addresses from the command line and exit.

use mailgate_core::prelude::{EmailValidator, ValidationResult};

use crate::{
    cli::{CheckArgs, OutputFormat},
    error::{CliError, CliResult},
    output::OutputManager,
    shell::report_lines,
};

pub fn execute(
    args: CheckArgs,
    validator: EmailValidator,
    output: OutputManager,
) -> CliResult<()> {
    let results = validator.validate_batch(&args.batch());

    match output.format() {
        OutputFormat::Json => output.raw(&serde_json::to_string_pretty(&results)?)?,
        _ => output.emit_all(&report_lines(&results))?,
    }

    outcome(&results)
}

/// Success only when at least one address was checked and all were valid.
fn outcome(results: &[ValidationResult]) -> CliResult<()> {
    let invalid = results.iter().filter(|r| !r.is_valid()).count();
    if results.is_empty() || invalid > 0 {
        return Err(CliError::ValidationFailed {
            invalid,
            total: results.len(),
        });
    }
    Ok(())
}
