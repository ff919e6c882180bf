//! `mailgate shell`: the interactive validator (default command).

use mailgate_core::prelude::EmailValidator;
use tracing::info;

use crate::{
    error::CliResult,
    output::OutputManager,
    shell::{EditorReader, Session},
};

pub fn execute(validator: EmailValidator, output: OutputManager) -> CliResult<()> {
    info!(domains = validator.allow_list().len(), "starting interactive shell");

    let mut reader = EditorReader::new()?;
    Session::new(validator).run(&mut reader, &output)
}
