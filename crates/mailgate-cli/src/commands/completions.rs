//! Shell completion generation.

use clap::CommandFactory;
use clap_complete::{Generator, generate, shells};

use crate::cli::{Cli, CompletionShell, CompletionsArgs};

const BIN_NAME: &str = "mailgate";

pub fn execute(args: CompletionsArgs) -> crate::error::CliResult<()> {
    match args.shell {
        CompletionShell::Bash => write_to_stdout(shells::Bash),
        CompletionShell::Zsh => write_to_stdout(shells::Zsh),
        CompletionShell::Fish => write_to_stdout(shells::Fish),
        CompletionShell::PowerShell => write_to_stdout(shells::PowerShell),
        CompletionShell::Elvish => write_to_stdout(shells::Elvish),
    }
    Ok(())
}

fn write_to_stdout(shell: impl Generator) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, BIN_NAME, &mut std::io::stdout());
}
