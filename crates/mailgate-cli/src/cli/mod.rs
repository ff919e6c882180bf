//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No validation logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "mailgate",
    bin_name = "mailgate",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{2709} Email validation against a domain allow-list",
    long_about = "Mailgate checks email addresses against a fixed format pattern \
                  and an allow-list of accepted domains.  Run without a \
                  subcommand to start the interactive shell.",
    after_help = "EXAMPLES:\n\
        \x20 mailgate\n\
        \x20 mailgate check alice@gmail.com bob@example.org\n\
        \x20 mailgate --domain example.org check bob@example.org\n\
        \x20 mailgate --output-format json check \"a@gmail.com; b@yahoo.com\"\n\
        \x20 mailgate completions bash > /usr/share/bash-completion/completions/mailgate",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute (defaults to `shell`).
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the interactive validation shell (the default).
    #[command(
        visible_alias = "repl",
        about = "Start the interactive shell",
        after_help = "Inside the shell, type 'help' for the command reference."
    )]
    Shell,

    /// Validate email addresses and exit.
    #[command(
        visible_alias = "c",
        about = "Validate email addresses",
        after_help = "EXAMPLES:\n\
            \x20 mailgate check alice@gmail.com\n\
            \x20 mailgate check \"a@gmail.com, b@nowhere.com c@yahoo.com\"\n\
            \x20 mailgate --output-format json check a@gmail.com\n\n\
            Exits 0 when every address is valid, 2 otherwise."
    )]
    Check(CheckArgs),

    /// List the effective allow-list.
    #[command(
        visible_alias = "ls",
        about = "List allowed domains",
        after_help = "EXAMPLES:\n\
            \x20 mailgate domains\n\
            \x20 mailgate --domain example.org domains"
    )]
    Domains,

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 mailgate completions bash > ~/.local/share/bash-completion/completions/mailgate\n\
            \x20 mailgate completions zsh  > ~/.zfunc/_mailgate\n\
            \x20 mailgate completions fish > ~/.config/fish/completions/mailgate.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Mailgate configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 mailgate config list\n\
            \x20 mailgate config path"
    )]
    Config(ConfigCommands),
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `mailgate check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Addresses to validate.  Each argument may itself hold several
    /// addresses separated by commas, semicolons or whitespace.
    #[arg(value_name = "EMAIL", required = true, num_args = 1..)]
    pub emails: Vec<String>,
}

impl CheckArgs {
    /// All arguments joined into one batch string.
    pub fn batch(&self) -> String {
        self.emails.join(" ")
    }
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `mailgate completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: CompletionShell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `mailgate config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
