//! Flags accepted before or after any subcommand, including the default shell.

use std::ffi::OsStr;
use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum};

/// Environment variable that disables colour when set to any non-empty value.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Global arguments for all commands.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true,
        help = "Log more to stderr (-v, -vv, -vvv)",
        long_help = "Log more to stderr:
    (none)  - warnings and errors
    -v      - allow-list changes
    -vv     - every accept/reject decision
    -vvv    - everything"
    )]
    pub verbose: u8,

    /// Hides the shell banner and informational lines.  Reports, command
    /// confirmations and errors are still printed.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Hide the banner and informational output"
    )]
    pub quiet: bool,

    // No clap `env` here: clap would demand a boolish value, while NO_COLOR
    // is set by presence.  See `with_environment`.
    #[arg(
        long = "no-color",
        global = true,
        help = "Disable colored output (also: NO_COLOR=<anything>)"
    )]
    pub no_color: bool,

    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Read settings from this TOML file (must exist)"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Auto,
        help = "How reports are rendered",
        long_help = "How reports are rendered.  `json` applies to `check` and \
                     `domains`; the shell always prints text."
    )]
    pub output_format: OutputFormat,

    /// Extra allowed domains for this run only.
    #[arg(
        long = "domain",
        global = true,
        value_name = "DOMAIN",
        action = ArgAction::Append,
        help = "Allow an extra domain for this run (repeatable)"
    )]
    pub domains: Vec<String>,
}

impl GlobalArgs {
    /// Apply environment conventions clap cannot express for a bare flag.
    pub fn with_environment(self) -> Self {
        self.with_no_color_env(std::env::var_os(NO_COLOR_ENV).as_deref())
    }

    fn with_no_color_env(mut self, value: Option<&OsStr>) -> Self {
        self.no_color |= value.is_some_and(|v| !v.is_empty());
        self
    }
}

/// How the CLI should render its output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` when piped.
    #[default]
    Auto,
    /// Coloured text.
    Human,
    /// Text without ANSI codes.
    Plain,
    /// JSON on stdout.
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    fn parse(args: &[&str]) -> GlobalArgs {
        let mut argv = vec!["mailgate"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap().global
    }

    #[test]
    fn no_color_env_accepts_any_non_empty_value() {
        for value in ["1", "true", "yes", "0"] {
            let global = parse(&[]).with_no_color_env(Some(OsStr::new(value)));
            assert!(global.no_color, "NO_COLOR={value} should disable colour");
        }
    }

    #[test]
    fn empty_or_missing_no_color_env_keeps_colour() {
        assert!(!parse(&[]).with_no_color_env(Some(OsStr::new(""))).no_color);
        assert!(!parse(&[]).with_no_color_env(None).no_color);
    }

    #[test]
    fn flag_wins_over_empty_env() {
        let global = parse(&["--no-color"]).with_no_color_env(Some(OsStr::new("")));
        assert!(global.no_color);
    }

    #[test]
    fn flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "mailgate",
            "check",
            "a@gmail.com",
            "-q",
            "--output-format",
            "json",
        ])
        .unwrap();
        assert!(cli.global.quiet);
        assert_eq!(cli.global.output_format, OutputFormat::Json);
    }
}
