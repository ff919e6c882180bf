//! # Mailgate CLI
//!
//! Email validation against a domain allow-list.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit),
//!    then fold in `NO_COLOR`.
//! 2. Load configuration (file + env + defaults).
//! 3. Initialise the tracing subscriber, which needs the config's colour setting.
//! 4. Build the [`OutputManager`].
//! 5. Dispatch to the appropriate command handler (`shell` when none given).
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                   |
//! |------|-------------------------------------------|
//! |  0   | Success                                   |
//! |  1   | Internal / system error                   |
//! |  2   | User / input error, or `check` rejections |
//! |  4   | Configuration error                       |

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;
mod shell;

fn main() -> ExitCode {
    // Load .env before anything else so MAILGATE_* overrides apply.
    // A missing .env is normal.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => Cli {
            global: cli.global.with_environment(),
            command: cli.command,
        },
        Err(e) => {
            // --help / --version arrive here too; clap knows the right code.
            let _ = e.print();
            return ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(2));
        }
    };

    // ── 2. Load configuration ─────────────────────────────────────────────
    // No subscriber yet, so a failure here is reported on stderr only.
    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            return handle_error(
                CliError::ConfigError {
                    message: format!("{e:#}"),
                    source: None,
                },
                cli.global.verbose > 0,
            );
        }
    };

    // ── 3. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global, &config) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        domains = config.validator.allowed_domains.len(),
        "CLI started"
    );

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);

    // ── 5. Dispatch + 6. Error handling ──────────────────────────────────
    let verbose = cli.global.verbose > 0;
    match run(cli, config, output) {
        Ok(()) => {
            info!("Mailgate completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose),
    }
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let Cli { global, command } = cli;

    match command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            commands::shell::execute(commands::build_validator(&global, &config)?, output)
        }
        Commands::Check(args) => {
            let validator = commands::build_validator(&global, &config)?;
            commands::check::execute(args, validator, output)
        }
        Commands::Domains => {
            commands::domains::execute(commands::build_validator(&global, &config)?, output)
        }
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Config(cmd) => commands::config::execute(cmd, config, output),
    }
}

/// Translate a `CliError` into a user message and an appropriate exit code.
fn handle_error(err: CliError, verbose: bool) -> ExitCode {
    err.log();

    // The `check` report already explains each rejection; keep stderr short.
    let msg = match &err {
        CliError::ValidationFailed { .. } => format!("{err}\n"),
        _ if std::io::IsTerminal::is_terminal(&std::io::stderr()) => err.format_colored(verbose),
        _ => err.format_plain(verbose),
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
