//! Diagnostics for `mailgate` on stderr.
//!
//! The core crate emits `info!` for allow-list changes and `debug!` for each
//! accept/reject decision; this module decides which of those reach the
//! terminal.  Reports and shell replies go to stdout and never pass through
//! here, so `-q` and `-v` do not change what a pipe receives.
//!
//! `RUST_LOG`, when set, replaces the flag-derived filter entirely.

use std::io::IsTerminal as _;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{cli::GlobalArgs, config::AppConfig};

/// Crates whose events pass the verbosity filter.
const LOG_TARGETS: [&str; 2] = ["mailgate", "mailgate_core"];

/// What the subscriber is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LogSettings {
    level: LevelFilter,
    ansi: bool,
}

impl LogSettings {
    fn resolve(args: &GlobalArgs, config: &AppConfig, stderr_is_tty: bool) -> Self {
        let level = match (args.quiet, args.verbose) {
            (true, _) => LevelFilter::ERROR,
            (false, 0) => LevelFilter::WARN,
            (false, 1) => LevelFilter::INFO,
            (false, 2) => LevelFilter::DEBUG,
            (false, _) => LevelFilter::TRACE,
        };
        let colour_off = args.no_color || config.output.no_color;
        Self {
            level,
            ansi: stderr_is_tty && !colour_off,
        }
    }

    /// `mailgate=<level>,mailgate_core=<level>`
    fn directives(&self) -> String {
        let level = self.level.to_string().to_lowercase();
        LOG_TARGETS
            .iter()
            .map(|target| format!("{target}={level}"))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Install the global subscriber.  Call once, after configuration is loaded.
pub fn init_logging(args: &GlobalArgs, config: &AppConfig) -> anyhow::Result<()> {
    let settings = LogSettings::resolve(args, config, std::io::stderr().is_terminal());
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.directives()));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(settings.ansi)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}
