//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (`--no-color`, `--domain`; applied at the call-site)
//! 2. Environment variables: `MAILGATE_` prefix, `__` between sections,
//!    e.g. `MAILGATE_OUTPUT__NO_COLOR=true` or
//!    `MAILGATE_VALIDATOR__ALLOWED_DOMAINS=a.com,b.org`
//! 3. Config file: `--config <FILE>` (must exist) or the default location
//!    (used only if present)
//! 4. Built-in defaults (always present)
//!
//! Nothing here ever writes the allow-list back to disk.

use std::path::PathBuf;

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use mailgate_core::prelude::{DEFAULT_DOMAINS, EmailValidator, MailgateResult};

const ENV_PREFIX: &str = "MAILGATE";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Validator settings.
    pub validator: ValidatorConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Domains allowed at startup.  Replaces the built-in list entirely.
    pub allowed_domains: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            validator: ValidatorConfig {
                allowed_domains: DEFAULT_DOMAINS.iter().map(|d| (*d).to_owned()).collect(),
            },
            output: OutputConfig { no_color: false },
        }
    }
}

impl AppConfig {
    /// Load configuration, layering file and environment over the defaults.
    ///
    /// `config_file` is the path the user passed via `--config`; when `None`
    /// the default location is consulted if it exists.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let file = match config_file {
            Some(path) => File::from(path.as_path())
                .format(FileFormat::Toml)
                .required(true),
            None => File::from(Self::config_path().as_path())
                .format(FileFormat::Toml)
                .required(false),
        };

        Self::load_from(file, Self::environment())
    }

    fn load_from(
        file: File<config::FileSourceFile, FileFormat>,
        env: Environment,
    ) -> anyhow::Result<Self> {
        let defaults = Config::try_from(&Self::default())
            .context("Failed to encode built-in configuration defaults")?;

        Config::builder()
            .add_source(defaults)
            .add_source(file)
            .add_source(env)
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("validator.allowed_domains")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.mailgate.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "mailgate", "mailgate")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".mailgate.toml"))
    }

    /// Validator seeded with the configured allow-list.
    pub fn validator(&self) -> MailgateResult<EmailValidator> {
        EmailValidator::from_configured(&self.validator.allowed_domains)
    }

    /// Read a TOML file on its own, without environment overrides.
    #[cfg(test)]
    fn load_file_only(path: &std::path::Path) -> anyhow::Result<Self> {
        let file = File::from(path).format(FileFormat::Toml).required(true);
        // A prefix no real variable carries.
        Self::load_from(file, Environment::with_prefix("MAILGATE_TEST_UNUSED"))
    }
}
