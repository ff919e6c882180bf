//! Output management and formatting.
//!
//! Commands describe *what* to print as a list of [`Line`]s; the
//! [`OutputManager`] decides *how* (colour, quiet mode) and writes them.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

use mailgate_core::prelude::ValidationResult;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Width of the email column in validation reports.
pub const EMAIL_COLUMN_WIDTH: usize = 30;

/// One logical line of CLI output.
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    Blank,
    /// Unstyled text.
    Text(String),
    /// Section title.
    Heading(String),
    /// Informational chatter; suppressed in quiet mode.
    Info(String),
    /// A confirmed change.
    Success(String),
    /// A rejected command or a non-fatal failure.
    Failure(String),
    /// One row of a validation report.
    Result(ValidationResult),
}

impl Line {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn heading(s: impl Into<String>) -> Self {
        Self::Heading(s.into())
    }

    pub fn info(s: impl Into<String>) -> Self {
        Self::Info(s.into())
    }

    pub fn success(s: impl Into<String>) -> Self {
        Self::Success(s.into())
    }

    pub fn failure(s: impl Into<String>) -> Self {
        Self::Failure(s.into())
    }
}

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if args.output_format == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            args.output_format
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            // Plain means plain: no ANSI even on a TTY.
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    /// Write to `term` instead of stdout.
    #[cfg(test)]
    pub fn with_term(mut self, term: Term) -> Self {
        self.term = term;
        self
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Write every line in order.
    pub fn emit_all(&self, lines: &[Line]) -> io::Result<()> {
        for line in lines {
            self.emit(line)?;
        }
        Ok(())
    }

    /// Write a single line, honouring quiet mode for [`Line::Info`].
    pub fn emit(&self, line: &Line) -> io::Result<()> {
        match self.render(line) {
            Some(text) => self.term.write_line(&text),
            None => Ok(()),
        }
    }

    /// Write raw text (e.g. JSON) without styling.  Never suppressed.
    pub fn raw(&self, text: &str) -> io::Result<()> {
        self.term.write_line(text)
    }

    /// Write a prompt-less error line.  *Not* suppressed in quiet mode.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        self.emit(&Line::failure(msg))
    }

    /// Render `line` to a string, or `None` if it should not be shown.
    pub fn render(&self, line: &Line) -> Option<String> {
        let text = match line {
            Line::Blank => String::new(),
            Line::Text(text) => text.clone(),
            Line::Info(_) if self.quiet => return None,
            Line::Info(text) => text.clone(),
            Line::Heading(text) => self.paint(text, |t| t.cyan().bold().to_string()),
            Line::Success(text) => self.paint(text, |t| t.green().to_string()),
            Line::Failure(text) => self.paint(text, |t| t.red().to_string()),
            Line::Result(result) => self.render_result(result),
        };
        Some(text)
    }

    fn render_result(&self, result: &ValidationResult) -> String {
        let email = format!("{:<width$}", result.email, width = EMAIL_COLUMN_WIDTH);
        if result.is_valid() {
            let status = format!("Valid ({})", result.message());
            format!(
                "{} {email} {}",
                self.paint("\u{2713}", |t| t.green().bold().to_string()), // ✓
                self.paint(&status, |t| t.green().to_string()),
            )
        } else {
            format!(
                "{} {email} {}",
                self.paint("\u{2717}", |t| t.red().bold().to_string()), // ✗
                self.paint(&result.message(), |t| t.red().to_string()),
            )
        }
    }

    fn paint(&self, text: &str, style: impl FnOnce(&str) -> String) -> String {
        if self.no_color {
            text.to_owned()
        } else {
            style(text)
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    #[cfg(test)]
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// `true` if quiet mode suppresses informational output.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
