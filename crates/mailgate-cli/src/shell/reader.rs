//! Line input for the interactive shell.

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::error::CliResult;

/// What a single read produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Line(String),
    /// Ctrl-C at the prompt.
    Interrupted,
    /// Ctrl-D or end of piped input.
    Eof,
}

/// Source of shell input lines.
#[cfg_attr(test, mockall::automock)]
pub trait LineReader {
    fn read_line(&mut self, prompt: &str) -> CliResult<ReadOutcome>;

    /// Remember an accepted line for recall.  In-memory only.
    fn add_history(&mut self, _line: &str) {}
}

/// Terminal-backed reader with line editing and history.
pub struct EditorReader {
    editor: DefaultEditor,
}

impl EditorReader {
    pub fn new() -> CliResult<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineReader for EditorReader {
    fn read_line(&mut self, prompt: &str) -> CliResult<ReadOutcome> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadOutcome::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadOutcome::Eof),
            Err(e) => Err(e.into()),
        }
    }

    fn add_history(&mut self, line: &str) {
        if let Err(e) = self.editor.add_history_entry(line) {
            tracing::debug!("history entry dropped: {e}");
        }
    }
}
