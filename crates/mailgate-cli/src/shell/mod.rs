//! Interactive read-dispatch-print loop.
//!
//! A [`Session`] owns the [`EmailValidator`] for the lifetime of the shell.
//! Each input line is parsed into a [`Command`], handled into a [`Reply`]
//! (pure, no I/O), and the reply's lines are written by the
//! [`OutputManager`].  Per-line failures are reported and the loop carries
//! on; only an interrupt, end of input, or `exit`/`quit` ends it.

pub mod command;
pub mod reader;

use tracing::{debug, warn};

use mailgate_core::prelude::{EmailValidator, ValidationResult};

use crate::{
    error::{CliError, CliResult},
    output::{Line, OutputManager},
};

pub use command::Command;
pub use reader::{EditorReader, LineReader, ReadOutcome};

pub const PROMPT: &str = "Enter command or emails: ";

/// Consecutive input failures tolerated before the shell gives up.
const MAX_READ_FAILURES: u32 = 3;

const HELP_TEXT: [&str; 6] = [
    "- Enter email addresses (comma or space separated)",
    "- 'help' or '?' - Show this help",
    "- 'domains' - List allowed domains",
    "- 'add <domain>' - Add a domain to allowed list",
    "- 'remove <domain>' - Remove a domain from allowed list",
    "- 'exit' or 'quit' - Exit the program",
];

/// Whether the loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Output produced by one command.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub lines: Vec<Line>,
    pub flow: Flow,
}

impl Reply {
    fn lines(lines: Vec<Line>) -> Self {
        Self {
            lines,
            flow: Flow::Continue,
        }
    }

    fn line(line: Line) -> Self {
        Self::lines(vec![line])
    }

    fn exit(lines: Vec<Line>) -> Self {
        Self {
            lines,
            flow: Flow::Exit,
        }
    }
}

/// State of one interactive shell.
pub struct Session {
    validator: EmailValidator,
}

impl Session {
    pub fn new(validator: EmailValidator) -> Self {
        Self { validator }
    }

    #[cfg(test)]
    pub fn validator(&self) -> &EmailValidator {
        &self.validator
    }

    /// Startup banner.
    pub fn banner(&self) -> Vec<Line> {
        vec![
            Line::heading("Email Validator Tool"),
            Line::text("=".repeat(40)),
            Line::text(format!(
                "Allowed domains: {}",
                self.validator.sorted_domains().join(", ")
            )),
            Line::text("Type 'help' for commands or 'exit' to quit."),
            Line::Blank,
        ]
    }

    /// Run until exit, interrupt, or end of input.
    ///
    /// Output failures are reported (or logged, if even that fails) and the
    /// loop keeps reading; only the input side can end it with an error.
    pub fn run<R: LineReader>(
        &mut self,
        reader: &mut R,
        output: &OutputManager,
    ) -> CliResult<()> {
        if !output.is_quiet() {
            self.emit(&self.banner(), output);
        }

        let mut read_failures = 0;
        loop {
            let line = match reader.read_line(PROMPT) {
                Ok(ReadOutcome::Line(line)) => {
                    read_failures = 0;
                    line
                }
                Ok(ReadOutcome::Interrupted | ReadOutcome::Eof) => {
                    debug!("input closed, leaving shell");
                    self.emit(&[Line::Blank, Line::text("Exiting...")], output);
                    return Ok(());
                }
                Err(e) => {
                    read_failures += 1;
                    if read_failures >= MAX_READ_FAILURES {
                        return Err(e);
                    }
                    self.report(&e, output);
                    continue;
                }
            };

            if !line.trim().is_empty() {
                reader.add_history(&line);
            }

            let reply = self.handle(Command::parse(&line));
            self.emit(&reply.lines, output);
            if reply.flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    fn emit(&self, lines: &[Line], output: &OutputManager) {
        if let Err(e) = output.emit_all(lines) {
            self.report(&e.into(), output);
        }
    }

    fn report(&self, err: &CliError, output: &OutputManager) {
        warn!("shell iteration failed: {err}");
        if let Err(write_err) = output.error(&format!("An error occurred: {err}")) {
            warn!("could not print shell error: {write_err}");
        }
    }

    /// Execute one command against the session state.
    pub fn handle(&mut self, command: Command<'_>) -> Reply {
        match command {
            Command::Empty => Reply::lines(Vec::new()),
            Command::Exit => Reply::exit(vec![Line::text("Goodbye!")]),
            Command::Help => Reply::lines(help_lines()),
            Command::Domains => Reply::lines(self.domain_lines()),
            Command::Add(domain) => Reply::line(self.add(domain)),
            Command::Remove(domain) => Reply::line(self.remove(domain)),
            Command::Validate(text) => {
                Reply::lines(report_lines(&self.validator.validate_batch(text)))
            }
        }
    }

    fn add(&mut self, domain: &str) -> Line {
        if domain.is_empty() {
            return Line::failure("Please specify a domain to add");
        }
        match self.validator.add_domain(domain) {
            Ok(_) => Line::success(format!("Added domain: {domain}")),
            Err(e) => Line::failure(e.to_string()),
        }
    }

    fn remove(&mut self, domain: &str) -> Line {
        if domain.is_empty() {
            return Line::failure("Please specify a domain to remove");
        }
        if self.validator.remove_domain(domain) {
            Line::success(format!("Removed domain: {domain}"))
        } else {
            Line::failure(format!("Domain '{domain}' not found in allowed list"))
        }
    }

    fn domain_lines(&self) -> Vec<Line> {
        domain_list_lines(&self.validator)
    }
}

fn help_lines() -> Vec<Line> {
    let mut lines = vec![Line::Blank, Line::heading("Email Validator Commands:")];
    lines.extend(HELP_TEXT.iter().map(|l| Line::text(*l)));
    lines.push(Line::Blank);
    lines
}

/// `Allowed domains (<n>):` followed by one bulleted, sorted line per domain.
pub fn domain_list_lines(validator: &EmailValidator) -> Vec<Line> {
    let domains = validator.sorted_domains();
    let mut lines = vec![
        Line::Blank,
        Line::heading(format!("Allowed domains ({}):", domains.len())),
    ];
    lines.extend(domains.iter().map(|d| Line::text(format!("  \u{2022} {d}"))));
    lines
}

/// Validation report, one row per result in input order.
pub fn report_lines(results: &[ValidationResult]) -> Vec<Line> {
    if results.is_empty() {
        return vec![Line::text("No valid emails found to process.")];
    }

    let mut lines = vec![
        Line::Blank,
        Line::heading("Validation Results:"),
        Line::text("-".repeat(50)),
    ];
    lines.extend(results.iter().cloned().map(Line::Result));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    use crate::cli::{GlobalArgs, OutputFormat};
    use crate::config::AppConfig;

    fn session() -> Session {
        Session::new(EmailValidator::new())
    }

    fn send(session: &mut Session, input: &str) -> Reply {
        session.handle(Command::parse(input))
    }

    fn texts(reply: &Reply) -> Vec<String> {
        reply
            .lines
            .iter()
            .filter_map(|l| match l {
                Line::Text(t)
                | Line::Heading(t)
                | Line::Info(t)
                | Line::Success(t)
                | Line::Failure(t) => Some(t.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn exit_and_quit_end_the_loop() {
        let mut s = session();
        for input in ["exit", "QUIT"] {
            let reply = send(&mut s, input);
            assert_eq!(reply.flow, Flow::Exit);
            assert_eq!(texts(&reply), vec!["Goodbye!"]);
        }
    }

    #[test]
    fn empty_input_prints_nothing() {
        let reply = send(&mut session(), "   ");
        assert!(reply.lines.is_empty());
        assert_eq!(reply.flow, Flow::Continue);
    }

    #[test]
    fn help_lists_commands() {
        let reply = send(&mut session(), "?");
        let texts = texts(&reply);
        assert_eq!(texts[0], "Email Validator Commands:");
        assert!(texts.iter().any(|t| t.contains("'add <domain>'")));
        assert!(texts.iter().any(|t| t.contains("'exit' or 'quit'")));
    }

    #[test]
    fn domains_are_sorted_with_count() {
        let reply = send(&mut session(), "domains");
        assert_eq!(
            texts(&reply),
            vec![
                "Allowed domains (5):",
                "  • gmail.com",
                "  • hotmail.com",
                "  • icloud.com",
                "  • outlook.com",
                "  • yahoo.com",
            ]
        );
    }

    #[test]
    fn add_then_validate() {
        let mut s = session();
        let reply = send(&mut s, "add Example.org");
        assert_eq!(reply.lines, vec![Line::success("Added domain: Example.org")]);
        assert!(s.validator().contains_domain("example.org"));

        let reply = send(&mut s, "bob@example.org");
        assert!(matches!(&reply.lines[3], Line::Result(r) if r.is_valid()));
    }

    #[test]
    fn add_without_domain_prompts() {
        let reply = send(&mut session(), "add");
        assert_eq!(reply.lines, vec![Line::failure("Please specify a domain to add")]);
    }

    #[test]
    fn remove_is_case_insensitive() {
        let mut s = session();
        let reply = send(&mut s, "remove GMAIL.com");
        assert_eq!(reply.lines, vec![Line::success("Removed domain: GMAIL.com")]);
        assert!(!s.validator().contains_domain("gmail.com"));
    }

    #[test]
    fn remove_unknown_domain_reports_not_found() {
        let reply = send(&mut session(), "remove nowhere.net");
        assert_eq!(
            reply.lines,
            vec![Line::failure("Domain 'nowhere.net' not found in allowed list")]
        );
    }

    #[test]
    fn remove_without_domain_prompts() {
        let reply = send(&mut session(), "remove ");
        assert_eq!(
            reply.lines,
            vec![Line::failure("Please specify a domain to remove")]
        );
    }

    #[test]
    fn batch_report_keeps_input_order() {
        let reply = send(&mut session(), "a@gmail.com, b@nowhere.com c@yahoo.com");
        let texts = texts(&reply);
        assert_eq!(texts[0], "Validation Results:");
        assert_eq!(texts[1], "-".repeat(50));

        let rows: Vec<_> = reply
            .lines
            .iter()
            .filter_map(|l| match l {
                Line::Result(r) => Some((r.email.as_str(), r.is_valid(), r.message())),
                _ => None,
            })
            .collect();
        assert_eq!(
            rows,
            vec![
                ("a@gmail.com", true, "gmail.com".to_string()),
                ("b@nowhere.com", false, "Domain 'nowhere.com' not allowed".to_string()),
                ("c@yahoo.com", true, "yahoo.com".to_string()),
            ]
        );
    }

    #[test]
    fn separators_only_reports_nothing_found() {
        let reply = send(&mut session(), ",;,");
        assert_eq!(texts(&reply), vec!["No valid emails found to process."]);
    }

    #[test]
    fn banner_lists_sorted_domains() {
        let banner = session().banner();
        assert_eq!(
            banner[2],
            Line::text(
                "Allowed domains: gmail.com, hotmail.com, icloud.com, outlook.com, yahoo.com"
            )
        );
    }

    // ── run loop ──────────────────────────────────────────────────────────

    struct ScriptedReader {
        script: VecDeque<CliResult<ReadOutcome>>,
        history: Vec<String>,
    }

    impl ScriptedReader {
        fn new(script: Vec<CliResult<ReadOutcome>>) -> Self {
            Self {
                script: script.into(),
                history: Vec::new(),
            }
        }
    }

    impl LineReader for ScriptedReader {
        fn read_line(&mut self, _prompt: &str) -> CliResult<ReadOutcome> {
            self.script.pop_front().unwrap_or(Ok(ReadOutcome::Eof))
        }

        fn add_history(&mut self, line: &str) {
            self.history.push(line.to_owned());
        }
    }

    fn quiet_output() -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet: true,
            no_color: true,
            config: None,
            output_format: OutputFormat::Plain,
            domains: Vec::new(),
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    fn line(s: &str) -> CliResult<ReadOutcome> {
        Ok(ReadOutcome::Line(s.to_owned()))
    }

    #[test]
    fn run_applies_commands_until_exit() {
        let mut s = session();
        let mut reader = ScriptedReader::new(vec![
            line("add corp.io"),
            line(""),
            line("exit"),
            line("remove corp.io"),
        ]);

        s.run(&mut reader, &quiet_output()).unwrap();

        assert!(s.validator().contains_domain("corp.io"));
        assert_eq!(reader.history, vec!["add corp.io", "exit"]);
        assert_eq!(reader.script.len(), 1);
    }

    #[test]
    fn run_stops_on_interrupt() {
        let mut s = session();
        let mut reader =
            ScriptedReader::new(vec![Ok(ReadOutcome::Interrupted), line("add corp.io")]);

        s.run(&mut reader, &quiet_output()).unwrap();
        assert!(!s.validator().contains_domain("corp.io"));
    }

    #[test]
    fn run_survives_a_read_failure() {
        let mut s = session();
        let mut reader = ScriptedReader::new(vec![
            Err(CliError::Readline {
                message: "bad utf-8".into(),
            }),
            line("add corp.io"),
        ]);

        s.run(&mut reader, &quiet_output()).unwrap();
        assert!(s.validator().contains_domain("corp.io"));
    }

    #[test]
    fn blank_lines_skip_history() {
        let mut reader = reader::MockLineReader::new();
        let mut seq = mockall::Sequence::new();
        reader
            .expect_read_line()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| line("   "));
        reader
            .expect_read_line()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(ReadOutcome::Eof));
        reader.expect_add_history().never();

        session().run(&mut reader, &quiet_output()).unwrap();
    }

    #[test]
    fn prompt_is_passed_to_reader() {
        let mut reader = reader::MockLineReader::new();
        reader
            .expect_read_line()
            .withf(|prompt| prompt.to_string() == PROMPT)
            .times(1)
            .returning(|_| Ok(ReadOutcome::Interrupted));

        session().run(&mut reader, &quiet_output()).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn unwritable_output_does_not_end_the_shell() {
        // A read-only handle used as the writer makes every write fail.
        let dev_null = || std::fs::File::open("/dev/null").unwrap();
        let broken = console::Term::read_write_pair(dev_null(), dev_null());
        let output = quiet_output().with_term(broken);

        let mut s = session();
        let mut reader = ScriptedReader::new(vec![
            line("bad-address"),
            line("add corp.io"),
            line("exit"),
            line("remove corp.io"),
        ]);

        s.run(&mut reader, &output).unwrap();
        assert!(s.validator().contains_domain("corp.io"));
        assert_eq!(reader.script.len(), 1);
    }

    #[test]
    fn run_gives_up_after_repeated_read_failures() {
        let failure = || {
            Err(CliError::Readline {
                message: "stdin gone".into(),
            })
        };
        let mut reader = ScriptedReader::new(vec![failure(), failure(), failure()]);

        let result = session().run(&mut reader, &quiet_output());
        assert!(matches!(result, Err(CliError::Readline { .. })));
    }
}
