//! The interactive REPL.
//!
//! Each line is either a `:command` or number words. Words are tokenized,
//! parsed with the current [`ParserConfig`], and the reading is printed as
//! `(type, value, 'literal', hint)`.

use std::fmt::Write as _;
use std::io::{self, Write};

use wordnum_data::{TimeZoneRule, format_utc_offset, locale_ignore_case, locale_time_zone};
use wordnum_debug::Tracer;
use wordnum_parser::{InputTokenizer, NumberParser, ParserConfig};

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::error::{Result, RuntimeError};
use crate::selftest::run_self_test;

/// Commands understood by [`Repl::eval`].
pub const COMMANDS: &[&str] = &[
    ":colloquial",
    ":strict",
    ":trace",
    ":selftest",
    ":locale",
    ":zone",
    ":help",
    ":quit",
];

const HELP: &str = "\
Type number words to read them, for example `one thousand nine hundred ten`.

  :colloquial      allow digit-by-digit readings and repeaters (default)
  :strict          formal readings only
  :trace on|off    show how each parse filled its slots
  :selftest        run the built-in battery
  :locale NAME     show a place and its time zone
  :zone ID         show a time zone's offsets
  :help            this text
  :quit            exit (or Ctrl+D)";

/// What evaluating one line produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// Text to show; may be empty.
    Output(String),
    /// The user asked to leave.
    Quit,
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// How number words are read.
    config: ParserConfig,

    /// Records slot decisions while `:trace on`.
    tracer: Tracer,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E) -> Self {
        Self {
            editor,
            config: ParserConfig::default(),
            tracer: Tracer::disabled(),
            show_banner: true,
            prompt: "# ".to_string(),
        }
    }

    /// Sets the parser configuration.
    #[must_use]
    pub const fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    /// Turns tracing on from the start.
    #[must_use]
    pub fn with_trace(mut self) -> Self {
        self.tracer.enable();
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns the parser configuration.
    #[must_use]
    pub const fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Returns the tracer.
    #[must_use]
    pub const fn tracer(&self) -> &Tracer {
        &self.tracer
    }

    /// Runs the REPL loop.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        while self.read_eval_print()? {}

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let input = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                println!();
                return Ok(true);
            }
            ReadResult::Eof => return Ok(false),
        };

        if input.trim().is_empty() {
            return Ok(true);
        }

        self.editor.add_history(&input);

        match self.eval(&input) {
            Ok(Reply::Output(text)) => {
                if !text.is_empty() {
                    println!("{text}");
                }
            }
            Ok(Reply::Quit) => return Ok(false),
            Err(e) => {
                if self.tracer.is_enabled() && matches!(e, RuntimeError::Parse(_)) {
                    println!("{}", self.tracer.format_last_parse());
                }
                self.print_error(&e);
            }
        }

        Ok(true)
    }

    /// Evaluates one line of input.
    ///
    /// # Errors
    ///
    /// Returns the parse error for number words, or a usage error for a
    /// malformed command.
    pub fn eval(&mut self, input: &str) -> Result<Reply> {
        let input = input.trim();
        if let Some(command) = input.strip_prefix(':') {
            return self.command(command);
        }

        let owned = InputTokenizer::tokenize(input);
        let tokens: Vec<&str> = owned.iter().map(String::as_str).collect();

        self.tracer.begin_parse();
        let number = NumberParser::new(self.config).parse_with(&tokens, &mut self.tracer)?;

        let result = format!("\x1b[1m{number}\x1b[0m");
        if self.tracer.is_enabled() {
            Ok(Reply::Output(format!(
                "{}\n{result}",
                self.tracer.format_last_parse()
            )))
        } else {
            Ok(Reply::Output(result))
        }
    }

    fn command(&mut self, command: &str) -> Result<Reply> {
        let (name, argument) = command
            .split_once(char::is_whitespace)
            .map_or((command, ""), |(n, a)| (n, a.trim()));

        let text = match (name, argument) {
            ("colloquial", "") => {
                self.config = self.config.with_colloquial(true);
                "colloquial mode".to_string()
            }
            ("strict", "") => {
                self.config = self.config.with_colloquial(false);
                "strict mode".to_string()
            }
            ("trace", "on") => {
                self.tracer.enable();
                "tracing on".to_string()
            }
            ("trace", "off") => {
                self.tracer.disable();
                "tracing off".to_string()
            }
            ("trace", "") => {
                let state = if self.tracer.is_enabled() { "on" } else { "off" };
                format!("tracing {state}")
            }
            ("selftest", "") => run_self_test().lines().join("\n"),
            ("locale", name) if !name.is_empty() => describe_locale(name)?,
            ("zone", id) if !id.is_empty() => describe_zone(id)?,
            ("help", "") => HELP.to_string(),
            ("quit", "") => return Ok(Reply::Quit),
            _ => {
                return Err(RuntimeError::usage(format!(
                    "unknown command :{command} (try :help)"
                )));
            }
        };

        Ok(Reply::Output(text))
    }

    #[allow(clippy::unused_self)]
    fn print_error(&self, error: &RuntimeError) {
        eprintln!("\x1b[31mError: {error}\x1b[0m");
    }

    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("\x1b[1;36mwordnum\x1b[0m v{}", env!("CARGO_PKG_VERSION"));
        println!("Type number words to read them. :help for commands, Ctrl+D to exit.\n");

        let _ = io::stdout().flush();
    }
}

fn describe_locale(name: &str) -> Result<String> {
    let locale = locale_ignore_case(name)
        .ok_or_else(|| RuntimeError::usage(format!("unknown locale: {name}")))?;
    let (_, zone) = locale_time_zone(locale.key)
        .ok_or_else(|| RuntimeError::usage(format!("no zone for locale: {name}")))?;

    Ok(format!(
        "{} ({:.4}, {:.4})\n{}",
        locale.display,
        locale.latitude,
        locale.longitude,
        describe_rule(zone)
    ))
}

fn describe_zone(id: &str) -> Result<String> {
    wordnum_data::time_zone(id)
        .map(describe_rule)
        .ok_or_else(|| RuntimeError::usage(format!("unknown time zone: {id}")))
}

fn describe_rule(zone: &TimeZoneRule) -> String {
    let mut text = zone.to_string();
    if let (Some(start), Some(end)) = (zone.dst_start, zone.dst_end) {
        let _ = write!(text, "\n  daylight from {start} to {end}");
    }
    if let Some(rule) = zone.dst_rule {
        let _ = write!(text, " ({rule})");
    }
    if !zone.observes_dst() {
        let _ = write!(
            text,
            "\n  no daylight time, always {}",
            format_utc_offset(zone.std_offset_minutes)
        );
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockEditor {
        inputs: Vec<String>,
        index: usize,
        history: Vec<String>,
    }

    impl MockEditor {
        fn new(inputs: Vec<&str>) -> Self {
            Self {
                inputs: inputs.into_iter().map(String::from).collect(),
                index: 0,
                history: Vec::new(),
            }
        }
    }

    impl LineEditor for MockEditor {
        fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
            if self.index < self.inputs.len() {
                let line = self.inputs[self.index].clone();
                self.index += 1;
                Ok(ReadResult::Line(line))
            } else {
                Ok(ReadResult::Eof)
            }
        }

        fn add_history(&mut self, line: &str) {
            self.history.push(line.to_string());
        }

        fn set_keywords(&mut self, _keywords: Vec<String>) {}
    }

    fn repl() -> Repl<MockEditor> {
        Repl::with_editor(MockEditor::new(vec![])).without_banner()
    }

    fn output(reply: Reply) -> String {
        match reply {
            Reply::Output(text) => text,
            Reply::Quit => panic!("unexpected quit"),
        }
    }

    #[test]
    fn eval_number_words() {
        let mut repl = repl();
        let text = output(repl.eval("One thousand, nine hundred ten.").unwrap());
        assert!(text.contains("(cardinal, 1910, '1910', false)"));

        let text = output(repl.eval("twenty-third").unwrap());
        assert!(text.contains("(ordinal, 23, '23', false)"));
    }

    #[test]
    fn eval_reports_parse_errors() {
        let mut repl = repl();
        let err = repl.eval("seven and two eighths").unwrap_err();
        assert!(matches!(err, RuntimeError::Parse(_)));
    }

    #[test]
    fn strict_and_colloquial_commands() {
        let mut repl = repl();
        assert!(repl.eval("double oh seven").is_ok());

        assert_eq!(output(repl.eval(":strict").unwrap()), "strict mode");
        assert!(!repl.config().colloquial);
        assert!(repl.eval("double oh seven").is_err());

        repl.eval(":colloquial").unwrap();
        let text = output(repl.eval("double oh seven").unwrap());
        assert!(text.contains("'007'"));
    }

    #[test]
    fn trace_command_includes_trace() {
        let mut repl = repl();
        assert_eq!(output(repl.eval(":trace").unwrap()), "tracing off");

        repl.eval(":trace on").unwrap();
        assert!(repl.tracer().is_enabled());

        let text = output(repl.eval("twenty three").unwrap());
        assert!(text.starts_with("P0001 > slot(20)"));
        assert!(text.ends_with("(cardinal, 23, '23', false)\x1b[0m"));

        repl.eval(":trace off").unwrap();
        let text = output(repl.eval("twenty three").unwrap());
        assert!(!text.contains("slot("));
    }

    #[test]
    fn locale_and_zone_commands() {
        let mut repl = repl();
        let text = output(repl.eval(":locale new york").unwrap());
        assert!(text.starts_with("New York City, New York (40.7128, -74.0060)"));
        assert!(text.contains("America/New_York UTC-05:00 / UTC-04:00"));
        assert!(text.contains("daylight from Second Sunday in March"));

        let text = output(repl.eval(":zone Asia/Kathmandu").unwrap());
        assert!(text.contains("always UTC+05:45"));

        assert!(matches!(
            repl.eval(":zone Mars/Olympus_Mons"),
            Err(RuntimeError::Usage(_))
        ));
        assert!(matches!(repl.eval(":locale"), Err(RuntimeError::Usage(_))));
    }

    #[test]
    fn selftest_command() {
        let mut repl = repl();
        let text = output(repl.eval(":selftest").unwrap());
        assert!(text.ends_with(" passed, 0 failed"));
    }

    #[test]
    fn unknown_command() {
        let mut repl = repl();
        let err = repl.eval(":frobnicate").unwrap_err();
        assert!(err.to_string().contains(":help"));
        assert!(repl.eval(":strict now").is_err());
    }

    #[test]
    fn quit_stops_the_loop() {
        let editor = MockEditor::new(vec!["one", "", ":quit", "two"]);
        let mut repl = Repl::with_editor(editor).without_banner();
        repl.run().unwrap();

        assert_eq!(repl.editor.index, 3);
        assert_eq!(repl.editor.history, vec!["one", ":quit"]);
    }

    #[test]
    fn eof_stops_the_loop() {
        let editor = MockEditor::new(vec!["an million", "first"]);
        let mut repl = Repl::with_editor(editor).without_banner();
        repl.run().unwrap();
        assert_eq!(repl.editor.index, 2);
    }
}
