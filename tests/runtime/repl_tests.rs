//! REPL tests.
//!
//! Drives the REPL through a scripted editor.

use wordnum_runtime::{LineEditor, ReadResult, Reply, Repl, Result, RuntimeError};

struct ScriptedEditor {
    lines: std::vec::IntoIter<&'static str>,
}

impl ScriptedEditor {
    fn new(lines: Vec<&'static str>) -> Self {
        Self {
            lines: lines.into_iter(),
        }
    }
}

impl LineEditor for ScriptedEditor {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(match self.lines.next() {
            Some("^C") => ReadResult::Interrupted,
            Some(line) => ReadResult::Line(line.to_string()),
            None => ReadResult::Eof,
        })
    }

    fn add_history(&mut self, _line: &str) {}

    fn set_keywords(&mut self, _keywords: Vec<String>) {}
}

fn repl() -> Repl<ScriptedEditor> {
    Repl::with_editor(ScriptedEditor::new(vec![])).without_banner()
}

fn text(reply: Reply) -> String {
    match reply {
        Reply::Output(text) => text,
        Reply::Quit => String::from("<quit>"),
    }
}

#[test]
fn session_switches_modes() {
    let mut repl = repl();
    assert!(text(repl.eval("nineteen eighty four").unwrap()).contains("1984, '1984', true"));

    repl.eval(":strict").unwrap();
    assert!(matches!(
        repl.eval("nineteen eighty four"),
        Err(RuntimeError::Parse(_))
    ));

    repl.eval(":colloquial").unwrap();
    assert!(repl.eval("nineteen eighty four").is_ok());
}

#[test]
fn with_config_starts_strict() {
    let mut repl = repl().with_config(wordnum_parser::ParserConfig::strict());
    assert!(!repl.config().colloquial);
    assert!(repl.eval("double oh seven").is_err());
}

#[test]
fn help_lists_every_command() {
    let mut repl = repl();
    let help = text(repl.eval(":help").unwrap());
    for command in wordnum_runtime::repl::COMMANDS {
        assert!(help.contains(command), "{command}");
    }
}

#[test]
fn quit_reply() {
    assert_eq!(repl().eval(":quit").unwrap(), Reply::Quit);
}

#[test]
fn interrupt_does_not_end_the_session() {
    let editor = ScriptedEditor::new(vec!["^C", "twenty one", ":quit"]);
    let mut repl = Repl::with_editor(editor).without_banner();
    repl.run().unwrap();
}

#[test]
fn traced_session() {
    let mut repl = repl().with_trace();
    let output = text(repl.eval("double oh seven").unwrap());
    assert!(output.contains("double oh -> x2"));
    assert_eq!(repl.tracer().current_parse(), 1);
}

#[test]
fn locale_lookup_by_any_case() {
    let mut repl = repl();
    let output = text(repl.eval(":locale TROMSØ").unwrap());
    assert!(output.starts_with("Tromsø, Norway"));
    assert!(output.contains("Europe/Oslo"));
}
