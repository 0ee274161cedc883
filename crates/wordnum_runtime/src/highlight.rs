//! Syntax highlighting for the REPL.

use std::borrow::Cow;

use wordnum_parser::lexicon::{self, Entry};

const RESET: &str = "\x1b[0m";

/// Highlighter coloring number words by lexicon class.
pub struct WordHighlighter {}

impl WordHighlighter {
    /// Creates a new highlighter.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }

    /// Highlight a line of input.
    #[allow(clippy::unused_self)]
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.trim_start().starts_with(':') {
            return Cow::Owned(format!("\x1b[36m{line}{RESET}"));
        }

        let mut result = String::with_capacity(line.len() * 2);
        let mut word = String::new();

        for c in line.chars() {
            if c.is_whitespace() || c == '-' {
                push_word(&mut result, &word);
                word.clear();
                result.push(c);
            } else {
                word.push(c);
            }
        }
        push_word(&mut result, &word);

        Cow::Owned(result)
    }
}

impl Default for WordHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

fn push_word(out: &mut String, word: &str) {
    if word.is_empty() {
        return;
    }

    let color = color_for(word);
    if color.is_empty() {
        out.push_str(word);
    } else {
        out.push_str(color);
        out.push_str(word);
        out.push_str(RESET);
    }
}

/// ANSI color for one word; empty for plain text.
fn color_for(word: &str) -> &'static str {
    let folded = word
        .trim_matches(|c: char| ".,!?;:'".contains(c))
        .to_lowercase();

    if folded.starts_with(|c: char| c.is_ascii_digit()) {
        return "\x1b[35m"; // magenta
    }

    match lexicon::lookup(&folded) {
        Some(Entry::Cardinal(_)) if lexicon::is_placeholder_word(&folded) => "\x1b[2;35m",
        Some(Entry::Cardinal(_)) => "\x1b[32m",
        Some(Entry::Ordinal(_)) => "\x1b[33m",
        Some(Entry::Scale(scale)) if scale.ordinal => "\x1b[1;33m",
        Some(Entry::Scale(_)) => "\x1b[1;32m",
        Some(Entry::Repeater(_)) => "\x1b[34m",
        Some(Entry::Article) => "\x1b[2m",
        Some(Entry::FractionJoiner) | None => "\x1b[31m",
    }
}
