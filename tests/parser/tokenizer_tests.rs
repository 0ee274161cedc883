//! Tokenizer tests.
//!
//! Tests for converting typed text to parser tokens.

use wordnum_parser::{InputTokenizer, parse};

#[test]
fn tokenize_lowercases_and_splits_hyphens() {
    assert_eq!(
        InputTokenizer::tokenize("Twenty-Third"),
        vec!["twenty", "third"]
    );
}

#[test]
fn tokenize_strips_punctuation() {
    assert_eq!(
        InputTokenizer::tokenize("One thousand, nine hundred ten!"),
        vec!["one", "thousand", "nine", "hundred", "ten"]
    );
    assert_eq!(InputTokenizer::tokenize("'oh' five."), vec!["oh", "five"]);
}

#[test]
fn tokenize_empty_input() {
    assert!(InputTokenizer::tokenize("").is_empty());
    assert!(InputTokenizer::tokenize("  - , ").is_empty());
}

#[test]
fn tokenized_text_parses() {
    let owned = InputTokenizer::tokenize("Double-oh-seven.");
    let tokens: Vec<&str> = owned.iter().map(String::as_str).collect();
    assert_eq!(parse(&tokens, true).unwrap().literal, "007");
}

#[test]
fn parse_itself_does_not_normalize_case() {
    assert!(parse(&["Twenty"], true).is_err());
}
