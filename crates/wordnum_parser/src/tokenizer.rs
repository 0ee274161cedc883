//! Input tokenization.
//!
//! Converts raw text into the lowercase word tokens [`parse`](crate::parse)
//! expects. The parser never does this itself.

/// Tokenizes typed input.
pub struct InputTokenizer;

impl InputTokenizer {
    /// Tokenizes a raw input string into words.
    ///
    /// - Converts words to lowercase
    /// - Splits on whitespace and hyphens ("twenty-third")
    /// - Strips punctuation
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut current_word = String::new();

        for ch in input.chars() {
            match ch {
                // Word boundary
                c if c.is_whitespace() || c == '-' => {
                    if !current_word.is_empty() {
                        tokens.push(current_word.to_lowercase());
                        current_word.clear();
                    }
                }
                // Punctuation to strip
                '.' | ',' | '!' | '?' | ';' | ':' | '\'' => {}
                _ => current_word.push(ch),
            }
        }

        if !current_word.is_empty() {
            tokens.push(current_word.to_lowercase());
        }

        tokens
    }
}
