//! Top-level normalization and result finalization.
//!
//! Normalization runs once before the top slot is filled and only ever
//! rewrites the first one or two tokens. Finalization turns the top slot's
//! digits into a [`ParsedNumber`].

use wordnum_foundation::{DigitString, Error, NumberType, ParsedNumber, Result};

use crate::lexicon;
use crate::slot::SlotFlags;

/// Largest value the separator hint considers (three digits plus two).
pub const SEPARATOR_HINT_MAX: u128 = 99_999;

/// Smallest value the separator hint considers.
pub const SEPARATOR_HINT_MIN: u128 = 100;

/// Tokens ready for the slot parser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Normalized<'t> {
    /// The rewritten token sequence.
    pub tokens: Vec<&'t str>,
    /// Number of tokens prepended in front of the caller's first token.
    pub lead_in: usize,
}

/// Rewrites articles and a leading scale word.
///
/// - a lone "a" or "an" becomes "one"
/// - a leading scale word gets "one" in front of it ("hundred" → "one hundred")
/// - "an" before a scale word starting with "h" becomes "one" ("an hundred")
/// - "a" before any scale word becomes "one"
#[must_use]
pub fn normalize<'t>(tokens: &[&'t str]) -> Normalized<'t> {
    if let [only] = tokens {
        if lexicon::is_article(only) {
            return Normalized {
                tokens: vec![lexicon::UNIT_WORD],
                lead_in: 0,
            };
        }
    }

    let mut lead_in = 0;
    let mut normalized = tokens.to_vec();

    if normalized.first().is_some_and(|t| lexicon::scale(t).is_some()) {
        normalized.insert(0, lexicon::UNIT_WORD);
        lead_in = 1;
    }

    if let [article, next, ..] = normalized.as_slice() {
        let before_scale = lexicon::scale(next).is_some();
        let soft = *article == "an" && next.starts_with(lexicon::SOFT_START);
        if before_scale && (*article == "a" || soft) {
            normalized[0] = lexicon::UNIT_WORD;
        }
    }

    Normalized {
        tokens: normalized,
        lead_in,
    }
}

/// Builds the result from the top slot's digits.
///
/// `original` is the caller's token sequence before normalization; the
/// separator hint looks at it rather than the rewritten one.
///
/// # Errors
///
/// Returns `ValueOutOfRange` when the literal is empty or does not fit in a
/// `u128`.
pub fn finalize(
    original: &[&str],
    content: &DigitString,
    flags: SlotFlags,
    colloquial: bool,
) -> Result<ParsedNumber> {
    let literal = content.to_literal();
    let Some(value) = content.to_value() else {
        return Err(Error::out_of_range(literal));
    };

    let number_type = if flags.ordinal {
        NumberType::Ordinal
    } else {
        NumberType::Cardinal
    };

    Ok(ParsedNumber {
        number_type,
        value,
        literal,
        separator_hint: separator_hint(original, value, flags, colloquial),
    })
}

/// Guesses whether a colloquial reading is really two quantities run
/// together, such as "three forty five" for 3:45 or "nine ninety nine" for
/// $9.99.
///
/// Never true for strict parses, for values outside 100..=99999, or when a
/// scale word was spoken. Otherwise true if a placeholder word was spoken or
/// there were at least two tokens.
#[must_use]
pub fn separator_hint(original: &[&str], value: u128, flags: SlotFlags, colloquial: bool) -> bool {
    if !colloquial || !flags.colloquial {
        return false;
    }
    if !(SEPARATOR_HINT_MIN..=SEPARATOR_HINT_MAX).contains(&value) {
        return false;
    }
    if original.iter().any(|t| lexicon::scale(t).is_some()) {
        return false;
    }

    original.iter().any(|t| lexicon::is_placeholder_word(t)) || original.len() >= 2
}
