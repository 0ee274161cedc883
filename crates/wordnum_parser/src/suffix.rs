//! Ordinal suffix validation for numerals.
//!
//! Handles tokens like "21st", "3rd" and the archaic "2d", independent of the
//! word-based ordinals in the lexicon.

use std::fmt;

/// A recognized English ordinal suffix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OrdinalSuffix {
    /// "st"
    St,
    /// "nd"
    Nd,
    /// "rd"
    Rd,
    /// "th"
    Th,
    /// Archaic "d", as in "2d" and "3d".
    D,
}

impl OrdinalSuffix {
    /// All suffixes, longest first.
    pub const ALL: [Self; 5] = [Self::St, Self::Nd, Self::Rd, Self::Th, Self::D];

    /// The suffix text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::St => "st",
            Self::Nd => "nd",
            Self::Rd => "rd",
            Self::Th => "th",
            Self::D => "d",
        }
    }

    /// Checks the suffix against the last digits of `numeral`.
    ///
    /// - last two digits 11, 12, 13 take "th"
    /// - otherwise a last digit of 1 takes "st", 2 takes "nd" or "d",
    ///   3 takes "rd" or "d", and everything else takes "th"
    #[must_use]
    pub fn agrees_with(self, numeral: &str) -> bool {
        let Some(last_two) = last_two_digits(numeral) else {
            return false;
        };

        if (11..=13).contains(&last_two) {
            return self == Self::Th;
        }

        match last_two % 10 {
            1 => self == Self::St,
            2 => matches!(self, Self::Nd | Self::D),
            3 => matches!(self, Self::Rd | Self::D),
            _ => self == Self::Th,
        }
    }
}

impl fmt::Display for OrdinalSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The result of stripping a suffix from a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SuffixMatch<'a> {
    /// The suffix found, if the rest of the token is all digits.
    pub suffix: Option<OrdinalSuffix>,
    /// The token without its suffix, or the whole token.
    pub base: &'a str,
    /// True when a suffix was found and agrees with the numeral.
    pub valid: bool,
}

/// Tries each suffix, longest first, and stops at the first one whose
/// remainder is all ASCII digits.
///
/// Tokens with no such suffix come back unchanged with `suffix: None`.
#[must_use]
pub fn strip_ordinal_suffix(token: &str) -> SuffixMatch<'_> {
    for suffix in OrdinalSuffix::ALL {
        let Some(base) = token.strip_suffix(suffix.as_str()) else {
            continue;
        };
        if !is_numeral(base) {
            continue;
        }
        return SuffixMatch {
            suffix: Some(suffix),
            base,
            valid: suffix.agrees_with(base),
        };
    }

    SuffixMatch {
        suffix: None,
        base: token,
        valid: false,
    }
}

/// Returns true for a non-empty run of ASCII digits.
#[must_use]
pub fn is_numeral(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn last_two_digits(numeral: &str) -> Option<u8> {
    if !is_numeral(numeral) {
        return None;
    }
    let tail = &numeral[numeral.len().saturating_sub(2)..];
    tail.parse().ok()
}
