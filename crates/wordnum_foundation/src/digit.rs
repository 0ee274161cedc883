//! Digit positions for numerals under construction.
//!
//! Words like "oh", "zero" and "aught" fill a position without committing to a
//! value, and so does the padding added when a slot overflows. Those positions
//! are [`Digit::Placeholder`]; they only become `0` when the final literal is
//! rendered.

use std::fmt;

/// A single digit position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Digit {
    /// A digit whose value is known (0 through 9).
    Known(u8),
    /// A zero-filled position that is not an explicit digit.
    Placeholder,
}

impl Digit {
    /// Known zero.
    pub const ZERO: Self = Self::Known(0);

    /// Creates a known digit from an ASCII digit character.
    #[must_use]
    pub fn from_ascii(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| {
            #[allow(clippy::cast_possible_truncation)]
            Self::Known(d as u8)
        })
    }

    /// Returns true for placeholders and known zeros alike.
    #[must_use]
    pub const fn is_zero_like(self) -> bool {
        matches!(self, Self::Known(0) | Self::Placeholder)
    }

    /// Returns the numeric value, with placeholders reading as zero.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Known(d) => d,
            Self::Placeholder => 0,
        }
    }

    /// The character this digit contributes to a literal.
    #[must_use]
    pub fn literal_char(self) -> char {
        char::from(b'0' + self.value())
    }

    /// The character used in traces, where placeholders stay visible.
    #[must_use]
    pub fn marked_char(self) -> char {
        match self {
            Self::Known(_) => self.literal_char(),
            Self::Placeholder => 'x',
        }
    }
}

/// An ordered run of digit positions, most significant first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DigitString(Vec<Digit>);

impl DigitString {
    /// Creates an empty digit string.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Creates a digit string from a run of ASCII digits.
    ///
    /// Returns `None` for an empty string or any non-digit character.
    #[must_use]
    pub fn from_numeral(numeral: &str) -> Option<Self> {
        if numeral.is_empty() {
            return None;
        }
        numeral
            .chars()
            .map(Digit::from_ascii)
            .collect::<Option<Vec<_>>>()
            .map(Self)
    }

    /// Number of positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when no position has been filled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The positions as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Digit] {
        &self.0
    }

    /// Appends one position.
    pub fn push(&mut self, digit: Digit) {
        self.0.push(digit);
    }

    /// Appends every position of `digits`.
    pub fn extend_from_slice(&mut self, digits: &[Digit]) {
        self.0.extend_from_slice(digits);
    }

    /// Returns true if this is exactly one placeholder.
    #[must_use]
    pub fn is_single_placeholder(&self) -> bool {
        matches!(self.0.as_slice(), [Digit::Placeholder])
    }

    /// Counts trailing known zeros; placeholders stop the count.
    #[must_use]
    pub fn trailing_known_zeros(digits: &[Digit]) -> usize {
        digits
            .iter()
            .rev()
            .take_while(|d| **d == Digit::ZERO)
            .count()
    }

    /// Left-pads with known zeros up to `width`. Longer strings are returned
    /// unchanged.
    #[must_use]
    pub fn padded(&self, width: usize) -> Self {
        let fill = width.saturating_sub(self.len());
        let mut digits = Vec::with_capacity(fill + self.len());
        digits.resize(fill, Digit::ZERO);
        digits.extend_from_slice(&self.0);
        Self(digits)
    }

    /// Multiplies the value by `10^zeros`.
    ///
    /// Leading zero-like positions are dropped and placeholders become known
    /// zeros. A value of zero stays a single `0`.
    #[must_use]
    pub fn scaled(&self, zeros: usize) -> Self {
        let significant: Vec<Digit> = self
            .0
            .iter()
            .skip_while(|d| d.is_zero_like())
            .map(|d| Digit::Known(d.value()))
            .collect();

        if significant.is_empty() {
            return Self(vec![Digit::ZERO]);
        }

        let mut digits = significant;
        digits.resize(digits.len() + zeros, Digit::ZERO);
        Self(digits)
    }

    /// Renders the final literal, placeholders as `0`.
    #[must_use]
    pub fn to_literal(&self) -> String {
        self.0.iter().map(|d| d.literal_char()).collect()
    }

    /// Renders with placeholders shown as `x`.
    #[must_use]
    pub fn to_marked(&self) -> String {
        self.0.iter().map(|d| d.marked_char()).collect()
    }

    /// Interprets the positions as an unsigned integer.
    ///
    /// Returns `None` when empty or when the value does not fit in `u128`.
    #[must_use]
    pub fn to_value(&self) -> Option<u128> {
        if self.is_empty() {
            return None;
        }
        self.0.iter().try_fold(0u128, |acc, d| {
            acc.checked_mul(10)?.checked_add(u128::from(d.value()))
        })
    }
}

impl From<&[Digit]> for DigitString {
    fn from(digits: &[Digit]) -> Self {
        Self(digits.to_vec())
    }
}

impl FromIterator<Digit> for DigitString {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for DigitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_marked())
    }
}
