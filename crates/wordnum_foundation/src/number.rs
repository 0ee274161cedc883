//! Parse results.

use std::fmt;

/// Whether a numeral was read as a count or a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NumberType {
    /// "one", "twenty three", "1023"
    Cardinal,
    /// "first", "twenty third", "21st"
    Ordinal,
}

impl fmt::Display for NumberType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cardinal => write!(f, "cardinal"),
            Self::Ordinal => write!(f, "ordinal"),
        }
    }
}

/// The outcome of a successful parse.
///
/// `value` always equals the integer reading of `literal`; `literal` keeps
/// leading zeros ("double oh seven" gives `"007"`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedNumber {
    /// Cardinal or ordinal reading.
    pub number_type: NumberType,
    /// Integer value of the literal.
    pub value: u128,
    /// Zero-padded digit string.
    pub literal: String,
    /// True when the numeral plausibly joins two quantities, such as hours
    /// and minutes or dollars and cents.
    pub separator_hint: bool,
}

impl ParsedNumber {
    /// Returns true for ordinal readings.
    #[must_use]
    pub fn is_ordinal(&self) -> bool {
        self.number_type == NumberType::Ordinal
    }
}

impl fmt::Display for ParsedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, '{}', {})",
            self.number_type, self.value, self.literal, self.separator_hint
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_tuple() {
        let number = ParsedNumber {
            number_type: NumberType::Cardinal,
            value: 7,
            literal: "007".to_string(),
            separator_hint: false,
        };
        assert_eq!(number.to_string(), "(cardinal, 7, '007', false)");
        assert!(!number.is_ordinal());
    }
}
