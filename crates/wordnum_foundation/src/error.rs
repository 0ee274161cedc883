//! Error types for wordnum.
//!
//! Uses `thiserror` for ergonomic error definition with rich context. Every
//! parse failure is final: there is no partial result and no recovery.

use std::fmt;

use thiserror::Error;

/// The main error type for wordnum operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an unrecognized token error.
    #[must_use]
    pub fn unrecognized(token: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnrecognizedToken {
            token: token.into(),
        })
    }

    /// Creates an ordinal suffix disagreement error.
    #[must_use]
    pub fn invalid_suffix(token: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidOrdinalSuffix {
            token: token.into(),
            suffix: suffix.into(),
        })
    }

    /// Creates a sequencing violation error.
    #[must_use]
    pub fn sequencing(token: impl Into<String>, rule: SequencingRule) -> Self {
        Self::new(ErrorKind::SequencingViolation {
            token: token.into(),
            rule,
        })
    }

    /// Creates a repeater misuse error.
    #[must_use]
    pub fn repeater(token: impl Into<String>, fault: RepeaterFault) -> Self {
        Self::new(ErrorKind::RepeaterMisuse {
            token: token.into(),
            fault,
        })
    }

    /// Creates a fractional numeral error.
    #[must_use]
    pub fn fractional(token: impl Into<String>) -> Self {
        Self::new(ErrorKind::FractionalNotSupported {
            token: token.into(),
        })
    }

    /// Creates an out-of-range error for the literal built so far.
    #[must_use]
    pub fn out_of_range(literal: impl Into<String>) -> Self {
        Self::new(ErrorKind::ValueOutOfRange {
            literal: literal.into(),
        })
    }

    /// Returns the offending token, if the error names one.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::UnrecognizedToken { token }
            | ErrorKind::InvalidOrdinalSuffix { token, .. }
            | ErrorKind::SequencingViolation { token, .. }
            | ErrorKind::RepeaterMisuse { token, .. }
            | ErrorKind::FractionalNotSupported { token } => Some(token),
            ErrorKind::EmptyInput | ErrorKind::ValueOutOfRange { .. } => None,
        }
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// The token matches no lexicon entry and is not a numeral.
    #[error("unrecognized token \"{token}\"")]
    UnrecognizedToken {
        /// The offending token.
        token: String,
    },

    /// A numeral carries a suffix that disagrees with its last digits.
    #[error("ordinal suffix \"{suffix}\" does not agree with \"{token}\"")]
    InvalidOrdinalSuffix {
        /// The offending token.
        token: String,
        /// The suffix that was found.
        suffix: String,
    },

    /// Digit pairing, ordinal tail, or concatenation rules were broken.
    #[error("token \"{token}\" out of sequence: {rule}")]
    SequencingViolation {
        /// The offending token.
        token: String,
        /// The rule that was broken.
        rule: SequencingRule,
    },

    /// A repeater word could not be expanded.
    #[error("repeater \"{token}\" misused: {fault}")]
    RepeaterMisuse {
        /// The repeater word.
        token: String,
        /// Why the expansion failed.
        fault: RepeaterFault,
    },

    /// The fraction joiner appeared in the token stream.
    #[error("fractional values are not supported (found \"{token}\")")]
    FractionalNotSupported {
        /// The joiner token.
        token: String,
    },

    /// No tokens were given.
    #[error("no tokens to parse")]
    EmptyInput,

    /// The numeral does not fit the top slot or an unsigned 128-bit value.
    #[error("numeral out of range: {literal}")]
    ValueOutOfRange {
        /// The literal built before giving up.
        literal: String,
    },
}

impl ErrorKind {
    /// A stable, kebab-case name for the kind, independent of its fields.
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self {
            Self::UnrecognizedToken { .. } => "unrecognized-token",
            Self::InvalidOrdinalSuffix { .. } => "invalid-ordinal-suffix",
            Self::SequencingViolation { .. } => "sequencing-violation",
            Self::RepeaterMisuse { .. } => "repeater-misuse",
            Self::FractionalNotSupported { .. } => "fractional-not-supported",
            Self::EmptyInput => "empty-input",
            Self::ValueOutOfRange { .. } => "value-out-of-range",
        }
    }
}

/// Sequencing rules a token can break.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequencingRule {
    /// A lone nonzero digit followed a closed multi-digit group.
    LoneDigitAfterGroup {
        /// The word that opened the group.
        group: String,
    },
    /// A token followed an ordinal word or suffix.
    TokenAfterOrdinal {
        /// The ordinal token.
        ordinal: String,
    },
    /// Two groups were concatenated outside colloquial mode.
    ConcatenationOutsideColloquial,
    /// A numeral such as "1023" or "21st" appeared after other digits.
    NumeralNotLeading,
    /// A placeholder opened a pairing that the slot never completed.
    UnresolvedPairing {
        /// The word that opened the group.
        group: String,
    },
    /// Two adjacent scale words collapsed where one is an ordinal scale.
    OrdinalScaleCollapse {
        /// The ordinal scale word.
        scale: String,
    },
}

impl fmt::Display for SequencingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoneDigitAfterGroup { group } => {
                write!(f, "single nonzero digit not allowed after \"{group}\"")
            }
            Self::TokenAfterOrdinal { ordinal } => {
                write!(f, "nothing may follow the ordinal \"{ordinal}\"")
            }
            Self::ConcatenationOutsideColloquial => {
                write!(f, "concatenation requires colloquial mode")
            }
            Self::NumeralNotLeading => write!(f, "a numeral must open its slot"),
            Self::UnresolvedPairing { group } => {
                write!(f, "digit pairing after \"{group}\" left incomplete")
            }
            Self::OrdinalScaleCollapse { scale } => {
                write!(f, "ordinal scale \"{scale}\" cannot combine with another scale")
            }
        }
    }
}

/// Why a repeater word could not be expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepeaterFault {
    /// Repeaters are only valid in colloquial mode.
    NotColloquial,
    /// Nothing followed the repeater.
    MissingDigit,
    /// The following token is not a single-digit word.
    NotSingleDigit {
        /// The token that followed.
        next: String,
    },
}

impl fmt::Display for RepeaterFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotColloquial => write!(f, "only valid in colloquial mode"),
            Self::MissingDigit => write!(f, "no digit follows"),
            Self::NotSingleDigit { next } => write!(f, "cannot repeat \"{next}\""),
        }
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Index of the offending token in the caller's sequence.
    pub token_index: Option<usize>,
    /// Width of the slot being filled.
    pub slot_width: Option<usize>,
    /// Enclosing slots, innermost last.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the token index.
    #[must_use]
    pub fn with_token_index(mut self, index: usize) -> Self {
        self.token_index = Some(index);
        self
    }

    /// Sets the slot width.
    #[must_use]
    pub fn with_slot_width(mut self, width: usize) -> Self {
        self.slot_width = Some(width);
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(index) = self.token_index {
            write!(f, "at token {index}")?;
            if let Some(width) = self.slot_width {
                write!(f, " (slot width {width})")?;
            }
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}

/// Result type alias for wordnum operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_unrecognized() {
        let err = Error::unrecognized("an");
        assert!(matches!(err.kind, ErrorKind::UnrecognizedToken { .. }));
        assert_eq!(err.token(), Some("an"));
        assert!(format!("{err}").contains("\"an\""));
    }

    #[test]
    fn kind_categories() {
        assert_eq!(ErrorKind::EmptyInput.category(), "empty-input");
        assert_eq!(Error::fractional("and").kind.category(), "fractional-not-supported");
        assert_eq!(Error::unrecognized("an").kind.category(), "unrecognized-token");
    }

    #[test]
    fn error_sequencing_display() {
        let err = Error::sequencing(
            "five",
            SequencingRule::LoneDigitAfterGroup {
                group: "eleven".to_string(),
            },
        );
        let msg = format!("{err}");
        assert!(msg.contains("five"));
        assert!(msg.contains("eleven"));
    }

    #[test]
    fn error_with_context() {
        let err = Error::fractional("and").with_context(
            ErrorContext::new()
                .with_token_index(1)
                .with_slot_width(20)
                .with_frame("slot(20)"),
        );

        let ctx = err.context.unwrap();
        assert_eq!(ctx.token_index, Some(1));
        assert_eq!(ctx.slot_width, Some(20));
        assert_eq!(ctx.stack, vec!["slot(20)".to_string()]);
    }

    #[test]
    fn context_display() {
        let ctx = ErrorContext::new()
            .with_token_index(3)
            .with_slot_width(2)
            .with_frame("slot(20)")
            .with_frame("slot(2) under 1");
        let msg = format!("{ctx}");
        assert!(msg.starts_with("at token 3 (slot width 2)"));
        assert!(msg.contains("  in slot(2) under 1"));
    }

    #[test]
    fn repeater_fault_display() {
        let err = Error::repeater(
            "double",
            RepeaterFault::NotSingleDigit {
                next: "seventy".to_string(),
            },
        );
        assert!(format!("{err}").contains("cannot repeat \"seventy\""));
    }

    #[test]
    fn kinds_without_token() {
        assert_eq!(Error::new(ErrorKind::EmptyInput).token(), None);
        assert_eq!(Error::out_of_range("123").token(), None);
    }
}
