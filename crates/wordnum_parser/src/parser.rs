//! Entry points and configuration.

use wordnum_foundation::{DigitString, Error, ErrorContext, ErrorKind, ParsedNumber, Result};

use crate::finalize;
use crate::observer::{NoopObserver, ParseObserver};
use crate::slot::SlotParser;
use crate::tokens::TokenStream;

/// Width of the outermost slot.
pub const TOP_SLOT_WIDTH: usize = 20;

/// Parser settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParserConfig {
    /// Allow digit-by-digit readings and repeaters ("double oh seven").
    pub colloquial: bool,
    /// Width of the outermost slot.
    pub slot_width: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::colloquial()
    }
}

impl ParserConfig {
    /// Colloquial parsing with the standard top slot.
    #[must_use]
    pub const fn colloquial() -> Self {
        Self {
            colloquial: true,
            slot_width: TOP_SLOT_WIDTH,
        }
    }

    /// Strict parsing with the standard top slot.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            colloquial: false,
            slot_width: TOP_SLOT_WIDTH,
        }
    }

    /// Sets colloquial mode.
    #[must_use]
    pub const fn with_colloquial(mut self, colloquial: bool) -> Self {
        self.colloquial = colloquial;
        self
    }

    /// Sets the width of the outermost slot.
    #[must_use]
    pub const fn with_slot_width(mut self, width: usize) -> Self {
        self.slot_width = width;
        self
    }
}

/// Parses token sequences into numbers.
///
/// Holds only configuration; every call is independent.
#[derive(Clone, Copy, Debug, Default)]
pub struct NumberParser {
    config: ParserConfig,
}

impl NumberParser {
    /// Creates a parser.
    #[must_use]
    pub const fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses lowercase tokens.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first token that could not be placed.
    pub fn parse(&self, tokens: &[&str]) -> Result<ParsedNumber> {
        self.parse_with(tokens, &mut NoopObserver)
    }

    /// Parses lowercase tokens, reporting each decision to `observer`.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first token that could not be placed.
    pub fn parse_with(
        &self,
        tokens: &[&str],
        observer: &mut dyn ParseObserver,
    ) -> Result<ParsedNumber> {
        if tokens.is_empty() {
            return Err(Error::new(ErrorKind::EmptyInput));
        }

        let normalized = finalize::normalize(tokens);
        let mut slots = SlotParser::new(self.config.colloquial, observer, normalized.lead_in);
        let outcome = slots.fill(
            &DigitString::new(),
            self.config.slot_width,
            TokenStream::new(&normalized.tokens),
        )?;

        // A full top slot leaves the rest of the input unread.
        if !outcome.rest.is_empty() {
            let context = ErrorContext::new()
                .with_token_index(outcome.rest.position().saturating_sub(normalized.lead_in))
                .with_slot_width(self.config.slot_width);
            return Err(Error::out_of_range(outcome.content.to_literal()).with_context(context));
        }

        finalize::finalize(
            tokens,
            &outcome.content,
            outcome.flags,
            self.config.colloquial,
        )
    }
}

/// Parses `tokens` with the standard top slot.
///
/// ```
/// use wordnum_parser::{NumberType, parse};
///
/// let n = parse(&["twenty", "third"], false).unwrap();
/// assert_eq!(n.number_type, NumberType::Ordinal);
/// assert_eq!(n.value, 23);
///
/// let n = parse(&["double", "oh", "seven"], true).unwrap();
/// assert_eq!(n.literal, "007");
/// ```
///
/// # Errors
///
/// Returns an error describing the first token that could not be placed.
pub fn parse(tokens: &[&str], colloquial: bool) -> Result<ParsedNumber> {
    NumberParser::new(ParserConfig::default().with_colloquial(colloquial)).parse(tokens)
}
