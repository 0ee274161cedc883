//! The recursive slot parser.
//!
//! A slot is a request to fill at most `width` digit positions from the front
//! of the token stream. Tens words and scale words open narrower child slots
//! for whatever sits below them: "twenty" leaves one position for a unit word,
//! "thousand" leaves three for everything under a thousand. Children share the
//! token stream with their parent and hand back whatever they did not use.
//!
//! Side information travels upward in [`SlotFlags`]: whether an ordinal was
//! seen, whether digit groups were concatenated colloquially, and whether a
//! repeater or placeholder has to be handled by an enclosing slot.

use wordnum_foundation::{
    Digit, DigitString, Error, ErrorContext, RepeaterFault, Result, SequencingRule,
};

use crate::lexicon::{self, Scale};
use crate::observer::{ParseEvent, ParseObserver};
use crate::suffix::{self, SuffixMatch};
use crate::tokens::TokenStream;

/// Flags accumulated while filling a slot and its children.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SlotFlags {
    /// An ordinal word, ordinal scale, or suffixed numeral was seen.
    pub ordinal: bool,
    /// Digit groups were concatenated or a repeater was expanded.
    pub colloquial: bool,
    /// A slot gave up so an enclosing slot could take over.
    pub escape_mult: bool,
}

impl SlotFlags {
    /// Adds every flag set in `other`.
    pub fn merge(&mut self, other: Self) {
        self.ordinal |= other.ordinal;
        self.colloquial |= other.colloquial;
        self.escape_mult |= other.escape_mult;
    }
}

/// What a slot hands back to its parent.
#[derive(Debug)]
pub(crate) struct SlotOutcome<'t> {
    pub(crate) rest: TokenStream<'t>,
    pub(crate) content: DigitString,
    pub(crate) flags: SlotFlags,
}

/// How a single-digit word interacts with the digit groups already in a slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Pairing {
    /// Append normally.
    Append,
    /// Consume the placeholder here even if the slot turns out to be full.
    ConsumePlaceholder,
    /// Push a placeholder back so an enclosing slot continues the pairing.
    InjectPlaceholder,
}

/// Mutable state of one slot.
struct Slot<'t> {
    width: usize,
    /// The enclosing slot had no digits yet, so this slot may expand
    /// repeaters, absorb placeholders, and pad itself when full.
    top_like: bool,
    content: DigitString,
    flags: SlotFlags,
    full: bool,
    escape: bool,
    /// The word that opened a multi-digit group in this slot.
    closed_group: Option<&'t str>,
    /// The placeholder that followed the group and still needs its partner.
    pending: Option<&'t str>,
}

impl<'t> Slot<'t> {
    fn new(width: usize, top_like: bool) -> Self {
        Self {
            width,
            top_like,
            content: DigitString::new(),
            flags: SlotFlags::default(),
            full: false,
            escape: false,
            closed_group: None,
            pending: None,
        }
    }

    /// Applies the digit-pairing rule to a single-position word.
    ///
    /// Once a multi-digit group is open, a lone nonzero digit is illegal; a
    /// placeholder instead marks the pairing as pending. A placeholder that
    /// starts a sub-numeral either stays here (top-like slots) or is handed
    /// back to the parent as a synthetic "oh".
    fn pair(&mut self, token: &'t str, value: &DigitString) -> std::result::Result<Pairing, Error> {
        if value.len() > 1 {
            self.closed_group = Some(token);
            return Ok(Pairing::Append);
        }

        if let Some(group) = self.closed_group.filter(|_| self.pending.is_none()) {
            if value.is_single_placeholder() {
                self.pending = Some(token);
                return Ok(Pairing::Append);
            }
            return Err(Error::sequencing(
                token,
                SequencingRule::LoneDigitAfterGroup {
                    group: group.to_string(),
                },
            ));
        }

        if value.is_single_placeholder() {
            if self.top_like {
                return Ok(Pairing::ConsumePlaceholder);
            }
            return Ok(Pairing::InjectPlaceholder);
        }

        Ok(Pairing::Append)
    }
}

/// Multiplies slot content by two adjacent scales ("one million million").
///
/// An empty slot counts as one.
#[must_use]
pub fn collapse_scales(content: &DigitString, first: Scale, second: Scale) -> DigitString {
    if content.is_empty() {
        DigitString::from(&[Digit::Known(1)][..]).scaled(first.zeros + second.zeros)
    } else {
        content.scaled(first.zeros + second.zeros)
    }
}

/// Deepest slot nesting a parse may reach.
///
/// Only a run of tens words that can never fit gets near it: each one opens a
/// one-position child for the next before finding out it is full.
pub const MAX_SLOT_DEPTH: usize = 128;

/// Fills slots from a token stream.
pub(crate) struct SlotParser<'o> {
    colloquial: bool,
    observer: &'o mut dyn ParseObserver,
    /// Tokens prepended by normalization, subtracted from error positions.
    lead_in: usize,
    /// Widths of the slots currently being filled, outermost first.
    frames: Vec<usize>,
}

impl<'o> SlotParser<'o> {
    pub(crate) fn new(colloquial: bool, observer: &'o mut dyn ParseObserver, lead_in: usize) -> Self {
        Self {
            colloquial,
            observer,
            lead_in,
            frames: Vec::new(),
        }
    }

    /// Fills a slot of `width` positions below `ancestor`.
    pub(crate) fn fill<'t>(
        &mut self,
        ancestor: &DigitString,
        width: usize,
        mut tokens: TokenStream<'t>,
    ) -> Result<SlotOutcome<'t>> {
        if self.frames.len() >= MAX_SLOT_DEPTH {
            let context = ErrorContext::new()
                .with_token_index(tokens.position().saturating_sub(self.lead_in))
                .with_slot_width(width);
            return Err(Error::out_of_range(ancestor.to_literal()).with_context(context));
        }
        self.frames.push(width);
        self.emit(|| ParseEvent::SlotEntered {
            width,
            ancestor: ancestor.to_marked(),
        });

        let mut slot = Slot::new(width, ancestor.is_empty());

        while !slot.full && !slot.escape {
            let Some(token) = tokens.first() else {
                break;
            };

            tokens = if token == lexicon::FRACTION_JOINER {
                return Err(self.fail(Error::fractional(token), tokens));
            } else if let Some(times) = lexicon::repeater(token) {
                self.repeater(&mut slot, token, times, tokens)?
            } else if let Some(digits) = lexicon::cardinal(token) {
                self.word(&mut slot, token, digits, tokens)?
            } else if let Some(digits) = lexicon::ordinal(token) {
                slot.flags.ordinal = true;
                self.word(&mut slot, token, digits, tokens)?
            } else {
                let matched = suffix::strip_ordinal_suffix(token);
                if let Some(numeral) = DigitString::from_numeral(matched.base) {
                    self.numeral(&mut slot, token, matched, &numeral, tokens)?
                } else if let Some(scale) = lexicon::scale(token) {
                    self.scale(&mut slot, token, scale, tokens)?
                } else {
                    return Err(self.fail(Error::unrecognized(token), tokens));
                }
            };
        }

        if let Some(placeholder) = slot.pending {
            let group = slot.closed_group.unwrap_or_default();
            let err = Error::sequencing(
                placeholder,
                SequencingRule::UnresolvedPairing {
                    group: group.to_string(),
                },
            );
            return Err(self.fail(err, tokens));
        }

        if slot.escape {
            slot.flags.escape_mult = true;
        }

        self.emit(|| ParseEvent::SlotExited {
            content: slot.content.to_marked(),
            remaining: tokens.len(),
        });
        self.frames.pop();

        Ok(SlotOutcome {
            rest: tokens,
            content: slot.content,
            flags: slot.flags,
        })
    }

    /// "double" / "triple": expands the next single-digit word, or defers to
    /// the enclosing slot when this one already has a parent value.
    fn repeater<'t>(
        &mut self,
        slot: &mut Slot<'t>,
        token: &'t str,
        times: usize,
        tokens: TokenStream<'t>,
    ) -> Result<TokenStream<'t>> {
        if !self.colloquial {
            let err = Error::repeater(token, RepeaterFault::NotColloquial);
            return Err(self.fail(err, tokens));
        }

        if !slot.top_like {
            slot.escape = true;
            self.emit(|| ParseEvent::RepeaterDeferred {
                token: token.to_string(),
            });
            return Ok(tokens);
        }

        slot.flags.colloquial = true;
        let rest = tokens.advance();
        let Some(next) = rest.first() else {
            let err = Error::repeater(token, RepeaterFault::MissingDigit);
            return Err(self.fail(err, tokens));
        };
        let digit = match lexicon::cardinal(next) {
            Some([digit]) => *digit,
            _ => {
                let fault = RepeaterFault::NotSingleDigit {
                    next: next.to_string(),
                };
                return Err(self.fail(Error::repeater(token, fault), rest));
            }
        };

        for _ in 0..times {
            slot.content.push(digit);
        }
        slot.closed_group = None;

        self.emit(|| ParseEvent::RepeaterExpanded {
            token: token.to_string(),
            repeated: next.to_string(),
            times,
        });
        Ok(rest.advance())
    }

    /// Digit, teen, tens, and ordinal words.
    fn word<'t>(
        &mut self,
        slot: &mut Slot<'t>,
        token: &'t str,
        digits: &'static [Digit],
        tokens: TokenStream<'t>,
    ) -> Result<TokenStream<'t>> {
        let mut rest = tokens.advance();
        let places = DigitString::trailing_known_zeros(digits);

        let (value, on_full) = if places > 0 {
            self.ordinal_tail(slot, token, rest)?;
            let child = self.fill(&slot.content, places, rest)?;
            rest = child.rest;
            slot.flags.merge(child.flags);
            if slot.flags.escape_mult && !slot.top_like {
                slot.escape = true;
            }

            let mut value = DigitString::from(&digits[..digits.len() - places]);
            value.extend_from_slice(child.content.padded(places).as_slice());
            (value, tokens)
        } else {
            let value = DigitString::from(digits);
            let pairing = slot.pair(token, &value).map_err(|e| self.fail(e, tokens))?;
            let on_full = match pairing {
                Pairing::Append => tokens,
                Pairing::ConsumePlaceholder => rest,
                Pairing::InjectPlaceholder => {
                    rest = rest.prepend(lexicon::PAIRING_WORD);
                    slot.escape = true;
                    self.emit(|| ParseEvent::PlaceholderInjected {
                        token: token.to_string(),
                    });
                    rest
                }
            };
            (value, on_full)
        };

        if slot.escape || value.len() + slot.content.len() > slot.width {
            self.mark_full(slot);
            return Ok(on_full);
        }

        if !slot.content.is_empty() && !self.colloquial {
            let err = Error::sequencing(token, SequencingRule::ConcatenationOutsideColloquial);
            return Err(self.fail(err, tokens));
        }
        self.ordinal_tail(slot, token, rest)?;

        if !slot.content.is_empty() {
            slot.flags.colloquial = true;
        }
        slot.content.extend_from_slice(value.as_slice());

        self.emit(|| ParseEvent::TokenConsumed {
            token: token.to_string(),
            class: lexicon::lookup(token).map_or("numeral", |e| e.class_name()),
            digits: value.to_marked(),
        });
        Ok(rest)
    }

    /// Numerals, with or without an ordinal suffix: "1023", "21st".
    fn numeral<'t>(
        &mut self,
        slot: &mut Slot<'t>,
        token: &'t str,
        matched: SuffixMatch<'t>,
        numeral: &DigitString,
        tokens: TokenStream<'t>,
    ) -> Result<TokenStream<'t>> {
        match matched.suffix {
            Some(suffix) if !matched.valid => {
                let err = Error::invalid_suffix(token, suffix.as_str());
                return Err(self.fail(err, tokens));
            }
            Some(_) => slot.flags.ordinal = true,
            None => {}
        }

        if !slot.content.is_empty() {
            let err = Error::sequencing(token, SequencingRule::NumeralNotLeading);
            return Err(self.fail(err, tokens));
        }
        slot.content.extend_from_slice(numeral.as_slice());

        let rest = tokens.advance();
        self.ordinal_tail(slot, token, rest)?;

        self.emit(|| ParseEvent::TokenConsumed {
            token: token.to_string(),
            class: "numeral",
            digits: numeral.to_marked(),
        });
        Ok(rest)
    }

    /// Scale and ordinal scale words.
    fn scale<'t>(
        &mut self,
        slot: &mut Slot<'t>,
        token: &'t str,
        scale: Scale,
        tokens: TokenStream<'t>,
    ) -> Result<TokenStream<'t>> {
        if scale.ordinal {
            slot.flags.ordinal = true;
        }
        let rest = tokens.advance();

        if let Some(next_token) = rest.first() {
            if let Some(next) = lexicon::scale(next_token).filter(|n| n.zeros <= scale.zeros) {
                if scale.ordinal || next.ordinal {
                    let ordinal = if scale.ordinal { token } else { next_token };
                    let err = Error::sequencing(
                        next_token,
                        SequencingRule::OrdinalScaleCollapse {
                            scale: ordinal.to_string(),
                        },
                    );
                    return Err(self.fail(err, rest));
                }

                slot.content = collapse_scales(&slot.content, scale, next);
                self.emit(|| ParseEvent::ScalesCollapsed {
                    first: token.to_string(),
                    second: next_token.to_string(),
                    digits: slot.content.to_marked(),
                });
                return Ok(rest.advance());
            }
        }

        if slot.content.len() + scale.zeros > slot.width {
            slot.full = true;
            self.emit(|| ParseEvent::SlotFull {
                width: slot.width,
                padded: false,
            });
            return Ok(tokens);
        }

        self.ordinal_tail(slot, token, rest)?;
        let child = self.fill(&slot.content, scale.zeros, rest)?;
        slot.flags.merge(child.flags);
        if slot.flags.escape_mult && !slot.top_like {
            slot.escape = true;
        }

        let below = child.content.padded(scale.zeros);
        slot.content.extend_from_slice(below.as_slice());

        self.emit(|| ParseEvent::TokenConsumed {
            token: token.to_string(),
            class: if scale.ordinal { "ordinal-scale" } else { "scale" },
            digits: below.to_marked(),
        });
        Ok(child.rest)
    }

    /// Nothing may follow an ordinal within the same numeral.
    fn ordinal_tail(&self, slot: &Slot<'_>, token: &str, rest: TokenStream<'_>) -> Result<()> {
        match rest.first() {
            Some(next) if slot.flags.ordinal => {
                let err = Error::sequencing(
                    next,
                    SequencingRule::TokenAfterOrdinal {
                        ordinal: token.to_string(),
                    },
                );
                Err(self.fail(err, rest))
            }
            _ => Ok(()),
        }
    }

    fn mark_full(&mut self, slot: &mut Slot<'_>) {
        let padded = slot.top_like;
        if padded {
            slot.content.push(Digit::Placeholder);
        }
        slot.full = true;
        self.emit(|| ParseEvent::SlotFull {
            width: slot.width,
            padded,
        });
    }

    fn emit(&mut self, event: impl FnOnce() -> ParseEvent) {
        if self.observer.is_enabled() {
            let depth = self.frames.len().saturating_sub(1);
            self.observer.observe(depth, event());
        }
    }

    fn fail(&self, err: Error, at: TokenStream<'_>) -> Error {
        let mut context =
            ErrorContext::new().with_token_index(at.position().saturating_sub(self.lead_in));
        if let Some(width) = self.frames.last() {
            context = context.with_slot_width(*width);
        }
        for width in &self.frames {
            context = context.with_frame(format!("slot({width})"));
        }
        err.with_context(context)
    }
}
