//! Hook for watching parser decisions.
//!
//! The parser itself never prints. Anything that wants to see how a numeral
//! was assembled (the CLI's `--trace`, the REPL, tests) implements
//! [`ParseObserver`] and passes itself to
//! [`NumberParser::parse_with`](crate::NumberParser::parse_with).

/// A decision made while filling a slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseEvent {
    /// A slot started filling.
    SlotEntered {
        /// Maximum number of digit positions.
        width: usize,
        /// Digits already held by the enclosing slot, placeholders as `x`.
        ancestor: String,
    },

    /// A token contributed digits to the slot.
    TokenConsumed {
        /// The token.
        token: String,
        /// Word class from the lexicon, or "numeral".
        class: &'static str,
        /// The digits it contributed, placeholders as `x`.
        digits: String,
    },

    /// A repeater was expanded.
    RepeaterExpanded {
        /// "double" or "triple".
        token: String,
        /// The repeated digit word.
        repeated: String,
        /// Repeat count.
        times: usize,
    },

    /// A repeater was left for the enclosing slot.
    RepeaterDeferred {
        /// "double" or "triple".
        token: String,
    },

    /// A placeholder token was pushed back for the enclosing slot.
    PlaceholderInjected {
        /// The token that was replaced.
        token: String,
    },

    /// Two adjacent scale words were multiplied together.
    ScalesCollapsed {
        /// The first scale word.
        first: String,
        /// The second scale word.
        second: String,
        /// The slot content after multiplying.
        digits: String,
    },

    /// The next contribution would overflow the slot.
    SlotFull {
        /// Slot width.
        width: usize,
        /// Whether a placeholder was appended as padding.
        padded: bool,
    },

    /// A slot finished.
    SlotExited {
        /// The slot content, placeholders as `x`.
        content: String,
        /// Tokens left for enclosing slots.
        remaining: usize,
    },
}

impl ParseEvent {
    /// Returns a short name for the event type.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::SlotEntered { .. } => "slot-entered",
            Self::TokenConsumed { .. } => "token-consumed",
            Self::RepeaterExpanded { .. } => "repeater-expanded",
            Self::RepeaterDeferred { .. } => "repeater-deferred",
            Self::PlaceholderInjected { .. } => "placeholder-injected",
            Self::ScalesCollapsed { .. } => "scales-collapsed",
            Self::SlotFull { .. } => "slot-full",
            Self::SlotExited { .. } => "slot-exited",
        }
    }

    /// Returns true for slot boundary events.
    #[must_use]
    pub fn is_slot_boundary(&self) -> bool {
        matches!(self, Self::SlotEntered { .. } | Self::SlotExited { .. })
    }
}

/// Receives [`ParseEvent`]s during a parse.
pub trait ParseObserver {
    /// Whether events should be built at all. Returning false skips the
    /// string formatting behind each event.
    fn is_enabled(&self) -> bool {
        true
    }

    /// Called for each event; `depth` is 0 for the top slot.
    fn observe(&mut self, depth: usize, event: ParseEvent);
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl ParseObserver for NoopObserver {
    fn is_enabled(&self) -> bool {
        false
    }

    fn observe(&mut self, _depth: usize, _event: ParseEvent) {}
}

/// Collects events in memory.
impl ParseObserver for Vec<(usize, ParseEvent)> {
    fn observe(&mut self, depth: usize, event: ParseEvent) {
        self.push((depth, event));
    }
}
