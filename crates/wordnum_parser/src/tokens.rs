//! Cursor over the token sequence shared by nested slots.

/// A cheap, copyable view of the tokens still to be consumed.
///
/// The slot parser may push one synthetic token in front of the remaining
/// sequence to force digit pairing to continue in an enclosing slot.
#[derive(Clone, Copy, Debug)]
pub(crate) struct TokenStream<'t> {
    injected: Option<&'static str>,
    rest: &'t [&'t str],
    offset: usize,
}

impl<'t> TokenStream<'t> {
    pub(crate) fn new(tokens: &'t [&'t str]) -> Self {
        Self {
            injected: None,
            rest: tokens,
            offset: 0,
        }
    }

    pub(crate) fn first(&self) -> Option<&'t str> {
        let injected: Option<&'t str> = self.injected;
        injected.or_else(|| self.rest.first().copied())
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.injected.is_none() && self.rest.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.rest.len() + usize::from(self.injected.is_some())
    }

    /// Index of the next real token in the sequence the stream was built from.
    pub(crate) fn position(&self) -> usize {
        self.offset
    }

    /// Drops the first token.
    #[must_use]
    pub(crate) fn advance(self) -> Self {
        if self.injected.is_some() {
            return Self {
                injected: None,
                ..self
            };
        }
        match self.rest.split_first() {
            Some((_, rest)) => Self {
                injected: None,
                rest,
                offset: self.offset + 1,
            },
            None => self,
        }
    }

    /// Puts a synthetic token in front of the stream.
    #[must_use]
    pub(crate) fn prepend(self, token: &'static str) -> Self {
        debug_assert!(self.injected.is_none(), "only one token can be injected");
        Self {
            injected: Some(token),
            ..self
        }
    }
}
