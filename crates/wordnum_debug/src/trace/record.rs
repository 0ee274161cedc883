//! Trace record type.

use wordnum_parser::ParseEvent;

/// A timestamped parse event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceRecord {
    /// Unique record ID within the session.
    pub id: u64,
    /// The parse this event belongs to, counted from 1.
    pub parse: u64,
    /// Slot nesting depth, 0 for the top slot.
    pub depth: usize,
    /// Timestamp in nanoseconds since the tracer was created.
    pub timestamp_ns: u64,
    /// The event.
    pub event: ParseEvent,
}

impl TraceRecord {
    /// Creates a new trace record.
    #[must_use]
    pub fn new(id: u64, parse: u64, depth: usize, timestamp_ns: u64, event: ParseEvent) -> Self {
        Self {
            id,
            parse,
            depth,
            timestamp_ns,
            event,
        }
    }

    /// Returns the event type name.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        self.event.event_type()
    }
}
