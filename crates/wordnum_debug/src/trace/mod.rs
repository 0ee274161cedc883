//! Tracing of slot parser decisions.
//!
//! A [`Tracer`] is a [`ParseObserver`]: hand it to
//! [`NumberParser::parse_with`](wordnum_parser::NumberParser::parse_with) and
//! every slot entered, token consumed, and repeater expanded lands in a ring
//! buffer. When disabled it reports itself as such and the parser skips
//! building events entirely.
//!
//! # Example
//!
//! ```text
//! > :trace on
//! > one thousand twenty three
//! P0001 > slot(20)
//! P0001   one [cardinal] -> 1
//! P0001   > slot(3) under 1
//! ...
//! ```

pub mod buffer;
pub mod format;
pub mod record;

pub use buffer::{TraceBuffer, TraceBufferStats};
pub use format::{HumanFormatter, JsonFormatter, TraceFormatter};
pub use record::TraceRecord;

use std::io::{self, Write};
use std::time::Instant;

use wordnum_parser::{ParseEvent, ParseObserver};

use crate::config::{TraceOutput, TracerConfig};

// =============================================================================
// Tracer
// =============================================================================

/// Records parse events into a ring buffer.
pub struct Tracer {
    config: TracerConfig,
    buffer: TraceBuffer,
    current_parse: u64,
    start_time: Instant,
    human_formatter: HumanFormatter,
    json_formatter: JsonFormatter,
}

impl Tracer {
    /// Creates a new tracer with the given configuration.
    #[must_use]
    pub fn new(config: TracerConfig) -> Self {
        let buffer_size = config.buffer_size;
        Self {
            config,
            buffer: TraceBuffer::new(buffer_size),
            current_parse: 0,
            start_time: Instant::now(),
            human_formatter: HumanFormatter::new(),
            json_formatter: JsonFormatter::new(),
        }
    }

    /// Creates a tracer with default configuration (disabled).
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(TracerConfig::default())
    }

    /// Creates an enabled tracer that echoes to stderr.
    #[must_use]
    pub fn to_stderr() -> Self {
        Self::new(TracerConfig::stderr())
    }

    /// Returns whether tracing is enabled.
    #[must_use]
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Enables tracing.
    pub fn enable(&mut self) {
        self.config.enabled = true;
    }

    /// Disables tracing.
    pub fn disable(&mut self) {
        self.config.enabled = false;
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &TracerConfig {
        &self.config
    }

    /// Sets whether to use JSON output format.
    pub fn set_json_format(&mut self, json: bool) {
        self.config.json_format = json;
    }

    /// Sets the trace output destination.
    pub fn set_output(&mut self, output: TraceOutput) {
        self.config.output = output;
    }

    /// Starts a new parse; subsequent records carry the new parse number.
    ///
    /// Returns the parse number.
    pub fn begin_parse(&mut self) -> u64 {
        self.current_parse += 1;
        self.current_parse
    }

    /// Returns the current parse number (0 before the first parse).
    #[must_use]
    pub fn current_parse(&self) -> u64 {
        self.current_parse
    }

    /// Records a parse event.
    #[inline]
    pub fn record(&mut self, depth: usize, event: ParseEvent) {
        if !self.config.enabled {
            return;
        }

        self.record_internal(depth, event);
    }

    fn record_internal(&mut self, depth: usize, event: ParseEvent) {
        if !self.config.event_filter.is_empty()
            && !self
                .config
                .event_filter
                .iter()
                .any(|t| t == event.event_type())
        {
            return;
        }

        #[allow(clippy::cast_possible_truncation)]
        let timestamp_ns = self.start_time.elapsed().as_nanos() as u64;
        let id = self
            .buffer
            .push(self.current_parse, depth, timestamp_ns, event);

        if self.config.output == TraceOutput::Stderr {
            if let Some(record) = self.buffer.get(id) {
                let line = self.format_record(record);
                let _ = writeln!(io::stderr(), "{line}");
            }
        }
    }

    /// Formats a record using the current format settings.
    #[must_use]
    pub fn format_record(&self, record: &TraceRecord) -> String {
        if self.config.json_format {
            self.json_formatter.format(record)
        } else {
            self.human_formatter.format(record)
        }
    }

    /// Formats multiple records.
    #[must_use]
    pub fn format_records(&self, records: &[&TraceRecord]) -> String {
        if self.config.json_format {
            self.json_formatter.format_many(records)
        } else {
            self.human_formatter.format_many(records)
        }
    }

    /// Formats every buffered record of the newest parse.
    #[must_use]
    pub fn format_last_parse(&self) -> String {
        self.format_records(&self.buffer.last_parse())
    }

    /// Returns the trace buffer.
    #[must_use]
    pub fn buffer(&self) -> &TraceBuffer {
        &self.buffer
    }

    /// Clears the trace buffer.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Returns buffer statistics.
    #[must_use]
    pub fn stats(&self) -> TraceBufferStats {
        self.buffer.stats()
    }
}

impl Default for Tracer {
    fn default() -> Self {
        Self::disabled()
    }
}

impl ParseObserver for Tracer {
    fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    fn observe(&mut self, depth: usize, event: ParseEvent) {
        self.record(depth, event);
    }
}

// =============================================================================
// Tests
// =============================================================================
