//! Ring buffer for trace records.
//!
//! Keeps the most recent records across parses, discarding the oldest once
//! full, with lookup by parse number.

use std::collections::{HashMap, VecDeque};

use wordnum_parser::ParseEvent;

use super::record::TraceRecord;

// =============================================================================
// Trace Buffer
// =============================================================================

/// A ring buffer for storing trace records.
#[derive(Clone, Debug)]
pub struct TraceBuffer {
    /// The records, oldest first.
    records: VecDeque<TraceRecord>,
    /// Maximum number of records to store.
    max_size: usize,
    /// Next record ID to assign.
    next_id: u64,
}

impl TraceBuffer {
    /// Creates a new trace buffer with the given maximum size.
    #[must_use]
    pub fn new(max_size: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(max_size.min(1024)),
            max_size,
            next_id: 0,
        }
    }

    /// Pushes a new event to the buffer.
    ///
    /// Returns the assigned record ID.
    pub fn push(&mut self, parse: u64, depth: usize, timestamp_ns: u64, event: ParseEvent) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.records
            .push_back(TraceRecord::new(id, parse, depth, timestamp_ns, event));

        while self.records.len() > self.max_size {
            self.records.pop_front();
        }

        id
    }

    /// Returns the number of records in the buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Clears all records. IDs keep increasing.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Returns an iterator over all records.
    pub fn iter(&self) -> impl Iterator<Item = &TraceRecord> {
        self.records.iter()
    }

    /// Returns the record with the given ID, if still buffered.
    #[must_use]
    pub fn get(&self, id: u64) -> Option<&TraceRecord> {
        // IDs are contiguous among the buffered records.
        let first = self.records.front()?.id;
        let index = usize::try_from(id.checked_sub(first)?).ok()?;
        self.records.get(index)
    }

    /// Returns the records of one parse.
    #[must_use]
    pub fn records_for_parse(&self, parse: u64) -> Vec<&TraceRecord> {
        self.filter(|r| r.parse == parse)
    }

    /// Returns the records of the newest parse.
    #[must_use]
    pub fn last_parse(&self) -> Vec<&TraceRecord> {
        self.newest_parse()
            .map(|parse| self.records_for_parse(parse))
            .unwrap_or_default()
    }

    /// Returns the most recent N records.
    #[must_use]
    pub fn recent(&self, count: usize) -> Vec<&TraceRecord> {
        let start = self.records.len().saturating_sub(count);
        self.records.iter().skip(start).collect()
    }

    /// Returns records matching a predicate.
    pub fn filter<F>(&self, predicate: F) -> Vec<&TraceRecord>
    where
        F: Fn(&TraceRecord) -> bool,
    {
        self.records.iter().filter(|r| predicate(r)).collect()
    }

    /// Returns records of a specific event type.
    #[must_use]
    pub fn by_event_type(&self, event_type: &str) -> Vec<&TraceRecord> {
        self.filter(|r| r.event_type() == event_type)
    }

    /// Returns the oldest parse number in the buffer.
    #[must_use]
    pub fn oldest_parse(&self) -> Option<u64> {
        self.records.front().map(|r| r.parse)
    }

    /// Returns the newest parse number in the buffer.
    #[must_use]
    pub fn newest_parse(&self) -> Option<u64> {
        self.records.back().map(|r| r.parse)
    }

    /// Returns statistics about the buffer.
    #[must_use]
    pub fn stats(&self) -> TraceBufferStats {
        let mut event_counts = HashMap::new();
        let mut parse_count = 0;
        let mut previous = None;
        for record in &self.records {
            *event_counts.entry(record.event_type()).or_insert(0) += 1;
            if previous != Some(record.parse) {
                parse_count += 1;
                previous = Some(record.parse);
            }
        }

        TraceBufferStats {
            record_count: self.records.len(),
            max_size: self.max_size,
            oldest_parse: self.oldest_parse(),
            newest_parse: self.newest_parse(),
            parse_count,
            max_depth: self.records.iter().map(|r| r.depth).max().unwrap_or(0),
            event_counts,
        }
    }
}

impl Default for TraceBuffer {
    fn default() -> Self {
        Self::new(4096)
    }
}

// =============================================================================
// Buffer Statistics
// =============================================================================

/// Statistics about a trace buffer.
#[derive(Clone, Debug)]
pub struct TraceBufferStats {
    /// Number of records currently in buffer.
    pub record_count: usize,
    /// Maximum buffer size.
    pub max_size: usize,
    /// Oldest parse in buffer.
    pub oldest_parse: Option<u64>,
    /// Newest parse in buffer.
    pub newest_parse: Option<u64>,
    /// Number of distinct parses.
    pub parse_count: usize,
    /// Deepest slot nesting seen.
    pub max_depth: usize,
    /// Count of each event type.
    pub event_counts: HashMap<&'static str, usize>,
}

// =============================================================================
// Tests
// =============================================================================
