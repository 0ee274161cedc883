//! Trace output formatters.
//!
//! Provides human-readable and JSON formatters for trace records.

use std::fmt::Write;

use wordnum_parser::ParseEvent;

use super::record::TraceRecord;

// =============================================================================
// Trace Formatter Trait
// =============================================================================

/// Trait for formatting trace records.
pub trait TraceFormatter {
    /// Formats a single trace record to a string.
    fn format(&self, record: &TraceRecord) -> String;

    /// Formats multiple records.
    fn format_many(&self, records: &[&TraceRecord]) -> String {
        records
            .iter()
            .map(|r| self.format(r))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// =============================================================================
// Human-Readable Formatter
// =============================================================================

/// Formats trace records as indented lines, one level per slot.
#[derive(Clone, Debug, Default)]
pub struct HumanFormatter {
    /// Whether to include timestamps.
    pub show_timestamps: bool,
    /// Whether to include record IDs.
    pub show_ids: bool,
}

impl HumanFormatter {
    /// Creates a new human formatter with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to show timestamps.
    #[must_use]
    pub fn with_timestamps(mut self) -> Self {
        self.show_timestamps = true;
        self
    }

    /// Builder method to show record IDs.
    #[must_use]
    pub fn with_ids(mut self) -> Self {
        self.show_ids = true;
        self
    }

    /// Formats timestamp in microseconds.
    #[allow(clippy::cast_precision_loss)]
    fn format_timestamp(ns: u64) -> String {
        let us = ns / 1000;
        if us >= 1_000_000 {
            format!("{:.3}s", us as f64 / 1_000_000.0)
        } else if us >= 1000 {
            format!("{:.3}ms", us as f64 / 1000.0)
        } else {
            format!("{us}us")
        }
    }

    fn describe(event: &ParseEvent) -> String {
        match event {
            ParseEvent::SlotEntered { width, ancestor } => {
                if ancestor.is_empty() {
                    format!("> slot({width})")
                } else {
                    format!("> slot({width}) under {ancestor}")
                }
            }
            ParseEvent::TokenConsumed {
                token,
                class,
                digits,
            } => format!("  {token} [{class}] -> {digits}"),
            ParseEvent::RepeaterExpanded {
                token,
                repeated,
                times,
            } => format!("  {token} {repeated} -> x{times}"),
            ParseEvent::RepeaterDeferred { token } => format!("  {token} deferred to parent"),
            ParseEvent::PlaceholderInjected { token } => {
                format!("  {token} handed back as placeholder")
            }
            ParseEvent::ScalesCollapsed {
                first,
                second,
                digits,
            } => format!("  {first} {second} collapsed -> {digits}"),
            ParseEvent::SlotFull { width, padded } => {
                if *padded {
                    format!("  FULL ({width}, padded)")
                } else {
                    format!("  FULL ({width})")
                }
            }
            ParseEvent::SlotExited { content, remaining } => {
                format!("< {content} ({remaining} left)")
            }
        }
    }
}

impl TraceFormatter for HumanFormatter {
    fn format(&self, record: &TraceRecord) -> String {
        let mut prefix = String::new();

        if self.show_ids {
            let _ = write!(prefix, "[{:06}] ", record.id);
        }

        let _ = write!(prefix, "P{:04} ", record.parse);

        if self.show_timestamps {
            let _ = write!(
                prefix,
                "{:>10} ",
                Self::format_timestamp(record.timestamp_ns)
            );
        }

        let indent = "  ".repeat(record.depth);
        format!("{prefix}{indent}{}", Self::describe(&record.event))
    }
}

// =============================================================================
// JSON Formatter
// =============================================================================

/// Formats trace records as JSON objects.
#[derive(Clone, Debug, Default)]
pub struct JsonFormatter {
    /// Whether to put each record of a list on its own line.
    pub pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method for pretty printing.
    #[must_use]
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Escapes a string for JSON.
    fn escape_string(s: &str) -> String {
        s.replace('\\', "\\\\")
            .replace('"', "\\\"")
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    fn event_data(event: &ParseEvent) -> String {
        let esc = Self::escape_string;
        match event {
            ParseEvent::SlotEntered { width, ancestor } => {
                format!("\"width\":{width},\"ancestor\":\"{}\"", esc(ancestor))
            }
            ParseEvent::TokenConsumed {
                token,
                class,
                digits,
            } => format!(
                "\"token\":\"{}\",\"class\":\"{class}\",\"digits\":\"{}\"",
                esc(token),
                esc(digits)
            ),
            ParseEvent::RepeaterExpanded {
                token,
                repeated,
                times,
            } => format!(
                "\"token\":\"{}\",\"repeated\":\"{}\",\"times\":{times}",
                esc(token),
                esc(repeated)
            ),
            ParseEvent::RepeaterDeferred { token } | ParseEvent::PlaceholderInjected { token } => {
                format!("\"token\":\"{}\"", esc(token))
            }
            ParseEvent::ScalesCollapsed {
                first,
                second,
                digits,
            } => format!(
                "\"first\":\"{}\",\"second\":\"{}\",\"digits\":\"{}\"",
                esc(first),
                esc(second),
                esc(digits)
            ),
            ParseEvent::SlotFull { width, padded } => {
                format!("\"width\":{width},\"padded\":{padded}")
            }
            ParseEvent::SlotExited { content, remaining } => {
                format!("\"content\":\"{}\",\"remaining\":{remaining}", esc(content))
            }
        }
    }
}

impl TraceFormatter for JsonFormatter {
    fn format(&self, record: &TraceRecord) -> String {
        format!(
            "{{\"id\":{},\"parse\":{},\"depth\":{},\"timestamp_ns\":{},\"type\":\"{}\",{}}}",
            record.id,
            record.parse,
            record.depth,
            record.timestamp_ns,
            record.event_type(),
            Self::event_data(&record.event)
        )
    }

    fn format_many(&self, records: &[&TraceRecord]) -> String {
        let items: Vec<_> = records.iter().map(|r| self.format(r)).collect();
        if self.pretty {
            format!("[\n  {}\n]", items.join(",\n  "))
        } else {
            format!("[{}]", items.join(","))
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn consumed(depth: usize) -> TraceRecord {
        TraceRecord::new(
            7,
            2,
            depth,
            1_500_000,
            ParseEvent::TokenConsumed {
                token: "twenty".to_string(),
                class: "cardinal",
                digits: "23".to_string(),
            },
        )
    }

    #[test]
    fn human_formatter_indents_by_depth() {
        let formatter = HumanFormatter::new();
        assert_eq!(formatter.format(&consumed(0)), "P0002   twenty [cardinal] -> 23");
        assert_eq!(
            formatter.format(&consumed(2)),
            "P0002       twenty [cardinal] -> 23"
        );
    }

    #[test]
    fn human_formatter_with_options() {
        let formatter = HumanFormatter::new().with_timestamps().with_ids();
        let output = formatter.format(&consumed(0));

        assert!(output.contains("[000007]"));
        assert!(output.contains("1.500ms"));
    }

    #[test]
    fn human_formatter_slot_events() {
        let formatter = HumanFormatter::new();
        let record = TraceRecord::new(
            0,
            1,
            1,
            0,
            ParseEvent::SlotEntered {
                width: 3,
                ancestor: "1".to_string(),
            },
        );
        assert!(formatter.format(&record).ends_with("> slot(3) under 1"));

        let record = TraceRecord::new(
            1,
            1,
            0,
            0,
            ParseEvent::SlotFull {
                width: 20,
                padded: true,
            },
        );
        assert!(formatter.format(&record).contains("FULL (20, padded)"));
    }

    #[test]
    fn json_formatter_basic() {
        let formatter = JsonFormatter::new();
        let output = formatter.format(&consumed(1));

        assert!(output.starts_with('{'));
        assert!(output.ends_with('}'));
        assert!(output.contains("\"type\":\"token-consumed\""));
        assert!(output.contains("\"depth\":1"));
        assert!(output.contains("\"token\":\"twenty\""));
    }

    #[test]
    fn json_escapes_strings() {
        let record = TraceRecord::new(
            0,
            1,
            0,
            0,
            ParseEvent::RepeaterDeferred {
                token: "\"double\"".to_string(),
            },
        );
        let output = JsonFormatter::new().format(&record);
        assert!(output.contains("\"token\":\"\\\"double\\\"\""));
    }

    #[test]
    fn json_formatter_many() {
        let formatter = JsonFormatter::new();
        let r1 = consumed(0);
        let r2 = consumed(1);

        let output = formatter.format_many(&[&r1, &r2]);
        assert!(output.starts_with('['));
        assert!(output.ends_with(']'));

        let pretty = JsonFormatter::new().pretty().format_many(&[&r1, &r2]);
        assert_eq!(pretty.lines().count(), 4);
    }
}
