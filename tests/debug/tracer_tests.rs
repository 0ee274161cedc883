//! Tracer tests.
//!
//! A tracer attached to real parses: what it keeps, how it formats it.

use wordnum_debug::{HumanFormatter, TraceFormatter, Tracer, TracerConfig};
use wordnum_parser::{NumberParser, ParserConfig};

fn trace(tracer: &mut Tracer, input: &str) -> bool {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    tracer.begin_parse();
    NumberParser::new(ParserConfig::colloquial())
        .parse_with(&tokens, tracer)
        .is_ok()
}

#[test]
fn failed_parses_are_traced_too() {
    let mut tracer = Tracer::new(TracerConfig::new().enabled());
    assert!(!trace(&mut tracer, "one hundred bananas"));

    let records = tracer.buffer().last_parse();
    assert!(!records.is_empty());
    assert!(records.iter().any(|r| r.event_type() == "slot-entered"));
}

#[test]
fn human_output_nests_by_depth() {
    let mut tracer = Tracer::new(TracerConfig::new().enabled());
    trace(&mut tracer, "one thousand twenty three");

    let output = tracer.format_last_parse();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "P0001 > slot(20)");
    assert!(lines.iter().any(|l| l.starts_with("P0001   > slot(")));
    assert!(lines.last().unwrap().starts_with("P0001 < 1023"));
}

#[test]
fn small_buffer_keeps_the_newest_parse() {
    let mut tracer = Tracer::new(TracerConfig::new().enabled().with_buffer_size(8));
    for _ in 0..5 {
        trace(&mut tracer, "one thousand nine hundred ten");
    }

    let stats = tracer.stats();
    assert_eq!(stats.record_count, 8);
    assert_eq!(stats.newest_parse, Some(5));
    assert!(tracer.buffer().records_for_parse(1).is_empty());
}

#[test]
fn json_output_is_one_object_per_record() {
    let mut tracer = Tracer::new(TracerConfig::new().enabled().json());
    trace(&mut tracer, "first");

    let records = tracer.buffer().last_parse();
    let output = tracer.format_records(&records);
    assert!(output.starts_with("[{"));
    assert!(output.ends_with("}]"));
    assert_eq!(output.matches("\"parse\":1").count(), records.len());
}

#[test]
fn formatter_options() {
    let mut tracer = Tracer::new(TracerConfig::new().enabled());
    trace(&mut tracer, "seven");

    let record = tracer.buffer().iter().next().unwrap();
    let line = HumanFormatter::new().with_ids().format(record);
    assert!(line.starts_with("[000000] P0001 "));
}

#[test]
fn disabled_tracer_records_nothing() {
    let mut tracer = Tracer::disabled();
    assert!(trace(&mut tracer, "double oh seven"));
    assert!(tracer.buffer().is_empty());
    assert_eq!(tracer.current_parse(), 1);
}
