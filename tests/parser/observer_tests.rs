//! Observer tests.
//!
//! The events a parse reports and their nesting depths.

use wordnum_parser::{NoopObserver, NumberParser, ParseEvent, ParserConfig};

fn events(tokens: &[&str]) -> Vec<(usize, ParseEvent)> {
    let mut events = Vec::new();
    NumberParser::new(ParserConfig::colloquial())
        .parse_with(tokens, &mut events)
        .unwrap();
    events
}

#[test]
fn slots_are_balanced() {
    let events = events(&["one", "thousand", "nine", "hundred", "ten"]);
    let entered = events
        .iter()
        .filter(|(_, e)| matches!(e, ParseEvent::SlotEntered { .. }))
        .count();
    let exited = events
        .iter()
        .filter(|(_, e)| matches!(e, ParseEvent::SlotExited { .. }))
        .count();
    assert_eq!(entered, exited);
    assert!(entered > 1);

    assert_eq!(events.first().map(|(d, _)| *d), Some(0));
    assert!(matches!(
        events.last(),
        Some((0, ParseEvent::SlotExited { remaining: 0, .. }))
    ));
}

#[test]
fn top_slot_is_entered_with_full_width() {
    let events = events(&["seven"]);
    assert_eq!(
        events[0],
        (
            0,
            ParseEvent::SlotEntered {
                width: 20,
                ancestor: String::new(),
            }
        )
    );
}

#[test]
fn repeaters_are_reported() {
    let events = events(&["double", "oh", "seven"]);
    assert!(events.iter().any(|(_, e)| *e
        == ParseEvent::RepeaterExpanded {
            token: "double".to_string(),
            repeated: "oh".to_string(),
            times: 2,
        }));
}

#[test]
fn deferred_repeaters_are_reported() {
    let events = events(&["one", "thousand", "double", "five"]);
    let deferred = events
        .iter()
        .position(|(depth, e)| {
            *depth == 1
                && *e
                    == ParseEvent::RepeaterDeferred {
                        token: "double".to_string(),
                    }
        })
        .expect("the thousand slot defers the repeater");
    let expanded = events
        .iter()
        .position(|(depth, e)| *depth == 0 && e.event_type() == "repeater-expanded")
        .expect("the top slot expands it");
    assert!(deferred < expanded);
}

#[test]
fn collapsed_scales_are_reported() {
    let events = events(&["one", "million", "million"]);
    assert!(
        events
            .iter()
            .any(|(_, e)| e.event_type() == "scales-collapsed")
    );
}

#[test]
fn noop_observer_gives_the_same_result() {
    let tokens = ["five", "five", "five", "eighty", "two", "oh", "one"];
    let parser = NumberParser::default();
    let mut recorded = Vec::new();
    assert_eq!(
        parser.parse_with(&tokens, &mut NoopObserver).unwrap(),
        parser.parse_with(&tokens, &mut recorded).unwrap()
    );
    assert!(!recorded.is_empty());
}
