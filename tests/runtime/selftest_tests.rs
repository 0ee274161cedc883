//! Self-test battery tests.

use wordnum_runtime::selftest::{Expectation, run_case};
use wordnum_runtime::{BATTERY, run_self_test};
use wordnum_parser::{NumberParser, ParserConfig};

#[test]
fn battery_is_clean() {
    let report = run_self_test();
    assert!(report.is_success(), "{}", report.lines().join("\n"));
    assert_eq!(report.passed(), BATTERY.len());
    assert_eq!(report.summary(), format!("{} passed, 0 failed", BATTERY.len()));
}

#[test]
fn battery_covers_every_expectation() {
    let numbers = BATTERY
        .iter()
        .filter(|c| matches!(c.expect, Expectation::Number { .. }))
        .count();
    let failures = BATTERY
        .iter()
        .filter(|c| matches!(c.expect, Expectation::Failure(_)))
        .count();
    let hints = BATTERY
        .iter()
        .filter(|c| matches!(c.expect, Expectation::SeparatorHint(_)))
        .count();
    assert!(numbers > 50);
    assert_eq!(failures, 7);
    assert_eq!(hints, 7);
}

#[test]
fn strict_mode_fails_the_colloquial_half() {
    let strict = NumberParser::new(ParserConfig::strict());
    let failed = BATTERY
        .iter()
        .map(|case| run_case(&strict, case))
        .filter(|outcome| !outcome.passed)
        .count();
    assert!(failed > 0);
    assert!(failed < BATTERY.len());
}
