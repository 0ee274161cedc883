//! Error tests.
//!
//! Failing inputs, the kind of failure, and where it is reported.

use wordnum_parser::{Error, ErrorKind, parse};

fn fail(input: &str, colloquial: bool) -> Error {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    match parse(&tokens, colloquial) {
        Ok(number) => panic!("{input:?} parsed as {number}"),
        Err(err) => err,
    }
}

fn category(input: &str) -> &'static str {
    fail(input, true).kind.category()
}

#[test]
fn empty_input() {
    assert_eq!(fail("", true).kind, ErrorKind::EmptyInput);
}

#[test]
fn unrecognized_tokens() {
    assert_eq!(category("an million"), "unrecognized-token");
    assert_eq!(category("banana"), "unrecognized-token");
    assert_eq!(category("one million billion"), "unrecognized-token");
    assert_eq!(fail("an hour", true).token(), Some("an"));
}

#[test]
fn disagreeing_suffixes() {
    for input in ["1nd", "11st", "12d", "12nd"] {
        let err = fail(input, true);
        match &err.kind {
            ErrorKind::InvalidOrdinalSuffix { token, .. } => assert_eq!(token, input),
            other => panic!("{input}: {other:?}"),
        }
    }
}

#[test]
fn repeater_misuse() {
    assert_eq!(category("two double seventy six triple zero"), "repeater-misuse");
    assert_eq!(category("double"), "repeater-misuse");
    assert_eq!(category("double twenty"), "repeater-misuse");
    assert_eq!(fail("double oh seven", false).kind.category(), "repeater-misuse");
}

#[test]
fn fractions() {
    let err = fail("seven and two eighths", true);
    assert!(matches!(err.kind, ErrorKind::FractionalNotSupported { .. }));
    assert_eq!(err.context.and_then(|c| c.token_index), Some(1));

    assert_eq!(category("one hundred and five"), "fractional-not-supported");
}

#[test]
fn sequencing_violations() {
    for input in [
        "nineteen oh five",
        "twenty first five",
        "1st five",
        "hundredth thousand",
        "eleven five",
    ] {
        assert_eq!(category(input), "sequencing-violation", "{input}");
    }
    assert_eq!(
        fail("one twenty three", false).kind.category(),
        "sequencing-violation"
    );
}

#[test]
fn too_wide_for_the_top_slot() {
    let input = std::iter::repeat_n("ninety nine", 11).collect::<Vec<_>>().join(" ");
    assert_eq!(category(&input), "value-out-of-range");
    assert_eq!(
        category("thousand thousand thousand thousand thousand thousand thousand"),
        "value-out-of-range"
    );
}

#[test]
fn long_runs_of_tens_words_fail_cleanly() {
    let run = |n| std::iter::repeat_n("twenty", n).collect::<Vec<_>>().join(" ");

    assert_eq!(fail(&run(100), true).kind.category(), "value-out-of-range");
    assert_eq!(fail(&run(100), false).kind.category(), "sequencing-violation");

    for colloquial in [true, false] {
        let err = fail(&run(5000), colloquial);
        assert_eq!(err.kind.category(), "value-out-of-range");
        assert!(err.context.and_then(|c| c.token_index).is_some());
    }
}

#[test]
fn errors_report_positions_in_caller_tokens() {
    let err = fail("a hundred bananas", false);
    assert_eq!(err.token(), Some("bananas"));
    assert_eq!(err.context.and_then(|c| c.token_index), Some(2));
}
