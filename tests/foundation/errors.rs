//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use wordnum_foundation::{Error, ErrorContext, ErrorKind, RepeaterFault, SequencingRule};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_unrecognized() {
    let err = Error::unrecognized("banana");
    assert!(matches!(err.kind, ErrorKind::UnrecognizedToken { .. }));
    assert_eq!(err.token(), Some("banana"));
    assert!(format!("{err}").contains("banana"));
}

#[test]
fn error_invalid_suffix() {
    let err = Error::invalid_suffix("12nd", "nd");
    assert!(matches!(err.kind, ErrorKind::InvalidOrdinalSuffix { .. }));
    let msg = format!("{err}");
    assert!(msg.contains("12nd"));
    assert!(msg.contains("\"nd\""));
}

#[test]
fn error_repeater() {
    let err = Error::repeater(
        "double",
        RepeaterFault::NotSingleDigit {
            next: "seventy".to_string(),
        },
    );
    assert!(matches!(
        err.kind,
        ErrorKind::RepeaterMisuse {
            fault: RepeaterFault::NotSingleDigit { .. },
            ..
        }
    ));
    assert!(format!("{err}").contains("seventy"));
}

#[test]
fn error_sequencing_rules() {
    let err = Error::sequencing("five", SequencingRule::ConcatenationOutsideColloquial);
    assert_eq!(err.kind.category(), "sequencing-violation");
    assert_eq!(err.token(), Some("five"));
}

#[test]
fn error_out_of_range_has_no_token() {
    let err = Error::out_of_range("1000000000000000000000");
    assert_eq!(err.token(), None);
    assert!(format!("{err}").contains("1000000000000000000000"));
}

// =============================================================================
// Categories
// =============================================================================

#[test]
fn categories_are_distinct() {
    let kinds = [
        Error::unrecognized("a").kind,
        Error::invalid_suffix("1nd", "nd").kind,
        Error::sequencing("a", SequencingRule::ConcatenationOutsideColloquial).kind,
        Error::repeater("double", RepeaterFault::MissingDigit).kind,
        Error::fractional("and").kind,
        ErrorKind::EmptyInput,
        Error::out_of_range("1").kind,
    ];
    let mut categories: Vec<_> = kinds.iter().map(ErrorKind::category).collect();
    categories.sort_unstable();
    categories.dedup();
    assert_eq!(categories.len(), kinds.len());
}

// =============================================================================
// Context
// =============================================================================

#[test]
fn context_is_optional() {
    let err = Error::fractional("and");
    assert!(err.context.is_none());

    let err = err.with_context(ErrorContext::new().with_token_index(3));
    let ctx = err.context.as_ref().unwrap();
    assert_eq!(ctx.token_index, Some(3));
    assert_eq!(ctx.slot_width, None);
    assert!(ctx.stack.is_empty());
}

#[test]
fn context_display_mentions_position() {
    let ctx = ErrorContext::new()
        .with_token_index(2)
        .with_slot_width(3)
        .with_frame("slot(20)")
        .with_frame("slot(3)");
    let msg = format!("{ctx}");
    assert!(msg.contains('2'));
    assert!(msg.contains("slot(3)"));
}
