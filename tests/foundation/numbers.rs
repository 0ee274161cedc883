//! Integration tests for ParsedNumber

use serde::{Deserialize, Serialize};
use wordnum_foundation::{Digit, DigitString, NumberType, ParsedNumber};

fn assert_serde<T: Serialize + for<'de> Deserialize<'de>>() {}

#[test]
fn value_types_are_serializable() {
    assert_serde::<ParsedNumber>();
    assert_serde::<NumberType>();
    assert_serde::<Digit>();
    assert_serde::<DigitString>();
}

#[test]
fn display_is_a_tuple() {
    let number = ParsedNumber {
        number_type: NumberType::Ordinal,
        value: 23,
        literal: "23".to_string(),
        separator_hint: false,
    };
    assert_eq!(number.to_string(), "(ordinal, 23, '23', false)");
    assert!(number.is_ordinal());
}

#[test]
fn number_type_display() {
    assert_eq!(NumberType::Cardinal.to_string(), "cardinal");
    assert_eq!(NumberType::Ordinal.to_string(), "ordinal");
}
