//! Integration tests for Digit and DigitString
//!
//! Tests padding, scaling, and literal rendering of digit positions.

use proptest::prelude::*;
use wordnum_foundation::{Digit, DigitString};

const X: Digit = Digit::Placeholder;

fn known(digits: &[u8]) -> DigitString {
    digits.iter().map(|&d| Digit::Known(d)).collect()
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn placeholders_render_as_zero_only_in_literals() {
    let digits: DigitString = [Digit::Known(5), X, Digit::Known(1)].into_iter().collect();
    assert_eq!(digits.to_literal(), "501");
    assert_eq!(digits.to_marked(), "5x1");
    assert_eq!(digits.to_value(), Some(501));
}

#[test]
fn numerals_keep_leading_zeros() {
    let digits = DigitString::from_numeral("007").unwrap();
    assert_eq!(digits.len(), 3);
    assert_eq!(digits.to_literal(), "007");
    assert_eq!(digits.to_value(), Some(7));

    assert!(DigitString::from_numeral("").is_none());
    assert!(DigitString::from_numeral("7a").is_none());
    assert!(DigitString::from_numeral("-7").is_none());
}

#[test]
fn empty_has_no_value() {
    assert_eq!(DigitString::new().to_value(), None);
    assert_eq!(DigitString::new().to_literal(), "");
}

#[test]
fn value_overflow_is_none() {
    let digits = known(&[9; 40]);
    assert_eq!(digits.to_value(), None);
}

// =============================================================================
// Padding and Scaling
// =============================================================================

#[test]
fn padded_never_truncates() {
    let digits = known(&[1, 2, 3]);
    assert_eq!(digits.padded(5).to_literal(), "00123");
    assert_eq!(digits.padded(2), digits);
}

#[test]
fn scaled_drops_leading_zero_like_positions() {
    let digits: DigitString = [X, Digit::ZERO, Digit::Known(4), X].into_iter().collect();
    let scaled = digits.scaled(3);
    assert_eq!(scaled.to_literal(), "400000");
    assert!(scaled.as_slice().iter().all(|d| *d != X));
}

#[test]
fn scaled_zero_stays_single_zero() {
    let digits: DigitString = [X, X].into_iter().collect();
    assert_eq!(digits.scaled(6).to_literal(), "0");
}

#[test]
fn trailing_known_zeros_stop_at_placeholders() {
    assert_eq!(DigitString::trailing_known_zeros(known(&[2, 0, 0]).as_slice()), 2);
    assert_eq!(DigitString::trailing_known_zeros(&[Digit::Known(1), X]), 0);
    assert_eq!(DigitString::trailing_known_zeros(&[]), 0);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn numeral_literal_round_trip(numeral in "[0-9]{1,30}") {
        let digits = DigitString::from_numeral(&numeral).unwrap();
        prop_assert_eq!(digits.to_literal(), numeral.clone());
        prop_assert_eq!(digits.to_value(), numeral.parse::<u128>().ok());
    }

    #[test]
    fn scaled_multiplies_by_power_of_ten(value in 1u64..1_000_000_000, zeros in 0usize..10) {
        let digits = DigitString::from_numeral(&value.to_string()).unwrap();
        let expected = u128::from(value) * 10u128.pow(u32::try_from(zeros).unwrap());
        prop_assert_eq!(digits.scaled(zeros).to_value(), Some(expected));
    }

    #[test]
    fn padded_preserves_value(numeral in "[0-9]{1,10}", width in 0usize..20) {
        let digits = DigitString::from_numeral(&numeral).unwrap();
        let padded = digits.padded(width);
        prop_assert_eq!(padded.len(), width.max(digits.len()));
        prop_assert_eq!(padded.to_value(), digits.to_value());
    }
}
