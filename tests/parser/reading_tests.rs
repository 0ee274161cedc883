//! Reading tests.
//!
//! Known inputs and the readings they must produce.

use wordnum_parser::{NumberParser, NumberType, ParsedNumber, ParserConfig, parse};

fn read(input: &str) -> ParsedNumber {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    parse(&tokens, true).unwrap_or_else(|e| panic!("{input:?}: {e}"))
}

fn read_strict(input: &str) -> wordnum_parser::Result<ParsedNumber> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    parse(&tokens, false)
}

// =============================================================================
// Cardinals
// =============================================================================

#[test]
fn single_words_and_articles() {
    for (input, value) in [
        ("one", 1),
        ("eleven", 11),
        ("a hundred", 100),
        ("an hundred", 100),
        ("a myriad", 10_000),
        ("milliard", 1_000_000_000),
        ("1", 1),
    ] {
        let number = read(input);
        assert_eq!(number.number_type, NumberType::Cardinal, "{input}");
        assert_eq!(number.value, value, "{input}");
        assert_eq!(number.literal, value.to_string(), "{input}");
        assert!(!number.separator_hint, "{input}");
    }
}

#[test]
fn nested_scales() {
    assert_eq!(read("one thousand nine hundred ten").value, 1910);
    assert_eq!(read("three hundred twenty thousand").value, 320_000);
    assert_eq!(read("ten thousand six million").value, 10_006_000_000);
    assert_eq!(read("forty hundred six").value, 4006);
    assert_eq!(read("4 thousand six").value, 4006);
    assert_eq!(
        read("one milliard one million one myriad one thousand one hundred ten").value,
        1_001_011_110
    );
}

#[test]
fn placeholder_after_scale_keeps_the_slot_open() {
    assert_eq!(read("one thousand aught six").value, 100_006);
    assert_eq!(read("four thousand aught six").value, 400_006);
}

#[test]
fn adjacent_scales_collapse() {
    assert_eq!(read("one hundred hundred").literal, "10000");
    assert_eq!(read("one million hundred").literal, "100000000");
    assert_eq!(read("one million million").literal, "1000000000000");
    assert_eq!(read("aught million").literal, "0000000");
}

// =============================================================================
// Colloquial Readings
// =============================================================================

#[test]
fn repeaters_keep_leading_zeros() {
    let bond = read("double oh seven");
    assert_eq!(bond.value, 7);
    assert_eq!(bond.literal, "007");

    assert_eq!(read("triple zero six").literal, "0006");
    assert_eq!(read("two double seven six triple zero").value, 2_776_000);
}

#[test]
fn repeater_after_a_scale_is_left_to_the_top_slot() {
    for (input, literal, hint) in [
        ("one thousand double five", "100055", false),
        ("nine hundred double oh seven", "900007", false),
        ("five thousand twenty double three", "5233", false),
        ("twenty one double two", "2122", true),
        ("twenty double two", "222", true),
    ] {
        let number = read(input);
        assert_eq!(number.number_type, NumberType::Cardinal, "{input}");
        assert_eq!(number.literal, literal, "{input}");
        assert_eq!(number.value.to_string(), literal, "{input}");
        assert_eq!(number.separator_hint, hint, "{input}");
    }

    let err = read_strict("one thousand double five").unwrap_err();
    assert_eq!(err.kind.category(), "repeater-misuse");
}

#[test]
fn digit_by_digit() {
    assert_eq!(read("five five five eighty two oh one").value, 5_558_201);
    assert_eq!(read("one aught two three").value, 1023);
    assert_eq!(read("fifty two oh").value, 520);
    assert_eq!(read("oh five twenty").literal, "0520");
}

#[test]
fn separator_hint() {
    for input in [
        "three forty five",
        "three ninety nine",
        "twenty seven twelve",
        "oh five twenty",
        "twelve thirty",
        "nineteen eighty four",
    ] {
        assert!(read(input).separator_hint, "{input}");
    }
    for input in ["two hundred thirty", "twenty one", "ninety nine thousand", "one"] {
        assert!(!read(input).separator_hint, "{input}");
    }
}

#[test]
fn strict_mode_never_hints() {
    let number = read_strict("fifty two oh").unwrap();
    assert_eq!(number.value, 520);
    assert!(!number.separator_hint);
}

#[test]
fn strict_mode_rejects_colloquial_forms() {
    assert!(read_strict("one twenty three").is_err());
    assert!(read_strict("double oh seven").is_err());
    assert!(read_strict("nineteen eighty four").is_err());
}

// =============================================================================
// Ordinals
// =============================================================================

#[test]
fn ordinal_words() {
    for (input, value) in [
        ("first", 1),
        ("twelfth", 12),
        ("twenty third", 23),
        ("one hundred twenty third", 123),
        ("a hundredth", 100),
        ("an hundredth", 100),
        ("two thousandth", 2000),
    ] {
        let number = read(input);
        assert!(number.is_ordinal(), "{input}");
        assert_eq!(number.value, value, "{input}");
    }
}

#[test]
fn ordinal_numerals() {
    for (input, value) in [
        ("1st", 1),
        ("2d", 2),
        ("2nd", 2),
        ("3d", 3),
        ("3rd", 3),
        ("4th", 4),
        ("11th", 11),
        ("12th", 12),
        ("13th", 13),
        ("21st", 21),
    ] {
        let number = read(input);
        assert_eq!(number.number_type, NumberType::Ordinal, "{input}");
        assert_eq!(number.value, value, "{input}");
    }
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn parser_matches_free_function() {
    let tokens = ["one", "thousand", "twenty", "three"];
    let parser = NumberParser::new(ParserConfig::strict());
    assert_eq!(parser.parse(&tokens).unwrap(), parse(&tokens, false).unwrap());
    assert_eq!(
        NumberParser::default().parse(&tokens).unwrap(),
        parse(&tokens, true).unwrap()
    );
}

#[test]
fn zero_words() {
    for input in ["zero", "oh", "0"] {
        let number = read(input);
        assert_eq!(number.value, 0, "{input}");
        assert_eq!(number.literal, "0", "{input}");
    }
    assert_eq!(read("007").literal, "007");
}
