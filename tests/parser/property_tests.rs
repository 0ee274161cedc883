//! Property tests.
//!
//! Generated spellings must read back as the number they spell, and any
//! successful parse must be internally consistent.

use proptest::prelude::*;
use wordnum_parser::{NumberType, lexicon, parse};

const ONES: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const DIGITS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Index into `ONES` or `TENS` of a value known to be below 100.
fn small(n: u64) -> usize {
    usize::try_from(n).unwrap()
}

fn below_thousand(mut n: u64, words: &mut Vec<&'static str>) {
    if n >= 100 {
        words.push(ONES[small(n / 100)]);
        words.push("hundred");
        n %= 100;
    }
    if n >= 20 {
        words.push(TENS[small(n / 10)]);
        n %= 10;
    }
    if n > 0 {
        words.push(ONES[small(n)]);
    }
}

/// Formal spelling, such as "three hundred twenty thousand five".
fn spell(mut n: u64) -> Vec<&'static str> {
    if n == 0 {
        return vec!["zero"];
    }
    let mut words = Vec::new();
    for (scale, name) in [
        (1_000_000_000, "milliard"),
        (1_000_000, "million"),
        (1000, "thousand"),
    ] {
        if n >= scale {
            below_thousand(n / scale, &mut words);
            words.push(name);
            n %= scale;
        }
    }
    below_thousand(n, &mut words);
    words
}

fn ordinal_word(cardinal: &str) -> &'static str {
    match cardinal {
        "one" => "first",
        "two" => "second",
        "three" => "third",
        "four" => "fourth",
        "five" => "fifth",
        "six" => "sixth",
        "seven" => "seventh",
        "eight" => "eighth",
        "nine" => "ninth",
        "ten" => "tenth",
        "eleven" => "eleventh",
        "twelve" => "twelfth",
        "thirteen" => "thirteenth",
        "fourteen" => "fourteenth",
        "fifteen" => "fifteenth",
        "sixteen" => "sixteenth",
        "seventeen" => "seventeenth",
        "eighteen" => "eighteenth",
        "nineteen" => "nineteenth",
        "twenty" => "twentieth",
        "thirty" => "thirtieth",
        "forty" => "fortieth",
        "fifty" => "fiftieth",
        "sixty" => "sixtieth",
        "seventy" => "seventieth",
        "eighty" => "eightieth",
        "ninety" => "ninetieth",
        "hundred" => "hundredth",
        "thousand" => "thousandth",
        "million" => "millionth",
        other => panic!("no ordinal for {other}"),
    }
}

fn suffix_for(n: u64) -> &'static str {
    if (11..=13).contains(&(n % 100)) {
        return "th";
    }
    match n % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

fn any_word() -> impl Strategy<Value = &'static str> {
    let mut words: Vec<&'static str> = lexicon::words().collect();
    words.extend(["1", "23", "007", "21st", "2d", "12th", "12nd"]);
    words.sort_unstable();
    prop::sample::select(words)
}

proptest! {
    #[test]
    fn formal_spelling_round_trips(n in 0u64..1_000_000_000_000, colloquial in any::<bool>()) {
        let words = spell(n);
        let number = parse(&words, colloquial).unwrap();
        prop_assert_eq!(number.number_type, NumberType::Cardinal);
        prop_assert_eq!(number.value, u128::from(n));
        prop_assert_eq!(number.literal, n.to_string());
    }

    #[test]
    fn ordinal_spelling_round_trips(n in 1u64..1_000_000) {
        let mut words = spell(n);
        let last = words.len() - 1;
        words[last] = ordinal_word(words[last]);
        let number = parse(&words, false).unwrap();
        prop_assert_eq!(number.number_type, NumberType::Ordinal);
        prop_assert_eq!(number.value, u128::from(n));
    }

    #[test]
    fn agreeing_suffixes_parse(n in 0u64..1_000_000_000) {
        let token = format!("{n}{}", suffix_for(n));
        let number = parse(&[token.as_str()], false).unwrap();
        prop_assert!(number.is_ordinal());
        prop_assert_eq!(number.value, u128::from(n));
    }

    #[test]
    fn digit_by_digit_keeps_the_literal(digits in prop::collection::vec(0usize..10, 1..12)) {
        let words: Vec<&str> = digits.iter().map(|&d| DIGITS[d]).collect();
        let expected: String = digits.iter().map(ToString::to_string).collect();
        let number = parse(&words, true).unwrap();
        prop_assert_eq!(number.literal, expected);
    }

    #[test]
    fn successful_parses_are_consistent(
        tokens in prop::collection::vec(any_word(), 1..8),
        colloquial in any::<bool>(),
    ) {
        if let Ok(number) = parse(&tokens, colloquial) {
            prop_assert!(!number.literal.is_empty());
            prop_assert!(number.literal.bytes().all(|b| b.is_ascii_digit()));
            prop_assert_eq!(number.literal.parse::<u128>().ok(), Some(number.value));
            if number.separator_hint {
                prop_assert!(colloquial);
                prop_assert!((100..=99_999).contains(&number.value));
            }
        }
    }

    #[test]
    fn parsing_is_deterministic(
        tokens in prop::collection::vec(any_word(), 1..8),
        colloquial in any::<bool>(),
    ) {
        let first = parse(&tokens, colloquial);
        let second = parse(&tokens, colloquial);
        match (first, second) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            (Err(a), Err(b)) => prop_assert_eq!(a.kind, b.kind),
            (a, b) => prop_assert!(false, "{a:?} vs {b:?}"),
        }
    }

    #[test]
    fn strict_readings_survive_colloquial_mode(tokens in prop::collection::vec(any_word(), 1..8)) {
        if let Ok(strict) = parse(&tokens, false) {
            let colloquial = parse(&tokens, true).unwrap();
            prop_assert_eq!(colloquial.number_type, strict.number_type);
            prop_assert_eq!(colloquial.literal, strict.literal);
            prop_assert!(!strict.separator_hint);
        }
    }
}
