//! The self-test battery.
//!
//! A fixed set of inputs with known readings, run through the colloquial
//! parser. The battery returns a [`SelfTestReport`]; printing is left to the
//! caller.

use std::fmt;

use wordnum_foundation::{NumberType, ParsedNumber};
use wordnum_parser::{NumberParser, ParserConfig};

// =============================================================================
// Cases
// =============================================================================

/// What a battery case expects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expectation {
    /// A full reading. A `None` literal means the decimal rendering of
    /// `value`.
    Number {
        /// Cardinal or ordinal.
        number_type: NumberType,
        /// Integer value.
        value: u128,
        /// Literal, when it differs from `value` written out.
        literal: Option<&'static str>,
        /// Separator hint.
        separator_hint: bool,
    },
    /// A failure of the given [`ErrorKind::category`](wordnum_foundation::ErrorKind::category).
    Failure(&'static str),
    /// A successful parse with this separator hint; the value is not checked.
    SeparatorHint(bool),
}

/// One input of the battery.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelfTestCase {
    /// Space-separated tokens.
    pub input: &'static str,
    /// The expected outcome.
    pub expect: Expectation,
}

impl SelfTestCase {
    const fn cardinal(input: &'static str, value: u128) -> Self {
        Self {
            input,
            expect: Expectation::Number {
                number_type: NumberType::Cardinal,
                value,
                literal: None,
                separator_hint: false,
            },
        }
    }

    const fn literal(input: &'static str, literal: &'static str, separator_hint: bool) -> Self {
        Self {
            input,
            expect: Expectation::Number {
                number_type: NumberType::Cardinal,
                value: parse_literal(literal),
                literal: Some(literal),
                separator_hint,
            },
        }
    }

    const fn ordinal(input: &'static str, value: u128) -> Self {
        Self {
            input,
            expect: Expectation::Number {
                number_type: NumberType::Ordinal,
                value,
                literal: None,
                separator_hint: false,
            },
        }
    }

    const fn fails(input: &'static str, category: &'static str) -> Self {
        Self {
            input,
            expect: Expectation::Failure(category),
        }
    }

    const fn hint(input: &'static str, separator_hint: bool) -> Self {
        Self {
            input,
            expect: Expectation::SeparatorHint(separator_hint),
        }
    }

    /// The input split into tokens.
    pub fn tokens(&self) -> impl Iterator<Item = &'static str> {
        self.input.split_whitespace()
    }
}

#[allow(clippy::cast_lossless)]
const fn parse_literal(literal: &str) -> u128 {
    let bytes = literal.as_bytes();
    let mut value = 0;
    let mut i = 0;
    while i < bytes.len() {
        value = value * 10 + (bytes[i] - b'0') as u128;
        i += 1;
    }
    value
}

/// Every battery case, in run order.
pub static BATTERY: &[SelfTestCase] = &[
    SelfTestCase::cardinal("one", 1),
    SelfTestCase::cardinal("eleven", 11),
    SelfTestCase::cardinal("twelve", 12),
    SelfTestCase::cardinal("a hundred", 100),
    SelfTestCase::cardinal("an hundred", 100),
    SelfTestCase::cardinal("a thousand", 1000),
    SelfTestCase::cardinal("a myriad", 10_000),
    SelfTestCase::cardinal("a million", 1_000_000),
    SelfTestCase::cardinal("a milliard", 1_000_000_000),
    SelfTestCase::cardinal("hundred", 100),
    SelfTestCase::cardinal("thousand", 1000),
    SelfTestCase::cardinal("myriad", 10_000),
    SelfTestCase::cardinal("million", 1_000_000),
    SelfTestCase::cardinal("milliard", 1_000_000_000),
    SelfTestCase::cardinal("1", 1),
    SelfTestCase::cardinal("one hundred twenty three", 123),
    SelfTestCase::literal("one twenty three", "123", true),
    SelfTestCase::cardinal("hundred twenty three", 123),
    SelfTestCase::cardinal("a hundred twenty three", 123),
    SelfTestCase::literal("ten twenty three", "1023", true),
    SelfTestCase::cardinal("thousand twenty three", 1023),
    SelfTestCase::literal("one aught two three", "1023", true),
    SelfTestCase::literal("one zero two three", "1023", true),
    SelfTestCase::cardinal("1023", 1023),
    SelfTestCase::cardinal("three hundred twenty thousand", 320_000),
    SelfTestCase::cardinal("one thousand nine hundred ten", 1910),
    SelfTestCase::cardinal("one thousand aught six", 100_006),
    SelfTestCase::cardinal("one hundred six", 106),
    SelfTestCase::cardinal("ten hundred six", 1006),
    SelfTestCase::cardinal("thousand six", 1006),
    SelfTestCase::cardinal("ten thousand six", 10_006),
    SelfTestCase::cardinal("ten thousand six million", 10_006_000_000),
    SelfTestCase::cardinal("four thousand nine hundred ten", 4910),
    SelfTestCase::cardinal("four thousand aught six", 400_006),
    SelfTestCase::cardinal("four hundred six", 406),
    SelfTestCase::cardinal("forty hundred six", 4006),
    SelfTestCase::cardinal("4 thousand six", 4006),
    SelfTestCase::cardinal("forty thousand six", 40_006),
    SelfTestCase::cardinal("forty thousand six million", 40_006_000_000),
    SelfTestCase::literal("double oh seven", "007", false),
    SelfTestCase::literal("triple zero six", "0006", false),
    SelfTestCase::cardinal("five five five eighty two oh one", 5_558_201),
    SelfTestCase::literal("aught million", "0000000", false),
    SelfTestCase::cardinal("one hundred hundred", 10_000),
    SelfTestCase::cardinal("one thousand hundred", 100_000),
    SelfTestCase::cardinal("one thousand two hundred", 1200),
    SelfTestCase::cardinal("one hundred thousand", 100_000),
    SelfTestCase::cardinal("one hundred million", 100_000_000),
    SelfTestCase::cardinal("one million hundred", 100_000_000),
    SelfTestCase::cardinal("one million million", 1_000_000_000_000),
    SelfTestCase::cardinal(
        "one milliard one million one myriad one thousand one hundred ten",
        1_001_011_110,
    ),
    SelfTestCase::cardinal("two double seven six triple zero", 2_776_000),
    SelfTestCase::cardinal(
        "ten thousand seven hundred thirty five million twenty thousand fifty two",
        10_735_020_052,
    ),
    SelfTestCase::cardinal(
        "ten thousand seven hundred thirty five million twenty five thousand two hundred",
        10_735_025_200,
    ),
    SelfTestCase::cardinal(
        "ten thousand seven hundred thirty five million twenty thousand fifty two hundred",
        1_073_502_005_200,
    ),
    SelfTestCase::cardinal("fifty two oh", 520),
    SelfTestCase::literal("oh five twenty", "0520", true),
    SelfTestCase::ordinal("first", 1),
    SelfTestCase::ordinal("twelfth", 12),
    SelfTestCase::ordinal("1st", 1),
    SelfTestCase::ordinal("2d", 2),
    SelfTestCase::ordinal("2nd", 2),
    SelfTestCase::ordinal("3d", 3),
    SelfTestCase::ordinal("3rd", 3),
    SelfTestCase::ordinal("4th", 4),
    SelfTestCase::ordinal("11th", 11),
    SelfTestCase::ordinal("12th", 12),
    SelfTestCase::ordinal("13th", 13),
    SelfTestCase::fails("an million", "unrecognized-token"),
    SelfTestCase::fails("1nd", "invalid-ordinal-suffix"),
    SelfTestCase::fails("11st", "invalid-ordinal-suffix"),
    SelfTestCase::fails("12d", "invalid-ordinal-suffix"),
    SelfTestCase::fails("12nd", "invalid-ordinal-suffix"),
    SelfTestCase::fails("two double seventy six triple zero", "repeater-misuse"),
    SelfTestCase::fails("seven and two eighths", "fractional-not-supported"),
    SelfTestCase::hint("three forty five", true),
    SelfTestCase::hint("three ninety nine", true),
    SelfTestCase::hint("twenty seven twelve", true),
    SelfTestCase::hint("twelve thirty", true),
    SelfTestCase::hint("two hundred thirty", false),
    SelfTestCase::hint("twenty one", false),
    SelfTestCase::hint("ninety nine thousand", false),
];

// =============================================================================
// Running
// =============================================================================

/// The result of one case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaseOutcome {
    /// The case that ran.
    pub case: SelfTestCase,
    /// Whether the parse matched the expectation.
    pub passed: bool,
    /// What the parser produced, as a number tuple or an error category.
    pub actual: String,
}

impl fmt::Display for CaseOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.passed { "ok  " } else { "FAIL" };
        write!(f, "{status} {:?} => {}", self.case.input, self.actual)?;
        if !self.passed {
            write!(f, " (expected {})", describe(&self.case.expect))?;
        }
        Ok(())
    }
}

fn describe(expect: &Expectation) -> String {
    match *expect {
        Expectation::Number {
            number_type,
            value,
            literal,
            separator_hint,
        } => {
            let literal = literal.map_or_else(|| value.to_string(), str::to_string);
            format!("({number_type}, {value}, '{literal}', {separator_hint})")
        }
        Expectation::Failure(category) => category.to_string(),
        Expectation::SeparatorHint(hint) => format!("separator hint {hint}"),
    }
}

fn satisfies(expect: &Expectation, actual: &wordnum_foundation::Result<ParsedNumber>) -> bool {
    match (*expect, actual) {
        (
            Expectation::Number {
                number_type,
                value,
                literal,
                separator_hint,
            },
            Ok(number),
        ) => {
            number.number_type == number_type
                && number.value == value
                && literal.map_or_else(|| number.literal == value.to_string(), |l| number.literal == l)
                && number.separator_hint == separator_hint
        }
        (Expectation::Failure(category), Err(err)) => err.kind.category() == category,
        (Expectation::SeparatorHint(hint), Ok(number)) => number.separator_hint == hint,
        _ => false,
    }
}

/// Runs one case through the given parser.
#[must_use]
pub fn run_case(parser: &NumberParser, case: &SelfTestCase) -> CaseOutcome {
    let tokens: Vec<&str> = case.tokens().collect();
    let result = parser.parse(&tokens);
    let actual = match &result {
        Ok(number) => number.to_string(),
        Err(err) => err.kind.category().to_string(),
    };

    CaseOutcome {
        case: *case,
        passed: satisfies(&case.expect, &result),
        actual,
    }
}

/// Runs the whole battery in colloquial mode.
#[must_use]
pub fn run_self_test() -> SelfTestReport {
    let parser = NumberParser::new(ParserConfig::colloquial());
    SelfTestReport {
        outcomes: BATTERY.iter().map(|case| run_case(&parser, case)).collect(),
    }
}

// =============================================================================
// Report
// =============================================================================

/// Outcomes of a battery run.
#[derive(Clone, Debug, Default)]
pub struct SelfTestReport {
    /// One entry per case, in run order.
    pub outcomes: Vec<CaseOutcome>,
}

impl SelfTestReport {
    /// Number of cases run.
    #[must_use]
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of cases that matched.
    #[must_use]
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    /// Number of cases that did not match.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    /// Returns true when every case matched.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }

    /// The outcomes that did not match.
    pub fn failures(&self) -> impl Iterator<Item = &CaseOutcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }

    /// One line per case followed by a summary line.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.outcomes.iter().map(ToString::to_string).collect();
        lines.push(self.summary());
        lines
    }

    /// "81 passed, 0 failed".
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{} passed, {} failed", self.passed(), self.failed())
    }
}

// =============================================================================
// Tests
// =============================================================================
