//! Static word classification tables.
//!
//! Every word the parser understands lives in one table, built once on first
//! use. Digit values are stored as [`Digit`] runs: "ten" is a known `1`
//! followed by a placeholder, while "twenty" is a known `2` followed by a known
//! zero that leaves one position of room for a unit word.

use std::collections::HashMap;
use std::sync::LazyLock;

use wordnum_foundation::Digit;
use wordnum_foundation::Digit::{Known as K, Placeholder as X};

/// The word that joins a whole part to a fraction.
pub const FRACTION_JOINER: &str = "and";

/// The word substituted for an article or a missing leading multiplier.
pub const UNIT_WORD: &str = "one";

/// The placeholder word injected to keep digit pairing going.
pub const PAIRING_WORD: &str = "oh";

/// Scale words starting with this letter also accept the article "an".
pub const SOFT_START: char = 'h';

/// A multiplier word such as "thousand" or "hundredth".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scale {
    /// Number of zeros in the magnitude (3 for "thousand").
    pub zeros: usize,
    /// True for "hundredth", "thousandth", and so on.
    pub ordinal: bool,
}

/// A lexicon entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entry {
    /// Digit, teen, and tens words.
    Cardinal(&'static [Digit]),
    /// "first" through "ninetieth".
    Ordinal(&'static [Digit]),
    /// Scale and ordinal scale words.
    Scale(Scale),
    /// "double" and "triple", with their repeat count.
    Repeater(usize),
    /// "a" and "an".
    Article,
    /// "and".
    FractionJoiner,
}

impl Entry {
    /// A short name for the word class, used by traces and the REPL.
    #[must_use]
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Cardinal([X]) => "placeholder",
            Self::Cardinal(_) => "cardinal",
            Self::Ordinal(_) => "ordinal",
            Self::Scale(Scale { ordinal: false, .. }) => "scale",
            Self::Scale(Scale { ordinal: true, .. }) => "ordinal-scale",
            Self::Repeater(_) => "repeater",
            Self::Article => "article",
            Self::FractionJoiner => "fraction-joiner",
        }
    }
}

const CARDINALS: &[(&str, &[Digit])] = &[
    ("zero", &[X]),
    ("oh", &[X]),
    ("aught", &[X]),
    ("one", &[K(1)]),
    ("two", &[K(2)]),
    ("three", &[K(3)]),
    ("four", &[K(4)]),
    ("five", &[K(5)]),
    ("six", &[K(6)]),
    ("seven", &[K(7)]),
    ("eight", &[K(8)]),
    ("nine", &[K(9)]),
    ("ten", &[K(1), X]),
    ("eleven", &[K(1), K(1)]),
    ("twelve", &[K(1), K(2)]),
    ("thirteen", &[K(1), K(3)]),
    ("fourteen", &[K(1), K(4)]),
    ("fifteen", &[K(1), K(5)]),
    ("sixteen", &[K(1), K(6)]),
    ("seventeen", &[K(1), K(7)]),
    ("eighteen", &[K(1), K(8)]),
    ("nineteen", &[K(1), K(9)]),
    ("twenty", &[K(2), K(0)]),
    ("thirty", &[K(3), K(0)]),
    ("forty", &[K(4), K(0)]),
    ("fifty", &[K(5), K(0)]),
    ("sixty", &[K(6), K(0)]),
    ("seventy", &[K(7), K(0)]),
    ("eighty", &[K(8), K(0)]),
    ("ninety", &[K(9), K(0)]),
];

const ORDINALS: &[(&str, &[Digit])] = &[
    ("first", &[K(1)]),
    ("second", &[K(2)]),
    ("third", &[K(3)]),
    ("fourth", &[K(4)]),
    ("fifth", &[K(5)]),
    ("sixth", &[K(6)]),
    ("seventh", &[K(7)]),
    ("eighth", &[K(8)]),
    ("ninth", &[K(9)]),
    ("tenth", &[K(1), K(0)]),
    ("eleventh", &[K(1), K(1)]),
    ("twelfth", &[K(1), K(2)]),
    ("thirteenth", &[K(1), K(3)]),
    ("fourteenth", &[K(1), K(4)]),
    ("fifteenth", &[K(1), K(5)]),
    ("sixteenth", &[K(1), K(6)]),
    ("seventeenth", &[K(1), K(7)]),
    ("eighteenth", &[K(1), K(8)]),
    ("nineteenth", &[K(1), K(9)]),
    ("twentieth", &[K(2), K(0)]),
    ("thirtieth", &[K(3), K(0)]),
    ("fortieth", &[K(4), K(0)]),
    ("fiftieth", &[K(5), K(0)]),
    ("sixtieth", &[K(6), K(0)]),
    ("seventieth", &[K(7), K(0)]),
    ("eightieth", &[K(8), K(0)]),
    ("ninetieth", &[K(9), K(0)]),
];

const SCALES: &[(&str, &str, usize)] = &[
    ("hundred", "hundredth", 2),
    ("thousand", "thousandth", 3),
    ("myriad", "myriadth", 4),
    ("million", "millionth", 6),
    ("milliard", "milliardth", 9),
];

const REPEATERS: &[(&str, usize)] = &[("double", 2), ("triple", 3)];

const ARTICLES: &[&str] = &["a", "an"];

static LEXICON: LazyLock<HashMap<&'static str, Entry>> = LazyLock::new(|| {
    let mut table = HashMap::new();
    for &(word, digits) in CARDINALS {
        table.insert(word, Entry::Cardinal(digits));
    }
    for &(word, digits) in ORDINALS {
        table.insert(word, Entry::Ordinal(digits));
    }
    for &(word, ordinal_word, zeros) in SCALES {
        table.insert(word, Entry::Scale(Scale { zeros, ordinal: false }));
        table.insert(ordinal_word, Entry::Scale(Scale { zeros, ordinal: true }));
    }
    for &(word, times) in REPEATERS {
        table.insert(word, Entry::Repeater(times));
    }
    for &word in ARTICLES {
        table.insert(word, Entry::Article);
    }
    table.insert(FRACTION_JOINER, Entry::FractionJoiner);
    table
});

/// Looks up a word.
#[must_use]
pub fn lookup(word: &str) -> Option<Entry> {
    LEXICON.get(word).copied()
}

/// Digits of a digit, teen, or tens word.
#[must_use]
pub fn cardinal(word: &str) -> Option<&'static [Digit]> {
    match lookup(word)? {
        Entry::Cardinal(digits) => Some(digits),
        _ => None,
    }
}

/// Digits of an ordinal word.
#[must_use]
pub fn ordinal(word: &str) -> Option<&'static [Digit]> {
    match lookup(word)? {
        Entry::Ordinal(digits) => Some(digits),
        _ => None,
    }
}

/// Scale of a scale or ordinal scale word.
#[must_use]
pub fn scale(word: &str) -> Option<Scale> {
    match lookup(word)? {
        Entry::Scale(scale) => Some(scale),
        _ => None,
    }
}

/// Repeat count of a repeater word.
#[must_use]
pub fn repeater(word: &str) -> Option<usize> {
    match lookup(word)? {
        Entry::Repeater(times) => Some(times),
        _ => None,
    }
}

/// Returns true for "a" and "an".
#[must_use]
pub fn is_article(word: &str) -> bool {
    matches!(lookup(word), Some(Entry::Article))
}

/// Returns true for "oh", "zero", and "aught".
#[must_use]
pub fn is_placeholder_word(word: &str) -> bool {
    matches!(lookup(word), Some(Entry::Cardinal([X])))
}

/// Every word in the lexicon, in no particular order.
pub fn words() -> impl Iterator<Item = &'static str> {
    LEXICON.keys().copied()
}
