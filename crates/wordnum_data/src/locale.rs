//! Locale table.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::tables::LOCALES;

/// A named place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Locale {
    /// Lookup key, such as "New York".
    pub key: &'static str,
    /// Display name, such as "New York City, New York".
    pub display: &'static str,
    /// Degrees north.
    pub latitude: f64,
    /// Degrees east.
    pub longitude: f64,
    /// IANA time-zone identifier.
    pub time_zone: &'static str,
}

impl Locale {
    pub(crate) const fn new(
        key: &'static str,
        display: &'static str,
        latitude: f64,
        longitude: f64,
        time_zone: &'static str,
    ) -> Self {
        Self {
            key,
            display,
            latitude,
            longitude,
            time_zone,
        }
    }
}

static BY_KEY: LazyLock<HashMap<&'static str, &'static Locale>> =
    LazyLock::new(|| LOCALES.iter().map(|l| (l.key, l)).collect());

static BY_FOLDED_KEY: LazyLock<HashMap<String, &'static Locale>> =
    LazyLock::new(|| LOCALES.iter().map(|l| (l.key.to_lowercase(), l)).collect());

/// Looks up a locale by exact key.
#[must_use]
pub fn locale(key: &str) -> Option<&'static Locale> {
    BY_KEY.get(key).copied()
}

/// Looks up a locale ignoring case, for keys typed by a person.
#[must_use]
pub fn locale_ignore_case(key: &str) -> Option<&'static Locale> {
    BY_FOLDED_KEY.get(&key.to_lowercase()).copied()
}

/// Every locale, in table order.
pub fn locales() -> impl Iterator<Item = &'static Locale> {
    LOCALES.iter()
}

/// Number of locales.
#[must_use]
pub fn len() -> usize {
    LOCALES.len()
}
