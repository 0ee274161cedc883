//! Static locale and time-zone tables.
//!
//! Two read-only lookup tables, indexed once on first use:
//!
//! - [`locale`] - place name to display name, coordinates, and IANA zone
//! - [`time_zone`] - IANA zone to standard and daylight UTC offsets
//!
//! Offsets are whole minutes so zones like Asia/Kathmandu (+5:45) are exact.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod locale;
pub mod zone;

mod tables;

pub use locale::{Locale, locale, locale_ignore_case, locales};
pub use zone::{TimeZoneRule, format_utc_offset, time_zone, time_zones};

/// Looks up a locale and its time-zone rule together.
#[must_use]
pub fn locale_time_zone(key: &str) -> Option<(&'static Locale, &'static TimeZoneRule)> {
    let locale = locale(key)?;
    let zone = time_zone(locale.time_zone)?;
    Some((locale, zone))
}
