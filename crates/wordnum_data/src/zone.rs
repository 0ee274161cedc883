//! Time-zone rule table.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use crate::tables::TIME_ZONES;

/// Standard and daylight UTC offsets of one IANA zone.
///
/// The transition fields are descriptions ("Second Sunday in March"), not
/// computable rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeZoneRule {
    /// IANA identifier, such as "America/New_York".
    pub id: &'static str,
    /// Standard-time offset from UTC in minutes.
    pub std_offset_minutes: i32,
    /// Daylight-time offset from UTC in minutes, if the zone observes DST.
    pub dst_offset_minutes: Option<i32>,
    /// When daylight time starts.
    pub dst_start: Option<&'static str>,
    /// When daylight time ends.
    pub dst_end: Option<&'static str>,
    /// Name or note for the daylight rule.
    pub dst_rule: Option<&'static str>,
}

impl TimeZoneRule {
    /// Returns true if the zone has a daylight offset.
    #[must_use]
    pub const fn observes_dst(&self) -> bool {
        self.dst_offset_minutes.is_some()
    }

    /// The offset in effect, in minutes. Zones without DST always return the
    /// standard offset.
    #[must_use]
    pub fn offset_minutes(&self, daylight: bool) -> i32 {
        match self.dst_offset_minutes {
            Some(dst) if daylight => dst,
            _ => self.std_offset_minutes,
        }
    }
}

impl fmt::Display for TimeZoneRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.id, format_utc_offset(self.std_offset_minutes))?;
        if let Some(dst) = self.dst_offset_minutes {
            write!(f, " / {}", format_utc_offset(dst))?;
        }
        Ok(())
    }
}

/// Renders an offset as `UTC+05:45`.
#[must_use]
pub fn format_utc_offset(minutes: i32) -> String {
    let sign = if minutes < 0 { '-' } else { '+' };
    let minutes = minutes.unsigned_abs();
    format!("UTC{sign}{:02}:{:02}", minutes / 60, minutes % 60)
}

static BY_ID: LazyLock<HashMap<&'static str, &'static TimeZoneRule>> =
    LazyLock::new(|| TIME_ZONES.iter().map(|z| (z.id, z)).collect());

/// Looks up a zone by exact IANA identifier.
#[must_use]
pub fn time_zone(id: &str) -> Option<&'static TimeZoneRule> {
    BY_ID.get(id).copied()
}

/// Every zone, in table order.
pub fn time_zones() -> impl Iterator<Item = &'static TimeZoneRule> {
    TIME_ZONES.iter()
}

/// Number of zones.
#[must_use]
pub fn len() -> usize {
    TIME_ZONES.len()
}
