mod locales;
mod time_zones;

pub(crate) use locales::LOCALES;
pub(crate) use time_zones::TIME_ZONES;
