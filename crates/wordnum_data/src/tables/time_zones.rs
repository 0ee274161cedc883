//! Time-zone rows, keyed by IANA identifier.

use crate::zone::TimeZoneRule;

pub(crate) static TIME_ZONES: &[TimeZoneRule] = &[
    TimeZoneRule {
        id: "Africa/Accra",
        std_offset_minutes: 0,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Africa/Addis_Ababa",
        std_offset_minutes: 180,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Africa/Algiers",
        std_offset_minutes: 60,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Africa/Bamako",
        std_offset_minutes: 0,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Africa/Cairo",
        std_offset_minutes: 120,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Africa/Casablanca",
        std_offset_minutes: 60,
        dst_offset_minutes: Some(0),
        dst_start: Some("Last Sunday in March"),
        dst_end: Some("Last Sunday in October"),
        dst_rule: Some("Reverse DST (UTC+1 -> UTC+0) during Ramadan period"),
    },
    TimeZoneRule {
        id: "Africa/Dakar",
        std_offset_minutes: 0,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Africa/Dar_es_Salaam",
        std_offset_minutes: 180,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Africa/Gaborone",
        std_offset_minutes: 120,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Africa/Harare",
        std_offset_minutes: 120,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Africa/Johannesburg",
        std_offset_minutes: 120,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Africa/Kampala",
        std_offset_minutes: 180,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Africa/Kigali",
        std_offset_minutes: 120,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Africa/Kinshasa",
        std_offset_minutes: 60,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Africa/Lagos",
        std_offset_minutes: 60,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Africa/Luanda",
        std_offset_minutes: 60,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Africa/Lusaka",
        std_offset_minutes: 120,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Africa/Nairobi",
        std_offset_minutes: 180,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Africa/Tunis",
        std_offset_minutes: 60,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Africa/Windhoek",
        std_offset_minutes: 120,
        dst_offset_minutes: Some(60),
        dst_start: Some("First Sunday in September"),
        dst_end: Some("First Sunday in April"),
        dst_rule: Some("Southern Hemisphere DST"),
    },
    TimeZoneRule {
        id: "America/Anchorage",
        std_offset_minutes: -540,
        dst_offset_minutes: Some(-480),
        dst_start: Some("Second Sunday in March"),
        dst_end: Some("First Sunday in November"),
        dst_rule: Some("Alaska Daylight Time (AKDT)"),
    },
    TimeZoneRule {
        id: "America/Argentina/Buenos_Aires",
        std_offset_minutes: -180,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "America/Asuncion",
        std_offset_minutes: -180,
        dst_offset_minutes: Some(-240),
        dst_start: Some("First Sunday in October"),
        dst_end: Some("Fourth Sunday in March"),
        dst_rule: Some("Paraguay Summer Time (Southern Hemisphere)"),
    },
    TimeZoneRule {
        id: "America/Barbados",
        std_offset_minutes: -240,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "America/Bogota",
        std_offset_minutes: -300,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "America/Cancun",
        std_offset_minutes: -300,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "America/Caracas",
        std_offset_minutes: -240,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "America/Chicago",
        std_offset_minutes: -360,
        dst_offset_minutes: Some(-300),
        dst_start: Some("Second Sunday in March"),
        dst_end: Some("First Sunday in November"),
        dst_rule: Some("Central Daylight Time (CDT)"),
    },
    TimeZoneRule {
        id: "America/Costa_Rica",
        std_offset_minutes: -360,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "America/Denver",
        std_offset_minutes: -420,
        dst_offset_minutes: Some(-360),
        dst_start: Some("Second Sunday in March"),
        dst_end: Some("First Sunday in November"),
        dst_rule: Some("Mountain Daylight Time (MDT)"),
    },
    TimeZoneRule {
        id: "America/Edmonton",
        std_offset_minutes: -420,
        dst_offset_minutes: Some(-360),
        dst_start: Some("Second Sunday in March"),
        dst_end: Some("First Sunday in November"),
        dst_rule: Some("Mountain Daylight Time (MDT)"),
    },
    TimeZoneRule {
        id: "America/Guatemala",
        std_offset_minutes: -360,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "America/Guayaquil",
        std_offset_minutes: -300,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "America/Guyana",
        std_offset_minutes: -240,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "America/Halifax",
        std_offset_minutes: -240,
        dst_offset_minutes: Some(-180),
        dst_start: Some("Second Sunday in March"),
        dst_end: Some("First Sunday in November"),
        dst_rule: Some("Atlantic Daylight Time (ADT)"),
    },
    TimeZoneRule {
        id: "America/Havana",
        std_offset_minutes: -300,
        dst_offset_minutes: Some(-240),
        dst_start: Some("Second Sunday in March"),
        dst_end: Some("First Sunday in November"),
        dst_rule: Some("Cuba Daylight Time (CDT)"),
    },
    TimeZoneRule {
        id: "America/Iqaluit",
        std_offset_minutes: -300,
        dst_offset_minutes: Some(-240),
        dst_start: Some("Second Sunday in March"),
        dst_end: Some("First Sunday in November"),
        dst_rule: Some("Eastern Daylight Time (EDT)"),
    },
    TimeZoneRule {
        id: "America/Jamaica",
        std_offset_minutes: -300,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "America/La_Paz",
        std_offset_minutes: -240,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "America/Lima",
        std_offset_minutes: -300,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "America/Los_Angeles",
        std_offset_minutes: -480,
        dst_offset_minutes: Some(-420),
        dst_start: Some("Second Sunday in March"),
        dst_end: Some("First Sunday in November"),
        dst_rule: Some("Pacific Daylight Time (PDT)"),
    },
    TimeZoneRule {
        id: "America/Manaus",
        std_offset_minutes: -240,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "America/Mexico_City",
        std_offset_minutes: -360,
        dst_offset_minutes: Some(-300),
        dst_start: Some("First Sunday in April"),
        dst_end: Some("Last Sunday in October"),
        dst_rule: Some("Central Daylight Time (CDT)"),
    },
    TimeZoneRule {
        id: "America/Montevideo",
        std_offset_minutes: -180,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "America/Nassau",
        std_offset_minutes: -300,
        dst_offset_minutes: Some(-240),
        dst_start: Some("Second Sunday in March"),
        dst_end: Some("First Sunday in November"),
        dst_rule: Some("Eastern Daylight Time (EDT)"),
    },
    TimeZoneRule {
        id: "America/New_York",
        std_offset_minutes: -300,
        dst_offset_minutes: Some(-240),
        dst_start: Some("Second Sunday in March"),
        dst_end: Some("First Sunday in November"),
        dst_rule: Some("Eastern Daylight Time (EDT)"),
    },
    TimeZoneRule {
        id: "America/Nuuk",
        std_offset_minutes: -180,
        dst_offset_minutes: Some(-120),
        dst_start: Some("Last Sunday in March"),
        dst_end: Some("Last Sunday in October"),
        dst_rule: Some("West Greenland Summer Time"),
    },
    TimeZoneRule {
        id: "America/Panama",
        std_offset_minutes: -300,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "America/Paramaribo",
        std_offset_minutes: -180,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "America/Phoenix",
        std_offset_minutes: -420,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "America/Puerto_Rico",
        std_offset_minutes: -240,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "America/Santiago",
        std_offset_minutes: -180,
        dst_offset_minutes: Some(-240),
        dst_start: Some("First Sunday in September"),
        dst_end: Some("First Sunday in April"),
        dst_rule: Some("Chile Summer Time (Southern Hemisphere)"),
    },
    TimeZoneRule {
        id: "America/Sao_Paulo",
        std_offset_minutes: -180,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "America/St_Johns",
        std_offset_minutes: -210,
        dst_offset_minutes: Some(-150),
        dst_start: Some("Second Sunday in March"),
        dst_end: Some("First Sunday in November"),
        dst_rule: Some("Newfoundland Daylight Time (NDT)"),
    },
    TimeZoneRule {
        id: "America/Tijuana",
        std_offset_minutes: -480,
        dst_offset_minutes: Some(-420),
        dst_start: Some("Second Sunday in March"),
        dst_end: Some("First Sunday in November"),
        dst_rule: Some("Pacific Daylight Time (PDT)"),
    },
    TimeZoneRule {
        id: "America/Toronto",
        std_offset_minutes: -300,
        dst_offset_minutes: Some(-240),
        dst_start: Some("Second Sunday in March"),
        dst_end: Some("First Sunday in November"),
        dst_rule: Some("Eastern Daylight Time (EDT)"),
    },
    TimeZoneRule {
        id: "America/Vancouver",
        std_offset_minutes: -480,
        dst_offset_minutes: Some(-420),
        dst_start: Some("Second Sunday in March"),
        dst_end: Some("First Sunday in November"),
        dst_rule: Some("Pacific Daylight Time (PDT)"),
    },
    TimeZoneRule {
        id: "America/Whitehorse",
        std_offset_minutes: -420,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "America/Winnipeg",
        std_offset_minutes: -360,
        dst_offset_minutes: Some(-300),
        dst_start: Some("Second Sunday in March"),
        dst_end: Some("First Sunday in November"),
        dst_rule: Some("Central Daylight Time (CDT)"),
    },
    TimeZoneRule {
        id: "America/Yellowknife",
        std_offset_minutes: -420,
        dst_offset_minutes: Some(-360),
        dst_start: Some("Second Sunday in March"),
        dst_end: Some("First Sunday in November"),
        dst_rule: Some("Mountain Daylight Time (MDT)"),
    },
    TimeZoneRule {
        id: "Arctic/Longyearbyen",
        std_offset_minutes: 60,
        dst_offset_minutes: Some(120),
        dst_start: Some("Last Sunday in March"),
        dst_end: Some("Last Sunday in October"),
        dst_rule: Some("Central European Summer Time (CEST)"),
    },
    TimeZoneRule {
        id: "Asia/Almaty",
        std_offset_minutes: 360,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Asia/Amman",
        std_offset_minutes: 120,
        dst_offset_minutes: Some(180),
        dst_start: Some("Last Friday in March"),
        dst_end: Some("Last Friday in October"),
        dst_rule: Some("Arabia Summer Time"),
    },
    TimeZoneRule {
        id: "Asia/Ashgabat",
        std_offset_minutes: 300,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Asia/Baghdad",
        std_offset_minutes: 180,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Asia/Bahrain",
        std_offset_minutes: 180,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Asia/Bangkok",
        std_offset_minutes: 420,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Asia/Beirut",
        std_offset_minutes: 120,
        dst_offset_minutes: Some(180),
        dst_start: Some("Last Sunday in March"),
        dst_end: Some("Last Sunday in October"),
        dst_rule: Some("Eastern European Summer Time (EEST)"),
    },
    TimeZoneRule {
        id: "Asia/Bishkek",
        std_offset_minutes: 360,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Asia/Brunei",
        std_offset_minutes: 480,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Asia/Colombo",
        std_offset_minutes: 330,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Asia/Damascus",
        std_offset_minutes: 120,
        dst_offset_minutes: Some(180),
        dst_start: Some("Last Friday in March"),
        dst_end: Some("Last Friday in October"),
        dst_rule: Some("Eastern European Summer Time (EEST)"),
    },
    TimeZoneRule {
        id: "Asia/Dhaka",
        std_offset_minutes: 360,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Asia/Dili",
        std_offset_minutes: 540,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Asia/Dubai",
        std_offset_minutes: 240,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Asia/Dushanbe",
        std_offset_minutes: 300,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Asia/Ho_Chi_Minh",
        std_offset_minutes: 420,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Asia/Hong_Kong",
        std_offset_minutes: 480,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Asia/Jakarta",
        std_offset_minutes: 420,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Asia/Jerusalem",
        std_offset_minutes: 120,
        dst_offset_minutes: Some(180),
        dst_start: Some("Friday before last Sunday in March"),
        dst_end: Some("Last Sunday in October"),
        dst_rule: Some("Israel Daylight Time (IDT)"),
    },
    TimeZoneRule {
        id: "Asia/Kabul",
        std_offset_minutes: 270,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Asia/Karachi",
        std_offset_minutes: 300,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Asia/Kathmandu",
        std_offset_minutes: 345,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Asia/Kolkata",
        std_offset_minutes: 330,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Asia/Kuala_Lumpur",
        std_offset_minutes: 480,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Asia/Kuwait",
        std_offset_minutes: 180,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Asia/Macau",
        std_offset_minutes: 480,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Asia/Makassar",
        std_offset_minutes: 480,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Asia/Manila",
        std_offset_minutes: 480,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Asia/Muscat",
        std_offset_minutes: 240,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Asia/Nicosia",
        std_offset_minutes: 120,
        dst_offset_minutes: Some(180),
        dst_start: Some("Last Sunday in March"),
        dst_end: Some("Last Sunday in October"),
        dst_rule: Some("Eastern European Summer Time (EEST)"),
    },
    TimeZoneRule {
        id: "Asia/Phnom_Penh",
        std_offset_minutes: 420,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Asia/Pyongyang",
        std_offset_minutes: 540,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Asia/Qatar",
        std_offset_minutes: 180,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Asia/Riyadh",
        std_offset_minutes: 180,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Asia/Seoul",
        std_offset_minutes: 540,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Asia/Shanghai",
        std_offset_minutes: 480,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Asia/Singapore",
        std_offset_minutes: 480,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Asia/Taipei",
        std_offset_minutes: 480,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Asia/Tashkent",
        std_offset_minutes: 300,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Asia/Tehran",
        std_offset_minutes: 210,
        dst_offset_minutes: Some(270),
        dst_start: Some("March 21 (Persian New Year)"),
        dst_end: Some("September 21 (Autumnal Equinox)"),
        dst_rule: Some("Iran Daylight Time (IRDT)"),
    },
    TimeZoneRule {
        id: "Asia/Thimphu",
        std_offset_minutes: 360,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Asia/Tokyo",
        std_offset_minutes: 540,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Asia/Ulaanbaatar",
        std_offset_minutes: 480,
        dst_offset_minutes: Some(540),
        dst_start: Some("Last Saturday in March"),
        dst_end: Some("Last Saturday in September"),
        dst_rule: Some("Ulaanbaatar Summer Time"),
    },
    TimeZoneRule {
        id: "Asia/Vientiane",
        std_offset_minutes: 420,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Asia/Yangon",
        std_offset_minutes: 390,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Atlantic/Reykjavik",
        std_offset_minutes: 0,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Australia/Adelaide",
        std_offset_minutes: 570,
        dst_offset_minutes: Some(630),
        dst_start: Some("First Sunday in October"),
        dst_end: Some("First Sunday in April"),
        dst_rule: Some("Australian Central Daylight Time (Southern Hemisphere)"),
    },
    TimeZoneRule {
        id: "Australia/Brisbane",
        std_offset_minutes: 600,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Australia/Darwin",
        std_offset_minutes: 570,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Australia/Hobart",
        std_offset_minutes: 600,
        dst_offset_minutes: Some(660),
        dst_start: Some("First Sunday in October"),
        dst_end: Some("First Sunday in April"),
        dst_rule: Some("Australian Eastern Daylight Time (Southern Hemisphere)"),
    },
    TimeZoneRule {
        id: "Australia/Melbourne",
        std_offset_minutes: 600,
        dst_offset_minutes: Some(660),
        dst_start: Some("First Sunday in October"),
        dst_end: Some("First Sunday in April"),
        dst_rule: Some("Australian Eastern Daylight Time (Southern Hemisphere)"),
    },
    TimeZoneRule {
        id: "Australia/Perth",
        std_offset_minutes: 480,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Australia/Sydney",
        std_offset_minutes: 600,
        dst_offset_minutes: Some(660),
        dst_start: Some("First Sunday in October"),
        dst_end: Some("First Sunday in April"),
        dst_rule: Some("Australian Eastern Daylight Time (Southern Hemisphere)"),
    },
    TimeZoneRule {
        id: "Europe/Amsterdam",
        std_offset_minutes: 60,
        dst_offset_minutes: Some(120),
        dst_start: Some("Last Sunday in March"),
        dst_end: Some("Last Sunday in October"),
        dst_rule: Some("Central European Summer Time (CEST)"),
    },
    TimeZoneRule {
        id: "Europe/Athens",
        std_offset_minutes: 120,
        dst_offset_minutes: Some(180),
        dst_start: Some("Last Sunday in March"),
        dst_end: Some("Last Sunday in October"),
        dst_rule: Some("Eastern European Summer Time (EEST)"),
    },
    TimeZoneRule {
        id: "Europe/Belgrade",
        std_offset_minutes: 60,
        dst_offset_minutes: Some(120),
        dst_start: Some("Last Sunday in March"),
        dst_end: Some("Last Sunday in October"),
        dst_rule: Some("Central European Summer Time (CEST)"),
    },
    TimeZoneRule {
        id: "Europe/Berlin",
        std_offset_minutes: 60,
        dst_offset_minutes: Some(120),
        dst_start: Some("Last Sunday in March"),
        dst_end: Some("Last Sunday in October"),
        dst_rule: Some("Central European Summer Time (CEST)"),
    },
    TimeZoneRule {
        id: "Europe/Bratislava",
        std_offset_minutes: 60,
        dst_offset_minutes: Some(120),
        dst_start: Some("Last Sunday in March"),
        dst_end: Some("Last Sunday in October"),
        dst_rule: Some("Central European Summer Time (CEST)"),
    },
    TimeZoneRule {
        id: "Europe/Brussels",
        std_offset_minutes: 60,
        dst_offset_minutes: Some(120),
        dst_start: Some("Last Sunday in March"),
        dst_end: Some("Last Sunday in October"),
        dst_rule: Some("Central European Summer Time (CEST)"),
    },
    TimeZoneRule {
        id: "Europe/Bucharest",
        std_offset_minutes: 120,
        dst_offset_minutes: Some(180),
        dst_start: Some("Last Sunday in March"),
        dst_end: Some("Last Sunday in October"),
        dst_rule: Some("Eastern European Summer Time (EEST)"),
    },
    TimeZoneRule {
        id: "Europe/Budapest",
        std_offset_minutes: 60,
        dst_offset_minutes: Some(120),
        dst_start: Some("Last Sunday in March"),
        dst_end: Some("Last Sunday in October"),
        dst_rule: Some("Central European Summer Time (CEST)"),
    },
    TimeZoneRule {
        id: "Europe/Copenhagen",
        std_offset_minutes: 60,
        dst_offset_minutes: Some(120),
        dst_start: Some("Last Sunday in March"),
        dst_end: Some("Last Sunday in October"),
        dst_rule: Some("Central European Summer Time (CEST)"),
    },
    TimeZoneRule {
        id: "Europe/Dublin",
        std_offset_minutes: 0,
        dst_offset_minutes: Some(60),
        dst_start: Some("Last Sunday in March"),
        dst_end: Some("Last Sunday in October"),
        dst_rule: Some("Irish Standard Time (IST)"),
    },
    TimeZoneRule {
        id: "Europe/Helsinki",
        std_offset_minutes: 120,
        dst_offset_minutes: Some(180),
        dst_start: Some("Last Sunday in March"),
        dst_end: Some("Last Sunday in October"),
        dst_rule: Some("Eastern European Summer Time (EEST)"),
    },
    TimeZoneRule {
        id: "Europe/Istanbul",
        std_offset_minutes: 180,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Europe/Kiev",
        std_offset_minutes: 120,
        dst_offset_minutes: Some(180),
        dst_start: Some("Last Sunday in March"),
        dst_end: Some("Last Sunday in October"),
        dst_rule: Some("Eastern European Summer Time (EEST)"),
    },
    TimeZoneRule {
        id: "Europe/Lisbon",
        std_offset_minutes: 0,
        dst_offset_minutes: Some(60),
        dst_start: Some("Last Sunday in March"),
        dst_end: Some("Last Sunday in October"),
        dst_rule: Some("Western European Summer Time (WEST)"),
    },
    TimeZoneRule {
        id: "Europe/Ljubljana",
        std_offset_minutes: 60,
        dst_offset_minutes: Some(120),
        dst_start: Some("Last Sunday in March"),
        dst_end: Some("Last Sunday in October"),
        dst_rule: Some("Central European Summer Time (CEST)"),
    },
    TimeZoneRule {
        id: "Europe/London",
        std_offset_minutes: 0,
        dst_offset_minutes: Some(60),
        dst_start: Some("Last Sunday in March"),
        dst_end: Some("Last Sunday in October"),
        dst_rule: Some("British Summer Time (BST)"),
    },
    TimeZoneRule {
        id: "Europe/Luxembourg",
        std_offset_minutes: 60,
        dst_offset_minutes: Some(120),
        dst_start: Some("Last Sunday in March"),
        dst_end: Some("Last Sunday in October"),
        dst_rule: Some("Central European Summer Time (CEST)"),
    },
    TimeZoneRule {
        id: "Europe/Madrid",
        std_offset_minutes: 60,
        dst_offset_minutes: Some(120),
        dst_start: Some("Last Sunday in March"),
        dst_end: Some("Last Sunday in October"),
        dst_rule: Some("Central European Summer Time (CEST)"),
    },
    TimeZoneRule {
        id: "Europe/Malta",
        std_offset_minutes: 60,
        dst_offset_minutes: Some(120),
        dst_start: Some("Last Sunday in March"),
        dst_end: Some("Last Sunday in October"),
        dst_rule: Some("Central European Summer Time (CEST)"),
    },
    TimeZoneRule {
        id: "Europe/Moscow",
        std_offset_minutes: 180,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Europe/Oslo",
        std_offset_minutes: 60,
        dst_offset_minutes: Some(120),
        dst_start: Some("Last Sunday in March"),
        dst_end: Some("Last Sunday in October"),
        dst_rule: Some("Central European Summer Time (CEST)"),
    },
    TimeZoneRule {
        id: "Europe/Paris",
        std_offset_minutes: 60,
        dst_offset_minutes: Some(120),
        dst_start: Some("Last Sunday in March"),
        dst_end: Some("Last Sunday in October"),
        dst_rule: Some("Central European Summer Time (CEST)"),
    },
    TimeZoneRule {
        id: "Europe/Prague",
        std_offset_minutes: 60,
        dst_offset_minutes: Some(120),
        dst_start: Some("Last Sunday in March"),
        dst_end: Some("Last Sunday in October"),
        dst_rule: Some("Central European Summer Time (CEST)"),
    },
    TimeZoneRule {
        id: "Europe/Rome",
        std_offset_minutes: 60,
        dst_offset_minutes: Some(120),
        dst_start: Some("Last Sunday in March"),
        dst_end: Some("Last Sunday in October"),
        dst_rule: Some("Central European Summer Time (CEST)"),
    },
    TimeZoneRule {
        id: "Europe/Sarajevo",
        std_offset_minutes: 60,
        dst_offset_minutes: Some(120),
        dst_start: Some("Last Sunday in March"),
        dst_end: Some("Last Sunday in October"),
        dst_rule: Some("Central European Summer Time (CEST)"),
    },
    TimeZoneRule {
        id: "Europe/Sofia",
        std_offset_minutes: 120,
        dst_offset_minutes: Some(180),
        dst_start: Some("Last Sunday in March"),
        dst_end: Some("Last Sunday in October"),
        dst_rule: Some("Eastern European Summer Time (EEST)"),
    },
    TimeZoneRule {
        id: "Europe/Stockholm",
        std_offset_minutes: 60,
        dst_offset_minutes: Some(120),
        dst_start: Some("Last Sunday in March"),
        dst_end: Some("Last Sunday in October"),
        dst_rule: Some("Central European Summer Time (CEST)"),
    },
    TimeZoneRule {
        id: "Europe/Vienna",
        std_offset_minutes: 60,
        dst_offset_minutes: Some(120),
        dst_start: Some("Last Sunday in March"),
        dst_end: Some("Last Sunday in October"),
        dst_rule: Some("Central European Summer Time (CEST)"),
    },
    TimeZoneRule {
        id: "Europe/Warsaw",
        std_offset_minutes: 60,
        dst_offset_minutes: Some(120),
        dst_start: Some("Last Sunday in March"),
        dst_end: Some("Last Sunday in October"),
        dst_rule: Some("Central European Summer Time (CEST)"),
    },
    TimeZoneRule {
        id: "Europe/Zagreb",
        std_offset_minutes: 60,
        dst_offset_minutes: Some(120),
        dst_start: Some("Last Sunday in March"),
        dst_end: Some("Last Sunday in October"),
        dst_rule: Some("Central European Summer Time (CEST)"),
    },
    TimeZoneRule {
        id: "Europe/Zurich",
        std_offset_minutes: 60,
        dst_offset_minutes: Some(120),
        dst_start: Some("Last Sunday in March"),
        dst_end: Some("Last Sunday in October"),
        dst_rule: Some("Central European Summer Time (CEST)"),
    },
    TimeZoneRule {
        id: "Indian/Antananarivo",
        std_offset_minutes: 180,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Indian/Mahe",
        std_offset_minutes: 240,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Indian/Maldives",
        std_offset_minutes: 300,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Indian/Mauritius",
        std_offset_minutes: 240,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Indian/Reunion",
        std_offset_minutes: 240,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Pacific/Apia",
        std_offset_minutes: 780,
        dst_offset_minutes: Some(840),
        dst_start: Some("Last Sunday in September"),
        dst_end: Some("First Sunday in April"),
        dst_rule: Some("Samoa Summer Time (Southern Hemisphere)"),
    },
    TimeZoneRule {
        id: "Pacific/Auckland",
        std_offset_minutes: 720,
        dst_offset_minutes: Some(780),
        dst_start: Some("Last Sunday in September"),
        dst_end: Some("First Sunday in April"),
        dst_rule: Some("New Zealand Daylight Time (Southern Hemisphere)"),
    },
    TimeZoneRule {
        id: "Pacific/Efate",
        std_offset_minutes: 660,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Pacific/Fiji",
        std_offset_minutes: 720,
        dst_offset_minutes: Some(780),
        dst_start: Some("First Sunday in November"),
        dst_end: Some("Third Sunday in January"),
        dst_rule: Some("Fiji Summer Time (Southern Hemisphere)"),
    },
    TimeZoneRule {
        id: "Pacific/Guam",
        std_offset_minutes: 600,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Pacific/Honolulu",
        std_offset_minutes: -600,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Pacific/Noumea",
        std_offset_minutes: 660,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Pacific/Port_Moresby",
        std_offset_minutes: 600,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Pacific/Tahiti",
        std_offset_minutes: -600,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
    TimeZoneRule {
        id: "Pacific/Tongatapu",
        std_offset_minutes: 780,
        dst_offset_minutes: None,
        dst_start: None,
        dst_end: None,
        dst_rule: None,
    },
];
