//! Time-zone table tests.

use wordnum_data::{format_utc_offset, time_zone, time_zones};

#[test]
fn offsets_in_minutes() {
    let kolkata = time_zone("Asia/Kolkata").unwrap();
    assert_eq!(kolkata.std_offset_minutes, 330);
    assert!(!kolkata.observes_dst());

    let sydney = time_zone("Australia/Sydney").unwrap();
    assert_eq!(sydney.offset_minutes(false), 600);
    assert_eq!(sydney.offset_minutes(true), 660);
}

#[test]
fn offsets_stay_within_a_day() {
    for zone in time_zones() {
        assert!(zone.std_offset_minutes.abs() <= 14 * 60, "{}", zone.id);
        if let Some(dst) = zone.dst_offset_minutes {
            assert!(dst.abs() <= 14 * 60, "{}", zone.id);
            assert_eq!((dst - zone.std_offset_minutes).abs(), 60, "{}", zone.id);
        }
    }
}

#[test]
fn offsets_format_with_sign() {
    assert_eq!(format_utc_offset(-300), "UTC-05:00");
    assert_eq!(format_utc_offset(330), "UTC+05:30");
    assert_eq!(format_utc_offset(-30), "UTC-00:30");
}

#[test]
fn zones_without_dst_display_one_offset() {
    let tokyo = time_zone("Asia/Tokyo").unwrap();
    assert_eq!(tokyo.to_string(), "Asia/Tokyo UTC+09:00");
}

#[test]
fn unknown_zone() {
    assert!(time_zone("Europe/Atlantis").is_none());
    assert!(time_zone("europe/london").is_none());
}
