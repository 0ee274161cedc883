//! Locale table tests.

use proptest::prelude::*;
use wordnum_data::{locale, locale_ignore_case, locale_time_zone, locales, time_zone};

#[test]
fn well_known_places() {
    let london = locale("London").unwrap();
    assert_eq!(london.display, "London, United Kingdom");
    assert_eq!(london.time_zone, "Europe/London");

    let (tromso, oslo) = locale_time_zone("Tromsø").unwrap();
    assert_eq!(tromso.display, "Tromsø, Norway");
    assert_eq!(oslo.id, "Europe/Oslo");
}

#[test]
fn lookup_is_exact_unless_asked() {
    assert!(locale("london").is_none());
    assert!(locale(" London").is_none());
    assert_eq!(locale_ignore_case("LONDON").map(|l| l.key), Some("London"));
    assert!(locale_time_zone("Atlantis").is_none());
}

#[test]
fn every_locale_joins_a_zone() {
    for l in locales() {
        let (joined, zone) = locale_time_zone(l.key).unwrap();
        assert_eq!(joined, l);
        assert_eq!(Some(zone), time_zone(l.time_zone));
    }
}

fn any_key() -> impl Strategy<Value = &'static str> {
    prop::sample::select(locales().map(|l| l.key).collect::<Vec<_>>())
}

proptest! {
    #[test]
    fn case_folding_finds_the_same_locale(key in any_key()) {
        prop_assert_eq!(locale_ignore_case(&key.to_uppercase()), locale(key));
        prop_assert_eq!(locale_ignore_case(&key.to_lowercase()), locale(key));
    }
}
