use super::*;

#[test]
fn normalize_keeps_valid_times() {
    assert_eq!(normalize_hhmm("09:05"), "09:05");
    assert_eq!(normalize_hhmm("23:59"), "23:59");
    assert_eq!(normalize_hhmm(" 7:3 "), "07:03");
}

#[test]
fn normalize_folds_hour_24_to_midnight() {
    assert_eq!(normalize_hhmm("24:00"), "00:00");
    assert_eq!(normalize_hhmm("24:17"), "00:17");
}

#[test]
fn normalize_rejects_garbage() {
    for raw in ["", "noon", "12", "25:00", "12:60", "ab:cd", "-1:30"] {
        assert_eq!(normalize_hhmm(raw), PLACEHOLDER, "{raw:?}");
    }
}

#[test]
fn city_clocks_use_iana_zones() {
    assert_eq!(ACCRA.zone, "Africa/Accra");
    assert_eq!(LONDON.zone, "Europe/London");
    assert_ne!(ACCRA.city, LONDON.city);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn read_without_browser_is_placeholder() {
    assert_eq!(read(ACCRA), PLACEHOLDER);
}
