//! City clocks shown in the footer.
//!
//! Times come from the browser's `Intl.DateTimeFormat`, which carries the
//! IANA time zone database. Server renders show a placeholder until the
//! client hydrates and fills the real time in.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

pub const PLACEHOLDER: &str = "--:--";
pub const REFRESH_MS: u32 = 60_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CityClock {
    pub city: &'static str,
    pub zone: &'static str,
    pub abbrev: &'static str,
}

pub const ACCRA: CityClock = CityClock { city: "ACCRA", zone: "Africa/Accra", abbrev: "GMT" };
pub const LONDON: CityClock = CityClock { city: "LONDON", zone: "Europe/London", abbrev: "BST" };

/// Normalize a formatted `HH:MM` string.
///
/// Some engines render midnight as `24:00` under a 24-hour cycle; that is
/// folded to `00:00`. Anything that is not a valid time becomes the placeholder.
pub fn normalize_hhmm(raw: &str) -> String {
    let Some((h, m)) = raw.trim().split_once(':') else {
        return PLACEHOLDER.to_owned();
    };
    let (Ok(hour), Ok(minute)) = (h.trim().parse::<u8>(), m.trim().parse::<u8>()) else {
        return PLACEHOLDER.to_owned();
    };
    if hour > 24 || minute > 59 {
        return PLACEHOLDER.to_owned();
    }
    format!("{:02}:{minute:02}", hour % 24)
}

/// Current wall-clock time in `clock.zone`, formatted `HH:MM`.
#[cfg(feature = "hydrate")]
pub fn read(clock: CityClock) -> String {
    use wasm_bindgen::JsValue;

    let options = js_sys::Object::new();
    let set = |key: &str, value: &str| {
        let _ = js_sys::Reflect::set(&options, &JsValue::from_str(key), &JsValue::from_str(value));
    };
    set("timeZone", clock.zone);
    set("hour", "2-digit");
    set("minute", "2-digit");
    set("hourCycle", "h23");

    let locales = js_sys::Array::of1(&JsValue::from_str("en-GB"));
    let formatter = js_sys::Intl::DateTimeFormat::new(&locales, &options);
    formatter
        .format()
        .call1(&JsValue::NULL, &js_sys::Date::new_0())
        .ok()
        .and_then(|v| v.as_string())
        .map_or_else(|| PLACEHOLDER.to_owned(), |s| normalize_hhmm(&s))
}

#[cfg(not(feature = "hydrate"))]
pub fn read(clock: CityClock) -> String {
    let _ = clock;
    PLACEHOLDER.to_owned()
}
