// Small helpers shared across views.

use wasm_bindgen::JsValue;

pub const FOOTER_TAGLINE: &str = "\"We wants it, we needs it. Must have the precious.\"";

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

pub fn cerror(msg: &str) {
    web_sys::console::error_1(&JsValue::from_str(msg));
}

pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

/// The footer tagline picks up a suffix once the year rolls past 2024: the
/// closing quote is dropped and ` For Ever"` appended.
pub fn footer_tagline(year: u32) -> String {
    if year > 2024 {
        let mut tagline: String = FOOTER_TAGLINE
            .chars()
            .take(FOOTER_TAGLINE.chars().count() - 1)
            .collect();
        tagline.push_str(" For Ever\"");
        tagline
    } else {
        FOOTER_TAGLINE.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagline_is_untouched_through_2024() {
        assert_eq!(footer_tagline(2024), FOOTER_TAGLINE);
    }

    #[test]
    fn tagline_gains_the_for_ever_suffix_after_2024() {
        let tagline = footer_tagline(2026);
        assert!(tagline.ends_with(" For Ever\""));
        assert!(!tagline.contains("precious.\" For"));
        assert!(tagline.starts_with("\"We wants it"));
    }
}
