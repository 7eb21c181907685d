//! Wall-clock labels for "last updated" lines and response timestamps.

/// Locale-formatted current date and time, e.g. `6/1/2025, 6:12:03 PM`.
/// Empty on the server.
pub fn now_label() -> String {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::new_0()
            .to_locale_string("en-US", &wasm_bindgen::JsValue::UNDEFINED)
            .into()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
