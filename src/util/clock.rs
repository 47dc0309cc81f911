//! Wall-clock access that works in both the browser and native builds.
//!
//! `std::time::SystemTime::now` panics on `wasm32-unknown-unknown`, so the
//! browser build asks the JS `Date` object instead.

/// Current time as whole seconds since the Unix epoch.
#[must_use]
pub fn now_unix_seconds() -> i64 {
    #[cfg(feature = "csr")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let secs = (js_sys::Date::now() / 1000.0) as i64;
        secs
    }
    #[cfg(not(feature = "csr"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
    }
}
