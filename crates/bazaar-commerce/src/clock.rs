//! Wall-clock access that works on both native and browser targets.
//!
//! `SystemTime::now` is unavailable on `wasm32-unknown-unknown`, so the
//! browser build reads the JS clock instead.

/// Current time in milliseconds since the Unix epoch.
#[cfg(target_arch = "wasm32")]
pub(crate) fn now_millis() -> i64 {
    js_sys::Date::now() as i64
}

/// Current time in milliseconds since the Unix epoch.
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn now_millis() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
