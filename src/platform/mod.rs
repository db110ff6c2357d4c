//! Platform glue
//!
//! The browser build exposes [`web::WebGame`] to JavaScript. The native
//! build is a headless runner in `main.rs` and only shares the seed helper.

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Session seed from a wall-clock timestamp in milliseconds.
/// Non-finite or negative input maps to 0.
pub fn seed_from_millis(ms: f64) -> u64 {
    if ms.is_finite() && ms > 0.0 {
        ms as u64
    } else {
        0
    }
}
