//! # Recording Simulation
//!
//! Pure math for the fake voice recording. While recording, a ticker
//! fires every [`DEFAULT_TICK_MS`] milliseconds; each tick increments an
//! elapsed counter and carries a fresh pseudo-random audio level. Nothing
//! is captured or sent; the counters exist only to drive the display.

use rand::Rng;

/// Ticker period in milliseconds. Ten ticks make one displayed second.
pub const DEFAULT_TICK_MS: u64 = 100;

/// Ticks per displayed second (ticker fires at 10 Hz).
pub const TICKS_PER_SECOND: u32 = 10;

/// Format an elapsed tick count as `m:ss`.
///
/// ```
/// use voicechat::core::recording::format_elapsed;
/// assert_eq!(format_elapsed(0), "0:00");
/// assert_eq!(format_elapsed(10), "0:01");
/// assert_eq!(format_elapsed(754), "1:15");
/// ```
pub fn format_elapsed(ticks: u32) -> String {
    let seconds = ticks / TICKS_PER_SECOND;
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Draw a cosmetic audio level in `[0, 100)`.
pub fn random_level() -> f32 {
    rand::rng().random_range(0.0..100.0)
}
