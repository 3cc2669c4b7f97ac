//! Fixed 5-minute interval alignment for signal validity windows.

use chrono::{DateTime, Duration, Timelike, Utc};

use crate::config::WINDOW_MINUTES;
use crate::types::SignalWindow;

/// Compute the next aligned 5-minute window after `now`.
///
/// The minute is rounded UP to the next multiple of 5 with seconds and
/// sub-seconds zeroed; a roll past minute 59 carries into the next hour
/// through plain duration arithmetic. An input sitting exactly on a
/// boundary (12:05:00.000) still advances to the NEXT boundary (12:10)
/// rather than returning the current instant — observed behavior of the
/// system this engine replaces, preserved as-is and pinned by tests.
pub fn next_window(now: DateTime<Utc>) -> SignalWindow {
    let hour_start = now
        .with_minute(0)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(now);

    let next_minute = (now.minute() / 5 + 1) * 5;
    let start = hour_start + Duration::minutes(next_minute as i64);

    SignalWindow {
        start,
        end: start + Duration::minutes(WINDOW_MINUTES),
    }
}
