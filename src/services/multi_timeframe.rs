//! Multi-timeframe confirmation boost.
//!
//! Compares the last 20 bars against the full window (up to 50 bars) of
//! the same series. Agreement between the two horizons earns a boost in
//! [0, 1.2] which converts to an additive confidence adjustment; the
//! curve rewards strong agreement nonlinearly more than middling
//! agreement.

use crate::config::MIN_BOOST_BARS;
use crate::services::indicators::rsi;
use crate::types::PriceBar;

/// Bars in the short comparison window.
const SHORT_WINDOW: usize = 20;

/// Bars in the full comparison window.
const FULL_WINDOW: usize = 50;

/// RSI period used for the divergence check.
const RSI_PERIOD: usize = 14;

/// Maximum boost value.
const BOOST_CAP: f64 = 1.2;

/// Compute the confirmation boost for a price history.
///
/// Returns 0.0 when the short window has fewer than 10 bars.
pub fn boost(bars: &[PriceBar]) -> f64 {
    let short = &bars[bars.len().saturating_sub(SHORT_WINDOW)..];
    if short.len() < MIN_BOOST_BARS {
        return 0.0;
    }
    let full = &bars[bars.len().saturating_sub(FULL_WINDOW)..];

    let short_momentum = momentum_pct(short);
    let full_momentum = momentum_pct(full);

    // Trend agreement: close[last] vs close[first] in each window
    let mut value: f64 = if (short_momentum >= 0.0) == (full_momentum >= 0.0) {
        1.2
    } else {
        0.1
    };

    if short_momentum.abs() > 1.0 {
        value += 0.4;
    }
    if full_momentum.abs() > 2.0 {
        value += 0.4;
    }

    let divergence = (rsi(short, RSI_PERIOD) - rsi(full, RSI_PERIOD)).abs();
    if divergence > 20.0 {
        value += 0.2;
    } else if divergence < 5.0 {
        value += 0.3;
    }

    value.min(BOOST_CAP)
}

/// Convert a boost into an additive confidence adjustment.
pub fn adjustment(boost: f64) -> f64 {
    if boost > 1.0 {
        (boost - 1.0) * 8.0
    } else {
        boost * 4.0
    }
}

/// Percent change from the first to the last close of a window.
fn momentum_pct(window: &[PriceBar]) -> f64 {
    let first = window[0].close;
    let last = window[window.len() - 1].close;
    if first == 0.0 {
        return 0.0;
    }
    (last - first) / first * 100.0
}
