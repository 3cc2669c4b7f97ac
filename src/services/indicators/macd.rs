//! MACD (Moving Average Convergence Divergence).

use super::ema::{ema, ema_series};

/// MACD line, signal line and histogram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacdOutput {
    /// MACD line: EMA(fast) - EMA(slow) over the full window.
    pub macd: f64,
    /// Signal line: EMA(signal_period) of the per-prefix MACD series.
    pub signal: f64,
    /// Histogram: macd - signal.
    pub histogram: f64,
}

/// Calculate MACD from a close series.
///
/// The MACD series is rebuilt prefix by prefix: element `i` is the
/// difference of the fast and slow EMAs computed over `closes[..=i]`.
/// Under the first-element-seeded EMA this collapses to one incremental
/// pass, and the signal line is the EMA of that series.
pub fn macd(closes: &[f64], fast: usize, slow: usize, signal_period: usize) -> MacdOutput {
    if closes.is_empty() {
        return MacdOutput {
            macd: 0.0,
            signal: 0.0,
            histogram: 0.0,
        };
    }

    let fast_series = ema_series(closes, fast);
    let slow_series = ema_series(closes, slow);

    let macd_series: Vec<f64> = fast_series
        .iter()
        .zip(slow_series.iter())
        .map(|(f, s)| f - s)
        .collect();

    let macd_value = ema(closes, fast) - ema(closes, slow);
    let signal = ema(&macd_series, signal_period);

    MacdOutput {
        macd: macd_value,
        signal,
        histogram: macd_value - signal,
    }
}
