//! Stochastic Oscillator (%K / %D).

use crate::types::PriceBar;

/// Stochastic %K and %D values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StochasticOutput {
    /// %K: close position inside the window's high-low range, 0-100.
    pub k: f64,
    /// %D: smoothing approximation of %K (see [`stochastic`]).
    pub d: f64,
}

/// Calculate the stochastic oscillator over the last `period` bars.
///
/// %K = 100 * (close - low) / (high - low), or 50 when the window's high
/// equals its low.
///
/// %D here is NOT the textbook rolling average of %K: it averages the
/// current %K replicated across up to 3 virtual samples (fewer when the
/// series barely covers the period). With enough bars that makes %D equal
/// %K. The approximation is kept on purpose — downstream scoring
/// thresholds were tuned against it.
pub fn stochastic(bars: &[PriceBar], period: usize) -> StochasticOutput {
    if bars.is_empty() {
        return StochasticOutput { k: 50.0, d: 50.0 };
    }

    let window = &bars[bars.len().saturating_sub(period)..];
    let lowest = window.iter().map(|b| b.low).fold(f64::INFINITY, f64::min);
    let highest = window
        .iter()
        .map(|b| b.high)
        .fold(f64::NEG_INFINITY, f64::max);
    let close = window[window.len() - 1].close;

    let k = if highest > lowest {
        (close - lowest) / (highest - lowest) * 100.0
    } else {
        50.0
    };

    let samples = bars
        .len()
        .saturating_sub(period)
        .saturating_add(1)
        .clamp(1, 3);
    let d = std::iter::repeat(k).take(samples).sum::<f64>() / samples as f64;

    StochasticOutput { k, d }
}
