//! Relative Strength Index (RSI).

use crate::types::PriceBar;

/// Calculate RSI over the most recent `period` same-sign deltas.
///
/// Close-to-close deltas are split into gains and losses, and each side
/// is averaged as a simple mean of the most recent `period` entries of
/// that sign (0.0 when none exist). This is deliberately not Wilder's
/// rolling average; the scoring thresholds downstream were tuned against
/// this simple-mean form.
///
/// Degenerate fallback: when the average loss is zero, RSI is 100 if any
/// gain exists, otherwise 0.
pub fn rsi(bars: &[PriceBar], period: usize) -> f64 {
    let mut gains = Vec::new();
    let mut losses = Vec::new();

    for pair in bars.windows(2) {
        let change = pair[1].close - pair[0].close;
        if change > 0.0 {
            gains.push(change);
        } else if change < 0.0 {
            losses.push(-change);
        }
    }

    let avg_gain = mean_of_recent(&gains, period);
    let avg_loss = mean_of_recent(&losses, period);

    if avg_loss == 0.0 {
        return if avg_gain > 0.0 { 100.0 } else { 0.0 };
    }

    let rs = avg_gain / avg_loss;
    100.0 - 100.0 / (1.0 + rs)
}

/// Simple mean of the last `period` values, 0.0 when empty.
fn mean_of_recent(values: &[f64], period: usize) -> f64 {
    let take = values.len().min(period);
    if take == 0 {
        return 0.0;
    }
    values[values.len() - take..].iter().sum::<f64>() / take as f64
}
