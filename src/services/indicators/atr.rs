//! Average True Range (ATR).

use crate::types::PriceBar;

/// True range of a bar against the previous close.
fn true_range(current: &PriceBar, previous: &PriceBar) -> f64 {
    let hl = current.high - current.low;
    let hc = (current.high - previous.close).abs();
    let lc = (current.low - previous.close).abs();
    hl.max(hc).max(lc)
}

/// Calculate ATR as the mean true range over the last `period` bars.
///
/// Degrades gracefully: fewer qualifying bars shrink the divisor, and a
/// series without any predecessor pairs yields 0.0.
pub fn atr(bars: &[PriceBar], period: usize) -> f64 {
    if bars.len() < 2 {
        return 0.0;
    }

    let mut ranges = Vec::with_capacity(bars.len() - 1);
    for pair in bars.windows(2) {
        ranges.push(true_range(&pair[1], &pair[0]));
    }

    let take = ranges.len().min(period);
    if take == 0 {
        return 0.0;
    }
    ranges[ranges.len() - take..].iter().sum::<f64>() / take as f64
}
