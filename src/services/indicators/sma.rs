//! Simple Moving Average (SMA).

/// Mean of the last `period` values.
///
/// Returns `None` when fewer than `period` values exist; callers that
/// need the strict window must guarantee the length up front.
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    if values.len() < period || period == 0 {
        return None;
    }
    let sum: f64 = values[values.len() - period..].iter().sum();
    Some(sum / period as f64)
}

/// Mean of up to the last `period` values, divisor capped at availability.
///
/// Returns 0.0 for an empty slice.
pub fn sma_capped(values: &[f64], period: usize) -> f64 {
    let take = values.len().min(period);
    if take == 0 {
        return 0.0;
    }
    let sum: f64 = values[values.len() - take..].iter().sum();
    sum / take as f64
}
