//! Exponential Moving Average (EMA).

/// Calculate the EMA of a value series.
///
/// Seeds with the FIRST element of the slice and folds forward with
/// multiplier 2/(period+1). The seed is whatever element starts the
/// window, so callers must pick windows consistently with that — this
/// is not the SMA-seeded textbook variant.
///
/// Returns 0.0 for an empty slice.
pub fn ema(values: &[f64], period: usize) -> f64 {
    let Some(&seed) = values.first() else {
        return 0.0;
    };
    let multiplier = 2.0 / (period as f64 + 1.0);
    values
        .iter()
        .skip(1)
        .fold(seed, |acc, &v| (v - acc) * multiplier + acc)
}

/// Calculate the running EMA at every prefix of the series.
///
/// Element `i` equals `ema(&values[..=i], period)`: because the EMA seeds
/// at the first element, the per-prefix recomputation collapses to one
/// incremental pass.
pub fn ema_series(values: &[f64], period: usize) -> Vec<f64> {
    let Some(&seed) = values.first() else {
        return Vec::new();
    };
    let multiplier = 2.0 / (period as f64 + 1.0);
    let mut out = Vec::with_capacity(values.len());
    let mut acc = seed;
    out.push(acc);
    for &v in &values[1..] {
        acc = (v - acc) * multiplier + acc;
        out.push(acc);
    }
    out
}
