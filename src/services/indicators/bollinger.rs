//! Bollinger Bands.

use super::sma::sma;

/// Bollinger Band levels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BollingerOutput {
    /// Middle band: SMA(period).
    pub middle: f64,
    /// Upper band: middle + multiplier * stddev.
    pub upper: f64,
    /// Lower band: middle - multiplier * stddev.
    pub lower: f64,
}

/// Calculate Bollinger Bands over the last `period` closes.
///
/// Uses the population standard deviation of the same window the middle
/// band is averaged over. Returns `None` below `period` values.
pub fn bollinger(closes: &[f64], period: usize, multiplier: f64) -> Option<BollingerOutput> {
    let middle = sma(closes, period)?;
    let window = &closes[closes.len() - period..];
    let variance =
        window.iter().map(|v| (v - middle).powi(2)).sum::<f64>() / period as f64;
    let std_dev = variance.sqrt();

    Some(BollingerOutput {
        middle,
        upper: middle + multiplier * std_dev,
        lower: middle - multiplier * std_dev,
    })
}
