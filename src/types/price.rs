use serde::{Deserialize, Serialize};

/// A single OHLC price bar for a fixed 5-minute bucket.
///
/// Bars are produced externally (live adapter or simulator) and are
/// immutable once created. Sequences passed into the engine must be
/// ascending by `time` with no duplicate timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBar {
    /// Unix timestamp (milliseconds) of the bar's open.
    pub time: i64,
    /// Opening price.
    pub open: f64,
    /// Highest traded price.
    pub high: f64,
    /// Lowest traded price.
    pub low: f64,
    /// Closing price.
    pub close: f64,
}

impl PriceBar {
    /// Check the OHLC invariant: high covers open/close, low undercuts them.
    pub fn is_well_formed(&self) -> bool {
        self.high >= self.open.max(self.close) && self.low <= self.open.min(self.close)
    }
}

/// Extract the close series from a run of bars.
pub fn closes(bars: &[PriceBar]) -> Vec<f64> {
    bars.iter().map(|b| b.close).collect()
}
