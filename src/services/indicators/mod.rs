//! Technical indicator implementations.
//!
//! Every function here is a pure, stateless map from a price-bar window
//! to a value; identical windows always produce identical output.

pub mod atr;
pub mod bollinger;
pub mod ema;
pub mod macd;
pub mod range;
pub mod rsi;
pub mod sma;
pub mod stochastic;

pub use atr::atr;
pub use bollinger::{bollinger, BollingerOutput};
pub use ema::ema;
pub use macd::{macd, MacdOutput};
pub use range::{resistance, support};
pub use rsi::rsi;
pub use sma::{sma, sma_capped};
pub use stochastic::{stochastic, StochasticOutput};

use crate::config::{IndicatorConfig, MIN_SCORING_BARS};
use crate::types::{closes, PriceBar};
use serde::Serialize;

/// Every indicator reading for one window, computed fresh per call.
///
/// Ephemeral by design: never persisted, never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorSnapshot {
    pub rsi: f64,
    pub macd: f64,
    pub macd_signal: f64,
    pub macd_histogram: f64,
    pub sma_fast: f64,
    pub sma_slow: f64,
    pub ema_trigger: f64,
    pub stoch_k: f64,
    pub stoch_d: f64,
    pub bollinger_upper: f64,
    pub bollinger_middle: f64,
    pub bollinger_lower: f64,
    pub atr: f64,
    pub support: f64,
    pub resistance: f64,
}

impl IndicatorSnapshot {
    /// Compute all indicators over the window.
    ///
    /// Returns `None` below the 30-bar scoring minimum so callers can
    /// report the insufficient-data sentinel instead of a half-filled
    /// snapshot.
    pub fn compute(bars: &[PriceBar], config: &IndicatorConfig) -> Option<Self> {
        if bars.len() < MIN_SCORING_BARS {
            return None;
        }

        let close_series = closes(bars);
        let macd_out = macd(
            &close_series,
            config.macd_fast,
            config.macd_slow,
            config.macd_signal,
        );
        let stoch = stochastic(bars, config.stochastic_period);
        let bands = bollinger(
            &close_series,
            config.bollinger_period,
            config.bollinger_std_dev,
        )?;

        Some(Self {
            rsi: rsi(bars, config.rsi_period),
            macd: macd_out.macd,
            macd_signal: macd_out.signal,
            macd_histogram: macd_out.histogram,
            sma_fast: sma(&close_series, config.sma_fast)?,
            sma_slow: sma_capped(&close_series, config.sma_slow),
            ema_trigger: ema(&close_series, config.ema_trigger),
            stoch_k: stoch.k,
            stoch_d: stoch.d,
            bollinger_upper: bands.upper,
            bollinger_middle: bands.middle,
            bollinger_lower: bands.lower,
            atr: atr(bars, config.atr_period),
            support: support(bars),
            resistance: resistance(bars),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uptrend(count: usize) -> Vec<PriceBar> {
        (0..count)
            .map(|i| {
                let base = 100.0 + i as f64 * 0.5;
                PriceBar {
                    time: 1_000_000 + i as i64 * 300_000,
                    open: base,
                    high: base + 1.0,
                    low: base - 1.0,
                    close: base + 0.5,
                }
            })
            .collect()
    }

    #[test]
    fn test_snapshot_requires_30_bars() {
        let config = IndicatorConfig::default();
        assert!(IndicatorSnapshot::compute(&uptrend(29), &config).is_none());
        assert!(IndicatorSnapshot::compute(&uptrend(30), &config).is_some());
    }

    #[test]
    fn test_snapshot_idempotent() {
        let config = IndicatorConfig::default();
        let bars = uptrend(50);
        let a = IndicatorSnapshot::compute(&bars, &config).unwrap();
        let b = IndicatorSnapshot::compute(&bars, &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_snapshot_uptrend_readings() {
        let config = IndicatorConfig::default();
        let bars = uptrend(50);
        let snap = IndicatorSnapshot::compute(&bars, &config).unwrap();
        assert!(snap.rsi > 70.0, "rsi {}", snap.rsi);
        assert!(snap.macd > 0.0);
        assert!(snap.sma_fast > snap.sma_slow);
        assert!(snap.resistance >= snap.support);
        assert!(snap.bollinger_upper >= snap.bollinger_lower);
        assert!(snap.atr > 0.0);
    }
}
