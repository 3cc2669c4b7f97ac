//! Weighted-voting pattern scorer.
//!
//! Evaluates nine independent factors against fixed thresholds and folds
//! them into a BUY/SELL action with a bounded confidence. Each factor
//! contributes to exactly one side per evaluation, with tiered amounts
//! for stronger readings, and adds a fixed weight to the denominator.

use crate::config::{IndicatorConfig, CONFIDENCE_CEILING, CONFIDENCE_FLOOR};
use crate::services::indicators::IndicatorSnapshot;
use crate::types::{PatternScore, PriceBar, TradeAction};

/// Bars of very recent range used as the ATR comparison baseline.
const RECENT_RANGE_BARS: usize = 5;

/// Bars back the short-term change factor measures from.
const SHORT_CHANGE_LOOKBACK: usize = 3;

/// Score a price history into an action and confidence.
///
/// Requires at least 30 bars; shorter series return the zero-confidence
/// sentinel (`{Buy, 0}`), which callers must treat as "no usable signal"
/// rather than a real recommendation. Real evaluations always clamp into
/// [45, 99].
pub fn score(bars: &[PriceBar], config: &IndicatorConfig) -> PatternScore {
    let Some(snap) = IndicatorSnapshot::compute(bars, config) else {
        return PatternScore::insufficient_data();
    };

    let price = bars[bars.len() - 1].close;
    let mut bullish: f64 = 0.0;
    let mut bearish: f64 = 0.0;
    let mut total_weight: f64 = 0.0;

    // RSI level (weight 3.0)
    total_weight += 3.0;
    if snap.rsi < 25.0 {
        bullish += 3.0;
    } else if snap.rsi < 35.0 {
        bullish += 2.5;
    } else if snap.rsi < 50.0 {
        bullish += 1.2;
    } else if snap.rsi > 75.0 {
        bearish += 3.0;
    } else if snap.rsi > 65.0 {
        bearish += 2.5;
    } else if snap.rsi > 50.0 {
        bearish += 1.2;
    }

    // MACD cross plus histogram magnitude (weight 2.5)
    total_weight += 2.5;
    if snap.macd_histogram > 0.0 && snap.macd > snap.macd_signal {
        bullish += 2.5 + histogram_bonus(snap.macd_histogram);
    } else if snap.macd_histogram < 0.0 && snap.macd < snap.macd_signal {
        bearish += 2.5 + histogram_bonus(-snap.macd_histogram);
    }

    // Moving-average alignment (weight 2.5)
    total_weight += 2.5;
    if price > snap.sma_fast && snap.sma_fast > snap.sma_slow {
        bullish += 2.5;
    } else if price > snap.sma_fast && price > snap.sma_slow {
        bullish += 1.5;
    } else if price < snap.sma_fast && snap.sma_fast < snap.sma_slow {
        bearish += 2.5;
    } else if price < snap.sma_fast && price < snap.sma_slow {
        bearish += 1.5;
    }

    // Trigger-EMA proximity (weight 2.0)
    total_weight += 2.0;
    if snap.ema_trigger > 0.0 {
        let distance = (price - snap.ema_trigger) / snap.ema_trigger;
        if distance > 0.0 {
            if distance < 0.005 {
                bullish += 2.0;
            } else if distance < 0.015 {
                bullish += 1.3;
            }
        } else if distance < 0.0 {
            if distance > -0.005 {
                bearish += 2.0;
            } else if distance > -0.015 {
                bearish += 1.3;
            }
        }
    }

    // Three-bar run against support/resistance (weight 2.5)
    total_weight += 2.5;
    let n = bars.len();
    let three_up = bars[n - 1].close > bars[n - 2].close && bars[n - 2].close > bars[n - 3].close;
    let three_down = bars[n - 1].close < bars[n - 2].close && bars[n - 2].close < bars[n - 3].close;
    if three_up && price > snap.support {
        bullish += 2.5;
    } else if three_down && price < snap.resistance {
        bearish += 2.5;
    }

    // Stochastic level plus %K/%D cross (weight 2.2)
    total_weight += 2.2;
    if snap.stoch_k < 15.0 {
        bullish += 2.2;
    } else if snap.stoch_k < 30.0 {
        bullish += 1.5;
    } else if snap.stoch_k > 85.0 {
        bearish += 2.2;
    } else if snap.stoch_k > 70.0 {
        bearish += 1.5;
    }
    if snap.stoch_k > snap.stoch_d {
        bullish += 1.2;
    } else if snap.stoch_k < snap.stoch_d {
        bearish += 1.2;
    }

    // Bollinger position (weight 2.5)
    total_weight += 2.5;
    let band_width = snap.bollinger_upper - snap.bollinger_lower;
    if band_width > 0.0 {
        if price < snap.bollinger_lower {
            bullish += 2.5;
        } else if price < snap.bollinger_lower + 0.15 * band_width {
            bullish += 1.8;
        } else if price > snap.bollinger_upper {
            bearish += 2.5;
        } else if price > snap.bollinger_upper - 0.15 * band_width {
            bearish += 1.8;
        }
        if price < snap.bollinger_middle {
            bullish += 0.8;
        } else if price > snap.bollinger_middle {
            bearish += 0.8;
        }
    }

    // ATR against the very recent bar range (weight 0.8)
    total_weight += 0.8;
    let recent = &bars[n - RECENT_RANGE_BARS.min(n)..];
    let recent_range =
        recent.iter().map(|b| b.high - b.low).sum::<f64>() / recent.len() as f64;
    if recent_range > 0.0 {
        let ratio = snap.atr / recent_range;
        if ratio > 1.2 {
            bullish += 0.8;
        } else if ratio > 0.8 {
            bearish += 0.8;
        }
    }

    // Short-term change gated by RSI bounds (weight 1.5)
    total_weight += 1.5;
    let back = bars[n - 1 - SHORT_CHANGE_LOOKBACK].close;
    if back > 0.0 {
        let change_pct = (price - back) / back * 100.0;
        if change_pct > 0.08 && snap.rsi < 70.0 {
            bullish += 1.5;
        } else if change_pct < -0.08 && snap.rsi > 30.0 {
            bearish += 1.5;
        }
    }

    let action = if bullish > bearish {
        TradeAction::Buy
    } else {
        TradeAction::Sell
    };

    let strength = 100.0 * bullish / total_weight;
    let separation = (bullish - bearish).abs() / total_weight;
    let confidence = (3.5 * strength * separation)
        .round()
        .clamp(CONFIDENCE_FLOOR as f64, CONFIDENCE_CEILING as f64) as u8;

    PatternScore { action, confidence }
}

/// Tiered bonus for a strong MACD histogram reading.
fn histogram_bonus(magnitude: f64) -> f64 {
    if magnitude > 0.015 {
        1.5
    } else if magnitude > 0.005 {
        0.8
    } else {
        0.0
    }
}
