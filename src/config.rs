/// Minimum bars required before the pattern scorer produces a real evaluation.
pub const MIN_SCORING_BARS: usize = 30;

/// Minimum bars in the short window before the multi-timeframe boost applies.
pub const MIN_BOOST_BARS: usize = 10;

/// Lowest confidence a real evaluation can report.
pub const CONFIDENCE_FLOOR: u8 = 45;

/// Highest confidence any signal can report.
pub const CONFIDENCE_CEILING: u8 = 99;

/// Length of a signal validity window in minutes.
pub const WINDOW_MINUTES: i64 = 5;

/// Indicator period configuration.
#[derive(Debug, Clone)]
pub struct IndicatorConfig {
    /// RSI lookback period (default: 14).
    pub rsi_period: usize,
    /// MACD fast EMA period (default: 12).
    pub macd_fast: usize,
    /// MACD slow EMA period (default: 26).
    pub macd_slow: usize,
    /// MACD signal-line EMA period (default: 9).
    pub macd_signal: usize,
    /// Fast simple moving average period (default: 20).
    pub sma_fast: usize,
    /// Slow simple moving average period, divisor capped at availability (default: 50).
    pub sma_slow: usize,
    /// Trigger EMA period (default: 9).
    pub ema_trigger: usize,
    /// Stochastic %K lookback period (default: 14).
    pub stochastic_period: usize,
    /// Bollinger Band period (default: 20).
    pub bollinger_period: usize,
    /// Bollinger standard-deviation multiplier (default: 2.0).
    pub bollinger_std_dev: f64,
    /// ATR lookback period (default: 14).
    pub atr_period: usize,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            rsi_period: 14,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            sma_fast: 20,
            sma_slow: 50,
            ema_trigger: 9,
            stochastic_period: 14,
            bollinger_period: 20,
            bollinger_std_dev: 2.0,
            atr_period: 14,
        }
    }
}

/// Candidate search configuration.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Hard cap on candidate draws per search (default: 50).
    pub max_attempts: usize,
    /// Stop early once this many qualifying candidates are collected (default: 3).
    pub max_qualifying: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_attempts: 50,
            max_qualifying: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_defaults() {
        let cfg = IndicatorConfig::default();
        assert_eq!(cfg.rsi_period, 14);
        assert_eq!(cfg.macd_fast, 12);
        assert_eq!(cfg.macd_slow, 26);
        assert_eq!(cfg.macd_signal, 9);
        assert_eq!(cfg.bollinger_period, 20);
        assert_eq!(cfg.atr_period, 14);
        assert_eq!(cfg.stochastic_period, 14);
    }

    #[test]
    fn test_search_defaults() {
        let cfg = SearchConfig::default();
        assert_eq!(cfg.max_attempts, 50);
        assert_eq!(cfg.max_qualifying, 3);
    }
}
