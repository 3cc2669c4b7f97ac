//! Bounded candidate-search loop.
//!
//! Repeatedly draws instruments (with replacement) from a session's
//! candidate list, scores each one, and returns the highest-confidence
//! candidate that clears the caller's threshold. The draw budget is the
//! sole termination guarantee; selection is a pure reduction over the
//! draws performed, so draw ordering never changes the outcome.

use chrono::Utc;
use rand::Rng;
use tracing::{debug, info};

use crate::config::{IndicatorConfig, SearchConfig, CONFIDENCE_CEILING};
use crate::error::Result;
use crate::services::{multi_timeframe, scheduler, scorer};
use crate::types::{PriceBar, Signal, TradeAction, TradingSession};

/// Source of recent price bars for an instrument.
///
/// Implemented by the surrounding system (live adapter, cache, or a test
/// fixture). Freshness and caching policy belong to the implementor, not
/// the engine; errors are treated inside the loop exactly like a series
/// too short to score.
pub trait PriceSeriesProvider {
    /// Most recent bars for `symbol`, oldest first.
    fn price_series(&self, symbol: &str) -> Result<Vec<PriceBar>>;
}

/// A qualifying candidate collected during a search.
#[derive(Debug, Clone)]
struct Qualifier {
    symbol: String,
    action: TradeAction,
    confidence: u8,
}

/// Signal scouting loop over an injected price-series provider.
pub struct SignalSearch<'a, P: PriceSeriesProvider> {
    provider: &'a P,
    indicators: IndicatorConfig,
    config: SearchConfig,
}

impl<'a, P: PriceSeriesProvider> SignalSearch<'a, P> {
    /// Create a search with default configuration.
    pub fn new(provider: &'a P) -> Self {
        Self {
            provider,
            indicators: IndicatorConfig::default(),
            config: SearchConfig::default(),
        }
    }

    /// Create a search with explicit configuration.
    pub fn with_config(provider: &'a P, indicators: IndicatorConfig, config: SearchConfig) -> Self {
        Self {
            provider,
            indicators,
            config,
        }
    }

    /// Scout the active session's candidate list.
    pub fn scout<R: Rng>(
        &self,
        session: TradingSession,
        threshold: u8,
        rng: &mut R,
    ) -> Option<Signal> {
        self.run(session.instruments(), session.name(), threshold, rng)
    }

    /// Search `candidates` for a signal clearing `threshold`.
    ///
    /// Draws are with replacement, capped at `max_attempts`; the loop
    /// stops early once `max_qualifying` candidates have cleared the
    /// threshold. Returns the qualifier with the highest final
    /// confidence (first seen wins ties), or `None` when nothing
    /// qualifies — a normal outcome, not a failure.
    pub fn run<R: Rng>(
        &self,
        candidates: &[&str],
        session: &str,
        threshold: u8,
        rng: &mut R,
    ) -> Option<Signal> {
        if candidates.is_empty() {
            return None;
        }

        let mut qualifying: Vec<Qualifier> = Vec::new();

        for attempt in 0..self.config.max_attempts {
            let symbol = candidates[rng.gen_range(0..candidates.len())];

            let bars = match self.provider.price_series(symbol) {
                Ok(bars) => bars,
                Err(e) => {
                    debug!("attempt {}: no price series for {}: {}", attempt, symbol, e);
                    continue;
                }
            };

            let pattern = scorer::score(&bars, &self.indicators);
            if !pattern.is_usable() {
                debug!("attempt {}: insufficient history for {}", attempt, symbol);
                continue;
            }

            let adjustment = multi_timeframe::adjustment(multi_timeframe::boost(&bars));
            let final_confidence = (pattern.confidence as f64 + adjustment)
                .round()
                .min(CONFIDENCE_CEILING as f64) as u8;

            if final_confidence >= threshold {
                debug!(
                    "attempt {}: {} qualifies at {} ({})",
                    attempt,
                    symbol,
                    final_confidence,
                    pattern.action.label()
                );
                qualifying.push(Qualifier {
                    symbol: symbol.to_string(),
                    action: pattern.action,
                    confidence: final_confidence,
                });
                if qualifying.len() >= self.config.max_qualifying {
                    break;
                }
            }
        }

        // Strict comparison keeps the first-seen qualifier on ties
        let best = qualifying
            .into_iter()
            .reduce(|best, q| if q.confidence > best.confidence { q } else { best })?;

        info!(
            "selected {} {} at confidence {} for {} session",
            best.action.label(),
            best.symbol,
            best.confidence,
            session
        );

        let window = scheduler::next_window(Utc::now());
        Some(Signal::new(
            best.symbol,
            best.action,
            best.confidence,
            window,
            session.to_string(),
        ))
    }
}
