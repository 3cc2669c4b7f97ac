//! Wraith - technical-indicator signal scouting engine.
//!
//! Turns a short history of OHLC price bars into a directional BUY/SELL
//! recommendation with a bounded confidence score, and samples candidate
//! instruments until one clears a caller-supplied threshold. The engine
//! is a pure function of its inputs: price data, session candidate lists
//! and randomness all arrive through injected collaborators, so every
//! outcome is reproducible under test.

pub mod config;
pub mod error;
pub mod services;
pub mod types;

pub use config::{IndicatorConfig, SearchConfig};
pub use error::{EngineError, Result};
pub use services::{
    indicators::IndicatorSnapshot, multi_timeframe, scheduler, scorer, PriceSeriesProvider,
    SignalSearch,
};
pub use types::{PatternScore, PriceBar, Signal, SignalWindow, TradeAction, TradingSession};
