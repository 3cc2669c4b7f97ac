//! Core data types for the signal scouting engine.

pub mod price;
pub mod session;
pub mod signals;

pub use price::{closes, PriceBar};
pub use session::TradingSession;
pub use signals::{PatternScore, Signal, SignalWindow, TradeAction};
