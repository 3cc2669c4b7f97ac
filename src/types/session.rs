use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// A named trading session with its own candidate instrument list.
///
/// Session selection is a pure function of the current UTC hour:
/// Asian 00-07, London 08-15, New York 16-23.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradingSession {
    Asian,
    London,
    NewYork,
}

impl TradingSession {
    /// Get display name for this session.
    pub fn name(&self) -> &'static str {
        match self {
            TradingSession::Asian => "Asian",
            TradingSession::London => "London",
            TradingSession::NewYork => "New York",
        }
    }

    /// Session active at the given instant.
    pub fn active_at(now: DateTime<Utc>) -> Self {
        Self::for_hour(now.hour())
    }

    /// Session active for a UTC hour (0-23).
    pub fn for_hour(hour: u32) -> Self {
        match hour {
            0..=7 => TradingSession::Asian,
            8..=15 => TradingSession::London,
            _ => TradingSession::NewYork,
        }
    }

    /// Fixed candidate instrument list for this session.
    pub fn instruments(&self) -> &'static [&'static str] {
        match self {
            TradingSession::Asian => &["USDJPY", "AUDUSD", "NZDUSD", "EURJPY", "AUDJPY"],
            TradingSession::London => &["EURUSD", "GBPUSD", "EURGBP", "USDCHF", "GBPJPY"],
            TradingSession::NewYork => &["EURUSD", "USDCAD", "GBPUSD", "USDJPY", "XAUUSD"],
        }
    }
}
