use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of a trading recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeAction {
    Buy,
    Sell,
}

impl TradeAction {
    /// Get display label for this action.
    pub fn label(&self) -> &'static str {
        match self {
            TradeAction::Buy => "Buy",
            TradeAction::Sell => "Sell",
        }
    }
}

/// Result of scoring a price history: an action plus a bounded confidence.
///
/// A confidence of exactly 0 is the insufficient-data sentinel (fewer than
/// 30 bars), not a real recommendation. Real evaluations always land in
/// [45, 99].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternScore {
    /// Recommended action.
    pub action: TradeAction,
    /// Confidence 0 (sentinel) or 45-99.
    pub confidence: u8,
}

impl PatternScore {
    /// Sentinel returned when the series is too short to score.
    pub fn insufficient_data() -> Self {
        Self {
            action: TradeAction::Buy,
            confidence: 0,
        }
    }

    /// Whether this score carries a usable recommendation.
    pub fn is_usable(&self) -> bool {
        self.confidence > 0
    }
}

/// An aligned 5-minute validity window for an emitted signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalWindow {
    /// Window open, aligned to a 5-minute boundary.
    pub start: DateTime<Utc>,
    /// Window close, always start + 5 minutes.
    pub end: DateTime<Utc>,
}

/// A qualified trading signal emitted by the search loop.
///
/// Immutable once created; the engine hands it to the caller and keeps
/// no further record of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signal {
    /// Unique signal ID.
    pub id: Uuid,
    /// Instrument this signal is for.
    pub symbol: String,
    /// Recommended action.
    pub action: TradeAction,
    /// Final confidence (0-99) after multi-timeframe adjustment.
    pub confidence: u8,
    /// Start of the validity window.
    pub valid_from: DateTime<Utc>,
    /// End of the validity window.
    pub valid_until: DateTime<Utc>,
    /// Trading session the signal was scouted in.
    pub session: String,
    /// Unix timestamp (milliseconds) when the signal was created.
    pub created_at: i64,
}

impl Signal {
    /// Create a new signal stamped with the given validity window.
    pub fn new(
        symbol: String,
        action: TradeAction,
        confidence: u8,
        window: SignalWindow,
        session: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            symbol,
            action,
            confidence,
            valid_from: window.start,
            valid_until: window.end,
            session,
            created_at: Utc::now().timestamp_millis(),
        }
    }
}
