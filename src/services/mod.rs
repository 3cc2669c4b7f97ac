//! Engine services: indicator computation, pattern scoring,
//! multi-timeframe confirmation, interval alignment and candidate search.

pub mod indicators;
pub mod multi_timeframe;
pub mod scheduler;
pub mod scorer;
pub mod search;

pub use indicators::IndicatorSnapshot;
pub use search::{PriceSeriesProvider, SignalSearch};
