//! Support and resistance as simple range extrema.

use crate::types::PriceBar;

/// Resistance: highest high over the window. 0.0 for an empty window.
pub fn resistance(bars: &[PriceBar]) -> f64 {
    if bars.is_empty() {
        return 0.0;
    }
    bars.iter().map(|b| b.high).fold(f64::NEG_INFINITY, f64::max)
}

/// Support: lowest low over the window. 0.0 for an empty window.
pub fn support(bars: &[PriceBar]) -> f64 {
    if bars.is_empty() {
        return 0.0;
    }
    bars.iter().map(|b| b.low).fold(f64::INFINITY, f64::min)
}
