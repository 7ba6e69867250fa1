// =============================================================================
// Synthetic MACD
// =============================================================================
//
// A MACD-shaped triple derived from the single 24h change figure rather than
// from two real EMAs:
//
//   line      = 0.8 * change24h
//   signal    = 0.6 * change24h
//   histogram = line - signal          (= 0.2 * change24h)
//
// Trend: BULLISH when the histogram is positive, BEARISH otherwise. All three
// values are reported at 4 decimal places.
// =============================================================================

use serde::Serialize;

use crate::types::Trend;

use super::round_dp;

/// Synthetic MACD triple plus trend classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Macd {
    pub line: f64,
    pub signal: f64,
    pub histogram: f64,
    pub trend: Trend,
}

/// Derive the synthetic MACD from the 24h change percentage.
pub fn synthetic_macd(change_24h: f64) -> Macd {
    let line = change_24h * 0.8;
    let signal = change_24h * 0.6;
    let histogram = line - signal;

    // Trend is decided on the unrounded histogram; a zero histogram (flat
    // market) is BEARISH, matching the strict > comparison.
    let trend = if histogram > 0.0 {
        Trend::Bullish
    } else {
        Trend::Bearish
    };

    Macd {
        line: round_dp(line, 4),
        signal: round_dp(signal, 4),
        histogram: round_dp(histogram, 4),
        trend,
    }
}
