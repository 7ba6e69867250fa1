// =============================================================================
// Synthetic Moving Averages
// =============================================================================
//
// Three-tier moving averages extrapolated from the current price and the 24h
// change, with shorter windows reacting more strongly:
//
//   ma7  = price * (1 + 0.007 * change24h)
//   ma25 = price * (1 + 0.004 * change24h)
//   ma50 = price * (1 + 0.002 * change24h)
//
// Trend: BULLISH when ma7 > ma25 > ma50, BEARISH when ma7 < ma25 < ma50,
// MIXED otherwise. Values are reported at 2 decimal places; the ordering is
// decided on the unrounded values.
// =============================================================================

use serde::Serialize;

use crate::types::MaTrend;

use super::round_dp;

/// Synthetic three-tier moving-average stack plus alignment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MovingAverages {
    pub ma7: f64,
    pub ma25: f64,
    pub ma50: f64,
    pub trend: MaTrend,
}

/// Derive the moving-average stack from price and 24h change.
pub fn synthetic_moving_averages(price: f64, change_24h: f64) -> MovingAverages {
    let ma7 = price * (1.0 + change_24h * 0.7 / 100.0);
    let ma25 = price * (1.0 + change_24h * 0.4 / 100.0);
    let ma50 = price * (1.0 + change_24h * 0.2 / 100.0);

    let trend = if ma7 > ma25 && ma25 > ma50 {
        MaTrend::Bullish
    } else if ma7 < ma25 && ma25 < ma50 {
        MaTrend::Bearish
    } else {
        MaTrend::Mixed
    };

    MovingAverages {
        ma7: round_dp(ma7, 2),
        ma25: round_dp(ma25, 2),
        ma50: round_dp(ma50, 2),
        trend,
    }
}
