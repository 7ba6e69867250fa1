// =============================================================================
// Synthetic RSI
// =============================================================================
//
// Not a real Relative Strength Index: there is no historical series to smooth,
// only one 24h change figure. The dashboard projects that single number onto
// the familiar 0–100 scale:
//
//   RSI = clamp(50 + 0.5 * change24h, 0, 100)
//
// Threshold labels: > 70 => OVERSOLD, < 30 => OVERBOUGHT, else NEUTRAL.
// NOTE: this mapping is inverted relative to conventional RSI reading
// (conventionally > 70 is overbought). It is preserved verbatim from the
// legacy dashboard; see DESIGN.md before "fixing" it.
// =============================================================================

use crate::types::{Bias, RsiSignal};

/// Project the 24h change percentage onto a 0–100 RSI-like scale.
pub fn synthetic_rsi(change_24h: f64) -> f64 {
    (50.0 + change_24h * 0.5).clamp(0.0, 100.0)
}

/// Classify a synthetic RSI value (legacy inverted thresholds).
pub fn rsi_signal(rsi: f64) -> RsiSignal {
    if rsi > 70.0 {
        RsiSignal::Oversold
    } else if rsi < 30.0 {
        RsiSignal::Overbought
    } else {
        RsiSignal::Neutral
    }
}

/// Medium-term bias from the synthetic RSI: > 60 bullish, < 40 bearish.
pub fn medium_term_bias(rsi: f64) -> Bias {
    if rsi > 60.0 {
        Bias::Bullish
    } else if rsi < 40.0 {
        Bias::Bearish
    } else {
        Bias::Neutral
    }
}
