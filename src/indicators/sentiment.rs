// =============================================================================
// Market Sentiment & Phase
// =============================================================================
//
// Coarse categorical reads on the 24h change and the volume deviation. The
// sentiment ladder is evaluated top-down, first matching branch wins — a +12%
// move with weak volume is plain BULLISH, not STRONGLY BULLISH:
//
//   change > 10  && deviation > 15  => STRONGLY BULLISH
//   change > 5                      => BULLISH
//   change < -10 && deviation > 15  => STRONGLY BEARISH
//   change < -5                     => BEARISH
//   otherwise                       => NEUTRAL
// =============================================================================

use crate::types::{MarketPhase, Sentiment, TrendStrength};

/// Overall market sentiment (first-matching-branch precedence).
pub fn overall_sentiment(change_24h: f64, volume_deviation: f64) -> Sentiment {
    if change_24h > 10.0 && volume_deviation > 15.0 {
        Sentiment::StronglyBullish
    } else if change_24h > 5.0 {
        Sentiment::Bullish
    } else if change_24h < -10.0 && volume_deviation > 15.0 {
        Sentiment::StronglyBearish
    } else if change_24h < -5.0 {
        Sentiment::Bearish
    } else {
        Sentiment::Neutral
    }
}

/// Trend strength from the 24h volatility (absolute change).
pub fn trend_strength(volatility: f64) -> TrendStrength {
    if volatility > 15.0 {
        TrendStrength::High
    } else if volatility > 8.0 {
        TrendStrength::Moderate
    } else {
        TrendStrength::Low
    }
}

/// Market phase from the sign of the 24h change.
pub fn market_phase(change_24h: f64) -> MarketPhase {
    if change_24h > 0.0 {
        MarketPhase::Accumulation
    } else {
        MarketPhase::Distribution
    }
}
