// =============================================================================
// Synthetic Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free derivation of the display-only indicator bundle from
// a single coin snapshot. There is no historical series here — every value is
// closed-form arithmetic over the fields of one snapshot, so the bundle is
// ephemeral: recomputed on every view, never persisted, superseded wholesale
// by the next fetch.
//
// Fixed coefficients throughout; none of this is configurable.

pub mod levels;
pub mod macd;
pub mod moving_averages;
pub mod rsi;
pub mod sentiment;
pub mod signals;
pub mod volume;

use serde::Serialize;

use crate::types::{
    CoinSnapshot, MarketPhase, RsiSignal, Sentiment, TrendStrength, VolumeStrength,
};

pub use macd::Macd;
pub use moving_averages::MovingAverages;
pub use signals::TradingSignals;

// =============================================================================
// Rounding
// =============================================================================

/// Round to `dp` decimal places, half away from zero (what the dashboard's
/// `toFixed` formatting did numerically).
pub(crate) fn round_dp(value: f64, dp: u32) -> f64 {
    let factor = 10f64.powi(dp as i32);
    (value * factor).round() / factor
}

// =============================================================================
// Bundle types (match the dashboard's TypeScript analysis interface)
// =============================================================================

/// Echo of the snapshot's raw market figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceMetrics {
    pub current: f64,
    pub change_24h: f64,
    pub high_24h: f64,
    pub low_24h: f64,
    pub volume: f64,
    pub market_cap: f64,
    pub market_rank: u32,
}

/// The synthetic technical-indicator block.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalIndicators {
    pub rsi: f64,
    pub rsi_signal: RsiSignal,
    pub macd: Macd,
    pub moving_averages: MovingAverages,
    pub volatility: f64,
    pub support_levels: [f64; 3],
    pub resistance_levels: [f64; 3],
}

/// Categorical market reads.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketAnalysis {
    pub sentiment: Sentiment,
    pub volume_strength: VolumeStrength,
    pub trend_strength: TrendStrength,
    pub market_phase: MarketPhase,
}

/// The full derived bundle for one coin at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorBundle {
    pub price_metrics: PriceMetrics,
    pub technical_indicators: TechnicalIndicators,
    pub market_analysis: MarketAnalysis,
    pub trading_signals: TradingSignals,
}

// =============================================================================
// Derivation
// =============================================================================

/// Derive the full indicator bundle from one snapshot.
///
/// Pure and deterministic: the same snapshot always yields a bit-identical
/// bundle. Labels are classified on unrounded intermediate values; rounding is
/// applied only to the reported numbers.
pub fn derive_indicators(snapshot: &CoinSnapshot) -> IndicatorBundle {
    let price = snapshot.price;
    let change = snapshot.change_24h;

    let rsi_value = rsi::synthetic_rsi(change);
    let volatility = change.abs();
    let deviation = volume::volume_deviation(snapshot.volume, snapshot.market_cap);

    let supports = levels::support_levels(price);
    let resistances = levels::resistance_levels(price);

    IndicatorBundle {
        price_metrics: PriceMetrics {
            current: price,
            change_24h: change,
            high_24h: snapshot.high_24h,
            low_24h: snapshot.low_24h,
            volume: snapshot.volume,
            market_cap: snapshot.market_cap,
            market_rank: snapshot.market_cap_rank,
        },
        technical_indicators: TechnicalIndicators {
            rsi: round_dp(rsi_value, 1),
            rsi_signal: rsi::rsi_signal(rsi_value),
            macd: macd::synthetic_macd(change),
            moving_averages: moving_averages::synthetic_moving_averages(price, change),
            volatility: round_dp(volatility, 1),
            support_levels: supports,
            resistance_levels: resistances,
        },
        market_analysis: MarketAnalysis {
            sentiment: sentiment::overall_sentiment(change, deviation),
            volume_strength: volume::volume_strength(deviation),
            trend_strength: sentiment::trend_strength(volatility),
            market_phase: sentiment::market_phase(change),
        },
        trading_signals: signals::trading_signals(price, change, rsi_value, &supports, &resistances),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Bias, MaTrend, TradeAction, Trend};

    /// Helper: a snapshot with sensible defaults that individual tests tweak.
    fn snapshot(price: f64, change: f64, volume: f64, market_cap: f64) -> CoinSnapshot {
        CoinSnapshot {
            id: "bitcoin".into(),
            name: "Bitcoin".into(),
            symbol: "btc".into(),
            price,
            change_24h: change,
            high_24h: price * 1.02,
            low_24h: price * 0.98,
            volume,
            market_cap,
            market_cap_rank: 1,
        }
    }

    // ---- determinism -----------------------------------------------------

    #[test]
    fn derivation_is_deterministic() {
        let snap = snapshot(64_123.45, 3.21, 3.5e10, 1.25e12);
        let a = derive_indicators(&snap);
        let b = derive_indicators(&snap);
        assert_eq!(a, b);
        // Serialised forms are bit-identical too.
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    // ---- sentiment properties --------------------------------------------

    #[test]
    fn big_gain_with_heavy_volume_is_strongly_bullish() {
        // deviation = (100 - 50) / 50 * 100 = 100 > 15
        let snap = snapshot(100.0, 12.0, 100.0, 1000.0);
        let bundle = derive_indicators(&snap);
        assert_eq!(bundle.market_analysis.sentiment, Sentiment::StronglyBullish);
    }

    #[test]
    fn big_drop_with_heavy_volume_is_strongly_bearish() {
        let snap = snapshot(100.0, -12.0, 100.0, 1000.0);
        let bundle = derive_indicators(&snap);
        assert_eq!(bundle.market_analysis.sentiment, Sentiment::StronglyBearish);
    }

    // ---- level properties ------------------------------------------------

    #[test]
    fn hundred_dollar_coin_levels() {
        let snap = snapshot(100.0, 0.0, 50.0, 1000.0);
        let bundle = derive_indicators(&snap);
        let ti = &bundle.technical_indicators;
        assert_eq!(ti.support_levels, [95.0, 90.0, 85.0]);
        assert_eq!(ti.resistance_levels, [105.0, 110.0, 115.0]);
        assert_eq!(bundle.trading_signals.stop_loss, 92.0);
        assert_eq!(bundle.trading_signals.entry_point, 95.0);
        assert_eq!(bundle.trading_signals.exit_point, 105.0);
    }

    // ---- flat market -----------------------------------------------------

    #[test]
    fn flat_market_bundle() {
        let snap = snapshot(100.0, 0.0, 50.0, 1000.0);
        let bundle = derive_indicators(&snap);
        let ti = &bundle.technical_indicators;

        assert_eq!(ti.rsi, 50.0);
        assert_eq!(ti.rsi_signal, RsiSignal::Neutral);
        assert_eq!(ti.volatility, 0.0);
        assert_eq!(ti.macd.trend, Trend::Bearish);
        assert_eq!(ti.moving_averages.trend, MaTrend::Mixed);
        assert_eq!(bundle.market_analysis.sentiment, Sentiment::Neutral);
        assert_eq!(bundle.market_analysis.trend_strength, TrendStrength::Low);
        assert_eq!(bundle.market_analysis.market_phase, MarketPhase::Distribution);
        assert_eq!(bundle.trading_signals.short_term, TradeAction::Hold);
        assert_eq!(bundle.trading_signals.medium_term, Bias::Neutral);
    }

    // ---- zero market cap edge case ---------------------------------------

    #[test]
    fn zero_market_cap_is_weak_volume_not_panic() {
        let snap = snapshot(100.0, 12.0, 1.0e9, 0.0);
        let bundle = derive_indicators(&snap);
        assert_eq!(bundle.market_analysis.volume_strength, VolumeStrength::Weak);
        // deviation 0 blocks the strongly-bullish branch; +12% is still > 5.
        assert_eq!(bundle.market_analysis.sentiment, Sentiment::Bullish);
    }

    // ---- rounding & payload shape ----------------------------------------

    #[test]
    fn reported_values_are_rounded() {
        let snap = snapshot(0.333, 1.234, 50.0, 1000.0);
        let bundle = derive_indicators(&snap);
        let ti = &bundle.technical_indicators;
        assert_eq!(ti.rsi, 50.6); // 50 + 0.617 = 50.617 -> 50.6
        assert_eq!(ti.volatility, 1.2);
        assert_eq!(ti.macd.line, 0.9872); // 1.234 * 0.8 = 0.9872
        assert_eq!(ti.support_levels[0], 0.32);
    }

    #[test]
    fn bundle_serialises_camel_case_groupings() {
        let snap = snapshot(100.0, 2.0, 50.0, 1000.0);
        let json = serde_json::to_value(derive_indicators(&snap)).unwrap();
        assert!(json.get("priceMetrics").is_some());
        assert!(json.get("technicalIndicators").is_some());
        assert!(json.get("marketAnalysis").is_some());
        assert!(json.get("tradingSignals").is_some());
        assert_eq!(
            json["technicalIndicators"]["macd"]["trend"],
            serde_json::json!("BULLISH")
        );
        assert_eq!(json["priceMetrics"]["marketRank"], serde_json::json!(1));
    }

    #[test]
    fn round_dp_behaviour() {
        assert_eq!(round_dp(2.344, 2), 2.34);
        assert_eq!(round_dp(2.346, 2), 2.35);
        assert_eq!(round_dp(-2.346, 2), -2.35);
        assert_eq!(round_dp(1.0, 2), 1.0);
    }
}
