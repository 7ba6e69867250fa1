// =============================================================================
// Shared types used across the CoinMind backend
// =============================================================================
//
// Label enums serialise to the exact uppercase strings the dashboard renders
// (`"STRONGLY BULLISH"`, `"OVERSOLD"`, ...), so the JSON payloads stay
// byte-compatible with the TypeScript interfaces on the frontend.
// =============================================================================

use serde::{Deserialize, Serialize};

// =============================================================================
// Market snapshots
// =============================================================================

/// A single point-in-time read of one coin's market fields from CoinGecko.
///
/// Immutable once built — a newer fetch for the same id supersedes it, it is
/// never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinSnapshot {
    pub id: String,
    pub name: String,
    pub symbol: String,
    /// Current price in the configured vs-currency (USD).
    pub price: f64,
    /// 24-hour price change in percent.
    pub change_24h: f64,
    pub high_24h: f64,
    pub low_24h: f64,
    /// 24-hour trading volume.
    pub volume: f64,
    pub market_cap: f64,
    pub market_cap_rank: u32,
}

/// Lightweight summary returned by the search endpoint. Search hits carry no
/// price data; the dashboard fetches full details on selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub market_cap_rank: Option<u32>,
}

// =============================================================================
// Indicator / analysis labels
// =============================================================================

/// Classification of the synthetic RSI value.
///
/// The threshold mapping (`> 70 => OVERSOLD`, `< 30 => OVERBOUGHT`) is carried
/// over verbatim from the legacy dashboard, where it is inverted relative to
/// conventional RSI usage. See DESIGN.md.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RsiSignal {
    #[serde(rename = "OVERSOLD")]
    Oversold,
    #[serde(rename = "OVERBOUGHT")]
    Overbought,
    #[serde(rename = "NEUTRAL")]
    Neutral,
}

/// Two-state trend direction (MACD histogram sign).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    #[serde(rename = "BULLISH")]
    Bullish,
    #[serde(rename = "BEARISH")]
    Bearish,
}

/// Moving-average stack alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaTrend {
    #[serde(rename = "BULLISH")]
    Bullish,
    #[serde(rename = "BEARISH")]
    Bearish,
    #[serde(rename = "MIXED")]
    Mixed,
}

/// Coarse market mood from fixed thresholds on 24h change and volume
/// deviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    #[serde(rename = "STRONGLY BULLISH")]
    StronglyBullish,
    #[serde(rename = "BULLISH")]
    Bullish,
    #[serde(rename = "NEUTRAL")]
    Neutral,
    #[serde(rename = "BEARISH")]
    Bearish,
    #[serde(rename = "STRONGLY BEARISH")]
    StronglyBearish,
}

/// Volume relative to the 5%-of-market-cap baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeStrength {
    #[serde(rename = "STRONG")]
    Strong,
    #[serde(rename = "MODERATE")]
    Moderate,
    #[serde(rename = "WEAK")]
    Weak,
}

/// How pronounced the 24h move is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendStrength {
    #[serde(rename = "HIGH")]
    High,
    #[serde(rename = "MODERATE")]
    Moderate,
    #[serde(rename = "LOW")]
    Low,
}

/// Market phase inferred from the sign of the 24h change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketPhase {
    #[serde(rename = "ACCUMULATION")]
    Accumulation,
    #[serde(rename = "DISTRIBUTION")]
    Distribution,
}

/// Short-term trading call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeAction {
    #[serde(rename = "BUY")]
    Buy,
    #[serde(rename = "SELL")]
    Sell,
    #[serde(rename = "HOLD")]
    Hold,
}

/// Medium-term bias derived from the synthetic RSI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bias {
    #[serde(rename = "BULLISH")]
    Bullish,
    #[serde(rename = "BEARISH")]
    Bearish,
    #[serde(rename = "NEUTRAL")]
    Neutral,
}

// =============================================================================
// Display impls (log-friendly; mirror the serialised strings)
// =============================================================================

macro_rules! display_as_label {
    ($ty:ty { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => write!(f, $label)),+
                }
            }
        }
    };
}

display_as_label!(RsiSignal { Oversold => "OVERSOLD", Overbought => "OVERBOUGHT", Neutral => "NEUTRAL" });
display_as_label!(Trend { Bullish => "BULLISH", Bearish => "BEARISH" });
display_as_label!(MaTrend { Bullish => "BULLISH", Bearish => "BEARISH", Mixed => "MIXED" });
display_as_label!(Sentiment {
    StronglyBullish => "STRONGLY BULLISH",
    Bullish => "BULLISH",
    Neutral => "NEUTRAL",
    Bearish => "BEARISH",
    StronglyBearish => "STRONGLY BEARISH",
});
display_as_label!(VolumeStrength { Strong => "STRONG", Moderate => "MODERATE", Weak => "WEAK" });
display_as_label!(TrendStrength { High => "HIGH", Moderate => "MODERATE", Low => "LOW" });
display_as_label!(MarketPhase { Accumulation => "ACCUMULATION", Distribution => "DISTRIBUTION" });
display_as_label!(TradeAction { Buy => "BUY", Sell => "SELL", Hold => "HOLD" });
display_as_label!(Bias { Bullish => "BULLISH", Bearish => "BEARISH", Neutral => "NEUTRAL" });

// =============================================================================
// Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentiment_serialises_with_space() {
        let json = serde_json::to_string(&Sentiment::StronglyBullish).unwrap();
        assert_eq!(json, r#""STRONGLY BULLISH""#);
        let json = serde_json::to_string(&Sentiment::StronglyBearish).unwrap();
        assert_eq!(json, r#""STRONGLY BEARISH""#);
    }

    #[test]
    fn labels_roundtrip() {
        for signal in [RsiSignal::Oversold, RsiSignal::Overbought, RsiSignal::Neutral] {
            let json = serde_json::to_string(&signal).unwrap();
            let back: RsiSignal = serde_json::from_str(&json).unwrap();
            assert_eq!(signal, back);
        }
    }

    #[test]
    fn display_matches_serialised_form() {
        assert_eq!(Sentiment::StronglyBullish.to_string(), "STRONGLY BULLISH");
        assert_eq!(TradeAction::Hold.to_string(), "HOLD");
        assert_eq!(MaTrend::Mixed.to_string(), "MIXED");
    }

    #[test]
    fn snapshot_serialises_camel_case() {
        let snap = CoinSnapshot {
            id: "bitcoin".into(),
            name: "Bitcoin".into(),
            symbol: "btc".into(),
            price: 50_000.0,
            change_24h: 1.5,
            high_24h: 51_000.0,
            low_24h: 49_000.0,
            volume: 1.0e10,
            market_cap: 1.0e12,
            market_cap_rank: 1,
        };
        let json = serde_json::to_value(&snap).unwrap();
        assert!(json.get("change24h").is_some());
        assert!(json.get("marketCapRank").is_some());
    }
}
