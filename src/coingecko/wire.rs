// =============================================================================
// CoinGecko wire formats
// =============================================================================
//
// Deserialisation targets for the three upstream endpoints, plus conversion
// into the [`CoinSnapshot`] the rest of the backend works with.
//
// The listing endpoint (`/coins/markets`) returns flat rows; the details
// endpoint (`/coins/{id}`) nests the same figures under `market_data` keyed by
// currency. Both shapes funnel into one snapshot type, applying the same
// fallbacks the dashboard has always used for missing fields:
//   high_24h  -> price * 1.02
//   low_24h   -> price * 0.98
//   rank      -> 999
//   numerics  -> 0
// =============================================================================

use std::collections::HashMap;

use serde::Deserialize;

use crate::types::{CoinSnapshot, SearchHit};

// =============================================================================
// GET /coins/markets — flat listing rows
// =============================================================================

/// One row of the `/coins/markets` listing. CoinGecko serialises missing
/// figures as JSON null, hence the blanket `Option`s.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketCoinRow {
    pub id: String,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
    #[serde(default)]
    pub high_24h: Option<f64>,
    #[serde(default)]
    pub low_24h: Option<f64>,
    #[serde(default)]
    pub total_volume: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
}

impl MarketCoinRow {
    /// Convert a listing row into a [`CoinSnapshot`], applying the legacy
    /// fallbacks for missing fields.
    pub fn into_snapshot(self) -> CoinSnapshot {
        let price = self.current_price.unwrap_or(0.0);
        CoinSnapshot {
            id: self.id,
            name: self.name,
            symbol: self.symbol,
            price,
            change_24h: self.price_change_percentage_24h.unwrap_or(0.0),
            high_24h: self.high_24h.unwrap_or(price * 1.02),
            low_24h: self.low_24h.unwrap_or(price * 0.98),
            volume: self.total_volume.unwrap_or(0.0),
            market_cap: self.market_cap.unwrap_or(0.0),
            market_cap_rank: self.market_cap_rank.unwrap_or(999),
        }
    }
}

// =============================================================================
// GET /search — lightweight coin summaries
// =============================================================================

/// Envelope of the `/search` response. Only the `coins` section is consumed.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub coins: Vec<SearchCoinRow>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchCoinRow {
    pub id: String,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
}

impl SearchCoinRow {
    pub fn into_hit(self) -> SearchHit {
        SearchHit {
            id: self.id,
            name: self.name,
            symbol: self.symbol,
            market_cap_rank: self.market_cap_rank,
        }
    }
}

// =============================================================================
// GET /coins/{id} — extended document with nested market_data
// =============================================================================

/// The `/coins/{id}` document, reduced to the fields the backend consumes.
#[derive(Debug, Clone, Deserialize)]
pub struct CoinDetailsDoc {
    pub id: String,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    #[serde(default)]
    pub market_data: Option<MarketData>,
}

/// Per-currency figures nested under `market_data`. Each map goes from
/// currency code ("usd", "eur", ...) to a possibly-null number.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarketData {
    #[serde(default)]
    pub current_price: HashMap<String, Option<f64>>,
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
    #[serde(default)]
    pub high_24h: HashMap<String, Option<f64>>,
    #[serde(default)]
    pub low_24h: HashMap<String, Option<f64>>,
    #[serde(default)]
    pub total_volume: HashMap<String, Option<f64>>,
    #[serde(default)]
    pub market_cap: HashMap<String, Option<f64>>,
}

impl MarketData {
    fn in_currency(map: &HashMap<String, Option<f64>>, vs: &str) -> Option<f64> {
        map.get(vs).copied().flatten()
    }
}

impl CoinDetailsDoc {
    /// Convert the details document into a [`CoinSnapshot`] for the given
    /// vs-currency, applying the legacy fallbacks for missing fields.
    pub fn into_snapshot(self, vs_currency: &str) -> CoinSnapshot {
        let md = self.market_data.unwrap_or_default();
        let price = MarketData::in_currency(&md.current_price, vs_currency).unwrap_or(0.0);
        CoinSnapshot {
            id: self.id,
            name: self.name,
            symbol: self.symbol,
            price,
            change_24h: md.price_change_percentage_24h.unwrap_or(0.0),
            high_24h: MarketData::in_currency(&md.high_24h, vs_currency)
                .unwrap_or(price * 1.02),
            low_24h: MarketData::in_currency(&md.low_24h, vs_currency)
                .unwrap_or(price * 0.98),
            volume: MarketData::in_currency(&md.total_volume, vs_currency).unwrap_or(0.0),
            market_cap: MarketData::in_currency(&md.market_cap, vs_currency).unwrap_or(0.0),
            market_cap_rank: self.market_cap_rank.unwrap_or(999),
        }
    }
}
