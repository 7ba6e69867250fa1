// =============================================================================
// Decorative Live Ticker — visual effect only
// =============================================================================
//
// The dashboard's animated background ticker. Every number in this module is
// SYNTHETIC: three hard-coded assets seeded with random prices and then random
// walked on an interval. Nothing here is derived from real market data and
// nothing outside the `/api/v1/ticker` endpoint consumes it — it must never be
// mistaken for the CoinGecko-sourced snapshots.
// =============================================================================

use std::sync::Arc;

use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::app_state::AppState;

/// One synthetic ticker row.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerEntry {
    pub symbol: &'static str,
    pub price: f64,
    /// Synthetic 24h change in percent.
    pub change: f64,
}

/// Seed ranges per asset: (symbol, price span, price floor, change span).
const SEEDS: [(&str, f64, f64, f64); 3] = [
    ("BTC", 50_000.0, 30_000.0, 20.0),
    ("ETH", 3_000.0, 1_500.0, 15.0),
    ("BNB", 600.0, 200.0, 12.0),
];

/// Generate the initial ticker rows with random prices inside each asset's
/// seed range and a random change centred on zero.
pub fn seed_entries() -> Vec<TickerEntry> {
    let mut rng = rand::thread_rng();
    SEEDS
        .iter()
        .map(|&(symbol, span, floor, change_span)| TickerEntry {
            symbol,
            price: rng.gen::<f64>() * span + floor,
            change: (rng.gen::<f64>() - 0.5) * change_span,
        })
        .collect()
}

/// Advance every ticker row one step: price walks ±1%, change is redrawn
/// from ±10%.
pub fn advance(entries: &mut [TickerEntry]) {
    let mut rng = rand::thread_rng();
    for entry in entries {
        entry.price *= 1.0 + (rng.gen::<f64>() - 0.5) * 0.02;
        entry.change = (rng.gen::<f64>() - 0.5) * 20.0;
    }
}

/// Background task: re-randomise the shared ticker state on the configured
/// interval, bumping the state version each step.
pub async fn run_ticker_loop(state: Arc<AppState>) {
    let interval_secs = state.runtime_config.read().ticker_interval_secs;
    let mut interval = tokio::time::interval(tokio::time::Duration::from_secs(interval_secs));

    loop {
        interval.tick().await;
        {
            let mut entries = state.ticker.write();
            advance(&mut entries);
        }
        state.increment_version();
        debug!("decorative ticker advanced");
    }
}
