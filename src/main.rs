// =============================================================================
// CoinMind Market Analysis Backend — Main Entry Point
// =============================================================================
//
// Serves the browser dashboard: proxies the CoinGecko public API, derives the
// display-only indicator bundle per coin, and animates the decorative ticker.
// =============================================================================

// ── Module declarations ──────────────────────────────────────────────────────
mod api;
mod app_state;
mod coingecko;
mod error;
mod indicators;
mod runtime_config;
mod ticker;
mod types;

use std::sync::Arc;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::app_state::AppState;
use crate::runtime_config::RuntimeConfig;

const CONFIG_PATH: &str = "runtime_config.json";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── 1. Environment & config ──────────────────────────────────────────
    let _ = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("╔══════════════════════════════════════════════════════════╗");
    info!("║        CoinMind Backend — Starting Up                   ║");
    info!("╚══════════════════════════════════════════════════════════╝");

    let mut config = RuntimeConfig::load(CONFIG_PATH).unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        RuntimeConfig::default()
    });

    // Env overrides.
    if let Ok(addr) = std::env::var("COINMIND_BIND_ADDR") {
        config.bind_addr = addr;
    }
    if let Ok(base) = std::env::var("COINGECKO_API_BASE") {
        config.api_base_url = base;
    }

    info!(
        api_base_url = %config.api_base_url,
        vs_currency = %config.vs_currency,
        top_coins_limit = config.top_coins_limit,
        "Upstream configured"
    );

    // ── 2. Build shared state ────────────────────────────────────────────
    let bind_addr = config.bind_addr.clone();
    let state = Arc::new(AppState::new(config));

    // ── 3. Decorative ticker loop ────────────────────────────────────────
    // Synthetic background animation; carries no real market data.
    let ticker_state = state.clone();
    tokio::spawn(async move {
        ticker::run_ticker_loop(ticker_state).await;
    });

    // ── 4. Serve the API ─────────────────────────────────────────────────
    let app = api::rest::router(state.clone());
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(addr = %bind_addr, "API server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            warn!("Shutdown signal received — stopping gracefully");
        })
        .await?;

    // ── 5. Persist config on shutdown ────────────────────────────────────
    if let Err(e) = state.runtime_config.read().save(CONFIG_PATH) {
        error!(error = %e, "Failed to save runtime config on shutdown");
    }

    info!("CoinMind backend shut down complete.");
    Ok(())
}
