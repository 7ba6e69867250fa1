// =============================================================================
// REST API Endpoints — Axum 0.7
// =============================================================================
//
// All endpoints live under `/api/v1/`. Everything is public: the backend only
// re-serves public market data and derived display values, so there is
// nothing to authenticate.
//
// Error contract: the fixed `MarketError` strings are the only failure bodies
// the dashboard ever sees. Upstream failures map to 502 (the failure is on
// the CoinGecko side of this proxy), a zero-match search maps to 404. Every
// failure is also recorded on the AppState error ring buffer.
//
// CORS is configured permissively for development; tighten `allowed_origins`
// in production.
// =============================================================================

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::app_state::AppState;
use crate::error::MarketError;
use crate::indicators::derive_indicators;

// =============================================================================
// Router construction
// =============================================================================

/// Build the full REST API router with CORS middleware and shared state.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/coins", get(top_coins))
        .route("/api/v1/coins/:id", get(coin_details))
        .route("/api/v1/coins/:id/analysis", get(coin_analysis))
        .route("/api/v1/search", get(search))
        .route("/api/v1/ticker", get(ticker))
        .layer(cors)
        .with_state(state)
}

// =============================================================================
// Error mapping
// =============================================================================

type ApiError = (StatusCode, Json<serde_json::Value>);

/// Map a [`MarketError`] to its response and record it on the error log.
/// A zero-match search is a 404; everything else failed upstream of us.
fn market_error(state: &AppState, err: MarketError) -> ApiError {
    state.push_error(err.to_string());

    let status = match err {
        MarketError::NoResults => StatusCode::NOT_FOUND,
        _ => StatusCode::BAD_GATEWAY,
    };
    (status, Json(serde_json::json!({ "error": err.to_string() })))
}

// =============================================================================
// Health (public)
// =============================================================================

async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "state_version": state.current_state_version(),
        "uptime_seconds": state.start_time.elapsed().as_secs(),
        "server_time": chrono::Utc::now().timestamp_millis(),
    }))
}

// =============================================================================
// Top coins
// =============================================================================

async fn top_coins(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ApiError> {
    let coins = state
        .market
        .list_top_coins()
        .await
        .map_err(|e| market_error(&state, e))?;

    info!(count = coins.len(), "top coins served");
    Ok(Json(coins))
}

// =============================================================================
// Search
// =============================================================================

#[derive(Deserialize)]
struct SearchParams {
    #[serde(default)]
    query: String,
}

async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, ApiError> {
    let hits = state
        .market
        .search_coins(&params.query)
        .await
        .map_err(|e| market_error(&state, e))?;

    Ok(Json(hits))
}

// =============================================================================
// Coin details & analysis
// =============================================================================

async fn coin_details(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let snapshot = state
        .market
        .get_coin_details(&id)
        .await
        .map_err(|e| market_error(&state, e))?;

    Ok(Json(snapshot))
}

/// Details + derived indicator bundle in one payload. Both the quick-summary
/// modal and the advanced-analysis page consume this endpoint; the bundle is
/// recomputed on every call from a fresh snapshot.
async fn coin_analysis(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let snapshot = state
        .market
        .get_coin_details(&id)
        .await
        .map_err(|e| market_error(&state, e))?;

    let analysis = derive_indicators(&snapshot);

    info!(coin_id = %snapshot.id, "analysis served");
    Ok(Json(serde_json::json!({
        "coin": snapshot,
        // The dashboard builds its chart-widget URL from this symbol; the
        // embedded chart is display-only and feeds nothing back.
        "chartSymbol": snapshot.symbol.to_uppercase(),
        "analysis": analysis,
    })))
}

// =============================================================================
// Decorative ticker (synthetic data, visual effect only)
// =============================================================================

async fn ticker(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let entries = state.ticker.read().clone();
    Json(entries)
}

// =============================================================================
// Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime_config::RuntimeConfig;
    use axum::body::Body;
    use axum::http::Request;
    use tower::util::ServiceExt;

    /// State whose upstream base URL is unroutable: any handler that actually
    /// calls CoinGecko fails immediately with the fixed error condition.
    fn dead_end_state() -> Arc<AppState> {
        let config = RuntimeConfig {
            api_base_url: "http://127.0.0.1:9".to_string(),
            ..RuntimeConfig::default()
        };
        Arc::new(AppState::new(config))
    }

    async fn get_json(
        state: Arc<AppState>,
        uri: &str,
    ) -> (StatusCode, serde_json::Value) {
        let response = router(state)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&bytes).unwrap();
        (status, value)
    }

    #[tokio::test]
    async fn health_is_ok() {
        let (status, body) = get_json(dead_end_state(), "/api/v1/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn empty_search_returns_empty_list() {
        // No query parameter at all — same as an empty query string.
        let (status, body) = get_json(dead_end_state(), "/api/v1/search").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!([]));
    }

    #[tokio::test]
    async fn failed_search_maps_to_fixed_string() {
        let (status, body) =
            get_json(dead_end_state(), "/api/v1/search?query=bitcoin").await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"], "SEARCH FAILED - PLEASE TRY AGAIN");
    }

    #[tokio::test]
    async fn failed_listing_maps_to_fixed_string() {
        let state = dead_end_state();
        let (status, body) = get_json(state.clone(), "/api/v1/coins").await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"], "FAILED TO LOAD MARKET DATA");
        // Failure landed on the error ring buffer.
        assert_eq!(
            state.recent_errors.read().last().unwrap().message,
            "FAILED TO LOAD MARKET DATA"
        );
    }

    #[tokio::test]
    async fn failed_details_maps_to_fixed_string() {
        let (status, body) =
            get_json(dead_end_state(), "/api/v1/coins/bitcoin/analysis").await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"], "FAILED TO LOAD COIN DETAILS");
    }

    #[tokio::test]
    async fn ticker_serves_three_synthetic_rows() {
        let (status, body) = get_json(dead_end_state(), "/api/v1/ticker").await;
        assert_eq!(status, StatusCode::OK);
        let rows = body.as_array().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0]["symbol"], "BTC");
    }
}
