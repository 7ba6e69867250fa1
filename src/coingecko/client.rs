// =============================================================================
// CoinGecko REST API Client — read-only public endpoints
// =============================================================================
//
// Three request/response calls, nothing else: top-coins listing, free-text
// search, coin details. No retry, no backoff, no caching — every call hits
// the network fresh, and no request timeout is configured (a hung upstream
// request hangs the corresponding dashboard loading state; see DESIGN.md).
//
// Error contract: any network or parse failure collapses into the fixed
// [`MarketError`] condition for that endpoint. The underlying cause is logged
// here and never crosses the API boundary.
// =============================================================================

use tracing::{debug, instrument, warn};

use crate::error::MarketError;
use crate::runtime_config::RuntimeConfig;
use crate::types::{CoinSnapshot, SearchHit};

use super::wire::{CoinDetailsDoc, MarketCoinRow, SearchResponse};

/// CoinGecko REST API client over a configurable base URL.
#[derive(Debug, Clone)]
pub struct CoinGeckoClient {
    base_url: String,
    vs_currency: String,
    top_coins_limit: u32,
    search_results_limit: usize,
    client: reqwest::Client,
}

impl CoinGeckoClient {
    // -------------------------------------------------------------------------
    // Construction
    // -------------------------------------------------------------------------

    /// Create a new `CoinGeckoClient` from the runtime configuration.
    pub fn new(config: &RuntimeConfig) -> Self {
        // Deliberately no timeout: the source dashboard configures none.
        let client = reqwest::Client::builder()
            .build()
            .expect("failed to build reqwest client");

        debug!(base_url = %config.api_base_url, "CoinGeckoClient initialised");

        Self {
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            vs_currency: config.vs_currency.clone(),
            top_coins_limit: config.top_coins_limit,
            search_results_limit: config.search_results_limit,
            client,
        }
    }

    // -------------------------------------------------------------------------
    // Endpoints
    // -------------------------------------------------------------------------

    /// GET /coins/markets — top coins ordered by descending market cap.
    ///
    /// Returns up to `top_coins_limit` snapshots. Any failure collapses into
    /// [`MarketError::LoadFailed`].
    #[instrument(skip(self), name = "coingecko::list_top_coins")]
    pub async fn list_top_coins(&self) -> Result<Vec<CoinSnapshot>, MarketError> {
        let url = format!(
            "{}/coins/markets?vs_currency={}&order=market_cap_desc&per_page={}&page=1",
            self.base_url, self.vs_currency, self.top_coins_limit
        );

        let rows: Vec<MarketCoinRow> = self
            .fetch_json(&url)
            .await
            .map_err(|e| {
                warn!(error = %e, "top-coins listing failed");
                MarketError::LoadFailed
            })?;

        let coins: Vec<CoinSnapshot> = rows.into_iter().map(MarketCoinRow::into_snapshot).collect();
        debug!(count = coins.len(), "top coins fetched");
        Ok(coins)
    }

    /// GET /search — free-text coin search.
    ///
    /// An empty (or whitespace-only) query short-circuits to an empty result
    /// without touching the network. Zero upstream matches for a non-empty
    /// query yield [`MarketError::NoResults`], distinct from a network-level
    /// [`MarketError::SearchFailed`].
    #[instrument(skip(self), name = "coingecko::search_coins")]
    pub async fn search_coins(&self, query: &str) -> Result<Vec<SearchHit>, MarketError> {
        let query = query.trim();
        if query.is_empty() {
            debug!("empty query — skipping network call");
            return Ok(Vec::new());
        }

        let url = format!("{}/search?query={}", self.base_url, urlencoding::encode(query));

        let resp: SearchResponse = self
            .fetch_json(&url)
            .await
            .map_err(|e| {
                warn!(query, error = %e, "search request failed");
                MarketError::SearchFailed
            })?;

        if resp.coins.is_empty() {
            debug!(query, "search returned zero matches");
            return Err(MarketError::NoResults);
        }

        let hits: Vec<SearchHit> = resp
            .coins
            .into_iter()
            .take(self.search_results_limit)
            .map(|row| row.into_hit())
            .collect();

        debug!(query, count = hits.len(), "search hits returned");
        Ok(hits)
    }

    /// GET /coins/{id} — extended snapshot for a single coin.
    ///
    /// Any failure collapses into [`MarketError::DetailsFailed`].
    #[instrument(skip(self), name = "coingecko::get_coin_details")]
    pub async fn get_coin_details(&self, id: &str) -> Result<CoinSnapshot, MarketError> {
        let url = format!(
            "{}/coins/{}?localization=false",
            self.base_url,
            urlencoding::encode(id)
        );

        let doc: CoinDetailsDoc = self
            .fetch_json(&url)
            .await
            .map_err(|e| {
                warn!(coin_id = id, error = %e, "coin details request failed");
                MarketError::DetailsFailed
            })?;

        let snapshot = doc.into_snapshot(&self.vs_currency);
        debug!(coin_id = %snapshot.id, price = snapshot.price, "coin details fetched");
        Ok(snapshot)
    }

    // -------------------------------------------------------------------------
    // Internal helpers
    // -------------------------------------------------------------------------

    /// Issue a GET and deserialise the JSON body. Non-2xx statuses are
    /// failures even when the body parses.
    async fn fetch_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> anyhow::Result<T> {
        let resp = self.client.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("upstream returned {status}: {body}");
        }

        Ok(resp.json::<T>().await?)
    }
}
