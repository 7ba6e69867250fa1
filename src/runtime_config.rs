// =============================================================================
// Runtime Configuration — CoinMind backend settings with atomic save
// =============================================================================
//
// Every tunable parameter lives here. Persistence uses an atomic tmp + rename
// pattern to prevent corruption on crash. All fields carry `#[serde(default)]`
// so that adding new fields never breaks loading an older config file.
// =============================================================================

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

// =============================================================================
// Default-value helpers (required by serde `default = "..."` attribute)
// =============================================================================

fn default_api_base_url() -> String {
    "https://api.coingecko.com/api/v3".to_string()
}

fn default_bind_addr() -> String {
    "0.0.0.0:3001".to_string()
}

fn default_vs_currency() -> String {
    "usd".to_string()
}

fn default_top_coins_limit() -> u32 {
    30
}

fn default_search_results_limit() -> usize {
    5
}

fn default_ticker_interval_secs() -> u64 {
    3
}

// =============================================================================
// RuntimeConfig
// =============================================================================

/// Top-level runtime configuration for the CoinMind backend.
///
/// Every field has a serde default so that older JSON files missing new fields
/// will still deserialise correctly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    // --- Upstream API --------------------------------------------------------

    /// Base URL of the CoinGecko REST API.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Quote currency for prices, volumes and market caps.
    #[serde(default = "default_vs_currency")]
    pub vs_currency: String,

    // --- Listing / search limits --------------------------------------------

    /// Page size for the top-coins listing.
    #[serde(default = "default_top_coins_limit")]
    pub top_coins_limit: u32,

    /// Maximum number of search hits returned to the dashboard.
    #[serde(default = "default_search_results_limit")]
    pub search_results_limit: usize,

    // --- Server --------------------------------------------------------------

    /// Address the REST API binds to.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    // --- Decorative ticker ---------------------------------------------------

    /// Seconds between re-randomisations of the decorative ticker. The ticker
    /// is a visual effect only and carries no real market data.
    #[serde(default = "default_ticker_interval_secs")]
    pub ticker_interval_secs: u64,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            vs_currency: default_vs_currency(),
            top_coins_limit: default_top_coins_limit(),
            search_results_limit: default_search_results_limit(),
            bind_addr: default_bind_addr(),
            ticker_interval_secs: default_ticker_interval_secs(),
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from a JSON file at `path`.
    ///
    /// If the file does not exist, returns an error so the caller can fall
    /// back to defaults with a warning.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read runtime config from {}", path.display()))?;

        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse runtime config from {}", path.display()))?;

        info!(
            path = %path.display(),
            api_base_url = %config.api_base_url,
            bind_addr = %config.bind_addr,
            "runtime config loaded"
        );

        Ok(config)
    }

    /// Persist the current configuration to `path` using an atomic write
    /// (write to `.tmp`, then rename).
    ///
    /// This prevents corruption if the process crashes mid-write.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let content = serde_json::to_string_pretty(self)
            .context("failed to serialise runtime config to JSON")?;

        // Atomic write: write to a temporary sibling file, then rename.
        let tmp_path = path.with_extension("json.tmp");

        std::fs::write(&tmp_path, &content)
            .with_context(|| format!("failed to write tmp config to {}", tmp_path.display()))?;

        std::fs::rename(&tmp_path, path)
            .with_context(|| format!("failed to rename tmp config to {}", path.display()))?;

        info!(path = %path.display(), "runtime config saved (atomic)");
        Ok(())
    }
}
