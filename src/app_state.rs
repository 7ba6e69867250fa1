// =============================================================================
// Central Application State — CoinMind backend
// =============================================================================
//
// Shared state for the REST API and background tasks. Deliberately small: the
// backend holds no market data between requests (every dashboard action hits
// the upstream API fresh), so the only mutable state is the decorative ticker,
// an error ring buffer for the dashboard's error surface, and a version
// counter.
//
// Thread safety:
//   - AtomicU64 for lock-free version tracking.
//   - parking_lot::RwLock for the mutable shared collections.
// =============================================================================

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use parking_lot::RwLock;
use serde::Serialize;

use crate::coingecko::CoinGeckoClient;
use crate::runtime_config::RuntimeConfig;
use crate::ticker::{self, TickerEntry};

// =============================================================================
// Error Record
// =============================================================================

/// A recorded failure event for the dashboard error surface.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorRecord {
    /// The fixed user-facing message.
    pub message: String,
    /// ISO 8601 timestamp.
    pub at: String,
}

/// Maximum number of recent errors to retain.
const MAX_RECENT_ERRORS: usize = 50;

// =============================================================================
// AppState
// =============================================================================

/// Central application state shared across handlers via `Arc<AppState>`.
pub struct AppState {
    // ── Version tracking ────────────────────────────────────────────────
    /// Monotonically increasing version counter, incremented on every
    /// meaningful state mutation.
    pub state_version: AtomicU64,

    // ── Configuration ───────────────────────────────────────────────────
    pub runtime_config: Arc<RwLock<RuntimeConfig>>,

    // ── Upstream client ─────────────────────────────────────────────────
    pub market: CoinGeckoClient,

    // ── Decorative ticker (synthetic, never real data) ──────────────────
    pub ticker: RwLock<Vec<TickerEntry>>,

    // ── Error Log ───────────────────────────────────────────────────────
    pub recent_errors: RwLock<Vec<ErrorRecord>>,

    // ── Timing ──────────────────────────────────────────────────────────
    /// Instant when the server was started. Used for uptime reporting.
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Construct a new `AppState` from the given runtime configuration.
    /// The returned value is typically wrapped in `Arc` immediately.
    pub fn new(config: RuntimeConfig) -> Self {
        let market = CoinGeckoClient::new(&config);

        Self {
            state_version: AtomicU64::new(1),
            runtime_config: Arc::new(RwLock::new(config)),
            market,
            ticker: RwLock::new(ticker::seed_entries()),
            recent_errors: RwLock::new(Vec::new()),
            start_time: std::time::Instant::now(),
        }
    }

    // ── Version Management ──────────────────────────────────────────────

    /// Atomically increment the state version. Call this after every
    /// meaningful mutation.
    pub fn increment_version(&self) -> u64 {
        self.state_version.fetch_add(1, Ordering::SeqCst)
    }

    /// Read the current state version without modifying it.
    pub fn current_state_version(&self) -> u64 {
        self.state_version.load(Ordering::SeqCst)
    }

    // ── Error Logging ───────────────────────────────────────────────────

    /// Record a failure. The ring buffer is capped at [`MAX_RECENT_ERRORS`];
    /// oldest entries are evicted when the limit is reached.
    pub fn push_error(&self, message: String) {
        let record = ErrorRecord {
            message,
            at: Utc::now().to_rfc3339(),
        };

        let mut errors = self.recent_errors.write();
        errors.push(record);
        while errors.len() > MAX_RECENT_ERRORS {
            errors.remove(0);
        }
        drop(errors);

        self.increment_version();
    }
}
