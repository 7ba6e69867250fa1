// =============================================================================
// Market data failure conditions
// =============================================================================
//
// The dashboard shows exactly three failure strings (initial load, search,
// coin details) plus a distinct "no results" message for an empty search.
// Every network or parse error collapses into one of these; the underlying
// cause is logged via `tracing` at the call site and never surfaced to the
// client. No structured error codes, no partial-failure recovery.
// =============================================================================

use thiserror::Error;

/// Fixed, user-facing failure conditions of the market data client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MarketError {
    /// The top-coins listing could not be fetched or parsed.
    #[error("FAILED TO LOAD MARKET DATA")]
    LoadFailed,

    /// A search request failed on the network or parse level.
    #[error("SEARCH FAILED - PLEASE TRY AGAIN")]
    SearchFailed,

    /// The search succeeded but the upstream returned zero matches. Distinct
    /// from [`MarketError::SearchFailed`].
    #[error("NO COINS FOUND FOR YOUR SEARCH")]
    NoResults,

    /// The coin-details request could not be fetched or parsed.
    #[error("FAILED TO LOAD COIN DETAILS")]
    DetailsFailed,
}
