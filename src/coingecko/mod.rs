pub mod client;
pub mod wire;

// Re-export the client for convenient access (e.g. `use crate::coingecko::CoinGeckoClient`).
pub use client::CoinGeckoClient;
