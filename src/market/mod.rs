//! Market data access
//!
//! Fetches the ranked coin collection, per-coin detail, and price history
//! from the upstream market-data API.

mod coingecko;
mod error;
mod types;

pub use coingecko::{CoinGeckoClient, CoinGeckoConfig, COINGECKO_API_URL};
pub use error::NetworkError;
pub use types::{
    decimal_from_f64, CoinDetail, CoinSummary, Collection, HistoryInterval, PricePoint,
    TimeSeries,
};

use async_trait::async_trait;

/// Trait for market data sources
///
/// Every call is a single attempt; failures are returned to the caller
/// unhandled.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Fetch the ranked collection in upstream order
    async fn fetch_ranked_collection(&self) -> Result<Collection, NetworkError>;
    /// Fetch detail for one coin
    async fn fetch_coin_detail(&self, id: &str) -> Result<CoinDetail, NetworkError>;
    /// Fetch price history for one coin
    async fn fetch_coin_history(
        &self,
        id: &str,
        days: u32,
        interval: HistoryInterval,
    ) -> Result<TimeSeries, NetworkError>;
}
