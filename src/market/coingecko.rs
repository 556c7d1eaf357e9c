//! CoinGecko API client
//!
//! Issues the three read-only requests the screens need: the ranked
//! `coins/markets` collection, `coins/{id}` detail, and
//! `coins/{id}/market_chart` history. Responses are validated here and
//! converted to the crate's types so nothing downstream sees raw JSON.

use super::types::decimal_from_f64;
use super::{
    CoinDetail, CoinSummary, Collection, HistoryInterval, MarketDataSource, NetworkError,
    PricePoint, TimeSeries,
};
use crate::config::ApiConfig;
use crate::telemetry::{record_fetch, record_latency, LatencyMetric};
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

/// CoinGecko public API base URL
pub const COINGECKO_API_URL: &str = "https://api.coingecko.com/api/v3";

/// Longest error body kept in a `NetworkError::Status`
const MAX_ERROR_BODY: usize = 256;

/// Configuration for the CoinGecko client
#[derive(Debug, Clone)]
pub struct CoinGeckoConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Quote currency for prices and market caps
    pub vs_currency: String,
    /// Category filter for the ranked collection
    pub category: String,
    /// Collection ordering
    pub order: String,
    /// Collection page size
    pub per_page: u32,
    /// Price change window for the collection
    pub price_change_percentage: String,
    /// Decimal places requested for prices
    pub precision: u32,
}

impl Default for CoinGeckoConfig {
    fn default() -> Self {
        Self {
            base_url: COINGECKO_API_URL.to_string(),
            timeout: Duration::from_secs(10),
            vs_currency: "usd".to_string(),
            category: "layer-1".to_string(),
            order: "market_cap_desc".to_string(),
            per_page: 50,
            price_change_percentage: "24h".to_string(),
            precision: 6,
        }
    }
}

impl From<&ApiConfig> for CoinGeckoConfig {
    fn from(api: &ApiConfig) -> Self {
        Self {
            base_url: api.base_url.clone(),
            timeout: Duration::from_secs(api.timeout_secs),
            vs_currency: api.vs_currency.clone(),
            category: api.category.clone(),
            order: api.order.clone(),
            per_page: api.per_page,
            price_change_percentage: api.price_change_percentage.clone(),
            precision: api.precision,
        }
    }
}

/// Client for the CoinGecko REST API
pub struct CoinGeckoClient {
    config: CoinGeckoConfig,
    client: Client,
}

impl CoinGeckoClient {
    /// Create a client with default configuration
    pub fn new() -> Result<Self, NetworkError> {
        Self::with_config(CoinGeckoConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(config: CoinGeckoConfig) -> Result<Self, NetworkError> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { config, client })
    }

    /// Build an endpoint URL from path segments under the base URL
    ///
    /// Segments are percent-encoded, so a coin id can never escape its path
    /// position.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, NetworkError> {
        let mut url = Url::parse(&self.config.base_url)
            .map_err(|e| NetworkError::InvalidRequest(format!("bad base URL: {}", e)))?;

        url.path_segments_mut()
            .map_err(|_| NetworkError::InvalidRequest("base URL cannot have a path".to_string()))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    fn markets_query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("vs_currency", self.config.vs_currency.clone()),
            ("category", self.config.category.clone()),
            ("order", self.config.order.clone()),
            ("per_page", self.config.per_page.to_string()),
            (
                "price_change_percentage",
                self.config.price_change_percentage.clone(),
            ),
            ("precision", self.config.precision.to_string()),
        ]
    }

    fn history_query(&self, days: u32, interval: HistoryInterval) -> Vec<(&'static str, String)> {
        vec![
            ("vs_currency", self.config.vs_currency.clone()),
            ("days", days.to_string()),
            ("interval", interval.as_str().to_string()),
        ]
    }

    /// Issue a GET and decode the JSON body
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&'static str, String)],
        metric: LatencyMetric,
    ) -> Result<T, NetworkError> {
        let started = Instant::now();
        let result = self.send_and_decode(url, query).await;

        record_latency(metric, started.elapsed());
        record_fetch(metric, result.is_ok());

        result
    }

    async fn send_and_decode<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&'static str, String)],
    ) -> Result<T, NetworkError> {
        tracing::debug!(url = %url, "Requesting CoinGecko endpoint");

        let response = self.client.get(url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NetworkError::Status {
                status: status.as_u16(),
                body: truncate(&body, MAX_ERROR_BODY),
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl MarketDataSource for CoinGeckoClient {
    async fn fetch_ranked_collection(&self) -> Result<Collection, NetworkError> {
        let url = self.endpoint(&["coins", "markets"])?;
        let entries: Vec<MarketsEntry> = self
            .get_json(url, &self.markets_query(), LatencyMetric::Collection)
            .await?;

        let collection = convert_collection(entries);

        tracing::info!(
            coins = collection.len(),
            category = %self.config.category,
            "Fetched ranked collection"
        );

        Ok(collection)
    }

    async fn fetch_coin_detail(&self, id: &str) -> Result<CoinDetail, NetworkError> {
        require_id(id)?;

        let url = self.endpoint(&["coins", id])?;
        let wire: CoinResponse = self.get_json(url, &[], LatencyMetric::Detail).await?;

        convert_detail(wire, &self.config.vs_currency)
    }

    async fn fetch_coin_history(
        &self,
        id: &str,
        days: u32,
        interval: HistoryInterval,
    ) -> Result<TimeSeries, NetworkError> {
        require_id(id)?;

        let url = self.endpoint(&["coins", id, "market_chart"])?;
        let wire: MarketChartResponse = self
            .get_json(url, &self.history_query(days, interval), LatencyMetric::History)
            .await?;

        let series = convert_history(wire);

        tracing::debug!(coin_id = %id, points = series.len(), "Fetched price history");

        Ok(series)
    }
}

/// Entry from `coins/markets`
#[derive(Debug, Deserialize)]
struct MarketsEntry {
    id: String,
    name: String,
    symbol: String,
    #[serde(default)]
    image: Option<String>,
    current_price: Option<f64>,
    market_cap: Option<f64>,
    price_change_percentage_24h: Option<f64>,
}

/// Response from `coins/{id}`
#[derive(Debug, Deserialize)]
struct CoinResponse {
    id: String,
    name: String,
    symbol: String,
    market_data: Option<MarketData>,
}

#[derive(Debug, Deserialize)]
struct MarketData {
    #[serde(default)]
    current_price: HashMap<String, Option<f64>>,
}

/// Response from `coins/{id}/market_chart`
///
/// Points are kept as raw JSON so one malformed pair does not fail the
/// whole payload.
#[derive(Debug, Deserialize)]
struct MarketChartResponse {
    prices: Vec<serde_json::Value>,
}

fn require_id(id: &str) -> Result<(), NetworkError> {
    if id.trim().is_empty() {
        return Err(NetworkError::InvalidRequest("empty coin id".to_string()));
    }
    Ok(())
}

/// Convert markets entries, keeping upstream order
///
/// Duplicate ids are dropped after the first occurrence.
fn convert_collection(entries: Vec<MarketsEntry>) -> Collection {
    let mut seen = HashSet::with_capacity(entries.len());
    let mut collection = Vec::with_capacity(entries.len());

    for entry in entries {
        if !seen.insert(entry.id.clone()) {
            tracing::warn!(coin_id = %entry.id, "Dropping duplicate coin in collection");
            continue;
        }

        collection.push(CoinSummary {
            id: entry.id,
            name: entry.name,
            symbol: entry.symbol,
            image: entry.image.unwrap_or_default(),
            current_price: entry.current_price.and_then(decimal_from_f64),
            market_cap: entry.market_cap.and_then(decimal_from_f64),
            price_change_percentage_24h: entry
                .price_change_percentage_24h
                .and_then(decimal_from_f64),
        });
    }

    collection
}

/// Convert a detail response; the quote currency price must be present
fn convert_detail(wire: CoinResponse, vs_currency: &str) -> Result<CoinDetail, NetworkError> {
    let market_data = wire
        .market_data
        .ok_or_else(|| NetworkError::Parse(format!("{}: missing market_data", wire.id)))?;

    let current_price: HashMap<String, _> = market_data
        .current_price
        .into_iter()
        .filter_map(|(currency, price)| {
            price
                .and_then(decimal_from_f64)
                .map(|p| (currency.to_lowercase(), p))
        })
        .collect();

    let currency = vs_currency.to_lowercase();
    if !current_price.contains_key(&currency) {
        return Err(NetworkError::Parse(format!(
            "{}: missing market_data.current_price.{}",
            wire.id, currency
        )));
    }

    Ok(CoinDetail {
        id: wire.id,
        name: wire.name,
        symbol: wire.symbol,
        current_price,
    })
}

/// Convert `[[timestamp_ms, price], ...]` into a time series
///
/// Pairs without a usable timestamp are dropped. A missing or non-numeric
/// price is kept as `None` for the chart transform to exclude.
fn convert_history(wire: MarketChartResponse) -> TimeSeries {
    let total = wire.prices.len();

    let series: TimeSeries = wire
        .prices
        .iter()
        .filter_map(|pair| {
            let pair = pair.as_array()?;
            let ts = pair.first()?;
            let timestamp_ms = ts.as_i64().or_else(|| ts.as_f64().map(|t| t as i64))?;
            let price = pair.get(1).and_then(|p| p.as_f64());
            Some(PricePoint {
                timestamp_ms,
                price,
            })
        })
        .collect();

    if series.len() < total {
        tracing::warn!(
            dropped = total - series.len(),
            "Dropped history points without a timestamp"
        );
    }

    series
}

fn truncate(body: &str, max: usize) -> String {
    if body.len() <= max {
        return body.to_string();
    }
    let mut end = max;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
