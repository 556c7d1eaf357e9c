//! Scripted market data source for integration tests

use async_trait::async_trait;
use coinscope::market::{
    CoinDetail, CoinSummary, Collection, HistoryInterval, MarketDataSource, NetworkError,
    PricePoint, TimeSeries,
};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Mutex;

/// 2024-01-01T00:00:00Z
pub const JAN_1_2024: i64 = 1_704_067_200_000;
pub const DAY_MS: i64 = 86_400_000;

/// In-memory market with a fixed ranked list and per-coin history
pub struct ScriptedMarket {
    collection: Result<Collection, NetworkError>,
    history_points: usize,
    failing_detail: Option<String>,
    pub history_requests: Mutex<Vec<(String, u32, HistoryInterval)>>,
}

impl ScriptedMarket {
    /// Market with `coins` entries; the third entry is "ethereum"
    pub fn new(coins: usize) -> Self {
        let collection = (0..coins)
            .map(|rank| {
                let id = match rank {
                    0 => "bitcoin".to_string(),
                    1 => "binancecoin".to_string(),
                    2 => "ethereum".to_string(),
                    n => format!("layer-one-{}", n + 1),
                };
                CoinSummary {
                    name: id.clone(),
                    symbol: id.chars().take(4).collect(),
                    image: format!("https://assets.example.com/{}.png", id),
                    current_price: Some(Decimal::new(1000 - rank as i64, 0)),
                    market_cap: Some(Decimal::new(1_000_000 - rank as i64 * 1000, 0)),
                    price_change_percentage_24h: None,
                    id,
                }
            })
            .collect();

        Self {
            collection: Ok(collection),
            history_points: 8,
            failing_detail: None,
            history_requests: Mutex::new(Vec::new()),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            collection: Err(NetworkError::Status {
                status: 503,
                body: "service unavailable".to_string(),
            }),
            ..Self::new(0)
        }
    }

    pub fn with_failing_detail(mut self, id: &str) -> Self {
        self.failing_detail = Some(id.to_string());
        self
    }
}

#[async_trait]
impl MarketDataSource for ScriptedMarket {
    async fn fetch_ranked_collection(&self) -> Result<Collection, NetworkError> {
        self.collection.clone()
    }

    async fn fetch_coin_detail(&self, id: &str) -> Result<CoinDetail, NetworkError> {
        if self.failing_detail.as_deref() == Some(id) {
            return Err(NetworkError::Timeout);
        }
        Ok(CoinDetail {
            id: id.to_string(),
            name: id.to_string(),
            symbol: id.chars().take(3).collect(),
            current_price: HashMap::from([("usd".to_string(), Decimal::new(225075, 2))]),
        })
    }

    async fn fetch_coin_history(
        &self,
        id: &str,
        days: u32,
        interval: HistoryInterval,
    ) -> Result<TimeSeries, NetworkError> {
        self.history_requests
            .lock()
            .unwrap()
            .push((id.to_string(), days, interval));
        Ok((0..self.history_points)
            .map(|i| PricePoint::new(JAN_1_2024 + i as i64 * DAY_MS, 2000.0 + i as f64))
            .collect())
    }
}
