//! In-memory market data source for controller tests

use crate::market::{
    CoinDetail, CoinSummary, Collection, HistoryInterval, MarketDataSource, NetworkError,
    PricePoint, TimeSeries,
};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::{Notify, Semaphore};

pub const JAN_1_2024: i64 = 1704067200000;
pub const DAY_MS: i64 = 86_400_000;

/// Holds a fetch until the test opens it
pub struct Gate {
    permits: Semaphore,
    entered: Notify,
}

impl Gate {
    pub fn closed() -> Arc<Self> {
        Arc::new(Self {
            permits: Semaphore::new(0),
            entered: Notify::new(),
        })
    }

    async fn pass(&self) {
        self.entered.notify_one();
        let _permit = self.permits.acquire().await;
    }

    /// Wait until a fetch is blocked on this gate
    pub async fn entered(&self) {
        self.entered.notified().await;
    }

    pub fn open(&self) {
        self.permits.add_permits(8);
    }
}

/// Ranked collection of `n` coins; the first three are bitcoin,
/// binancecoin and ethereum
pub fn sample_collection(n: usize) -> Collection {
    (0..n)
        .map(|i| {
            let id = match i {
                0 => "bitcoin".to_string(),
                1 => "binancecoin".to_string(),
                2 => "ethereum".to_string(),
                _ => format!("coin-{}", i + 1),
            };
            CoinSummary {
                name: id.clone(),
                symbol: id.chars().take(3).collect(),
                image: format!("https://img.example.com/{}.png", id),
                id,
                current_price: Some(Decimal::from(1000 - i as i64)),
                market_cap: Some(Decimal::from(1_000_000_000 - i as i64 * 1_000)),
                price_change_percentage_24h: Some(Decimal::new(i as i64, 1)),
            }
        })
        .collect()
}

pub fn sample_detail(id: &str) -> CoinDetail {
    CoinDetail {
        id: id.to_string(),
        name: id.to_string(),
        symbol: id.chars().take(3).collect(),
        current_price: HashMap::from([("usd".to_string(), Decimal::new(420005, 1))]),
    }
}

/// Daily history with `n` points starting Jan 1 2024
pub fn sample_history(n: usize) -> TimeSeries {
    (0..n)
        .map(|i| PricePoint::new(JAN_1_2024 + i as i64 * DAY_MS, 100.0 + i as f64))
        .collect()
}

/// Scripted source: canned results, optional gates, call counters
pub struct FakeSource {
    collection: Mutex<Result<Collection, NetworkError>>,
    detail: Mutex<Result<CoinDetail, NetworkError>>,
    history: Mutex<Result<TimeSeries, NetworkError>>,
    collection_gate: Option<Arc<Gate>>,
    detail_gate: Option<Arc<Gate>>,
    history_gate: Option<Arc<Gate>>,
    pub collection_calls: AtomicUsize,
    pub detail_calls: AtomicUsize,
    pub history_calls: AtomicUsize,
    pub requested_history: Mutex<Vec<(String, u32, HistoryInterval)>>,
}

impl FakeSource {
    pub fn healthy() -> Self {
        Self {
            collection: Mutex::new(Ok(sample_collection(50))),
            detail: Mutex::new(Ok(sample_detail("bitcoin"))),
            history: Mutex::new(Ok(sample_history(8))),
            collection_gate: None,
            detail_gate: None,
            history_gate: None,
            collection_calls: AtomicUsize::new(0),
            detail_calls: AtomicUsize::new(0),
            history_calls: AtomicUsize::new(0),
            requested_history: Mutex::new(Vec::new()),
        }
    }

    pub fn gate_collection(mut self, gate: Arc<Gate>) -> Self {
        self.collection_gate = Some(gate);
        self
    }

    pub fn gate_detail(mut self, gate: Arc<Gate>) -> Self {
        self.detail_gate = Some(gate);
        self
    }

    pub fn gate_history(mut self, gate: Arc<Gate>) -> Self {
        self.history_gate = Some(gate);
        self
    }

    pub fn set_collection(&self, result: Result<Collection, NetworkError>) {
        *self.collection.lock().unwrap() = result;
    }

    pub fn set_detail(&self, result: Result<CoinDetail, NetworkError>) {
        *self.detail.lock().unwrap() = result;
    }

    pub fn set_history(&self, result: Result<TimeSeries, NetworkError>) {
        *self.history.lock().unwrap() = result;
    }
}

async fn wait(gate: &Option<Arc<Gate>>) {
    if let Some(gate) = gate {
        gate.pass().await;
    }
}

#[async_trait]
impl MarketDataSource for FakeSource {
    async fn fetch_ranked_collection(&self) -> Result<Collection, NetworkError> {
        self.collection_calls.fetch_add(1, Ordering::SeqCst);
        wait(&self.collection_gate).await;
        self.collection.lock().unwrap().clone()
    }

    async fn fetch_coin_detail(&self, id: &str) -> Result<CoinDetail, NetworkError> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        wait(&self.detail_gate).await;
        self.detail.lock().unwrap().clone().map(|mut detail| {
            detail.id = id.to_string();
            detail
        })
    }

    async fn fetch_coin_history(
        &self,
        id: &str,
        days: u32,
        interval: HistoryInterval,
    ) -> Result<TimeSeries, NetworkError> {
        self.history_calls.fetch_add(1, Ordering::SeqCst);
        self.requested_history
            .lock()
            .unwrap()
            .push((id.to_string(), days, interval));
        wait(&self.history_gate).await;
        self.history.lock().unwrap().clone()
    }
}
