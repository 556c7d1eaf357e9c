//! Coin detail screen controller

use super::state::{bounded, ScreenSlot};
use super::{ActivationToken, ScreenConfig, ScreenState};
use crate::chart::{self, ChartSeries};
use crate::market::{CoinDetail, MarketDataSource, TimeSeries};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::watch;

/// Ready payload of the detail screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoinDetailView {
    pub detail: CoinDetail,
    pub history: TimeSeries,
}

impl CoinDetailView {
    /// Chart-ready projection of the history
    pub fn chart(&self) -> ChartSeries {
        chart::transform(&self.history)
    }
}

/// Drives the detail screen for one coin
///
/// Detail and history are fetched together; the screen is only `Ready`
/// when both succeed.
pub struct DetailScreenController<S: ?Sized> {
    source: Arc<S>,
    coin_id: String,
    config: ScreenConfig,
    slot: ScreenSlot<CoinDetailView>,
}

impl<S: MarketDataSource + ?Sized> DetailScreenController<S> {
    /// Create a controller for `coin_id`, as received from navigation
    pub fn new(source: Arc<S>, coin_id: impl Into<String>, config: ScreenConfig) -> Self {
        Self {
            source,
            coin_id: coin_id.into(),
            config,
            slot: ScreenSlot::new(),
        }
    }

    pub fn coin_id(&self) -> &str {
        &self.coin_id
    }

    /// Activate the screen: fetch detail and history concurrently
    ///
    /// The first failure of either request settles the screen in `Failed`.
    pub async fn activate(&self) -> ActivationToken {
        let token = self.slot.begin();
        tracing::debug!(
            coin_id = %self.coin_id,
            activation = token.value(),
            "Detail screen activated"
        );

        let fetch = async {
            tokio::try_join!(
                self.source.fetch_coin_detail(&self.coin_id),
                self.source.fetch_coin_history(
                    &self.coin_id,
                    self.config.history_days,
                    self.config.history_interval,
                ),
            )
        };

        let next = match bounded(self.config.activation_timeout, fetch).await {
            Ok((detail, history)) => {
                tracing::info!(
                    coin_id = %self.coin_id,
                    points = history.len(),
                    "Coin detail ready"
                );
                ScreenState::Ready(CoinDetailView { detail, history })
            }
            Err(e) => {
                tracing::error!(coin_id = %self.coin_id, error = %e, "Failed to fetch coin detail");
                ScreenState::failed()
            }
        };

        if !self.slot.settle(token, next) {
            tracing::debug!(
                coin_id = %self.coin_id,
                activation = token.value(),
                "Discarding result for inactive detail screen"
            );
        }

        token
    }

    /// Leave the screen; requests still in flight will not change its state
    pub fn deactivate(&self) {
        self.slot.end();
        tracing::debug!(coin_id = %self.coin_id, "Detail screen deactivated");
    }

    /// Current screen state
    pub fn state(&self) -> ScreenState<CoinDetailView> {
        self.slot.snapshot()
    }

    /// Watch state changes
    pub fn subscribe(&self) -> watch::Receiver<ScreenState<CoinDetailView>> {
        self.slot.subscribe()
    }

    /// Chart series for the current history, when `Ready`
    pub fn chart_series(&self) -> Option<ChartSeries> {
        self.slot.map_ready(CoinDetailView::chart)
    }
}
