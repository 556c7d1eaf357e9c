//! Ranked list screen controller

use super::state::{bounded, ScreenSlot};
use super::{ActivationToken, NavigationError, Navigator, ScreenConfig, ScreenState};
use crate::market::{Collection, MarketDataSource};
use std::sync::Arc;
use tokio::sync::watch;

/// Drives the ranked list screen
///
/// Each activation fetches the collection exactly once and settles in
/// `Ready` or `Failed`. There is no retry; a fresh activation fetches again.
pub struct ListScreenController<S: ?Sized> {
    source: Arc<S>,
    navigator: Navigator,
    config: ScreenConfig,
    slot: ScreenSlot<Collection>,
}

impl<S: MarketDataSource + ?Sized> ListScreenController<S> {
    /// Create a controller; the screen is `Pending` until activated
    pub fn new(source: Arc<S>, navigator: Navigator, config: ScreenConfig) -> Self {
        Self {
            source,
            navigator,
            config,
            slot: ScreenSlot::new(),
        }
    }

    /// Activate the screen and fetch the ranked collection
    ///
    /// Resolves once the fetch has settled. If the screen was deactivated
    /// or re-activated in the meantime, the result is dropped.
    pub async fn activate(&self) -> ActivationToken {
        let token = self.slot.begin();
        tracing::debug!(activation = token.value(), "List screen activated");

        let result = bounded(
            self.config.activation_timeout,
            self.source.fetch_ranked_collection(),
        )
        .await;

        let next = match result {
            Ok(collection) => {
                tracing::info!(coins = collection.len(), "Ranked collection ready");
                ScreenState::Ready(collection)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch ranked collection");
                ScreenState::failed()
            }
        };

        if !self.slot.settle(token, next) {
            tracing::debug!(
                activation = token.value(),
                "Discarding collection for inactive list screen"
            );
        }

        token
    }

    /// Leave the screen; a fetch still in flight will not change its state
    pub fn deactivate(&self) {
        self.slot.end();
        tracing::debug!("List screen deactivated");
    }

    /// Current screen state
    pub fn state(&self) -> ScreenState<Collection> {
        self.slot.snapshot()
    }

    /// Watch state changes
    pub fn subscribe(&self) -> watch::Receiver<ScreenState<Collection>> {
        self.slot.subscribe()
    }

    /// Select a coin and request its detail screen
    ///
    /// The id must belong to the collection currently shown.
    pub async fn select_coin(&self, coin_id: &str) -> Result<(), NavigationError> {
        let known = self
            .slot
            .map_ready(|collection| collection.iter().any(|coin| coin.id == coin_id))
            .ok_or(NavigationError::NotReady)?;

        if !known {
            return Err(NavigationError::UnknownCoin(coin_id.to_string()));
        }

        tracing::info!(coin_id = %coin_id, "Coin selected");
        self.navigator.open_coin_detail(coin_id).await
    }

    /// Select the coin at a 1-based rank in the current collection
    pub async fn select_rank(&self, rank: usize) -> Result<String, NavigationError> {
        let coin_id = self
            .slot
            .map_ready(|collection| {
                rank.checked_sub(1)
                    .and_then(|i| collection.get(i))
                    .map(|coin| coin.id.clone())
            })
            .ok_or(NavigationError::NotReady)?
            .ok_or_else(|| NavigationError::UnknownCoin(format!("rank {}", rank)))?;

        self.select_coin(&coin_id).await?;
        Ok(coin_id)
    }
}
