//! Screen wiring
//!
//! Owns the list screen and the navigation receiver, and turns each
//! navigation request into a fresh detail screen.

use crate::market::MarketDataSource;
use crate::screen::{
    DetailScreenController, ListScreenController, NavigationRequest, Navigator, ScreenConfig,
};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Navigation requests buffered before the receiver catches up
const NAVIGATION_BUFFER: usize = 16;

/// The list screen plus the navigation boundary to the detail screen
pub struct App<S: ?Sized> {
    source: Arc<S>,
    config: ScreenConfig,
    list: ListScreenController<S>,
    navigation: mpsc::Receiver<NavigationRequest>,
}

impl<S: MarketDataSource + ?Sized> App<S> {
    pub fn new(source: Arc<S>, config: ScreenConfig) -> Self {
        let (navigator, navigation) = Navigator::channel(NAVIGATION_BUFFER);
        let list = ListScreenController::new(source.clone(), navigator, config.clone());

        Self {
            source,
            config,
            list,
            navigation,
        }
    }

    pub fn list(&self) -> &ListScreenController<S> {
        &self.list
    }

    /// Open the screen a navigation request points at
    ///
    /// The returned controller has not been activated yet.
    pub fn route(&self, request: NavigationRequest) -> DetailScreenController<S> {
        match request {
            NavigationRequest::CoinDetail { coin_id } => {
                tracing::debug!(coin_id = %coin_id, "Opening detail screen");
                DetailScreenController::new(self.source.clone(), coin_id, self.config.clone())
            }
        }
    }

    /// Wait for the next navigation request and open its screen
    ///
    /// Returns `None` if the navigation channel has closed.
    pub async fn next_detail(&mut self) -> Option<DetailScreenController<S>> {
        let request = self.navigation.recv().await?;
        Some(self.route(request))
    }
}
