//! Navigation between screens
//!
//! The list screen emits requests; whoever owns the receiver opens the
//! next screen with the carried parameters.

use thiserror::Error;
use tokio::sync::mpsc;

/// A request to open another screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationRequest {
    /// Open the detail screen for a coin
    CoinDetail { coin_id: String },
}

/// Navigation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// Selection attempted before the list was ready
    #[error("Screen is not ready")]
    NotReady,
    /// Selected id is not in the current collection
    #[error("Unknown coin: {0}")]
    UnknownCoin(String),
    /// Nobody is listening for navigation requests
    #[error("Navigation channel closed")]
    Closed,
}

/// Sending half of the navigation channel
#[derive(Debug, Clone)]
pub struct Navigator {
    tx: mpsc::Sender<NavigationRequest>,
}

impl Navigator {
    /// Create a navigator and the receiver that consumes its requests
    pub fn channel(buffer: usize) -> (Self, mpsc::Receiver<NavigationRequest>) {
        let (tx, rx) = mpsc::channel(buffer);
        (Self { tx }, rx)
    }

    /// Request the detail screen for `coin_id`
    pub async fn open_coin_detail(&self, coin_id: impl Into<String>) -> Result<(), NavigationError> {
        let request = NavigationRequest::CoinDetail {
            coin_id: coin_id.into(),
        };

        tracing::debug!(?request, "Navigation requested");

        self.tx
            .send(request)
            .await
            .map_err(|_| NavigationError::Closed)
    }
}
