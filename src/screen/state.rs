//! Screen state and activation tracking

use crate::market::NetworkError;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::watch;

/// Message shown when a screen's fetch did not succeed
pub const FAILED_MESSAGE: &str = "Error Fetching Data. Try Again Later";

/// State of one screen activation
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenState<T> {
    /// Waiting for the upstream fetch
    Pending,
    /// Fetch succeeded
    Ready(T),
    /// Fetch failed; carries the user-facing message
    Failed(String),
}

impl<T> ScreenState<T> {
    /// Failed state with the standard user-facing message
    pub fn failed() -> Self {
        ScreenState::Failed(FAILED_MESSAGE.to_string())
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ScreenState::Pending)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ScreenState::Ready(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ScreenState::Failed(_))
    }

    /// Ready payload, if any
    pub fn ready(&self) -> Option<&T> {
        match self {
            ScreenState::Ready(payload) => Some(payload),
            _ => None,
        }
    }

    pub fn into_ready(self) -> Option<T> {
        match self {
            ScreenState::Ready(payload) => Some(payload),
            _ => None,
        }
    }
}

/// Identifies one activation of a screen
///
/// Tokens increase monotonically per controller; only the latest one may
/// change the screen's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActivationToken(u64);

impl ActivationToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Per-controller state cell guarded by an activation generation
pub(crate) struct ScreenSlot<T> {
    generation: AtomicU64,
    state: watch::Sender<ScreenState<T>>,
}

impl<T> ScreenSlot<T> {
    pub fn new() -> Self {
        let (state, _) = watch::channel(ScreenState::Pending);
        Self {
            generation: AtomicU64::new(0),
            state,
        }
    }

    /// Start a new activation: issue a fresh token and reset to `Pending`
    pub fn begin(&self) -> ActivationToken {
        let token = ActivationToken(self.generation.fetch_add(1, Ordering::SeqCst) + 1);
        self.state.send_replace(ScreenState::Pending);
        token
    }

    /// End the current activation; results still in flight are discarded
    pub fn end(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    pub fn is_current(&self, token: ActivationToken) -> bool {
        self.generation.load(Ordering::SeqCst) == token.0
    }

    /// Apply the terminal state for `token`
    ///
    /// Returns false, leaving the state untouched, when the token is stale or
    /// the activation has already settled.
    pub fn settle(&self, token: ActivationToken, next: ScreenState<T>) -> bool {
        self.state.send_if_modified(|state| {
            if !self.is_current(token) || !state.is_pending() {
                return false;
            }
            *state = next;
            true
        })
    }

    pub fn subscribe(&self) -> watch::Receiver<ScreenState<T>> {
        self.state.subscribe()
    }

    /// Apply `f` to the ready payload without cloning it
    pub fn map_ready<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.state.borrow().ready().map(f)
    }
}

impl<T: Clone> ScreenSlot<T> {
    pub fn snapshot(&self) -> ScreenState<T> {
        self.state.borrow().clone()
    }
}

/// Run a fetch with an upper bound on how long the screen stays `Pending`
pub(crate) async fn bounded<T, F>(limit: Duration, fetch: F) -> Result<T, NetworkError>
where
    F: Future<Output = Result<T, NetworkError>>,
{
    tokio::time::timeout(limit, fetch).await?
}
