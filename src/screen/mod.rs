//! Screen controllers
//!
//! One controller per screen activation. Each tracks a
//! `Pending -> Ready | Failed` state machine over its upstream fetches and
//! discards results that arrive after the activation it belongs to.

mod detail;
mod list;
mod navigation;
mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use detail::{CoinDetailView, DetailScreenController};
pub use list::ListScreenController;
pub use navigation::{NavigationError, NavigationRequest, Navigator};
pub use state::{ActivationToken, ScreenState, FAILED_MESSAGE};

use crate::config::Config;
use crate::market::HistoryInterval;
use std::time::Duration;

/// Runtime settings shared by the screen controllers
#[derive(Debug, Clone)]
pub struct ScreenConfig {
    /// Upper bound on how long an activation may stay `Pending`
    pub activation_timeout: Duration,
    /// Days of history requested for the detail chart
    pub history_days: u32,
    /// Sampling interval of the detail history
    pub history_interval: HistoryInterval,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            activation_timeout: Duration::from_secs(15),
            history_days: 7,
            history_interval: HistoryInterval::Daily,
        }
    }
}

impl From<&Config> for ScreenConfig {
    fn from(config: &Config) -> Self {
        Self {
            activation_timeout: Duration::from_secs(config.screen.activation_timeout_secs),
            history_days: config.chart.days,
            history_interval: config.chart.interval,
        }
    }
}
