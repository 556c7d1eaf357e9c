//! Detail command implementation

use super::OutputFormat;
use crate::config::Config;
use crate::market::{CoinGeckoClient, CoinGeckoConfig, MarketDataSource};
use crate::screen::{CoinDetailView, DetailScreenController, ScreenConfig, ScreenState};
use crate::view;
use clap::Args;
use std::sync::Arc;

#[derive(Args, Debug)]
pub struct DetailArgs {
    /// Coin identifier (e.g., "bitcoin")
    pub coin_id: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl DetailArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let client = CoinGeckoClient::with_config(CoinGeckoConfig::from(&config.api))?;
        let detail =
            DetailScreenController::new(Arc::new(client), &self.coin_id, ScreenConfig::from(config));

        show_detail(&detail, config, self.format).await
    }
}

/// Activate a detail screen and print its settled state
pub(super) async fn show_detail<S: MarketDataSource + ?Sized>(
    detail: &DetailScreenController<S>,
    config: &Config,
    format: OutputFormat,
) -> anyhow::Result<()> {
    detail.activate().await;
    let state = detail.state();

    match (format, &state) {
        (OutputFormat::Json, ScreenState::Ready(view)) => {
            let value = detail_json(view, &config.api.vs_currency);
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        _ => print!(
            "{}",
            view::render_detail(&state, &config.api.vs_currency, config.chart.days)
        ),
    }

    if state.is_failed() {
        anyhow::bail!("Detail for {} unavailable", detail.coin_id());
    }
    Ok(())
}

/// JSON document for a ready detail screen
pub(super) fn detail_json(view: &CoinDetailView, currency: &str) -> serde_json::Value {
    serde_json::json!({
        "id": view.detail.id,
        "name": view.detail.name,
        "symbol": view.detail.display_symbol(),
        "currency": currency,
        "current_price": view.detail.price_in(currency),
        "chart": view.chart(),
    })
}
