//! List command implementation

use super::detail::{detail_json, show_detail};
use super::OutputFormat;
use crate::app::App;
use crate::config::Config;
use crate::market::{CoinGeckoClient, CoinGeckoConfig, Collection, MarketDataSource};
use crate::screen::{DetailScreenController, ScreenConfig, ScreenState};
use crate::view;
use clap::Args;
use std::sync::Arc;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Open the detail screen of the coin at this rank (1-based)
    #[arg(long)]
    pub open: Option<usize>,

    /// Output format; with `--open`, JSON output is one `{list, detail}` object
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl ListArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let client = CoinGeckoClient::with_config(CoinGeckoConfig::from(&config.api))?;
        let mut app = App::new(Arc::new(client), ScreenConfig::from(config));

        app.list().activate().await;
        let state = app.list().state();

        let collection = match &state {
            ScreenState::Ready(collection) => collection,
            other => {
                print!("{}", view::render_list(other));
                anyhow::bail!("Ranked collection unavailable");
            }
        };

        match (self.format, self.open) {
            (OutputFormat::Table, None) => print!("{}", view::render_list(&state)),
            (OutputFormat::Table, Some(rank)) => {
                print!("{}", view::render_list(&state));
                let detail = open_rank(&mut app, rank).await?;
                println!();
                show_detail(&detail, config, OutputFormat::Table).await?;
            }
            (OutputFormat::Json, None) => {
                println!("{}", serde_json::to_string_pretty(collection)?);
            }
            (OutputFormat::Json, Some(rank)) => {
                let detail = open_rank(&mut app, rank).await?;
                detail.activate().await;
                let detail_state = detail.state();

                let ScreenState::Ready(ready) = &detail_state else {
                    let currency = &config.api.vs_currency;
                    print!(
                        "{}",
                        view::render_detail(&detail_state, currency, config.chart.days)
                    );
                    anyhow::bail!("Detail for {} unavailable", detail.coin_id());
                };

                let document = list_json(collection, detail_json(ready, &config.api.vs_currency));
                println!("{}", serde_json::to_string_pretty(&document)?);
            }
        }

        Ok(())
    }
}

/// Select the coin at `rank` and follow navigation to its detail screen
async fn open_rank<S: MarketDataSource + ?Sized>(
    app: &mut App<S>,
    rank: usize,
) -> anyhow::Result<DetailScreenController<S>> {
    let coin_id = app.list().select_rank(rank).await?;
    tracing::info!(rank, coin_id = %coin_id, "Opening coin from list");

    app.next_detail()
        .await
        .ok_or_else(|| anyhow::anyhow!("Navigation channel closed"))
}

/// Single JSON document holding the list and the opened detail
fn list_json(collection: &Collection, detail: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "list": collection,
        "detail": detail,
    })
}
