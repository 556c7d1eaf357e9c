//! End-to-end integration tests: list screen through detail screen

use crate::support::ScriptedMarket;
use coinscope::app::App;
use coinscope::chart::CHART_WINDOW;
use coinscope::market::{HistoryInterval, MarketDataSource};
use coinscope::screen::{NavigationError, ScreenConfig, ScreenState, FAILED_MESSAGE};
use coinscope::view;
use std::sync::Arc;

#[tokio::test]
async fn test_select_third_coin_and_open_detail() {
    let market = Arc::new(ScriptedMarket::new(50));
    let mut app = App::new(market.clone(), ScreenConfig::default());

    assert!(app.list().state().is_pending());
    app.list().activate().await;

    let state = app.list().state();
    let collection = state.ready().unwrap();
    assert_eq!(collection.len(), 50);

    let coin_id = app.list().select_rank(3).await.unwrap();
    assert_eq!(coin_id, "ethereum");

    let detail = app.next_detail().await.unwrap();
    assert_eq!(detail.coin_id(), "ethereum");
    assert!(detail.state().is_pending());

    detail.activate().await;

    let state = detail.state();
    let view = state.ready().unwrap();
    assert_eq!(view.detail.id, "ethereum");

    let chart = detail.chart_series().unwrap();
    assert!(chart.len() <= CHART_WINDOW);
    assert_eq!(chart.labels.first().map(String::as_str), Some("Jan 2"));
    assert_eq!(chart.labels.last().map(String::as_str), Some("Jan 8"));

    assert_eq!(
        *market.history_requests.lock().unwrap(),
        vec![("ethereum".to_string(), 7, HistoryInterval::Daily)]
    );
}

#[tokio::test]
async fn test_rendered_screens() {
    let mut app = App::new(Arc::new(ScriptedMarket::new(5)), ScreenConfig::default());
    app.list().activate().await;

    let list = view::render_list(&app.list().state());
    assert!(list.contains("  1. bitcoin (BITC)"));
    assert!(list.contains("  3. ethereum (ETHE)"));
    assert!(list.contains(view::ATTRIBUTION));

    app.list().select_coin("ethereum").await.unwrap();
    let detail = app.next_detail().await.unwrap();
    detail.activate().await;

    let rendered = view::render_detail(&detail.state(), "usd", 7);
    assert!(rendered.contains("- ethereum -"));
    assert!(rendered.contains("[ETH]"));
    assert!(rendered.contains("Current Price: $2250.75"));
    assert!(rendered.contains("7 Days Chart"));
}

#[tokio::test]
async fn test_list_failure_shows_message() {
    let app = App::new(Arc::new(ScriptedMarket::unavailable()), ScreenConfig::default());
    app.list().activate().await;

    let state = app.list().state();
    assert_eq!(state, ScreenState::Failed(FAILED_MESSAGE.to_string()));
    assert_eq!(view::render_list(&state), format!("{}\n", FAILED_MESSAGE));

    assert_eq!(
        app.list().select_coin("bitcoin").await,
        Err(NavigationError::NotReady)
    );
}

#[tokio::test]
async fn test_detail_failure_does_not_affect_list() {
    let market = Arc::new(ScriptedMarket::new(5).with_failing_detail("ethereum"));
    let mut app = App::new(market, ScreenConfig::default());
    app.list().activate().await;

    app.list().select_coin("ethereum").await.unwrap();
    let detail = app.next_detail().await.unwrap();
    detail.activate().await;

    assert!(detail.state().is_failed());
    assert!(detail.chart_series().is_none());
    assert!(app.list().state().is_ready());
}

#[tokio::test]
async fn test_unknown_coin_not_navigated() {
    let app = App::new(Arc::new(ScriptedMarket::new(3)), ScreenConfig::default());
    app.list().activate().await;

    assert_eq!(
        app.list().select_coin("dogecoin").await,
        Err(NavigationError::UnknownCoin("dogecoin".to_string()))
    );
}

#[tokio::test]
async fn test_dyn_source() {
    let source: Arc<dyn MarketDataSource> = Arc::new(ScriptedMarket::new(2));
    let mut app = App::new(source, ScreenConfig::default());
    app.list().activate().await;

    app.list().select_rank(2).await.unwrap();
    let detail = app.next_detail().await.unwrap();
    assert_eq!(detail.coin_id(), "binancecoin");
}
