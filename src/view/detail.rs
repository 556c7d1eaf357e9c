//! Coin detail and chart rendering

use super::format::dollars;
use super::render_pending_or_failed;
use crate::chart::ChartSeries;
use crate::screen::{CoinDetailView, ScreenState};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt::Write;

/// Width of the longest chart bar
const BAR_WIDTH: usize = 30;

/// Render a chart series as one labelled bar per point
pub fn render_chart(series: &ChartSeries) -> String {
    if series.is_empty() {
        return "No chart data\n".to_string();
    }

    let min = series.values.iter().copied().min().unwrap_or_default();
    let max = series.values.iter().copied().max().unwrap_or_default();
    let range = max - min;

    let mut out = String::new();
    for (label, value) in series.points() {
        let cells = if range.is_zero() {
            BAR_WIDTH
        } else {
            // Shortest bar still shows one cell
            let scaled = (value - min) / range * Decimal::from(BAR_WIDTH - 1);
            scaled.round().to_usize().unwrap_or(0) + 1
        };
        let bar = "#".repeat(cells);
        let _ = writeln!(out, "{:<7} {:<3$} {}", label, bar, value.normalize(), BAR_WIDTH);
    }
    out
}

/// Render the detail screen
///
/// `currency` selects the quoted price, `days` titles the chart.
pub fn render_detail(state: &ScreenState<CoinDetailView>, currency: &str, days: u32) -> String {
    let view = match state {
        ScreenState::Ready(view) => view,
        other => return render_pending_or_failed(other),
    };

    let detail = &view.detail;
    let price = dollars(detail.price_in(currency), |p| p.normalize().to_string());

    let mut out = String::new();
    let _ = writeln!(out, "- {} -", detail.name);
    let _ = writeln!(out, "[{}]", detail.display_symbol());
    let _ = writeln!(out, "Current Price: {}", price);
    let _ = writeln!(out);
    let _ = writeln!(out, "{} Days Chart", days);
    out.push_str(&render_chart(&view.chart()));
    out
}
