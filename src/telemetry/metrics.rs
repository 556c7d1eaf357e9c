//! Prometheus metrics

use metrics_exporter_prometheus::PrometheusBuilder;
use std::time::Duration;

/// Upstream request metric types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatencyMetric {
    /// Ranked collection request
    Collection,
    /// Coin detail request
    Detail,
    /// Price history request
    History,
}

impl LatencyMetric {
    /// Endpoint label attached to every sample
    pub fn endpoint(&self) -> &'static str {
        match self {
            LatencyMetric::Collection => "markets",
            LatencyMetric::Detail => "coin",
            LatencyMetric::History => "market_chart",
        }
    }
}

/// Record a request latency measurement
pub fn record_latency(metric: LatencyMetric, duration: Duration) {
    let value_ms = duration.as_secs_f64() * 1000.0;

    metrics::histogram!("coinscope_fetch_latency_ms", "endpoint" => metric.endpoint())
        .record(value_ms);

    tracing::debug!(
        endpoint = metric.endpoint(),
        value_ms,
        "Recording latency"
    );
}

/// Count a completed request by outcome
pub fn record_fetch(metric: LatencyMetric, ok: bool) {
    let outcome = if ok { "ok" } else { "error" };

    metrics::counter!(
        "coinscope_fetch_total",
        "endpoint" => metric.endpoint(),
        "outcome" => outcome
    )
    .increment(1);
}

/// Serve Prometheus metrics over HTTP on `port`
///
/// Must be called from within a tokio runtime.
pub fn init_metrics(port: u16) -> anyhow::Result<()> {
    PrometheusBuilder::new()
        .with_http_listener(([0, 0, 0, 0], port))
        .install()
        .map_err(|e| anyhow::anyhow!("Failed to install metrics exporter: {}", e))?;

    tracing::info!(port, "Prometheus metrics exporter listening");
    Ok(())
}
