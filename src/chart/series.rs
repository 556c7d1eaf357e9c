//! Price history to chart series transform

use crate::market::{decimal_from_f64, PricePoint};
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Maximum number of points kept for the chart (trailing window)
pub const CHART_WINDOW: usize = 7;

/// Chart-ready series: index-aligned labels and values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Short UTC date labels (e.g., "Jan 5")
    pub labels: Vec<String>,
    /// Prices in the quote currency
    pub values: Vec<Decimal>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// An empty series means there is nothing to draw
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate `(label, value)` pairs in order
    pub fn points(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

/// Format an epoch-millisecond timestamp as a short month/day label
///
/// Labels are always rendered in UTC.
pub fn format_label(timestamp_ms: i64) -> Option<String> {
    let ts = Utc.timestamp_millis_opt(timestamp_ms).single()?;
    Some(ts.format("%b %-d").to_string())
}

/// Transform a raw price history into a chart series
///
/// Points with a missing or non-finite price, or an unrepresentable
/// timestamp, are excluded; the last [`CHART_WINDOW`] remaining points are
/// kept in their input order.
pub fn transform(raw: &[PricePoint]) -> ChartSeries {
    let usable: Vec<(String, Decimal)> = raw
        .iter()
        .filter_map(|point| {
            let value = point.price.and_then(decimal_from_f64)?;
            let label = format_label(point.timestamp_ms)?;
            Some((label, value))
        })
        .collect();

    let skipped = raw.len() - usable.len();
    if skipped > 0 {
        tracing::debug!(skipped, "Excluded unusable history points from chart");
    }

    let start = usable.len().saturating_sub(CHART_WINDOW);
    let (labels, values) = usable.into_iter().skip(start).unzip();

    ChartSeries { labels, values }
}
