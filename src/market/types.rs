//! Market data types
//!
//! Summary rows for the ranked list, per-coin detail, and the raw price
//! history that feeds the chart.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A coin as it appears in the ranked collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinSummary {
    /// Stable upstream identifier (e.g., "bitcoin")
    pub id: String,
    /// Display name
    pub name: String,
    /// Ticker symbol as delivered (usually lowercase)
    pub symbol: String,
    /// Logo URI
    pub image: String,
    /// Current price in the configured currency
    pub current_price: Option<Decimal>,
    /// Market capitalization in the configured currency
    pub market_cap: Option<Decimal>,
    /// Price change over the last 24 hours, in percent
    pub price_change_percentage_24h: Option<Decimal>,
}

impl CoinSummary {
    /// Symbol normalized for display
    pub fn display_symbol(&self) -> String {
        self.symbol.to_uppercase()
    }
}

/// Ranked collection, in upstream order (descending market cap)
pub type Collection = Vec<CoinSummary>;

/// Per-coin detail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinDetail {
    pub id: String,
    pub name: String,
    pub symbol: String,
    /// Current price keyed by lowercase currency code
    pub current_price: HashMap<String, Decimal>,
}

impl CoinDetail {
    /// Current price in the given currency, if quoted
    pub fn price_in(&self, currency: &str) -> Option<Decimal> {
        self.current_price
            .get(&currency.to_lowercase())
            .copied()
    }

    /// Symbol normalized for display
    pub fn display_symbol(&self) -> String {
        self.symbol.to_uppercase()
    }
}

/// One raw history observation
///
/// The price stays a float: upstream may send `null`, and the chart
/// transform is responsible for dropping unusable points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Epoch milliseconds
    pub timestamp_ms: i64,
    pub price: Option<f64>,
}

impl PricePoint {
    pub fn new(timestamp_ms: i64, price: f64) -> Self {
        Self {
            timestamp_ms,
            price: Some(price),
        }
    }
}

/// Chronologically ascending price history
pub type TimeSeries = Vec<PricePoint>;

/// Convert an upstream float to a Decimal, rejecting NaN and infinities
pub fn decimal_from_f64(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_f64(value)
}

/// Sampling interval for history requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryInterval {
    #[default]
    Daily,
}

impl HistoryInterval {
    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryInterval::Daily => "daily",
        }
    }
}

impl fmt::Display for HistoryInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
