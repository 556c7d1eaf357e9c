//! Configuration types for coinscope

use crate::market::{HistoryInterval, COINGECKO_API_URL};
use crate::telemetry::LogFormat;
use serde::Deserialize;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub chart: ChartConfig,
    #[serde(default)]
    pub screen: ScreenSection,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Upstream market-data API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout (seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Quote currency
    #[serde(default = "default_vs_currency")]
    pub vs_currency: String,

    /// Category filter for the ranked list
    #[serde(default = "default_category")]
    pub category: String,

    /// Ordering of the ranked list
    #[serde(default = "default_order")]
    pub order: String,

    /// Number of coins in the ranked list
    #[serde(default = "default_per_page")]
    pub per_page: u32,

    /// Price change window shown in the list
    #[serde(default = "default_price_change_percentage")]
    pub price_change_percentage: String,

    /// Decimal places requested for prices
    #[serde(default = "default_precision")]
    pub precision: u32,
}

fn default_base_url() -> String {
    COINGECKO_API_URL.to_string()
}
fn default_timeout_secs() -> u64 {
    10
}
fn default_vs_currency() -> String {
    "usd".to_string()
}
fn default_category() -> String {
    "layer-1".to_string()
}
fn default_order() -> String {
    "market_cap_desc".to_string()
}
fn default_per_page() -> u32 {
    50
}
fn default_price_change_percentage() -> String {
    "24h".to_string()
}
fn default_precision() -> u32 {
    6
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            vs_currency: default_vs_currency(),
            category: default_category(),
            order: default_order(),
            per_page: default_per_page(),
            price_change_percentage: default_price_change_percentage(),
            precision: default_precision(),
        }
    }
}

/// Detail chart history configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ChartConfig {
    /// Days of history to request
    #[serde(default = "default_days")]
    pub days: u32,

    /// Sampling interval
    #[serde(default)]
    pub interval: HistoryInterval,
}

fn default_days() -> u32 {
    7
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            days: default_days(),
            interval: HistoryInterval::Daily,
        }
    }
}

/// Screen activation configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ScreenSection {
    /// Longest time a screen may stay pending (seconds)
    #[serde(default = "default_activation_timeout_secs")]
    pub activation_timeout_secs: u64,
}

fn default_activation_timeout_secs() -> u64 {
    15
}

impl Default for ScreenSection {
    fn default() -> Self {
        Self {
            activation_timeout_secs: default_activation_timeout_secs(),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub log_format: LogFormat,

    /// Serve Prometheus metrics on this port when set
    #[serde(default)]
    pub metrics_port: Option<u16>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::Pretty,
            metrics_port: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
