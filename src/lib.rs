//! coinscope: Ranked crypto market list and coin detail charts
//!
//! This library provides the core components for:
//! - Market data access against the CoinGecko API
//! - List and detail screen controllers with stale-result protection
//! - Navigation from the list to a coin's detail screen
//! - Chart series preparation from price history
//! - Text rendering of both screens
//! - Logging and metrics

pub mod app;
pub mod chart;
pub mod cli;
pub mod config;
pub mod market;
pub mod screen;
pub mod telemetry;
pub mod view;
