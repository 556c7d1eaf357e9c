//! CLI interface for coinscope
//!
//! Provides subcommands for:
//! - `list`: Show the ranked coin list, optionally opening one coin
//! - `detail`: Show one coin's price and 7-day chart
//! - `config`: Show the effective configuration

mod detail;
mod list;

pub use detail::DetailArgs;
pub use list::ListArgs;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "coinscope")]
#[command(about = "Ranked crypto market list and 7-day price charts from CoinGecko")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the ranked coin list
    List(ListArgs),
    /// Show a coin's price and chart
    Detail(DetailArgs),
    /// Show configuration
    Config,
}

/// Output format for screen data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Table,
    /// Ready payload as JSON
    Json,
}
