use clap::Parser;
use coinscope::cli::{Cli, Commands};
use coinscope::config::Config;
use std::path::Path;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = if Path::new(&cli.config).exists() {
        Config::load(&cli.config)?
    } else {
        eprintln!("Warning: Config file {} not found", cli.config);
        eprintln!("Using default configuration");
        Config::default()
    };

    // Initialize telemetry
    let _telemetry = coinscope::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::List(args) => {
            tracing::info!("Opening ranked list");
            args.execute(&config).await?;
        }
        Commands::Detail(args) => {
            tracing::info!(coin_id = %args.coin_id, "Opening coin detail");
            args.execute(&config).await?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!("  API: {}", config.api.base_url);
            println!(
                "  List: category={} currency={} per_page={} order={}",
                config.api.category, config.api.vs_currency, config.api.per_page, config.api.order
            );
            println!(
                "  Chart: {} days, {} interval",
                config.chart.days, config.chart.interval
            );
            println!(
                "  Screen timeout: {}s",
                config.screen.activation_timeout_secs
            );
            println!(
                "  Telemetry: level={} format={:?} metrics_port={:?}",
                config.telemetry.log_level, config.telemetry.log_format, config.telemetry.metrics_port
            );
        }
    }

    Ok(())
}
