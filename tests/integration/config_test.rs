//! Configuration loading tests

use coinscope::config::Config;
use coinscope::screen::ScreenConfig;
use std::io::Write;
use std::time::Duration;

#[test]
fn test_config_example_loads() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config.toml.example");
    let config = Config::load(path).unwrap();

    assert_eq!(config.api.vs_currency, "usd");
    assert_eq!(config.api.category, "layer-1");
    assert_eq!(config.api.per_page, 50);
    assert_eq!(config.chart.days, 7);
    assert_eq!(config.telemetry.log_level, "warn");
}

#[test]
fn test_screen_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[screen]\nactivation_timeout_secs = 3\n\n[chart]\ndays = 30").unwrap();

    let config = Config::load(file.path()).unwrap();
    let screen = ScreenConfig::from(&config);

    assert_eq!(screen.activation_timeout, Duration::from_secs(3));
    assert_eq!(screen.history_days, 30);
}

#[test]
fn test_invalid_toml_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[api\nper_page = ").unwrap();

    assert!(Config::load(file.path()).is_err());
}
