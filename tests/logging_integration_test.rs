// Integration test for file logging
// Note: initializes the global subscriber, so it lives in its own test binary
// with a single test.

use aiproxy_config::infrastructure::logging::logger::LOG_FILE_NAME;
use aiproxy_config::infrastructure::logging::RotationPolicy;
use aiproxy_config::{LogConfig, LoggerImpl, LoggingConfig};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_logging_to_configured_directory() {
    let temp_dir = TempDir::new().unwrap();
    let log_dir = temp_dir.path().join("logs");

    let logging = LoggingConfig {
        dir: log_dir.clone(),
        level: "info".to_string(),
    };
    let mut config = LogConfig::from(&logging);
    config.enable_console = false;
    config.rotation = RotationPolicy::Never;

    // RUST_LOG would override the configured level
    let logger = temp_env::with_var_unset("RUST_LOG", || LoggerImpl::init(&config).unwrap());
    assert!(logger.writes_to_file());

    tracing::info!(component = "test", "file logging works");
    tracing::debug!("below threshold");

    // Dropping the logger flushes the non-blocking writer
    drop(logger);

    let contents = fs::read_to_string(log_dir.join(LOG_FILE_NAME)).unwrap();
    let lines: Vec<serde_json::Value> = contents
        .lines()
        .map(|line| serde_json::from_str(line).expect("each line is JSON"))
        .collect();

    assert!(lines
        .iter()
        .any(|line| line["fields"]["message"] == "file logging works"
            && line["fields"]["component"] == "test"));
    assert!(lines
        .iter()
        .all(|line| line["fields"]["message"] != "below threshold"));
}
