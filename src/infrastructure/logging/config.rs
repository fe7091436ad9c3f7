use clap::ValueEnum;
use std::path::PathBuf;

use crate::domain::models::config::LoggingConfig;

/// Logger setup derived from the resolved configuration
///
/// Level and directory come from the snapshot's `log` section; the remaining
/// knobs are set from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Console format (json, pretty); files are always JSON
    pub format: LogFormat,

    /// Directory for log files (if None logs only to the console)
    pub log_dir: Option<PathBuf>,

    /// Enable console logging on stderr
    pub enable_console: bool,

    /// Log rotation policy
    pub rotation: RotationPolicy,
}

/// Console log format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// One JSON object per event
    Json,
    /// Human-readable multi-line output
    Pretty,
}

/// How often the log file is rolled over
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum RotationPolicy {
    /// New file every day
    #[default]
    Daily,
    /// New file every hour
    Hourly,
    /// Single file
    Never,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Json,
            log_dir: None,
            enable_console: true,
            rotation: RotationPolicy::default(),
        }
    }
}

impl From<&LoggingConfig> for LogConfig {
    fn from(logging: &LoggingConfig) -> Self {
        Self {
            level: logging.level.clone(),
            log_dir: Some(logging.dir.clone()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_logging_section() {
        let logging = LoggingConfig {
            dir: PathBuf::from("/var/log/aiproxy"),
            level: "debug".to_string(),
        };

        let config = LogConfig::from(&logging);
        assert_eq!(config.level, "debug");
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/aiproxy")));
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.rotation, RotationPolicy::Daily);
        assert!(config.enable_console);
    }

    #[test]
    fn test_default_is_console_only() {
        let config = LogConfig::default();
        assert!(config.log_dir.is_none());
        assert!(config.enable_console);
    }
}
