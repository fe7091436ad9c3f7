//! CLI type definitions
//!
//! This module contains clap structures that define the CLI interface.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::logging::{LogFormat, RotationPolicy};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "aiproxy-config")]
#[command(about = "Resolve and print the aiproxy runtime configuration", long_about = None)]
#[command(version)]
pub struct Cli {
    /// YAML config file; a missing file falls back to defaults
    #[arg(short, long, env = "AIPROXY_CONFIG", default_value = ConfigLoader::DEFAULT_PATH)]
    pub config: PathBuf,

    /// Output format for the resolved snapshot
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,

    /// Log to the console only, without writing into the configured log directory
    #[arg(long)]
    pub no_file_log: bool,

    /// Disable console logging on stderr
    #[arg(long)]
    pub no_console_log: bool,

    /// Console log format
    #[arg(long, value_enum, default_value_t = LogFormat::Json)]
    pub log_format: LogFormat,

    /// Log file rotation
    #[arg(long, value_enum, default_value_t = RotationPolicy::Daily)]
    pub log_rotation: RotationPolicy,
}

/// Rendering of the resolved snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// YAML document
    Yaml,
    /// Pretty-printed JSON
    Json,
}
