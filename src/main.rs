//! aiproxy-config CLI entry point.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use aiproxy_config::cli::{Cli, ConfigReport};
use aiproxy_config::{Config, ConfigLoader, LogConfig, LoggerImpl};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config: Arc<Config> = Arc::new(
        ConfigLoader::resolve(&cli.config).context("Failed to resolve configuration")?,
    );

    let mut log_config = LogConfig::from(&config.logging);
    log_config.format = cli.log_format;
    log_config.rotation = cli.log_rotation;
    log_config.enable_console = !cli.no_console_log;
    if cli.no_file_log {
        log_config.log_dir = None;
    }
    let _logger = LoggerImpl::init(&log_config)?;

    tracing::info!(
        config = %cli.config.display(),
        port = config.server.port,
        mode = %config.server.mode,
        "configuration loaded"
    );

    let rendered = ConfigReport::new(&config).render(cli.format)?;
    println!("{rendered}");

    Ok(())
}
