//! Tracing subscriber setup for the `busy` binary
//!
//! Level precedence: `BUSY_LOG`, then `-v` flags, then `[log] level` from
//! the config file, then `warn`. Logs go to stderr.

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::BusyConfig;

pub const LOG_ENV: &str = "BUSY_LOG";

const DEFAULT_LEVEL: &str = "warn";

/// The filter directive to install for the given `-v` count and config.
pub fn filter_directive(verbosity: u8, config: &BusyConfig) -> String {
    if let Ok(directive) = std::env::var(LOG_ENV) {
        if !directive.trim().is_empty() {
            return directive;
        }
    }

    match verbosity {
        0 => config
            .log
            .level
            .clone()
            .unwrap_or_else(|| DEFAULT_LEVEL.to_string()),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

pub fn init_logging(verbosity: u8, config: &BusyConfig) -> Result<()> {
    let directive = filter_directive(verbosity, config);
    let filter = EnvFilter::try_new(&directive)
        .with_context(|| format!("Invalid log filter '{directive}'"))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}
