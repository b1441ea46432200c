//! Tracing subscriber setup. Logs go to stderr; stdout carries the report.

use crate::config::LoggingConfig;
use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` overrides the configured level.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let result = match config.format.as_str() {
        "compact" => builder.compact().try_init(),
        _ => builder.pretty().try_init(),
    };

    result.map_err(|e| anyhow!("Failed to initialise logging: {e}"))?;
    tracing::debug!("Logging initialised at level '{}'", config.level);
    Ok(())
}
