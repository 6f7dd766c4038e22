// Tracing setup

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::utils::error::{Result, ScaffoldError};

/// Install the global subscriber, writing to stderr at the given filter level
///
/// A second call is a no-op; the first subscriber stays installed.
pub fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level)
        .map_err(|e| ScaffoldError::ConfigError(format!("Invalid log_level '{level}': {e}")))?;

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    Ok(())
}
