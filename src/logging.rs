use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Initialise the global subscriber. Logs go to stderr; `RUST_LOG` wins over
/// the configured level.
pub fn init_logging(config: &LoggingConfig, verbose: bool) {
    let level = if verbose {
        Level::DEBUG
    } else {
        config.level.parse().unwrap_or(Level::INFO)
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = if config.format == "json" {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if let Err(e) = result {
        eprintln!("Logging already initialised: {e}");
    }
}
