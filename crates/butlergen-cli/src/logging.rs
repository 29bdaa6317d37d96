//! Console logging for the CLI

use butlergen_core::LogLevel;
use tracing_subscriber::EnvFilter;

/// Filter directive for `level`
pub fn directive(level: LogLevel) -> String {
    level.to_string()
}

/// Install a stderr fmt subscriber at `level`.
///
/// `RUST_LOG` takes precedence when set. Calling this twice is harmless.
pub fn init(level: LogLevel) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive(level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
