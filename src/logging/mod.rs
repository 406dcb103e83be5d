//! Structured logging bootstrap.

use crate::config::{LogFormat, LoggingConfig};
use tracing_subscriber::EnvFilter;

/// Build the tracing filter directives string from a LoggingConfig.
///
/// `RUST_LOG` takes precedence over the configured level when set.
pub fn build_filter_directives(config: &LoggingConfig) -> String {
    std::env::var("RUST_LOG").unwrap_or_else(|_| config.level.clone())
}

/// Install the global tracing subscriber.
///
/// Diagnostics go to stderr so that table and JSON command output on stdout
/// stays machine-parseable. Safe to call once per process; later calls are
/// ignored.
pub fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::new(build_filter_directives(config));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = match config.format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    // A subscriber may already be installed (e.g. in tests); that's fine.
    let _ = result;
}
