//! Tracing subscriber bootstrap driven by [`LoggingConfig`]

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};

/// Build the filter for a logging configuration.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global tracing subscriber.
///
/// Returns `false` when a subscriber was already installed, which makes the
/// call safe to repeat from tests.
pub fn init_tracing(config: &LoggingConfig) -> bool {
    let builder = fmt()
        .with_env_filter(env_filter(config))
        .with_ansi(config.colored)
        .with_file(config.source_location)
        .with_line_number(config.source_location);

    let installed = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };

    if installed.is_ok() {
        tracing::debug!(level = %config.level, format = ?config.format, "Tracing initialised");
    }
    installed.is_ok()
}
