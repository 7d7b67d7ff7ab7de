//! Tracing subscriber initialization

use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogFormat, LoggingConfig};

/// Error type for logging initialization
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// The log filter could not be parsed
    #[error("Invalid log filter '{filter}': {reason}")]
    Filter {
        /// Offending filter string
        filter: String,
        /// Parser message
        reason: String,
    },

    /// Failed to install the global subscriber (usually: already installed)
    #[error("Failed to initialize tracing: {0}")]
    Init(String),
}

/// Build the filter from `RUST_LOG` (if set and non-empty) or the configured directives
pub fn resolve_filter(env_value: Option<&str>, configured: &str) -> Result<EnvFilter, TelemetryError> {
    let directives = env_value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(configured);

    EnvFilter::try_new(directives).map_err(|e| TelemetryError::Filter {
        filter: directives.to_string(),
        reason: e.to_string(),
    })
}

/// Install the global tracing subscriber
///
/// Logs go to stderr so stdout stays free for command output. Returns an
/// error instead of panicking when a subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let env_filter = resolve_filter(rust_log.as_deref(), &config.filter)?;

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.format {
        LogFormat::Pretty => registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    }
    .map_err(|e| TelemetryError::Init(e.to_string()))?;

    info!(format = %config.format, filter = %config.filter, "Logging initialized");
    Ok(())
}
