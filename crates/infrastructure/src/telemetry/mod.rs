//! Logging infrastructure
//!
//! Sets up the global `tracing` subscriber from [`LoggingConfig`](crate::config::LoggingConfig).

mod logging;

pub use logging::{TelemetryError, init_logging, resolve_filter};
