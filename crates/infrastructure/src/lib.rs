//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer.
//! Contains configuration loading, logging setup, Slack message rendering
//! and the fixture / console adapters used by the CLI.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, BotConfig, LogFormat, LoggingConfig, ReportConfig, SlackConfig};
pub use telemetry::{TelemetryError, init_logging};
