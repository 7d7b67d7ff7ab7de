//! Application-level errors

use domain::{DomainError, ReportKind};
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Weather-data source failure (network, parse, upstream error)
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Chat transport failure
    #[error("Messenger error: {0}")]
    Messenger(String),

    /// The weather-data source returned a record of the wrong kind
    #[error("Unexpected record: expected {expected}, got {actual}")]
    UnexpectedRecord {
        /// Requested kind
        expected: ReportKind,
        /// Kind actually returned
        actual: ReportKind,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
