//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Invalid station identifier
    #[error("Invalid station identifier: {0}")]
    InvalidStationId(String),

    /// Unknown sky cover code
    #[error("Invalid sky cover: {0}")]
    InvalidSkyCover(String),
}
