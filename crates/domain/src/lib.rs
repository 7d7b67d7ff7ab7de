//! Domain layer for avnbot
//!
//! Contains aviation weather records, the value objects they are built from,
//! and the transport-neutral report payload. This layer performs no I/O.

pub mod commands;
pub mod entities;
pub mod errors;
pub mod value_objects;

pub use commands::WeatherCommand;
pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
