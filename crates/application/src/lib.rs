//! Application layer - Use cases and orchestration
//!
//! Contains command recognition, report formatting, the dispatcher and the
//! port definitions it depends on. Orchestrates domain objects and
//! infrastructure adapters.

pub mod command_parser;
pub mod error;
pub mod ports;
pub mod services;

pub use command_parser::CommandParser;
pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
