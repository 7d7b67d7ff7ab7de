//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod chat_port;
mod weather_data_port;

#[cfg(test)]
pub use chat_port::MockChatPort;
pub use chat_port::{ChatPort, IncomingChatMessage, OutgoingChatMessage};
#[cfg(test)]
pub use weather_data_port::MockWeatherDataPort;
pub use weather_data_port::{DEFAULT_LOOKBACK_HOURS, WeatherDataPort};
