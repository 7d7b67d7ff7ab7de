//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod console_chat_adapter;
mod fixture_weather_adapter;
mod slack_renderer;

pub use console_chat_adapter::ConsoleChatAdapter;
pub use fixture_weather_adapter::FixtureWeatherAdapter;
pub use slack_renderer::SlackMessageRenderer;
