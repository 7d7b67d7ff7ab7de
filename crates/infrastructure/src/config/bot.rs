//! Bot configuration: command triggers, query window, reply placement.

use application::{
    DispatcherConfig,
    command_parser::{DEFAULT_FORECAST_TRIGGER, DEFAULT_OBSERVATION_TRIGGER},
    ports::DEFAULT_LOOKBACK_HOURS,
    services::DEFAULT_ICON_URL,
};
use serde::{Deserialize, Serialize};

/// Chat command behaviour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotConfig {
    /// Trigger token for METAR requests (default: "!m")
    #[serde(default = "default_observation_trigger")]
    pub observation_trigger: String,

    /// Trigger token for TAF requests (default: "!t")
    #[serde(default = "default_forecast_trigger")]
    pub forecast_trigger: String,

    /// Look-back window for weather queries in hours (default: 1)
    #[serde(default = "default_lookback_hours")]
    pub lookback_hours: u32,

    /// Reply in a thread under the triggering message (default: false)
    #[serde(default)]
    pub reply_in_thread: bool,

    /// The bot's own user ID, so it never answers itself
    #[serde(default)]
    pub bot_user_id: Option<String>,
}

pub(super) fn default_observation_trigger() -> String {
    DEFAULT_OBSERVATION_TRIGGER.to_string()
}

pub(super) fn default_forecast_trigger() -> String {
    DEFAULT_FORECAST_TRIGGER.to_string()
}

pub(super) const fn default_lookback_hours() -> u32 {
    DEFAULT_LOOKBACK_HOURS
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            observation_trigger: default_observation_trigger(),
            forecast_trigger: default_forecast_trigger(),
            lookback_hours: default_lookback_hours(),
            reply_in_thread: false,
            bot_user_id: None,
        }
    }
}

impl From<&BotConfig> for DispatcherConfig {
    fn from(config: &BotConfig) -> Self {
        Self {
            observation_trigger: config.observation_trigger.clone(),
            forecast_trigger: config.forecast_trigger.clone(),
            lookback_hours: config.lookback_hours,
            reply_in_thread: config.reply_in_thread,
            bot_user_id: config.bot_user_id.clone(),
        }
    }
}

/// Report rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Icon shown next to reports; empty disables it
    #[serde(default = "default_icon_url")]
    pub icon_url: String,
}

fn default_icon_url() -> String {
    DEFAULT_ICON_URL.to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            icon_url: default_icon_url(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = BotConfig::default();
        assert_eq!(config.observation_trigger, "!m");
        assert_eq!(config.forecast_trigger, "!t");
        assert_eq!(config.lookback_hours, 1);
        assert!(!config.reply_in_thread);
        assert!(config.bot_user_id.is_none());
    }

    #[test]
    fn converts_to_dispatcher_config() {
        let config = BotConfig {
            reply_in_thread: true,
            bot_user_id: Some("UBOT".to_string()),
            ..BotConfig::default()
        };
        let dispatcher = DispatcherConfig::from(&config);
        assert!(dispatcher.reply_in_thread);
        assert_eq!(dispatcher.bot_user_id.as_deref(), Some("UBOT"));
        assert_eq!(dispatcher.lookback_hours, 1);
    }

    #[test]
    fn report_defaults_to_noaa_icon() {
        assert_eq!(ReportConfig::default().icon_url, DEFAULT_ICON_URL);
    }

    #[test]
    fn partial_input_uses_defaults() {
        let config: BotConfig = serde_json::from_str(r#"{"lookback_hours": 3}"#).unwrap();
        assert_eq!(config.lookback_hours, 3);
        assert_eq!(config.observation_trigger, "!m");
    }
}
