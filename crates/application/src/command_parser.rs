//! Command parser - Recognize weather triggers in chat text
//!
//! A command is a trigger token at the start of the message followed by
//! whitespace-separated station identifiers:
//!
//! ```text
//! !m kmsn KORD      -> METAR for KMSN and KORD
//! !t egll           -> TAF for EGLL
//! ```
//!
//! Anything else is ordinary chat and yields no command.

use domain::{ReportKind, StationId, WeatherCommand};
use tracing::debug;

/// Default trigger for current observations
pub const DEFAULT_OBSERVATION_TRIGGER: &str = "!m";

/// Default trigger for terminal forecasts
pub const DEFAULT_FORECAST_TRIGGER: &str = "!t";

/// Parser for trigger-prefixed weather commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandParser {
    observation_trigger: String,
    forecast_trigger: String,
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new(DEFAULT_OBSERVATION_TRIGGER, DEFAULT_FORECAST_TRIGGER)
    }
}

impl CommandParser {
    /// Create a parser with custom triggers
    pub fn new(observation_trigger: impl Into<String>, forecast_trigger: impl Into<String>) -> Self {
        Self {
            observation_trigger: observation_trigger.into(),
            forecast_trigger: forecast_trigger.into(),
        }
    }

    /// Trigger token for METAR requests
    pub fn observation_trigger(&self) -> &str {
        &self.observation_trigger
    }

    /// Trigger token for TAF requests
    pub fn forecast_trigger(&self) -> &str {
        &self.forecast_trigger
    }

    /// Parse a message text into a weather command
    ///
    /// The trigger must be the first whitespace-delimited token and match
    /// exactly (case-sensitive). Station identifiers are uppercased and keep
    /// their order of appearance, duplicates included. A bare trigger
    /// yields a command with no stations.
    pub fn parse(&self, text: &str) -> Option<WeatherCommand> {
        let mut tokens = text.split_whitespace();
        let trigger = tokens.next()?;

        let kind = if trigger == self.observation_trigger {
            ReportKind::Metar
        } else if trigger == self.forecast_trigger {
            ReportKind::Taf
        } else {
            return None;
        };

        // Tokens from split_whitespace are never empty and contain no whitespace
        let stations: Vec<StationId> = tokens.filter_map(|t| StationId::new(t).ok()).collect();

        debug!(kind = %kind, stations = stations.len(), "Parsed weather command");
        Some(WeatherCommand::new(kind, stations))
    }
}
