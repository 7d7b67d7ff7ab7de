//! Command dispatcher
//!
//! Receives chat events, recognizes weather commands, fetches one record per
//! requested station and sends one formatted reply per station. A failure
//! for one station is logged and never stops the others.

use std::{fmt, sync::Arc};

use domain::{ReportKind, ReportPayload, StationId, WeatherRecord};
use tracing::{debug, error, info, instrument};

use super::report_formatter::ReportFormatter;
use crate::{
    command_parser::{CommandParser, DEFAULT_FORECAST_TRIGGER, DEFAULT_OBSERVATION_TRIGGER},
    error::ApplicationError,
    ports::{
        ChatPort, DEFAULT_LOOKBACK_HOURS, IncomingChatMessage, OutgoingChatMessage,
        WeatherDataPort,
    },
};

/// Dispatcher configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatcherConfig {
    /// Trigger token for METAR requests
    pub observation_trigger: String,
    /// Trigger token for TAF requests
    pub forecast_trigger: String,
    /// Look-back window passed to the weather-data port
    pub lookback_hours: u32,
    /// Reply in a thread under the triggering message
    pub reply_in_thread: bool,
    /// The bot's own user ID; its messages are never treated as commands
    pub bot_user_id: Option<String>,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            observation_trigger: DEFAULT_OBSERVATION_TRIGGER.to_string(),
            forecast_trigger: DEFAULT_FORECAST_TRIGGER.to_string(),
            lookback_hours: DEFAULT_LOOKBACK_HOURS,
            reply_in_thread: false,
            bot_user_id: None,
        }
    }
}

/// Outcome of handling one chat event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchSummary {
    /// Stations in the recognized command
    pub stations: usize,
    /// Replies delivered
    pub sent: usize,
    /// Stations whose reply could not be produced or delivered
    pub failed: usize,
}

/// Routes weather commands from chat to the weather-data source and back
pub struct CommandDispatcher {
    weather: Arc<dyn WeatherDataPort>,
    chat: Arc<dyn ChatPort>,
    parser: CommandParser,
    formatter: ReportFormatter,
    config: DispatcherConfig,
}

impl fmt::Debug for CommandDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDispatcher")
            .field("parser", &self.parser)
            .field("formatter", &self.formatter)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl CommandDispatcher {
    /// Create a new dispatcher
    pub fn new(
        weather: Arc<dyn WeatherDataPort>,
        chat: Arc<dyn ChatPort>,
        formatter: ReportFormatter,
        config: DispatcherConfig,
    ) -> Self {
        let parser = CommandParser::new(&config.observation_trigger, &config.forecast_trigger);
        Self {
            weather,
            chat,
            parser,
            formatter,
            config,
        }
    }

    /// Handle one inbound chat event
    ///
    /// Events without text, events from the bot itself, and texts that are
    /// not weather commands are ignored. Otherwise every station is processed
    /// in order. Per-station failures are logged and counted; they never
    /// propagate.
    #[instrument(skip(self, message), fields(channel = %message.channel, ts = %message.ts))]
    pub async fn handle(&self, message: &IncomingChatMessage) -> DispatchSummary {
        debug!(
            subtype = ?message.subtype,
            user = ?message.user,
            text = ?message.text,
            "Received chat event"
        );

        if self.is_own_message(message) {
            debug!("Ignoring message from bot user");
            return DispatchSummary::default();
        }

        let Some(text) = message.text.as_deref() else {
            return DispatchSummary::default();
        };

        let Some(command) = self.parser.parse(text) else {
            return DispatchSummary::default();
        };

        if command.is_empty() {
            debug!(kind = %command.kind, "Trigger without station identifiers");
            return DispatchSummary::default();
        }

        let mut summary = DispatchSummary {
            stations: command.stations.len(),
            ..DispatchSummary::default()
        };

        for station in &command.stations {
            match self.process_station(message, station, command.kind).await {
                Ok(()) => summary.sent += 1,
                Err(e) => {
                    summary.failed += 1;
                    error!(
                        channel = %message.channel,
                        ts = %message.ts,
                        user = ?message.user,
                        text = %text,
                        station = %station,
                        kind = %command.kind,
                        error = %e,
                        "Failed to deliver weather report"
                    );
                },
            }
        }

        info!(
            kind = %command.kind,
            stations = summary.stations,
            sent = summary.sent,
            failed = summary.failed,
            "Weather command handled"
        );

        summary
    }

    fn is_own_message(&self, message: &IncomingChatMessage) -> bool {
        match (&self.config.bot_user_id, &message.user) {
            (Some(bot), Some(user)) => bot == user,
            _ => false,
        }
    }

    async fn process_station(
        &self,
        message: &IncomingChatMessage,
        station: &StationId,
        kind: ReportKind,
    ) -> Result<(), ApplicationError> {
        let record = self
            .weather
            .query(station, kind, self.config.lookback_hours)
            .await?;

        let payload = self.render(kind, station, record)?;
        let no_data = payload.is_no_data();

        let outgoing = if self.config.reply_in_thread {
            OutgoingChatMessage::reply_in_thread(message, payload)
        } else {
            OutgoingChatMessage::new(&message.channel, payload)
        };

        let message_id = self.chat.send(outgoing).await?;
        debug!(station = %station, message_id = %message_id, no_data, "Report sent");
        Ok(())
    }

    fn render(
        &self,
        kind: ReportKind,
        station: &StationId,
        record: Option<WeatherRecord>,
    ) -> Result<ReportPayload, ApplicationError> {
        match (kind, record) {
            (ReportKind::Metar, None) => Ok(self.formatter.format_observation(None, station.as_str())),
            (ReportKind::Metar, Some(WeatherRecord::Metar(metar))) => Ok(self
                .formatter
                .format_observation(Some(&metar), station.as_str())),
            (ReportKind::Taf, None) => Ok(self.formatter.format_forecast(None, station.as_str())),
            (ReportKind::Taf, Some(WeatherRecord::Taf(taf))) => Ok(self
                .formatter
                .format_forecast(Some(&taf), station.as_str())),
            (expected, Some(other)) => Err(ApplicationError::UnexpectedRecord {
                expected,
                actual: other.kind(),
            }),
        }
    }
}
