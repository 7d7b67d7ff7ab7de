//! Weather commands - Strongly typed representation of a chat request

use serde::{Deserialize, Serialize};

use crate::value_objects::{ReportKind, StationId};

/// A request for reports on one or more stations
///
/// Stations keep the order in which they were given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherCommand {
    /// Requested report kind
    pub kind: ReportKind,
    /// Requested stations, in order
    pub stations: Vec<StationId>,
}

impl WeatherCommand {
    /// Create a new command
    #[must_use]
    pub const fn new(kind: ReportKind, stations: Vec<StationId>) -> Self {
        Self { kind, stations }
    }

    /// Whether the command names no stations
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}
