//! Weather-data port
//!
//! Defines the interface for retrieving aviation weather records.

use async_trait::async_trait;
use domain::{ReportKind, StationId, WeatherRecord};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Default look-back window for weather queries, in hours
pub const DEFAULT_LOOKBACK_HOURS: u32 = 1;

/// Port for weather-data retrieval
///
/// Implementations issue the query against their data source and return
/// the most recent matching record. A station without data is not an
/// error: implementations return `Ok(None)` for it and reserve `Err` for
/// transport or parse failures.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherDataPort: Send + Sync {
    /// Get the latest record of `kind` for `station` within the look-back window
    async fn query(
        &self,
        station: &StationId,
        kind: ReportKind,
        lookback_hours: u32,
    ) -> Result<Option<WeatherRecord>, ApplicationError>;
}
