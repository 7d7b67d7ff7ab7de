//! Fixture weather adapter - Implements WeatherDataPort over preloaded records
//!
//! Records come from a JSON array of `WeatherRecord` objects, each tagged
//! with `"kind": "metar"` or `"kind": "taf"`. When a station has several
//! records of one kind, the most recent one is served.

use std::{collections::HashMap, path::Path};

use application::{error::ApplicationError, ports::WeatherDataPort};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::{ReportKind, StationId, WeatherRecord};
use tracing::{debug, info, instrument};

/// Weather-data source backed by an in-memory record set
#[derive(Debug, Clone, Default)]
pub struct FixtureWeatherAdapter {
    records: HashMap<(StationId, ReportKind), WeatherRecord>,
}

fn issued_at(record: &WeatherRecord) -> DateTime<Utc> {
    match record {
        WeatherRecord::Metar(metar) => metar.observation_time,
        WeatherRecord::Taf(taf) => taf.issue_time,
    }
}

impl FixtureWeatherAdapter {
    /// Build from records, keeping the latest per station and kind
    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = WeatherRecord>) -> Self {
        let mut map: HashMap<(StationId, ReportKind), WeatherRecord> = HashMap::new();
        for record in records {
            let key = (record.station_id().clone(), record.kind());
            match map.get(&key) {
                Some(existing) if issued_at(existing) >= issued_at(&record) => {},
                _ => {
                    map.insert(key, record);
                },
            }
        }
        Self { records: map }
    }

    /// Parse a JSON array of records
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a record is invalid.
    pub fn from_json(json: &str) -> Result<Self, ApplicationError> {
        let records: Vec<WeatherRecord> = serde_json::from_str(json)
            .map_err(|e| ApplicationError::ExternalService(format!("Invalid record file: {e}")))?;
        Ok(Self::from_records(records))
    }

    /// Load records from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ApplicationError> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path).await.map_err(|e| {
            ApplicationError::ExternalService(format!(
                "Failed to read record file {}: {e}",
                path.display()
            ))
        })?;
        let adapter = Self::from_json(&json)?;
        info!(path = %path.display(), records = adapter.len(), "Loaded weather records");
        Ok(adapter)
    }

    /// Number of distinct (station, kind) entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no records are loaded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl WeatherDataPort for FixtureWeatherAdapter {
    /// The look-back window is not applied: fixtures are served regardless of age
    #[instrument(skip(self, station), fields(station = %station))]
    async fn query(
        &self,
        station: &StationId,
        kind: ReportKind,
        lookback_hours: u32,
    ) -> Result<Option<WeatherRecord>, ApplicationError> {
        let record = self.records.get(&(station.clone(), kind)).cloned();
        debug!(found = record.is_some(), "Fixture lookup");
        Ok(record)
    }
}
