//! Weather records as supplied by the weather-data source
//!
//! Field names follow the aviation weather data feed so that records can be
//! exchanged as JSON without a mapping layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{ReportKind, SkyLayer, StationId, Wind};

/// A current observation (METAR)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetarRecord {
    /// Reporting station
    pub station_id: StationId,
    /// Undecoded report text
    pub raw_text: String,
    /// Observation time
    pub observation_time: DateTime<Utc>,
    /// Flight category as reported by the source (e.g., "VFR"); may be empty
    #[serde(default)]
    pub flight_category: String,
    /// Surface wind
    #[serde(default)]
    pub wind: Wind,
    /// Prevailing visibility in statute miles
    pub visibility_statute_mi: f64,
    /// Present weather phenomena (e.g., "-RA BR")
    #[serde(default)]
    pub wx_string: Option<String>,
    /// Sky layers, lowest first
    #[serde(default)]
    pub sky_condition: Vec<SkyLayer>,
    /// Vertical visibility into an obscuration, in feet
    #[serde(default)]
    pub vert_vis_ft: Option<u32>,
    /// Temperature in Celsius
    pub temp_c: f64,
    /// Dew point in Celsius
    pub dewpoint_c: f64,
    /// Altimeter setting in inches of mercury
    pub altim_in_hg: f64,
    /// Station elevation in meters
    pub elevation_m: f64,
}

impl MetarRecord {
    /// Station elevation converted to feet
    #[must_use]
    pub fn elevation_ft(&self) -> f64 {
        self.elevation_m * FEET_PER_METER
    }
}

/// Meters to feet conversion factor
pub const FEET_PER_METER: f64 = 3.280_84;

/// One period of a terminal aerodrome forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPeriod {
    /// Start of the period
    pub fcst_time_from: DateTime<Utc>,
    /// End of the period
    pub fcst_time_to: DateTime<Utc>,
    /// Change group (FM, BECMG, TEMPO, PROB); absent for the base period
    #[serde(default)]
    pub change_indicator: Option<String>,
    /// End of the transition for BECMG groups
    #[serde(default)]
    pub time_becoming: Option<DateTime<Utc>>,
    /// Probability in percent for PROB groups
    #[serde(default)]
    pub probability: Option<u8>,
    /// Forecast wind; an absent direction means no change
    #[serde(default)]
    pub wind: Wind,
    /// Forecast visibility in statute miles
    pub visibility_statute_mi: f64,
    /// Forecast weather phenomena
    #[serde(default)]
    pub wx_string: Option<String>,
    /// Forecast sky layers, lowest first
    #[serde(default)]
    pub sky_condition: Vec<SkyLayer>,
    /// Forecast vertical visibility in feet
    #[serde(default)]
    pub vert_vis_ft: Option<u32>,
}

/// A terminal aerodrome forecast (TAF)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TafRecord {
    /// Forecast station
    pub station_id: StationId,
    /// Undecoded forecast text
    pub raw_text: String,
    /// Issue time
    pub issue_time: DateTime<Utc>,
    /// Start of validity
    pub valid_time_from: DateTime<Utc>,
    /// End of validity
    pub valid_time_to: DateTime<Utc>,
    /// Forecast periods in chronological order
    #[serde(default)]
    pub forecast: Vec<ForecastPeriod>,
}

/// Any record returned by the weather-data source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum WeatherRecord {
    /// Current observation
    Metar(MetarRecord),
    /// Forecast
    Taf(TafRecord),
}

impl WeatherRecord {
    /// The report kind of this record
    #[must_use]
    pub const fn kind(&self) -> ReportKind {
        match self {
            Self::Metar(_) => ReportKind::Metar,
            Self::Taf(_) => ReportKind::Taf,
        }
    }

    /// The station this record belongs to
    #[must_use]
    pub const fn station_id(&self) -> &StationId {
        match self {
            Self::Metar(metar) => &metar.station_id,
            Self::Taf(taf) => &taf.station_id,
        }
    }
}

impl From<MetarRecord> for WeatherRecord {
    fn from(record: MetarRecord) -> Self {
        Self::Metar(record)
    }
}

impl From<TafRecord> for WeatherRecord {
    fn from(record: TafRecord) -> Self {
        Self::Taf(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::SkyCover;
    use chrono::TimeZone;

    fn sample_metar() -> MetarRecord {
        MetarRecord {
            station_id: StationId::new("KMSN").unwrap(),
            raw_text: "KMSN 011853Z 27010KT 10SM FEW045 22/12 A3001".to_string(),
            observation_time: Utc.with_ymd_and_hms(2024, 6, 1, 18, 53, 0).unwrap(),
            flight_category: "VFR".to_string(),
            wind: Wind::new(Some(270), 10),
            visibility_statute_mi: 10.0,
            wx_string: None,
            sky_condition: vec![SkyLayer::new(SkyCover::Few, 4500)],
            vert_vis_ft: None,
            temp_c: 22.0,
            dewpoint_c: 12.0,
            altim_in_hg: 30.01,
            elevation_m: 264.0,
        }
    }

    #[test]
    fn elevation_converts_to_feet() {
        let metar = sample_metar();
        assert!((metar.elevation_ft() - 866.141_76).abs() < 0.001);
    }

    #[test]
    fn record_kind_matches_variant() {
        let record = WeatherRecord::from(sample_metar());
        assert_eq!(record.kind(), ReportKind::Metar);
        assert_eq!(record.station_id().as_str(), "KMSN");
    }

    #[test]
    fn record_json_is_tagged_by_kind() {
        let record = WeatherRecord::from(sample_metar());
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["kind"], "metar");
        assert_eq!(json["station_id"], "KMSN");
    }

    #[test]
    fn taf_deserializes_with_minimal_periods() {
        let json = r#"{
            "kind": "taf",
            "station_id": "kmsn",
            "raw_text": "TAF KMSN 011720Z 0118/0218 27010KT P6SM FEW050",
            "issue_time": "2024-06-01T17:20:00Z",
            "valid_time_from": "2024-06-01T18:00:00Z",
            "valid_time_to": "2024-06-02T18:00:00Z",
            "forecast": [{
                "fcst_time_from": "2024-06-01T18:00:00Z",
                "fcst_time_to": "2024-06-02T00:00:00Z",
                "visibility_statute_mi": 6.21
            }]
        }"#;
        let record: WeatherRecord = serde_json::from_str(json).unwrap();
        let WeatherRecord::Taf(taf) = record else {
            unreachable!("Expected TAF record");
        };
        assert_eq!(taf.station_id.as_str(), "KMSN");
        assert_eq!(taf.forecast.len(), 1);
        assert!(taf.forecast[0].change_indicator.is_none());
        assert!(taf.forecast[0].sky_condition.is_empty());
        assert_eq!(taf.forecast[0].wind.direction_degrees, None);
    }

    #[test]
    fn metar_without_flight_category_deserializes_empty() {
        let json = r#"{
            "kind": "metar",
            "station_id": "KMSN",
            "raw_text": "KMSN 011853Z 27010KT 10SM FEW045 22/12 A3001",
            "observation_time": "2024-06-01T18:53:00Z",
            "visibility_statute_mi": 10.0,
            "temp_c": 22.0,
            "dewpoint_c": 12.0,
            "altim_in_hg": 30.01,
            "elevation_m": 264.0
        }"#;
        let record: WeatherRecord = serde_json::from_str(json).unwrap();
        let WeatherRecord::Metar(metar) = record else {
            unreachable!("Expected METAR record");
        };
        assert!(metar.flight_category.is_empty());
        assert!(metar.wind.is_calm());
    }
}
