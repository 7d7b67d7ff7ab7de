//! Report formatting
//!
//! Turns METAR and TAF records into transport-neutral [`ReportPayload`]s.
//! Everything here is pure: the same record and identifier always give the
//! same payload, and no optional field can make formatting fail.

use chrono::{DateTime, Utc};
use domain::{
    Ceiling, Field, FlightCategory, ForecastPeriod, MetarRecord, Panel, PanelColor, Report,
    ReportPayload, SkyCover, SkyLayer, TafRecord, Wind,
};

/// Icon shown next to report messages
pub const DEFAULT_ICON_URL: &str = "https://aviationweather.gov/images/layout/noaa_logo.png";

/// Visibility above which forecasts report `6+ SM`
const FORECAST_VISIBILITY_CAP_SM: f64 = 6.0;

/// Formats weather records into report payloads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFormatter {
    icon_url: Option<String>,
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_ICON_URL)
    }
}

impl ReportFormatter {
    /// Create a formatter with the given icon URL
    ///
    /// An empty (or blank) URL leaves the icon out of every payload.
    pub fn new(icon_url: impl Into<String>) -> Self {
        let icon_url = icon_url.into();
        Self {
            icon_url: (!icon_url.trim().is_empty()).then_some(icon_url),
        }
    }

    /// Configured icon URL
    pub fn icon_url(&self) -> Option<&str> {
        self.icon_url.as_deref()
    }

    /// Format a METAR observation
    ///
    /// `identifier` is the station as requested; it is only used for the
    /// title and the no-data text.
    #[must_use]
    pub fn format_observation(
        &self,
        record: Option<&MetarRecord>,
        identifier: &str,
    ) -> ReportPayload {
        let station = normalize_identifier(identifier);
        let Some(metar) = record else {
            return ReportPayload::no_data(format!(
                "No METAR results for {station}. Either not a valid station ID or some other error occurred."
            ));
        };

        let category = FlightCategory::from_code(&metar.flight_category);
        let category_display = if metar.flight_category.trim().is_empty() {
            "N/A".to_string()
        } else {
            metar.flight_category.clone()
        };

        let fields = vec![
            Field::short(
                "Observation Time",
                metar.observation_time.format("%H%MZ").to_string(),
            ),
            Field::short("Flight Category", category_display),
            Field::short("Winds", wind_phrase(&metar.wind)),
            Field::short("Visibility", format!("{} SM", metar.visibility_statute_mi)),
            Field::short("Wx", wx_phrase(metar.wx_string.as_deref())),
            Field::short(
                "Sky Conditions",
                sky_phrase(&metar.sky_condition, metar.vert_vis_ft),
            ),
            Field::short("Temp (°C)", metar.temp_c.to_string()),
            Field::short("Dewpoint (°C)", metar.dewpoint_c.to_string()),
            Field::short("Altimeter", format!("{:.2}", metar.altim_in_hg)),
            Field::short(
                "Field Elevation",
                format!("{:.0}", metar.elevation_ft().round()),
            ),
        ];

        ReportPayload::Report(Report {
            title: format!("METAR for {station}"),
            raw_text: metar.raw_text.clone(),
            header: Vec::new(),
            icon_url: self.icon_url.clone(),
            panels: vec![Panel::new(PanelColor::for_category(category), fields)],
        })
    }

    /// Format a TAF with one panel per forecast period
    #[must_use]
    pub fn format_forecast(&self, record: Option<&TafRecord>, identifier: &str) -> ReportPayload {
        let station = normalize_identifier(identifier);
        let Some(taf) = record else {
            return ReportPayload::no_data(format!(
                "No TAF results for {station}. Either not a valid station ID, TAFs aren't issued, or some other error occurred."
            ));
        };

        let header = vec![
            Field::short("Issued", taf.issue_time.format("%d%H%MZ").to_string()),
            Field::short("Valid from", taf.valid_time_from.format("%d%H").to_string()),
            Field::short("Valid to", taf.valid_time_to.format("%d%H").to_string()),
        ];

        ReportPayload::Report(Report {
            title: format!("TAF for {station}"),
            raw_text: taf.raw_text.clone(),
            header,
            icon_url: self.icon_url.clone(),
            panels: taf.forecast.iter().map(forecast_panel).collect(),
        })
    }
}

fn normalize_identifier(identifier: &str) -> String {
    identifier.trim().to_uppercase()
}

fn forecast_panel(period: &ForecastPeriod) -> Panel {
    let from = period_time(period.fcst_time_from);
    let ceiling = Ceiling::from_sky(&period.sky_condition, period.vert_vis_ft);
    let category = FlightCategory::from_conditions(ceiling, period.visibility_statute_mi);

    let fields = vec![
        Field::short("Forecast From", from.clone()),
        Field::short("Forecast To", period_time(period.fcst_time_to)),
        Field::short("Change Type", change_phrase(period, &from)),
        Field::short("Winds", forecast_wind_phrase(&period.wind)),
        Field::short(
            "Visibility",
            forecast_visibility_phrase(period.visibility_statute_mi),
        ),
        Field::short("Wx", wx_phrase(period.wx_string.as_deref())),
        Field::short(
            "Sky Conditions",
            sky_phrase(&period.sky_condition, period.vert_vis_ft),
        ),
        Field::short("Flight Category", category.code()),
    ];

    Panel::new(PanelColor::for_category(Some(category)), fields)
}

fn period_time(time: DateTime<Utc>) -> String {
    time.format("%d%HZ").to_string()
}

// ── Phrases ─────────────────────────────────────────────────────

/// Wind phrase for an observation
///
/// A missing direction reads as 0, so it renders as calm or variable.
#[must_use]
pub fn wind_phrase(wind: &Wind) -> String {
    with_gust(direction_phrase(wind), wind.gust_kt)
}

/// Wind phrase for a forecast period
///
/// A missing direction means the period does not change the wind.
#[must_use]
pub fn forecast_wind_phrase(wind: &Wind) -> String {
    let phrase = if wind.direction_degrees.is_none() {
        "No Change".to_string()
    } else {
        direction_phrase(wind)
    };
    with_gust(phrase, wind.gust_kt)
}

fn direction_phrase(wind: &Wind) -> String {
    if wind.is_calm() {
        "Calm".to_string()
    } else if wind.is_variable() {
        format!("Variable at {}", wind.speed_kt)
    } else {
        format!(
            "{:03} at {}",
            wind.direction_degrees.unwrap_or_default(),
            wind.speed_kt
        )
    }
}

fn with_gust(mut phrase: String, gust: Option<u32>) -> String {
    if let Some(gust) = gust {
        phrase.push_str(&format!(" gusting {gust}"));
    }
    phrase
}

/// Sky-conditions phrase
///
/// Several layers are listed one per line. A single layer (or none) gives
/// way to the vertical visibility when one is reported.
#[must_use]
pub fn sky_phrase(layers: &[SkyLayer], vertical_visibility_ft: Option<u32>) -> String {
    match (layers, vertical_visibility_ft) {
        ([] | [_], Some(vv)) => format!("Vertical visibility of {vv}"),
        ([], None) => "Not reported".to_string(),
        ([layer], None) => layer_phrase(layer),
        (layers, _) => layers
            .iter()
            .map(layer_phrase)
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

fn layer_phrase(layer: &SkyLayer) -> String {
    match layer.cover {
        SkyCover::Skc => "Clear".to_string(),
        SkyCover::Cavok => "Cloud and Visibility OK".to_string(),
        SkyCover::Clr => "Clear under 12000".to_string(),
        cover => {
            let label = cover.layer_label().unwrap_or_else(|| cover.code());
            layer
                .base_ft_agl
                .map_or_else(|| label.to_string(), |base| format!("{label} at {base}"))
        },
    }
}

/// Forecast visibility, capped at `6+ SM`
#[must_use]
pub fn forecast_visibility_phrase(visibility_sm: f64) -> String {
    if visibility_sm > FORECAST_VISIBILITY_CAP_SM {
        "6+ SM".to_string()
    } else {
        format!("{visibility_sm} SM")
    }
}

/// Change-type text for a forecast period
///
/// `from` is the already formatted start of the period.
#[must_use]
pub fn change_phrase(period: &ForecastPeriod, from: &str) -> String {
    match period.change_indicator.as_deref() {
        None => "N/A".to_string(),
        Some("BECMG") => period.time_becoming.map_or_else(
            || format!("Becoming from {from}"),
            |until| format!("Becoming between {from} and {}", period_time(until)),
        ),
        Some("PROB") => period
            .probability
            .map_or_else(|| "PROB".to_string(), |p| format!("PROB {p}")),
        Some(other) => other.to_string(),
    }
}

fn wx_phrase(wx: Option<&str>) -> String {
    match wx {
        Some(wx) if !wx.trim().is_empty() => wx.to_string(),
        _ => "None".to_string(),
    }
}
