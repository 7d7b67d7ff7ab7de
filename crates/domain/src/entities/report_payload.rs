//! Report payload - Transport-neutral structure of an outbound weather report
//!
//! The formatter produces a [`ReportPayload`]; chat adapters turn it into
//! their own markup.

use serde::{Deserialize, Serialize};

use crate::value_objects::FlightCategory;

/// Color tag of a report panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelColor {
    /// VFR
    Green,
    /// MVFR
    Blue,
    /// IFR
    Red,
    /// LIFR or unknown
    Purple,
}

impl PanelColor {
    /// Pick the color for a flight category
    ///
    /// Unknown or missing categories share the LIFR color.
    #[must_use]
    pub const fn for_category(category: Option<FlightCategory>) -> Self {
        match category {
            Some(FlightCategory::Vfr) => Self::Green,
            Some(FlightCategory::Mvfr) => Self::Blue,
            Some(FlightCategory::Ifr) => Self::Red,
            Some(FlightCategory::Lifr) | None => Self::Purple,
        }
    }

    /// Hex color code
    #[must_use]
    pub const fn hex(&self) -> &'static str {
        match self {
            Self::Green => "#00ff00",
            Self::Blue => "#0000ff",
            Self::Red => "#ff0000",
            Self::Purple => "#b642f4",
        }
    }
}

/// A labeled value within a panel or header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Label (e.g., "Winds")
    pub label: String,
    /// Rendered value
    pub value: String,
    /// Display hint: the field is short enough to sit beside another one
    pub short: bool,
}

impl Field {
    /// Create a short field
    pub fn short(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            short: true,
        }
    }
}

/// A colored group of fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Panel {
    /// Color tag
    pub color: PanelColor,
    /// Fields in display order
    pub fields: Vec<Field>,
}

impl Panel {
    /// Create a panel
    #[must_use]
    pub const fn new(color: PanelColor, fields: Vec<Field>) -> Self {
        Self { color, fields }
    }

    /// Look up a field value by label
    #[must_use]
    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.label == label)
            .map(|field| field.value.as_str())
    }
}

/// A rendered weather report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Title line (e.g., "METAR for KMSN")
    pub title: String,
    /// Undecoded report text
    pub raw_text: String,
    /// Labeled header lines shown under the raw text
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub header: Vec<Field>,
    /// Icon shown with the message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    /// Panels in display order
    pub panels: Vec<Panel>,
}

/// Outbound payload for a single station
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReportPayload {
    /// A full report
    Report(Report),
    /// Plain-text notice that no data was found
    NoData {
        /// Message text
        text: String,
    },
}

impl ReportPayload {
    /// Create a "no data" payload
    pub fn no_data(text: impl Into<String>) -> Self {
        Self::NoData { text: text.into() }
    }

    /// Whether this is a "no data" notice
    #[must_use]
    pub const fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData { .. })
    }
}
