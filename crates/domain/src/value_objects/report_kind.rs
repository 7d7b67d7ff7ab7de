//! Report kind - Distinguishes current observations from forecasts

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of aviation weather report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    /// Current observation (METAR)
    Metar,
    /// Terminal aerodrome forecast (TAF)
    Taf,
}

impl ReportKind {
    /// Get the conventional report name
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Metar => "METAR",
            Self::Taf => "TAF",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
