//! Flight category value object
//!
//! Categorizes conditions by ceiling and visibility into the four
//! classes used for flight planning.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::{Ceiling, FlightCategory};
//!
//! assert_eq!(FlightCategory::from_conditions(Ceiling::new(3500), 6.0), FlightCategory::Vfr);
//! assert_eq!(FlightCategory::from_conditions(Ceiling::new(700), 2.0), FlightCategory::Ifr);
//! assert_eq!(FlightCategory::from_code("MVFR"), Some(FlightCategory::Mvfr));
//! assert_eq!(FlightCategory::from_code("mvfr"), None);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Ceiling;

/// Flight category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FlightCategory {
    /// Visual flight rules
    Vfr,
    /// Marginal VFR
    Mvfr,
    /// Instrument flight rules
    Ifr,
    /// Low IFR
    Lifr,
}

impl FlightCategory {
    /// The category abbreviation
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Vfr => "VFR",
            Self::Mvfr => "MVFR",
            Self::Ifr => "IFR",
            Self::Lifr => "LIFR",
        }
    }

    /// Parse a category abbreviation exactly as reported
    ///
    /// Only the uppercase codes match; anything else is unknown.
    #[must_use]
    pub fn from_code(s: &str) -> Option<Self> {
        match s {
            "VFR" => Some(Self::Vfr),
            "MVFR" => Some(Self::Mvfr),
            "IFR" => Some(Self::Ifr),
            "LIFR" => Some(Self::Lifr),
            _ => None,
        }
    }

    /// Derive the category from ceiling and visibility
    ///
    /// Checks run in priority order: VFR, then MVFR, then IFR. Anything
    /// that matches none of them is LIFR.
    #[must_use]
    pub fn from_conditions(ceiling: Ceiling, visibility_statute_mi: f64) -> Self {
        let ceiling = ceiling.feet();
        let visibility = visibility_statute_mi;

        if ceiling > 3000 && visibility > 5.0 {
            Self::Vfr
        } else if (1000..3000).contains(&ceiling) || (3.0..5.0).contains(&visibility) {
            Self::Mvfr
        } else if (500..1000).contains(&ceiling) || (1.0..3.0).contains(&visibility) {
            Self::Ifr
        } else {
            Self::Lifr
        }
    }
}

impl fmt::Display for FlightCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
