//! Surface wind value object

use serde::{Deserialize, Serialize};

/// Reported surface wind
///
/// A direction of `0` means variable; an absent direction means the report
/// carries no wind group (a forecast period with no change in wind).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Wind {
    /// Direction the wind blows from, in degrees true
    #[serde(default)]
    pub direction_degrees: Option<u16>,
    /// Sustained speed in knots
    #[serde(default)]
    pub speed_kt: u32,
    /// Gust speed in knots
    #[serde(default)]
    pub gust_kt: Option<u32>,
}

impl Wind {
    /// Create a wind without gusts
    #[must_use]
    pub const fn new(direction_degrees: Option<u16>, speed_kt: u32) -> Self {
        Self {
            direction_degrees,
            speed_kt,
            gust_kt: None,
        }
    }

    /// Add a gust speed
    #[must_use]
    pub const fn with_gust(mut self, gust_kt: u32) -> Self {
        self.gust_kt = Some(gust_kt);
        self
    }

    /// Wind with no direction and no speed
    #[must_use]
    pub const fn is_calm(&self) -> bool {
        matches!(self.direction_degrees, None | Some(0)) && self.speed_kt == 0
    }

    /// Wind with a speed but no fixed direction
    #[must_use]
    pub const fn is_variable(&self) -> bool {
        matches!(self.direction_degrees, None | Some(0)) && self.speed_kt > 0
    }
}
