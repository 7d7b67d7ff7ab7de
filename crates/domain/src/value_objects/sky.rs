//! Sky condition value objects
//!
//! A report carries a list of sky layers, each with a cover code and an
//! optional cloud base. The codes follow the METAR/TAF abbreviations.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// Sky cover code of a single layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkyCover {
    /// Sky clear (manual station)
    Skc,
    /// Clear below 12,000 ft (automated station)
    Clr,
    /// Ceiling and visibility OK
    Cavok,
    /// Few clouds (1/8 - 2/8)
    Few,
    /// Scattered (3/8 - 4/8)
    Sct,
    /// Broken (5/8 - 7/8)
    Bkn,
    /// Overcast (8/8)
    Ovc,
}

impl SkyCover {
    /// The report abbreviation for this cover
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Skc => "SKC",
            Self::Clr => "CLR",
            Self::Cavok => "CAVOK",
            Self::Few => "FEW",
            Self::Sct => "SCT",
            Self::Bkn => "BKN",
            Self::Ovc => "OVC",
        }
    }

    /// Human-readable name of a cloud layer
    ///
    /// Returns `None` for the clear-sky codes, which describe the absence
    /// of a layer rather than a layer.
    #[must_use]
    pub const fn layer_label(&self) -> Option<&'static str> {
        match self {
            Self::Few => Some("Few"),
            Self::Sct => Some("Scattered"),
            Self::Bkn => Some("Broken"),
            Self::Ovc => Some("Overcast"),
            Self::Skc | Self::Clr | Self::Cavok => None,
        }
    }

    /// Whether a layer of this cover constitutes a ceiling
    #[must_use]
    pub const fn is_ceiling(&self) -> bool {
        matches!(self, Self::Bkn | Self::Ovc)
    }
}

impl fmt::Display for SkyCover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for SkyCover {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "SKC" => Ok(Self::Skc),
            "CLR" => Ok(Self::Clr),
            "CAVOK" => Ok(Self::Cavok),
            "FEW" => Ok(Self::Few),
            "SCT" => Ok(Self::Sct),
            "BKN" => Ok(Self::Bkn),
            "OVC" => Ok(Self::Ovc),
            other => Err(DomainError::InvalidSkyCover(other.to_string())),
        }
    }
}

impl Serialize for SkyCover {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for SkyCover {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

/// A single reported sky layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkyLayer {
    /// Cover code
    #[serde(rename = "sky_cover")]
    pub cover: SkyCover,
    /// Cloud base in feet above ground level
    #[serde(rename = "cloud_base_ft_agl", default)]
    pub base_ft_agl: Option<u32>,
}

impl SkyLayer {
    /// Create a layer with a cloud base
    #[must_use]
    pub const fn new(cover: SkyCover, base_ft_agl: u32) -> Self {
        Self {
            cover,
            base_ft_agl: Some(base_ft_agl),
        }
    }

    /// Create a layer without a cloud base (e.g., CLR)
    #[must_use]
    pub const fn without_base(cover: SkyCover) -> Self {
        Self {
            cover,
            base_ft_agl: None,
        }
    }

    /// Cloud base of this layer if it constitutes a ceiling
    #[must_use]
    pub const fn ceiling_base(&self) -> Option<u32> {
        if self.cover.is_ceiling() {
            self.base_ft_agl
        } else {
            None
        }
    }
}
