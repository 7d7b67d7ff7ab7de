//! Station identifier value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// An aviation weather station identifier (e.g., KMSN, EDDF)
///
/// Identifiers are free-form but never empty and never contain whitespace.
/// Input is case-insensitive; the stored form is always uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct StationId {
    value: String,
}

impl StationId {
    /// Create a new station identifier, normalizing to uppercase
    pub fn new(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let trimmed = raw.as_ref().trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidStationId(
                "Station identifier must not be empty".to_string(),
            ));
        }

        if trimmed.chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidStationId(format!(
                "Station identifier must not contain whitespace: {trimmed}"
            )));
        }

        Ok(Self {
            value: trimmed.to_uppercase(),
        })
    }

    /// Get the identifier as a string slice (uppercase)
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl std::str::FromStr for StationId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for StationId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl AsRef<str> for StationId {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl<'de> Deserialize<'de> for StationId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
