//! Ceiling value object
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::{Ceiling, SkyCover, SkyLayer};
//!
//! let layers = [SkyLayer::new(SkyCover::Few, 1500), SkyLayer::new(SkyCover::Bkn, 3500)];
//! assert_eq!(Ceiling::from_sky(&layers, None).feet(), 3500);
//!
//! let clear = [SkyLayer::without_base(SkyCover::Clr)];
//! assert!(Ceiling::from_sky(&clear, None).is_unlimited());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use super::SkyLayer;

/// Height of the lowest broken or overcast layer, or of the vertical
/// visibility when the sky is obscured, in feet above ground level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ceiling(u32);

impl Ceiling {
    /// Sentinel for "no ceiling"
    ///
    /// This is not a real altitude. The value is kept at 9999 so that the
    /// flight category thresholds treat it as unrestricted.
    pub const UNLIMITED: Self = Self(9999);

    /// Create a ceiling at the given height
    #[must_use]
    pub const fn new(feet: u32) -> Self {
        Self(feet)
    }

    /// Height in feet AGL
    #[must_use]
    pub const fn feet(self) -> u32 {
        self.0
    }

    /// Whether this is the "no ceiling" sentinel
    #[must_use]
    pub const fn is_unlimited(self) -> bool {
        self.0 == Self::UNLIMITED.0
    }

    /// Derive the ceiling from a sky layer list
    ///
    /// With more than one layer, the first broken or overcast layer with a
    /// base wins and vertical visibility is not consulted. With one layer
    /// (or none), a reported vertical visibility overrides the layer.
    #[must_use]
    pub fn from_sky(layers: &[SkyLayer], vertical_visibility_ft: Option<u32>) -> Self {
        if layers.len() <= 1 {
            if let Some(vv) = vertical_visibility_ft {
                return Self(vv);
            }
        }

        layers
            .iter()
            .find_map(SkyLayer::ceiling_base)
            .map_or(Self::UNLIMITED, Self)
    }
}

impl Default for Ceiling {
    fn default() -> Self {
        Self::UNLIMITED
    }
}

impl fmt::Display for Ceiling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ft", self.0)
    }
}
