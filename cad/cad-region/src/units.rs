//! Distance units and conversion between them.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A unit of length used for display.
///
/// Regions store their extents in meters; reports convert into whichever
/// unit the user prefers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DistanceUnit {
    /// Millimeters.
    Millimeters,
    /// Centimeters.
    Centimeters,
    /// Meters.
    #[default]
    Meters,
    /// Kilometers.
    Kilometers,
    /// International inches.
    Inches,
    /// International feet.
    Feet,
    /// International yards.
    Yards,
    /// Statute miles.
    Miles,
}

impl DistanceUnit {
    /// All supported units.
    pub const ALL: [Self; 8] = [
        Self::Millimeters,
        Self::Centimeters,
        Self::Meters,
        Self::Kilometers,
        Self::Inches,
        Self::Feet,
        Self::Yards,
        Self::Miles,
    ];

    /// Length of one unit in meters.
    #[must_use]
    pub const fn meters_per_unit(self) -> f64 {
        match self {
            Self::Millimeters => 0.001,
            Self::Centimeters => 0.01,
            Self::Meters => 1.0,
            Self::Kilometers => 1000.0,
            Self::Inches => 0.0254,
            Self::Feet => 0.3048,
            Self::Yards => 0.9144,
            Self::Miles => 1609.344,
        }
    }

    /// Short label used next to displayed quantities.
    #[must_use]
    pub const fn presentation_str(self) -> &'static str {
        match self {
            Self::Millimeters => "mm",
            Self::Centimeters => "cm",
            Self::Meters => "m",
            Self::Kilometers => "km",
            Self::Inches => "in",
            Self::Feet => "ft",
            Self::Yards => "yd",
            Self::Miles => "mi",
        }
    }

    /// Fraction digits used when showing distances in this unit.
    ///
    /// Millimeters are already fine-grained, so they are shown whole.
    #[must_use]
    pub const fn display_precision(self) -> usize {
        match self {
            Self::Millimeters => 0,
            _ => 2,
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.presentation_str())
    }
}

/// Convert a distance between units.
///
/// # Example
///
/// ```
/// use cad_region::{convert_distance, DistanceUnit};
///
/// let mm = convert_distance(1.5, DistanceUnit::Meters, DistanceUnit::Millimeters);
/// assert!((mm - 1500.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn convert_distance(value: f64, from: DistanceUnit, to: DistanceUnit) -> f64 {
    if from == to {
        return value;
    }
    // Scale by a ratio >= 1 so metric pairs multiply by an exact power of ten.
    let from_m = from.meters_per_unit();
    let to_m = to.meters_per_unit();
    if from_m >= to_m {
        value * (from_m / to_m)
    } else {
        value / (to_m / from_m)
    }
}
