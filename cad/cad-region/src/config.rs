//! Region configuration: defaults and size limits.
//!
//! # Example
//!
//! ```
//! use cad_region::{Extents, Region, RegionConfig};
//!
//! let config = RegionConfig::default()
//!     .with_default_extents(Extents::new(0.0, 0.0, 50.0, 30.0))
//!     .with_default_material_name("Concrete")
//!     .with_size_limits(1.0, 500.0)
//!     .unwrap();
//!
//! let region = Region::with_config(config);
//! assert_eq!(region.width(), 50.0);
//! assert_eq!(region.surfaces()[0].material_name(), "Concrete");
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::RegionResult;
use crate::extents::{Extents, SizeLimits};
use crate::surface::{
    default_surface_name, Surface, BYPASSED_DEFAULT, MATERIAL_NAME_DEFAULT,
    SURFACE_NAME_PREFIX_DEFAULT,
};

/// Defaults and limits used when creating and resetting regions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RegionConfig {
    /// Boundary used by new and reset regions.
    default_extents: Extents,
    /// Bounds on width and height.
    size_limits: SizeLimits,
    /// Material applied by default and on reset.
    default_material_name: String,
    /// Prefix of generated surface names.
    surface_name_prefix: String,
}

impl RegionConfig {
    /// Create a configuration with default settings.
    ///
    /// Defaults:
    /// - Extents: (0, 0) with a 20 m x 20 m size
    /// - Size limits: 3 m to 1000 m
    /// - Material: "Rigid"
    /// - Surface names: "Surface 1" .. "Surface 4"
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default extents (builder pattern).
    #[must_use]
    pub fn with_default_extents(mut self, extents: Extents) -> Self {
        self.default_extents = extents;
        self
    }

    /// Set the size limits (builder pattern).
    ///
    /// # Errors
    ///
    /// Returns an error if the limits are not positive, finite, and ordered.
    pub fn with_size_limits(mut self, min: f64, max: f64) -> RegionResult<Self> {
        self.size_limits = SizeLimits::new(min, max)?;
        Ok(self)
    }

    /// Set the default material name (builder pattern).
    #[must_use]
    pub fn with_default_material_name(mut self, name: impl Into<String>) -> Self {
        self.default_material_name = name.into();
        self
    }

    /// Set the prefix of generated surface names (builder pattern).
    #[must_use]
    pub fn with_surface_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.surface_name_prefix = prefix.into();
        self
    }

    /// Default boundary.
    #[must_use]
    pub const fn default_extents(&self) -> Extents {
        self.default_extents
    }

    /// Width and height limits.
    #[must_use]
    pub const fn size_limits(&self) -> SizeLimits {
        self.size_limits
    }

    /// Default material name.
    #[must_use]
    pub fn default_material_name(&self) -> &str {
        &self.default_material_name
    }

    /// Default bypass state.
    #[must_use]
    pub const fn bypassed_default(&self) -> bool {
        BYPASSED_DEFAULT
    }

    /// Default name for a 1-based surface number.
    #[must_use]
    pub fn surface_name_default(&self, number: usize) -> String {
        default_surface_name(&self.surface_name_prefix, number)
    }

    /// Default surface for a 1-based surface number.
    #[must_use]
    pub fn default_surface(&self, number: usize) -> Surface {
        Surface::new(
            number,
            self.surface_name_default(number),
            self.bypassed_default(),
            self.default_material_name.clone(),
        )
    }

    /// Clamp extents into the size limits; x and y pass through.
    #[must_use]
    pub fn clamp_extents(&self, extents: Extents) -> Extents {
        Extents::new(
            extents.x,
            extents.y,
            self.size_limits.clamp(extents.width),
            self.size_limits.clamp(extents.height),
        )
    }
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self {
            default_extents: Extents::default(),
            size_limits: SizeLimits::default(),
            default_material_name: MATERIAL_NAME_DEFAULT.to_string(),
            surface_name_prefix: SURFACE_NAME_PREFIX_DEFAULT.to_string(),
        }
    }
}
