//! Surface records for the sides of a region.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of orthogonal surfaces on a region.
pub const NUMBER_OF_SURFACES: usize = 4;

/// Default bypass state of a surface.
pub const BYPASSED_DEFAULT: bool = false;

/// Default material assigned to a surface.
pub const MATERIAL_NAME_DEFAULT: &str = "Rigid";

/// Default prefix for generated surface names ("Surface 1", ...).
pub const SURFACE_NAME_PREFIX_DEFAULT: &str = "Surface";

/// One side of a region: its number, name, bypass flag, and material.
///
/// Surfaces are identified by position. When a surface is stored in a
/// [`Region`](crate::Region), its number is always derived from its slot,
/// whatever number the caller built it with.
///
/// # Example
///
/// ```
/// use cad_region::Surface;
///
/// let surface = Surface::new(2, "North Wall", true, "Brick");
/// assert_eq!(surface.number(), 2);
/// assert!(surface.is_bypassed());
/// assert_eq!(surface.status_label(), "Bypassed");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Surface {
    number: usize,
    name: String,
    bypassed: bool,
    material_name: String,
}

impl Surface {
    /// Create a surface.
    #[must_use]
    pub fn new(
        number: usize,
        name: impl Into<String>,
        bypassed: bool,
        material_name: impl Into<String>,
    ) -> Self {
        Self {
            number,
            name: name.into(),
            bypassed,
            material_name: material_name.into(),
        }
    }

    /// Create a surface with the default name, bypass state and material.
    ///
    /// ```
    /// use cad_region::Surface;
    ///
    /// let surface = Surface::with_defaults(3);
    /// assert_eq!(surface.name(), "Surface 3");
    /// assert_eq!(surface.material_name(), "Rigid");
    /// ```
    #[must_use]
    pub fn with_defaults(number: usize) -> Self {
        Self::new(
            number,
            default_surface_name(SURFACE_NAME_PREFIX_DEFAULT, number),
            BYPASSED_DEFAULT,
            MATERIAL_NAME_DEFAULT,
        )
    }

    /// The 1-based surface number.
    #[must_use]
    pub const fn number(&self) -> usize {
        self.number
    }

    /// The surface name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the surface name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Whether the surface is excluded from downstream computation.
    #[must_use]
    pub const fn is_bypassed(&self) -> bool {
        self.bypassed
    }

    /// Set the bypass flag.
    pub fn set_bypassed(&mut self, bypassed: bool) {
        self.bypassed = bypassed;
    }

    /// The assigned material name.
    #[must_use]
    pub fn material_name(&self) -> &str {
        &self.material_name
    }

    /// Set the material name.
    pub fn set_material_name(&mut self, material_name: impl Into<String>) {
        self.material_name = material_name.into();
    }

    /// Human-readable status: "Bypassed" or "Enabled".
    #[must_use]
    pub const fn status_label(&self) -> &'static str {
        if self.bypassed {
            "Bypassed"
        } else {
            "Enabled"
        }
    }

    pub(crate) fn set_number(&mut self, number: usize) {
        self.number = number;
    }
}

/// Build the default name for a surface number, e.g. "Surface 2".
#[must_use]
pub fn default_surface_name(prefix: &str, number: usize) -> String {
    format!("{prefix} {number}")
}
