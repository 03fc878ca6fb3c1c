//! Region definition.
//!
//! A [`Region`] is a rectangular subspace of a 2D CAD drawing together with
//! the four orthogonal surfaces that bound it. Regions track whether their
//! boundary, surface names, or surface values have changed since they were
//! created (or last acknowledged), so editors can enable "apply" actions.

use std::ops::{Deref, DerefMut};

use tracing::{debug, warn};

use crate::change::{ChangeSignal, RegionChanges};
use crate::config::RegionConfig;
use crate::error::{RegionError, RegionResult};
use crate::extents::Extents;
use crate::surface::{Surface, NUMBER_OF_SURFACES};

type SurfaceNames = [String; NUMBER_OF_SURFACES];
type SurfaceValues = [(bool, String); NUMBER_OF_SURFACES];

#[derive(Debug)]
struct ChangeSignals {
    boundary: ChangeSignal<Extents>,
    surface_names: ChangeSignal<SurfaceNames>,
    surface_values: ChangeSignal<SurfaceValues>,
}

impl ChangeSignals {
    fn new(extents: Extents, surfaces: &[Surface; NUMBER_OF_SURFACES]) -> Self {
        Self {
            boundary: ChangeSignal::new(extents),
            surface_names: ChangeSignal::new(surface_names(surfaces)),
            surface_values: ChangeSignal::new(surface_values(surfaces)),
        }
    }

    fn invalidate_surfaces(&self) {
        self.surface_names.invalidate();
        self.surface_values.invalidate();
    }
}

fn surface_names(surfaces: &[Surface; NUMBER_OF_SURFACES]) -> SurfaceNames {
    std::array::from_fn(|i| surfaces[i].name().to_string())
}

fn surface_values(surfaces: &[Surface; NUMBER_OF_SURFACES]) -> SurfaceValues {
    std::array::from_fn(|i| {
        (
            surfaces[i].is_bypassed(),
            surfaces[i].material_name().to_string(),
        )
    })
}

fn renumber(surfaces: &mut [Surface; NUMBER_OF_SURFACES]) {
    for (index, surface) in surfaces.iter_mut().enumerate() {
        surface.set_number(index + 1);
    }
}

fn check_surface_count(surfaces: &[Surface]) -> RegionResult<()> {
    if surfaces.len() == NUMBER_OF_SURFACES {
        Ok(())
    } else {
        Err(RegionError::InvalidSurfaceCount {
            expected: NUMBER_OF_SURFACES,
            got: surfaces.len(),
        })
    }
}

/// A rectangular region with four surfaces.
///
/// Extents are stored in meters. Surface `i` (0-based) always carries the
/// number `i + 1`.
///
/// `Region` deliberately does not implement `Clone`; use
/// [`Region::from_region`] to make an independent copy.
///
/// # Example
///
/// ```
/// use cad_region::{Extents, Region};
///
/// let mut region = Region::new();
/// assert!(!region.changes().any());
///
/// region.set_surface_properties(0, "Stage Wall", true, "Curtain").unwrap();
/// assert!(region.is_surface_name_changed());
/// assert!(region.is_surface_value_changed());
/// assert!(!region.is_boundary_changed());
///
/// region.set_extents(Extents::new(-10.0, 0.0, 40.0, 25.0));
/// assert!(region.is_boundary_changed());
/// ```
#[derive(Debug)]
pub struct Region {
    /// Boundary in meters.
    extents: Extents,

    /// Surfaces in side order.
    surfaces: [Surface; NUMBER_OF_SURFACES],

    /// Defaults and limits.
    config: RegionConfig,

    /// Derived "changed" flags.
    signals: ChangeSignals,
}

impl Region {
    /// Create a region with the default boundary and default surfaces.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RegionConfig::default())
    }

    /// Create a region from a configuration's defaults.
    #[must_use]
    pub fn with_config(config: RegionConfig) -> Self {
        let extents = config.default_extents();
        let surfaces = std::array::from_fn(|i| config.default_surface(i + 1));
        Self::init(config, extents, surfaces)
    }

    /// Create a region from a boundary and four surfaces.
    ///
    /// Surface numbers are taken from position, not from the arguments.
    ///
    /// # Example
    ///
    /// ```
    /// use cad_region::{Extents, Region, Surface};
    ///
    /// let region = Region::from_parts(
    ///     Extents::new(0.0, 0.0, 12.0, 8.0),
    ///     [
    ///         Surface::new(9, "Left", false, "Brick"),
    ///         Surface::new(9, "Top", false, "Plaster"),
    ///         Surface::new(9, "Right", true, "Glass"),
    ///         Surface::new(9, "Bottom", false, "Wood"),
    ///     ],
    /// );
    /// assert_eq!(region.surfaces()[2].number(), 3);
    /// ```
    ///
    /// Uses [`RegionConfig::default`]; see [`Region::from_parts_with_config`]
    /// for custom limits and reset defaults.
    #[must_use]
    pub fn from_parts(extents: Extents, surfaces: [Surface; NUMBER_OF_SURFACES]) -> Self {
        Self::from_parts_with_config(RegionConfig::default(), extents, surfaces)
    }

    /// Create a region from a boundary and four surfaces under a given
    /// configuration.
    ///
    /// The boundary is clamped to the configuration's size limits, and
    /// [`Region::reset`] restores the configuration's defaults.
    #[must_use]
    pub fn from_parts_with_config(
        config: RegionConfig,
        extents: Extents,
        surfaces: [Surface; NUMBER_OF_SURFACES],
    ) -> Self {
        Self::init(config, extents, surfaces)
    }

    /// Create a region from a boundary and a caller-supplied surface list,
    /// using [`RegionConfig::default`].
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidSurfaceCount`] if the list does not hold
    /// exactly four surfaces.
    pub fn from_surface_list(extents: Extents, surfaces: &[Surface]) -> RegionResult<Self> {
        check_surface_count(surfaces)?;
        let surfaces = std::array::from_fn(|i| surfaces[i].clone());
        Ok(Self::from_parts(extents, surfaces))
    }

    /// Create an independent copy of another region.
    ///
    /// The copy starts with no pending changes, whatever the source's state.
    #[must_use]
    pub fn from_region(other: &Self) -> Self {
        Self::init(other.config.clone(), other.extents, other.surfaces.clone())
    }

    fn init(
        config: RegionConfig,
        extents: Extents,
        mut surfaces: [Surface; NUMBER_OF_SURFACES],
    ) -> Self {
        let extents = clamp_extents(&config, extents);
        renumber(&mut surfaces);
        let signals = ChangeSignals::new(extents, &surfaces);
        debug!(
            x = extents.x,
            y = extents.y,
            width = extents.width,
            height = extents.height,
            "Created region"
        );
        Self {
            extents,
            surfaces,
            config,
            signals,
        }
    }

    /// Restore the default boundary and clear surface bypass flags and
    /// materials. Surface names are kept.
    pub fn reset(&mut self) {
        debug!("Resetting region");
        self.set_extents(self.config.default_extents());
        let bypassed = self.config.bypassed_default();
        for surface in &mut self.surfaces {
            surface.set_bypassed(bypassed);
            surface.set_material_name(self.config.default_material_name());
        }
        self.signals.surface_values.invalidate();
    }

    /// Replace the boundary and all four surfaces.
    pub fn set_region(&mut self, extents: Extents, surfaces: [Surface; NUMBER_OF_SURFACES]) {
        self.set_extents(extents);
        self.set_all_surface_properties(surfaces);
    }

    /// Replace the boundary and all four surfaces from a surface list.
    ///
    /// Nothing is modified if the list is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidSurfaceCount`] if the list does not hold
    /// exactly four surfaces.
    pub fn set_region_from_list(
        &mut self,
        extents: Extents,
        surfaces: &[Surface],
    ) -> RegionResult<()> {
        check_surface_count(surfaces)?;
        self.set_extents(extents);
        self.set_all_surface_properties(std::array::from_fn(|i| surfaces[i].clone()));
        Ok(())
    }

    /// Copy the boundary and surfaces of another region into this one.
    ///
    /// This region keeps its own configuration and change baseline.
    pub fn set_from_region(&mut self, other: &Self) {
        debug!("Assigning region from another region");
        self.set_region(other.extents, other.surfaces.clone());
    }

    /// Replace the boundary. Width and height are clamped into the
    /// configured size limits.
    pub fn set_extents(&mut self, extents: Extents) {
        self.extents = clamp_extents(&self.config, extents);
        self.signals.boundary.invalidate();
    }

    /// Set the lower-left x coordinate.
    pub fn set_x(&mut self, x: f64) {
        self.set_extents(Extents { x, ..self.extents });
    }

    /// Set the lower-left y coordinate.
    pub fn set_y(&mut self, y: f64) {
        self.set_extents(Extents { y, ..self.extents });
    }

    /// Set the width.
    pub fn set_width(&mut self, width: f64) {
        self.set_extents(Extents {
            width,
            ..self.extents
        });
    }

    /// Set the height.
    pub fn set_height(&mut self, height: f64) {
        self.set_extents(Extents {
            height,
            ..self.extents
        });
    }

    /// Set the properties of one surface by 0-based index.
    ///
    /// The surface number is re-derived as `index + 1`.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::SurfaceIndexOutOfBounds`] if `index` is not in
    /// `0..4`.
    pub fn set_surface_properties(
        &mut self,
        index: usize,
        name: impl Into<String>,
        bypassed: bool,
        material_name: impl Into<String>,
    ) -> RegionResult<()> {
        let surface = self
            .surfaces
            .get_mut(index)
            .ok_or(RegionError::SurfaceIndexOutOfBounds {
                index,
                count: NUMBER_OF_SURFACES,
            })?;
        surface.set_number(index + 1);
        surface.set_name(name);
        surface.set_bypassed(bypassed);
        surface.set_material_name(material_name);
        self.signals.invalidate_surfaces();
        Ok(())
    }

    /// Replace all four surfaces. Numbers are taken from position.
    pub fn set_all_surface_properties(&mut self, surfaces: [Surface; NUMBER_OF_SURFACES]) {
        self.surfaces = surfaces;
        renumber(&mut self.surfaces);
        self.signals.invalidate_surfaces();
    }

    /// The boundary.
    #[must_use]
    pub const fn extents(&self) -> Extents {
        self.extents
    }

    /// Lower-left x coordinate.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.extents.x
    }

    /// Lower-left y coordinate.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.extents.y
    }

    /// Width.
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.extents.width
    }

    /// Height.
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.extents.height
    }

    /// The four surfaces in side order.
    #[must_use]
    pub const fn surfaces(&self) -> &[Surface; NUMBER_OF_SURFACES] {
        &self.surfaces
    }

    /// One surface by 0-based index.
    #[must_use]
    pub fn surface(&self, index: usize) -> Option<&Surface> {
        self.surfaces.get(index)
    }

    /// Live mutable access to the surfaces.
    ///
    /// Edits made through the guard are reflected in the change flags, and
    /// surface numbers are restored to their positions when it is dropped.
    ///
    /// ```
    /// use cad_region::Region;
    ///
    /// let mut region = Region::new();
    /// region.surfaces_mut()[3].set_material_name("Gravel");
    /// assert!(region.is_surface_value_changed());
    /// assert!(!region.is_surface_name_changed());
    /// ```
    pub fn surfaces_mut(&mut self) -> SurfacesMut<'_> {
        self.signals.invalidate_surfaces();
        SurfacesMut {
            surfaces: &mut self.surfaces,
            signals: &self.signals,
        }
    }

    /// The configuration this region was created with.
    #[must_use]
    pub const fn config(&self) -> &RegionConfig {
        &self.config
    }

    /// Whether any of x, y, width, or height differs from the baseline.
    #[must_use]
    pub fn is_boundary_changed(&self) -> bool {
        self.signals
            .boundary
            .get(|baseline| *baseline != self.extents)
    }

    /// Whether any surface name differs from the baseline.
    #[must_use]
    pub fn is_surface_name_changed(&self) -> bool {
        self.signals.surface_names.get(|baseline| {
            baseline
                .iter()
                .zip(&self.surfaces)
                .any(|(name, surface)| name != surface.name())
        })
    }

    /// Whether any surface bypass flag or material differs from the baseline.
    #[must_use]
    pub fn is_surface_value_changed(&self) -> bool {
        self.signals.surface_values.get(|baseline| {
            baseline
                .iter()
                .zip(&self.surfaces)
                .any(|((bypassed, material), surface)| {
                    *bypassed != surface.is_bypassed() || material != surface.material_name()
                })
        })
    }

    /// All three change flags.
    #[must_use]
    pub fn changes(&self) -> RegionChanges {
        RegionChanges {
            boundary: self.is_boundary_changed(),
            surface_names: self.is_surface_name_changed(),
            surface_values: self.is_surface_value_changed(),
        }
    }

    /// Take the current values as the new baseline, clearing all flags.
    pub fn acknowledge_changes(&mut self) {
        self.signals.boundary.rebaseline(self.extents);
        self.signals
            .surface_names
            .rebaseline(surface_names(&self.surfaces));
        self.signals
            .surface_values
            .rebaseline(surface_values(&self.surfaces));
    }
}

impl Default for Region {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&Region> for Region {
    fn from(other: &Region) -> Self {
        Self::from_region(other)
    }
}

fn clamp_extents(config: &RegionConfig, extents: Extents) -> Extents {
    let clamped = config.clamp_extents(extents);
    if clamped != extents {
        let limits = config.size_limits();
        warn!(
            "Region size {} x {} outside limits [{}, {}], clamped to {} x {}",
            extents.width,
            extents.height,
            limits.min(),
            limits.max(),
            clamped.width,
            clamped.height
        );
    }
    clamped
}

/// Mutable view of a region's surfaces.
///
/// Returned by [`Region::surfaces_mut`]. On drop, surface numbers are reset
/// to their positions and the surface change flags are invalidated.
#[derive(Debug)]
pub struct SurfacesMut<'a> {
    surfaces: &'a mut [Surface; NUMBER_OF_SURFACES],
    signals: &'a ChangeSignals,
}

impl Deref for SurfacesMut<'_> {
    type Target = [Surface; NUMBER_OF_SURFACES];

    fn deref(&self) -> &Self::Target {
        self.surfaces
    }
}

impl DerefMut for SurfacesMut<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.surfaces
    }
}

impl Drop for SurfacesMut<'_> {
    fn drop(&mut self) {
        renumber(self.surfaces);
        self.signals.invalidate_surfaces();
    }
}
