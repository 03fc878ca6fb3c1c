//! Rectangular extents and the size limits applied to them.

use nalgebra::{Point2, Vector2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{RegionError, RegionResult};

/// Default x coordinate of a region's lower-left corner, in meters.
pub const X_METERS_DEFAULT: f64 = 0.0;

/// Default y coordinate of a region's lower-left corner, in meters.
pub const Y_METERS_DEFAULT: f64 = 0.0;

/// Default region width, in meters.
pub const WIDTH_METERS_DEFAULT: f64 = 20.0;

/// Default region height, in meters.
pub const HEIGHT_METERS_DEFAULT: f64 = 20.0;

/// Smallest allowed width or height, in meters.
pub const SIZE_METERS_MINIMUM: f64 = 3.0;

/// Largest allowed width or height, in meters.
pub const SIZE_METERS_MAXIMUM: f64 = 1000.0;

/// The (x, y, width, height) boundary of a region, stored in meters.
///
/// `(x, y)` is the lower-left corner. Extents double as the "boundary shape"
/// that UI code hands to a region.
///
/// # Example
///
/// ```
/// use cad_region::{Extents, Point2};
///
/// let extents = Extents::new(1.0, 2.0, 10.0, 4.0);
/// assert_eq!(extents.upper_right(), Point2::new(11.0, 6.0));
/// assert!(extents.contains(&Point2::new(5.0, 3.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Extents {
    /// Lower-left x coordinate.
    pub x: f64,
    /// Lower-left y coordinate.
    pub y: f64,
    /// Width along the x axis.
    pub width: f64,
    /// Height along the y axis.
    pub height: f64,
}

impl Extents {
    /// Create extents from a corner and a size.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The lower-left corner.
    #[must_use]
    pub fn lower_left(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }

    /// The upper-right corner.
    #[must_use]
    pub fn upper_right(&self) -> Point2<f64> {
        Point2::new(self.x + self.width, self.y + self.height)
    }

    /// The center point.
    #[must_use]
    pub fn center(&self) -> Point2<f64> {
        Point2::new(
            self.width.mul_add(0.5, self.x),
            self.height.mul_add(0.5, self.y),
        )
    }

    /// The size as a vector.
    #[must_use]
    pub fn size(&self) -> Vector2<f64> {
        Vector2::new(self.width, self.height)
    }

    /// Area covered by the extents.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Check whether a point lies inside or on the boundary.
    #[must_use]
    pub fn contains(&self, point: &Point2<f64>) -> bool {
        let max = self.upper_right();
        point.x >= self.x && point.x <= max.x && point.y >= self.y && point.y <= max.y
    }
}

impl Default for Extents {
    fn default() -> Self {
        Self::new(
            X_METERS_DEFAULT,
            Y_METERS_DEFAULT,
            WIDTH_METERS_DEFAULT,
            HEIGHT_METERS_DEFAULT,
        )
    }
}

impl From<(f64, f64, f64, f64)> for Extents {
    fn from((x, y, width, height): (f64, f64, f64, f64)) -> Self {
        Self::new(x, y, width, height)
    }
}

/// Inclusive bounds on a region's width and height.
///
/// # Example
///
/// ```
/// use cad_region::SizeLimits;
///
/// let limits = SizeLimits::default();
/// assert_eq!(limits.clamp(1.0), 3.0);
/// assert_eq!(limits.clamp(50.0), 50.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSizeLimits"))]
pub struct SizeLimits {
    min: f64,
    max: f64,
}

/// Unchecked wire form of [`SizeLimits`]; validated through [`SizeLimits::new`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawSizeLimits {
    min: f64,
    max: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSizeLimits> for SizeLimits {
    type Error = RegionError;

    fn try_from(raw: RawSizeLimits) -> RegionResult<Self> {
        Self::new(raw.min, raw.max)
    }
}

impl SizeLimits {
    /// Create size limits.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidSizeLimits`] if either bound is not a
    /// positive finite number or `min > max`.
    pub fn new(min: f64, max: f64) -> RegionResult<Self> {
        let valid = min.is_finite() && max.is_finite() && min > 0.0 && min <= max;
        if !valid {
            return Err(RegionError::InvalidSizeLimits { min, max });
        }
        Ok(Self { min, max })
    }

    /// Smallest allowed size.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Largest allowed size.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Check whether a size is within the limits.
    #[must_use]
    pub fn contains(&self, size: f64) -> bool {
        (self.min..=self.max).contains(&size)
    }

    /// Clamp a size into the limits. NaN maps to the minimum.
    #[must_use]
    pub fn clamp(&self, size: f64) -> f64 {
        if size.is_nan() {
            self.min
        } else {
            size.clamp(self.min, self.max)
        }
    }
}

impl Default for SizeLimits {
    fn default() -> Self {
        Self {
            min: SIZE_METERS_MINIMUM,
            max: SIZE_METERS_MAXIMUM,
        }
    }
}
