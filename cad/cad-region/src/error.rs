//! Error types for region operations.

use thiserror::Error;

/// Result type for region operations.
pub type RegionResult<T> = Result<T, RegionError>;

/// Errors that can occur during region operations.
#[derive(Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum RegionError {
    /// A caller-supplied surface list did not hold exactly one entry per side.
    #[error("invalid surface count: expected {expected}, got {got}")]
    InvalidSurfaceCount {
        /// Number of surfaces a region requires.
        expected: usize,
        /// Number of surfaces supplied.
        got: usize,
    },

    /// A surface index was outside the region's surface slots.
    #[error("invalid surface index {index} (region has {count} surfaces)")]
    SurfaceIndexOutOfBounds {
        /// The invalid 0-based index.
        index: usize,
        /// Total number of surfaces in the region.
        count: usize,
    },

    /// Size limits must be positive, finite, and ordered.
    #[error("invalid size limits: min {min}, max {max}")]
    InvalidSizeLimits {
        /// Requested minimum size.
        min: f64,
        /// Requested maximum size.
        max: f64,
    },
}
