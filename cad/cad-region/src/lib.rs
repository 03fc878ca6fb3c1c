//! Rectangular CAD regions with four surfaces.
//!
//! A region is a bounded 2D subspace (lower-left corner plus width and
//! height, stored in meters) together with the four orthogonal surfaces
//! that enclose it. Each surface carries a name, a bypass flag, and a
//! material. It follows the AutoCAD notion of a region: an enclosed 2D
//! area, here with per-side surface properties instead of mass properties.
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero Bevy dependencies**. It can be used in:
//! - CLI tools
//! - Web applications (WASM)
//! - Servers
//! - Desktop editors
//!
//! # Overview
//!
//! - [`Region`] - Boundary, four surfaces, and change flags
//! - [`Surface`] - Number, name, bypass flag, material
//! - [`Extents`] - The (x, y, width, height) boundary
//! - [`RegionConfig`] - Defaults and size limits
//! - [`ChangeSignal`] - Lazily recomputed "changed" flag
//! - [`TableWriter`] - Seam to the document library used for reports
//!
//! # Quick Start
//!
//! ## Editing a Region
//!
//! ```
//! use cad_region::{Extents, Region, Surface};
//!
//! let mut region = Region::from_parts(
//!     Extents::new(0.0, 0.0, 30.0, 20.0),
//!     [
//!         Surface::new(1, "West", false, "Brick"),
//!         Surface::new(2, "North", false, "Brick"),
//!         Surface::new(3, "East", false, "Glass"),
//!         Surface::new(4, "South", false, "Concrete"),
//!     ],
//! );
//!
//! region.set_surface_properties(2, "East", true, "Glass").unwrap();
//! assert!(region.is_surface_value_changed());
//! assert!(!region.is_surface_name_changed());
//!
//! // Save, then start tracking from here.
//! region.acknowledge_changes();
//! assert!(!region.changes().any());
//! ```
//!
//! ## Reports
//!
//! ```
//! use cad_region::{DistanceUnit, NumberFormat, PdfFonts, PlainTextTableWriter, Point, Region};
//!
//! let region = Region::new();
//! let mut writer = PlainTextTableWriter::new();
//! region
//!     .export_to_pdf(
//!         &mut writer,
//!         Point::new(0.0, 36.0),
//!         &PdfFonts::default(),
//!         &NumberFormat::default(),
//!         DistanceUnit::Meters,
//!     )
//!     .unwrap();
//!
//! assert!(writer.text().contains("(20, 20) m"));
//! ```
//!
//! # Quality Standards
//!
//! - Zero clippy/doc warnings
//! - Zero `unwrap`/`expect` in library code

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod change;
mod config;
mod error;
mod extents;
mod format;
mod region;
mod report;
mod surface;
mod units;

pub use change::{ChangeSignal, RegionChanges};
pub use config::RegionConfig;
pub use error::{RegionError, RegionResult};
pub use extents::{
    Extents, SizeLimits, HEIGHT_METERS_DEFAULT, SIZE_METERS_MAXIMUM, SIZE_METERS_MINIMUM,
    WIDTH_METERS_DEFAULT, X_METERS_DEFAULT, Y_METERS_DEFAULT,
};
pub use format::{format_quantity_pair, NumberFormat};
pub use region::{Region, SurfacesMut};
pub use report::{
    ColumnSpan, Font, PdfFonts, PlainTextTableWriter, Point, ReportError, Table, TableWriter,
    HEADER_ROWS, PORTRAIT_LEFT_MARGIN, SURFACE_COLUMN_WIDTHS, TABLE_SPACING,
};
pub use surface::{
    default_surface_name, Surface, BYPASSED_DEFAULT, MATERIAL_NAME_DEFAULT, NUMBER_OF_SURFACES,
    SURFACE_NAME_PREFIX_DEFAULT,
};
pub use units::{convert_distance, DistanceUnit};

// Re-export for convenience
pub use nalgebra::{Point2, Vector2};
