//! Tabular report export.
//!
//! A region renders itself as two tables: its extents and its surfaces.
//! Page layout, fonts, and pagination belong to a [`TableWriter`], which
//! wraps whatever document and page the caller has open. Page coordinates
//! are in points with `y` growing down the page.
//!
//! # Example
//!
//! ```
//! use cad_region::{DistanceUnit, NumberFormat, PdfFonts, PlainTextTableWriter, Point, Region};
//!
//! let region = Region::new();
//! let mut writer = PlainTextTableWriter::new();
//!
//! let end = region
//!     .export_to_pdf(
//!         &mut writer,
//!         Point::new(0.0, 40.0),
//!         &PdfFonts::default(),
//!         &NumberFormat::default(),
//!         DistanceUnit::Millimeters,
//!     )
//!     .unwrap();
//!
//! assert!(end.y > 40.0);
//! assert!(writer.text().contains("(20000, 20000) mm"));
//! ```

use thiserror::Error;
use tracing::debug;

use crate::format::{format_quantity_pair, NumberFormat};
use crate::region::Region;
use crate::units::{convert_distance, DistanceUnit};

/// Left margin of a portrait page, in points.
pub const PORTRAIT_LEFT_MARGIN: f32 = 50.0;

/// Vertical gap placed above each table, in points.
pub const TABLE_SPACING: f32 = 20.0;

/// Number of header rows in every report table (span row + column row).
pub const HEADER_ROWS: usize = 2;

/// Column widths of the surfaces table, in points.
///
/// Set by hand so the material column is not clipped.
pub const SURFACE_COLUMN_WIDTHS: [f32; 4] = [20.0, 180.0, 100.0, 240.0];

/// A position on a page, in points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal offset from the left edge.
    pub x: f32,
    /// Vertical offset from the top edge.
    pub y: f32,
}

impl Point {
    /// Create a point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A font face and size.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    /// Font family name.
    pub family: String,
    /// Size in points.
    pub size: f32,
}

impl Font {
    /// Create a font.
    #[must_use]
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }
}

/// Fonts used for table headers and body cells.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfFonts {
    /// Font of span and column header cells.
    pub header: Font,
    /// Font of data cells.
    pub body: Font,
}

impl Default for PdfFonts {
    fn default() -> Self {
        Self {
            header: Font::new("Helvetica-Bold", 9.0),
            body: Font::new("Helvetica", 8.0),
        }
    }
}

/// A header cell spanning several columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpan {
    /// Span title.
    pub title: String,
    /// Number of columns covered.
    pub columns: usize,
}

/// A table with a span header row, a column header row, and data rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    spans: Vec<ColumnSpan>,
    column_names: Vec<String>,
    column_widths: Option<Vec<f32>>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table whose single span covers every column.
    #[must_use]
    pub fn with_span(title: impl Into<String>, column_names: &[&str]) -> Self {
        Self {
            spans: vec![ColumnSpan {
                title: title.into(),
                columns: column_names.len(),
            }],
            column_names: column_names.iter().map(ToString::to_string).collect(),
            column_widths: None,
            rows: Vec::new(),
        }
    }

    /// Fix the column widths in points (builder pattern).
    #[must_use]
    pub fn with_column_widths(mut self, widths: &[f32]) -> Self {
        self.column_widths = Some(widths.to_vec());
        self
    }

    /// Append a data row.
    pub fn push_row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    /// Header spans.
    #[must_use]
    pub fn spans(&self) -> &[ColumnSpan] {
        &self.spans
    }

    /// Column header titles.
    #[must_use]
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    /// Fixed column widths, if any.
    #[must_use]
    pub fn column_widths(&self) -> Option<&[f32]> {
        self.column_widths.as_deref()
    }

    /// Data rows.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of header rows.
    #[must_use]
    pub const fn header_rows(&self) -> usize {
        HEADER_ROWS
    }
}

/// A service that lays tables out on a document.
///
/// Implementations own (or borrow) the document and current page, continue
/// tables onto new pages as needed, and return the position just below the
/// last row written.
pub trait TableWriter {
    /// Error raised by the underlying document.
    type Error;

    /// Write a table with its top-left corner at `origin`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying document rejects the table.
    fn write_table(
        &mut self,
        origin: Point,
        fonts: &PdfFonts,
        table: &Table,
    ) -> Result<Point, Self::Error>;
}

impl Region {
    /// Build the extents table, converting meters into `unit`.
    ///
    /// Millimeters are shown with no fraction digits, other units with up
    /// to two. The caller's formatter is otherwise left as configured.
    #[must_use]
    pub fn extents_table(&self, number_format: &NumberFormat, unit: DistanceUnit) -> Table {
        let distance_format = number_format
            .clone()
            .with_max_fraction_digits(unit.display_precision());
        let label = unit.presentation_str();
        let to_unit = |meters| convert_distance(meters, DistanceUnit::Meters, unit);

        let lower_left = format_quantity_pair(
            to_unit(self.x()),
            to_unit(self.y()),
            &distance_format,
            label,
        );
        let size = format_quantity_pair(
            to_unit(self.width()),
            to_unit(self.height()),
            &distance_format,
            label,
        );

        let mut table = Table::with_span(
            "EXTENTS",
            &["LOWER LEFT CORNER (X, Y)", "SIZE (WIDTH, HEIGHT)"],
        );
        table.push_row(vec![lower_left, size]);
        table
    }

    /// Build the surfaces table: one row per surface.
    #[must_use]
    pub fn surfaces_table(&self) -> Table {
        let mut table = Table::with_span(
            "SURFACES",
            &["ID", "SURFACE NAME", "STATUS", "MATERIAL NAME"],
        )
        .with_column_widths(&SURFACE_COLUMN_WIDTHS);

        for surface in self.surfaces() {
            table.push_row(vec![
                surface.number().to_string(),
                surface.name().to_string(),
                surface.status_label().to_string(),
                surface.material_name().to_string(),
            ]);
        }
        table
    }

    /// Write the extents and surfaces tables, one below the other.
    ///
    /// The first table starts [`TABLE_SPACING`] below `initial_point`, at the
    /// portrait left margin. Returns the position after the surfaces table.
    ///
    /// # Errors
    ///
    /// Propagates any error from `writer`.
    pub fn export_to_pdf<W: TableWriter>(
        &self,
        writer: &mut W,
        initial_point: Point,
        fonts: &PdfFonts,
        number_format: &NumberFormat,
        unit: DistanceUnit,
    ) -> Result<Point, W::Error> {
        debug!("Exporting region report in {}", unit);

        let extents_table = self.extents_table(number_format, unit);
        let origin = Point::new(PORTRAIT_LEFT_MARGIN, initial_point.y + TABLE_SPACING);
        let point = writer.write_table(origin, fonts, &extents_table)?;

        let surfaces_table = self.surfaces_table();
        let origin = Point::new(PORTRAIT_LEFT_MARGIN, point.y + TABLE_SPACING);
        writer.write_table(origin, fonts, &surfaces_table)
    }
}

/// Errors from [`PlainTextTableWriter`].
#[derive(Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum ReportError {
    /// The printable area cannot hold a table's header rows plus one data row.
    #[error("page too small: {available} pt available, {required} pt required")]
    PageTooSmall {
        /// Printable height in points.
        available: f32,
        /// Height needed in points.
        required: f32,
    },

    /// Page height, margins, or row height is not usable for layout.
    #[error("invalid page geometry: height {page_height}, row height {row_height}")]
    InvalidPageGeometry {
        /// Page height in points.
        page_height: f32,
        /// Top margin in points.
        top_margin: f32,
        /// Bottom margin in points.
        bottom_margin: f32,
        /// Row height in points.
        row_height: f32,
    },
}

/// Approximate width of one monospaced character, in points.
const CHAR_WIDTH: f32 = 6.0;

/// A [`TableWriter`] that renders tables as monospaced text pages.
///
/// Each row takes a fixed height. When a row would cross the bottom margin
/// the writer starts a new page and repeats the header rows there. Useful
/// for previews, logs, and tests.
#[derive(Debug, Clone)]
pub struct PlainTextTableWriter {
    page_height: f32,
    top_margin: f32,
    bottom_margin: f32,
    row_height: f32,
    pages: Vec<Vec<String>>,
}

impl PlainTextTableWriter {
    /// Create a writer for US Letter pages (792 pt) with 36 pt margins and
    /// 14 pt rows.
    #[must_use]
    pub fn new() -> Self {
        Self {
            page_height: 792.0,
            top_margin: 36.0,
            bottom_margin: 36.0,
            row_height: 14.0,
            pages: vec![Vec::new()],
        }
    }

    /// Set the page height in points (builder pattern).
    #[must_use]
    pub const fn with_page_height(mut self, page_height: f32) -> Self {
        self.page_height = page_height;
        self
    }

    /// Set the row height in points (builder pattern).
    ///
    /// A zero, negative, or non-finite height makes
    /// [`TableWriter::write_table`] fail with
    /// [`ReportError::InvalidPageGeometry`].
    #[must_use]
    pub const fn with_row_height(mut self, row_height: f32) -> Self {
        self.row_height = row_height;
        self
    }

    /// Set the top and bottom margins in points (builder pattern).
    #[must_use]
    pub const fn with_margins(mut self, top: f32, bottom: f32) -> Self {
        self.top_margin = top;
        self.bottom_margin = bottom;
        self
    }

    /// Number of pages started so far.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Lines of one page.
    #[must_use]
    pub fn page(&self, index: usize) -> Option<&[String]> {
        self.pages.get(index).map(Vec::as_slice)
    }

    /// All pages joined, separated by form feeds.
    #[must_use]
    pub fn text(&self) -> String {
        self.pages
            .iter()
            .map(|lines| lines.join("\n"))
            .collect::<Vec<_>>()
            .join("\n\u{c}\n")
    }

    /// Row height must be positive; every dimension must be finite and
    /// margins non-negative.
    fn check_geometry(&self) -> Result<(), ReportError> {
        let finite = self.page_height.is_finite()
            && self.top_margin.is_finite()
            && self.bottom_margin.is_finite()
            && self.row_height.is_finite();
        let valid = finite
            && self.row_height > 0.0
            && self.top_margin >= 0.0
            && self.bottom_margin >= 0.0;
        if valid {
            Ok(())
        } else {
            Err(ReportError::InvalidPageGeometry {
                page_height: self.page_height,
                top_margin: self.top_margin,
                bottom_margin: self.bottom_margin,
                row_height: self.row_height,
            })
        }
    }

    fn bottom(&self) -> f32 {
        self.page_height - self.bottom_margin
    }

    fn new_page(&mut self) -> f32 {
        self.pages.push(Vec::new());
        self.top_margin
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn put_line(&mut self, y: f32, indent: usize, text: &str) {
        let index = ((y - self.top_margin).max(0.0) / self.row_height).round() as usize;
        if let Some(lines) = self.pages.last_mut() {
            if lines.len() <= index {
                lines.resize(index + 1, String::new());
            }
            lines[index] = format!("{}{}", " ".repeat(indent), text.trim_end());
        }
    }
}

impl Default for PlainTextTableWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn column_chars(table: &Table) -> Vec<usize> {
    let columns = table.column_names().len();
    (0..columns)
        .map(|col| {
            let fixed = table
                .column_widths()
                .and_then(|widths| widths.get(col))
                .map_or(0, |w| (w / CHAR_WIDTH).round() as usize);
            let content = table
                .rows()
                .iter()
                .filter_map(|row| row.get(col))
                .chain(std::iter::once(&table.column_names()[col]))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0);
            fixed.max(content)
        })
        .collect()
}

fn render_row(cells: &[String], widths: &[usize]) -> String {
    widths
        .iter()
        .enumerate()
        .map(|(col, &width)| {
            let cell = cells.get(col).map_or("", String::as_str);
            format!("{cell:<width$}")
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

fn render_spans(spans: &[ColumnSpan], widths: &[usize]) -> String {
    let mut col = 0;
    spans
        .iter()
        .map(|span| {
            let end = (col + span.columns).min(widths.len());
            let separators = 3 * (end - col).saturating_sub(1);
            let covered = widths[col..end].iter().sum::<usize>() + separators;
            col = end;
            format!("{:^covered$}", span.title)
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

impl TableWriter for PlainTextTableWriter {
    type Error = ReportError;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    fn write_table(
        &mut self,
        origin: Point,
        _fonts: &PdfFonts,
        table: &Table,
    ) -> Result<Point, Self::Error> {
        self.check_geometry()?;
        let available = self.bottom() - self.top_margin;
        let required = self.row_height * (table.header_rows() + 1) as f32;
        if required > available {
            return Err(ReportError::PageTooSmall {
                available,
                required,
            });
        }

        let widths = column_chars(table);
        let header = [
            render_spans(table.spans(), &widths),
            render_row(table.column_names(), &widths),
        ];
        let indent = (origin.x.max(0.0) / CHAR_WIDTH).round() as usize;

        let mut y = origin.y;
        if y + required > self.bottom() {
            y = self.new_page();
        }
        for line in &header {
            self.put_line(y, indent, line);
            y += self.row_height;
        }

        for (index, row) in table.rows().iter().enumerate() {
            if y + self.row_height > self.bottom() {
                y = self.new_page();
                for line in &header {
                    self.put_line(y, indent, line);
                    y += self.row_height;
                }
                debug!("Continued table on page {} at row {}", self.pages.len(), index);
            }
            self.put_line(y, indent, &render_row(row, &widths));
            y += self.row_height;
        }

        Ok(Point::new(origin.x, y))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::extents::Extents;
    use crate::surface::Surface;

    /// Records every table it is handed.
    #[derive(Default)]
    struct RecordingWriter {
        calls: Vec<(Point, Table)>,
    }

    impl TableWriter for RecordingWriter {
        type Error = std::convert::Infallible;

        fn write_table(
            &mut self,
            origin: Point,
            _fonts: &PdfFonts,
            table: &Table,
        ) -> Result<Point, Self::Error> {
            self.calls.push((origin, table.clone()));
            Ok(Point::new(origin.x, origin.y + 100.0))
        }
    }

    struct FailingWriter;

    impl TableWriter for FailingWriter {
        type Error = String;

        fn write_table(&mut self, _: Point, _: &PdfFonts, _: &Table) -> Result<Point, String> {
            Err("document closed".to_string())
        }
    }

    fn sample_region() -> Region {
        Region::from_parts(
            Extents::new(1.005, 2.0, 12.5, 8.0),
            [
                Surface::new(1, "Left", false, "Brick"),
                Surface::new(2, "Top", true, "Acoustic Tile"),
                Surface::new(3, "Right", false, "Glass"),
                Surface::new(4, "Bottom", false, "Carpet on Concrete"),
            ],
        )
    }

    #[test]
    fn test_extents_table_meters() {
        let table = sample_region().extents_table(&NumberFormat::default(), DistanceUnit::Meters);
        assert_eq!(table.spans()[0].title, "EXTENTS");
        assert_eq!(table.spans()[0].columns, 2);
        assert_eq!(
            table.rows(),
            &[vec!["(1.01, 2) m".to_string(), "(12.5, 8) m".to_string()]]
        );
    }

    #[test]
    fn test_extents_table_millimeters() {
        let format = NumberFormat::new(0, 4);
        let table = sample_region().extents_table(&format, DistanceUnit::Millimeters);
        assert_eq!(
            table.rows(),
            &[vec![
                "(1005, 2000) mm".to_string(),
                "(12500, 8000) mm".to_string()
            ]]
        );
    }

    #[test]
    fn test_surfaces_table() {
        let table = sample_region().surfaces_table();
        assert_eq!(
            table.column_names(),
            &["ID", "SURFACE NAME", "STATUS", "MATERIAL NAME"]
        );
        assert_eq!(table.column_widths(), Some(&SURFACE_COLUMN_WIDTHS[..]));
        assert_eq!(table.rows().len(), 4);
        assert_eq!(table.rows()[1], vec!["2", "Top", "Bypassed", "Acoustic Tile"]);
        assert_eq!(table.rows()[3][2], "Enabled");
    }

    #[test]
    fn test_export_positions_tables() {
        let mut writer = RecordingWriter::default();
        let end = sample_region()
            .export_to_pdf(
                &mut writer,
                Point::new(300.0, 100.0),
                &PdfFonts::default(),
                &NumberFormat::default(),
                DistanceUnit::Feet,
            )
            .unwrap();

        assert_eq!(writer.calls.len(), 2);
        assert_eq!(writer.calls[0].0, Point::new(PORTRAIT_LEFT_MARGIN, 120.0));
        assert_eq!(writer.calls[1].0, Point::new(PORTRAIT_LEFT_MARGIN, 240.0));
        assert_eq!(end, Point::new(PORTRAIT_LEFT_MARGIN, 340.0));
        assert!(writer.calls[0].1.rows()[0][0].ends_with(" ft"));
    }

    #[test]
    fn test_export_propagates_writer_error() {
        let result = sample_region().export_to_pdf(
            &mut FailingWriter,
            Point::default(),
            &PdfFonts::default(),
            &NumberFormat::default(),
            DistanceUnit::Meters,
        );
        assert_eq!(result, Err("document closed".to_string()));
    }

    #[test]
    fn test_plain_text_single_page() {
        let mut writer = PlainTextTableWriter::new();
        let end = sample_region()
            .export_to_pdf(
                &mut writer,
                Point::new(0.0, 36.0),
                &PdfFonts::default(),
                &NumberFormat::default(),
                DistanceUnit::Meters,
            )
            .unwrap();

        assert_eq!(writer.page_count(), 1);
        let text = writer.text();
        assert!(text.contains("EXTENTS"));
        assert!(text.contains("SURFACES"));
        assert!(text.contains("Carpet on Concrete"));
        assert!(text.contains("Bypassed"));
        // 20 gap + 3 rows, 20 gap + 6 rows
        assert_eq!(end.y, 36.0 + 20.0 + 3.0 * 14.0 + 20.0 + 6.0 * 14.0);
    }

    #[test]
    fn test_plain_text_paginates_and_repeats_header() {
        // Room for header rows plus two data rows per page.
        let mut writer = PlainTextTableWriter::new()
            .with_page_height(60.0)
            .with_margins(0.0, 0.0)
            .with_row_height(15.0);

        let end = writer
            .write_table(
                Point::new(0.0, 0.0),
                &PdfFonts::default(),
                &sample_region().surfaces_table(),
            )
            .unwrap();

        assert_eq!(writer.page_count(), 2);
        let second = writer.page(1).unwrap();
        assert!(second[0].contains("SURFACES"));
        assert!(second[2].contains("Right"));
        assert!(second[3].contains("Bottom"));
        assert_eq!(end.y, 60.0);
    }

    #[test]
    fn test_plain_text_page_too_small() {
        let mut writer = PlainTextTableWriter::new()
            .with_page_height(40.0)
            .with_margins(0.0, 0.0)
            .with_row_height(14.0);
        let err = writer
            .write_table(
                Point::default(),
                &PdfFonts::default(),
                &sample_region().surfaces_table(),
            )
            .unwrap_err();
        assert!(matches!(err, ReportError::PageTooSmall { .. }));
    }

    #[test]
    fn test_plain_text_rejects_bad_geometry() {
        let writers = [
            PlainTextTableWriter::new().with_row_height(0.0),
            PlainTextTableWriter::new().with_row_height(-3.0),
            PlainTextTableWriter::new().with_row_height(f32::NAN),
            PlainTextTableWriter::new().with_page_height(f32::INFINITY),
            PlainTextTableWriter::new().with_margins(-1.0, 36.0),
        ];

        for mut writer in writers {
            let err = sample_region()
                .export_to_pdf(
                    &mut writer,
                    Point::default(),
                    &PdfFonts::default(),
                    &NumberFormat::default(),
                    DistanceUnit::Meters,
                )
                .unwrap_err();
            assert!(matches!(err, ReportError::InvalidPageGeometry { .. }));
            assert_eq!(writer.page_count(), 1);
            assert!(writer.text().is_empty());
        }
    }
}
