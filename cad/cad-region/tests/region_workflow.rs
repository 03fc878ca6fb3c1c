//! End-to-end tests of the region editing and reporting workflow.
//!
//! These mirror how an editor uses a region: build it from UI input, edit
//! surfaces, watch the change flags, and print a report.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_precision_loss)]

use approx::assert_relative_eq;
use cad_region::{
    DistanceUnit, Extents, NumberFormat, PdfFonts, PlainTextTableWriter, Point, Region,
    RegionError, Surface, TableWriter, NUMBER_OF_SURFACES,
};

fn ui_surface_list() -> Vec<Surface> {
    vec![
        Surface::new(1, "Stage Left", false, "Velour Curtain"),
        Surface::new(2, "Rear Wall", false, "Painted Block"),
        Surface::new(3, "Stage Right", true, "Velour Curtain"),
        Surface::new(4, "Audience", false, "Upholstered Seating"),
    ]
}

// =============================================================================
// Construction
// =============================================================================

mod construction {
    use super::*;

    #[test]
    fn every_constructor_yields_four_positional_surfaces() {
        let regions = [
            Region::new(),
            Region::from_surface_list(Extents::new(0.0, 0.0, 10.0, 10.0), &ui_surface_list())
                .unwrap(),
            Region::from_region(&Region::new()),
        ];

        for region in &regions {
            assert_eq!(region.surfaces().len(), NUMBER_OF_SURFACES);
            for (i, surface) in region.surfaces().iter().enumerate() {
                assert_eq!(surface.number(), i + 1);
            }
        }
    }

    #[test]
    fn wrong_length_surface_list_is_rejected() {
        let mut list = ui_surface_list();
        list.pop();
        let err = Region::from_surface_list(Extents::default(), &list).unwrap_err();
        assert!(matches!(
            err,
            RegionError::InvalidSurfaceCount {
                expected: 4,
                got: 3
            }
        ));
    }

    #[test]
    fn copy_matches_source_and_is_independent() {
        let source =
            Region::from_surface_list(Extents::new(2.0, 3.0, 15.0, 9.0), &ui_surface_list())
                .unwrap();
        let mut copy = Region::from_region(&source);

        assert_eq!(copy.extents(), source.extents());
        for (a, b) in copy.surfaces().iter().zip(source.surfaces()) {
            assert_eq!(a.name(), b.name());
            assert_eq!(a.is_bypassed(), b.is_bypassed());
            assert_eq!(a.material_name(), b.material_name());
        }

        copy.set_surface_properties(1, "Back Wall", true, "Absorber")
            .unwrap();
        assert_eq!(source.surfaces()[1].name(), "Rear Wall");
    }
}

// =============================================================================
// Change tracking
// =============================================================================

mod change_tracking {
    use super::*;

    #[test]
    fn bypass_toggle_sets_only_value_flag() {
        let mut region =
            Region::from_surface_list(Extents::default(), &ui_surface_list()).unwrap();
        region.surfaces_mut()[0].set_bypassed(true);

        let changes = region.changes();
        assert!(changes.surface_values);
        assert!(!changes.surface_names);
        assert!(!changes.boundary);
    }

    #[test]
    fn width_edit_sets_only_boundary_flag() {
        let mut region =
            Region::from_surface_list(Extents::default(), &ui_surface_list()).unwrap();
        region.set_width(42.0);

        let changes = region.changes();
        assert!(changes.boundary);
        assert!(!changes.surface_names);
        assert!(!changes.surface_values);
    }

    #[test]
    fn reset_keeps_names_and_restores_defaults() {
        let mut region =
            Region::from_surface_list(Extents::new(5.0, 5.0, 50.0, 60.0), &ui_surface_list())
                .unwrap();
        region.reset();

        assert_eq!(region.extents(), Extents::default());
        assert_eq!(region.surfaces()[3].name(), "Audience");
        assert!(region.surfaces().iter().all(|s| !s.is_bypassed()));
        assert!(region
            .surfaces()
            .iter()
            .all(|s| s.material_name() == region.config().default_material_name()));
    }

    #[test]
    fn edit_save_edit_cycle() {
        let mut region = Region::new();
        region.set_x(12.0);
        assert!(region.is_boundary_changed());

        region.acknowledge_changes();
        assert!(!region.is_boundary_changed());

        region.surfaces_mut()[2].set_name("Balcony");
        assert!(region.is_surface_name_changed());
        assert!(!region.is_boundary_changed());
    }
}

// =============================================================================
// Reporting
// =============================================================================

mod reporting {
    use super::*;

    fn region_at_x(x: f64) -> Region {
        Region::from_surface_list(Extents::new(x, 0.0, 10.0, 10.0), &ui_surface_list()).unwrap()
    }

    fn lower_left_cell(region: &Region, unit: DistanceUnit) -> String {
        region.extents_table(&NumberFormat::default(), unit).rows()[0][0].clone()
    }

    #[test]
    fn meters_round_to_two_digits() {
        assert_eq!(
            lower_left_cell(&region_at_x(1.005), DistanceUnit::Meters),
            "(1.01, 0) m"
        );
    }

    #[test]
    fn millimeters_round_to_whole_numbers() {
        assert_eq!(
            lower_left_cell(&region_at_x(1.005), DistanceUnit::Millimeters),
            "(1005, 0) mm"
        );
    }

    #[test]
    fn full_report_lists_every_surface() {
        let region = region_at_x(0.0);
        let mut writer = PlainTextTableWriter::new();
        let end = region
            .export_to_pdf(
                &mut writer,
                Point::new(0.0, 36.0),
                &PdfFonts::default(),
                &NumberFormat::default(),
                DistanceUnit::Feet,
            )
            .unwrap();

        let text = writer.text();
        for surface in region.surfaces() {
            assert!(text.contains(surface.name()));
            assert!(text.contains(surface.material_name()));
        }
        assert!(text.contains("Bypassed"));
        assert!(text.contains("Enabled"));
        assert!(text.contains("(32.81, 32.81) ft"));
        assert!(end.y > 36.0);
    }

    #[test]
    fn second_table_starts_below_first() {
        struct Positions(Vec<Point>);

        impl TableWriter for Positions {
            type Error = std::convert::Infallible;

            fn write_table(
                &mut self,
                origin: Point,
                _fonts: &PdfFonts,
                table: &cad_region::Table,
            ) -> Result<Point, Self::Error> {
                self.0.push(origin);
                let rows = table.header_rows() + table.rows().len();
                Ok(Point::new(origin.x, origin.y + 10.0 * rows as f32))
            }
        }

        let mut positions = Positions(Vec::new());
        let end = region_at_x(0.0)
            .export_to_pdf(
                &mut positions,
                Point::new(0.0, 0.0),
                &PdfFonts::default(),
                &NumberFormat::default(),
                DistanceUnit::Meters,
            )
            .unwrap();

        assert_eq!(positions.0.len(), 2);
        assert_relative_eq!(positions.0[0].y, 20.0);
        assert_relative_eq!(positions.0[1].y, 70.0);
        assert_relative_eq!(end.y, 130.0);
    }
}
