use chart_annotations::core::{BoundsRect, LinearScale, Point, rotate_about};
use chart_annotations::{EllipseAnnotation, EllipseOptions, HitAxis};
use proptest::prelude::*;

fn ellipse_at(rect: BoundsRect, rotation: f64) -> EllipseAnnotation {
    let options = EllipseOptions {
        border_width: 0.0,
        rotation,
        ..EllipseOptions::default()
    };
    let mut annotation = EllipseAnnotation::new("e1", options);
    annotation.geometry_mut().set_target(rect);
    annotation.geometry_mut().snap_to_target();
    annotation
}

fn rect_around(center_x: f64, center_y: f64, x_radius: f64, y_radius: f64) -> BoundsRect {
    BoundsRect::new(
        center_x - x_radius,
        center_y - y_radius,
        center_x + x_radius,
        center_y + y_radius,
    )
}

proptest! {
    #[test]
    fn center_of_any_positive_ellipse_is_in_range(
        center_x in -10_000.0f64..10_000.0,
        center_y in -10_000.0f64..10_000.0,
        x_radius in 0.5f64..500.0,
        y_radius in 0.5f64..500.0,
        rotation in 0.0f64..360.0
    ) {
        let annotation = ellipse_at(rect_around(center_x, center_y, x_radius, y_radius), rotation);
        prop_assert!(annotation.in_range(center_x, center_y, HitAxis::Both, false));
    }

    #[test]
    fn points_clear_of_the_boundary_classify_by_radial_factor(
        center_x in -1_000.0f64..1_000.0,
        center_y in -1_000.0f64..1_000.0,
        x_radius in 1.0f64..300.0,
        y_radius in 1.0f64..300.0,
        rotation in 0.0f64..360.0,
        direction in 0.0f64..std::f64::consts::TAU,
        inside_factor in 0.0f64..0.9,
        outside_factor in 1.1f64..3.0
    ) {
        let center = Point::new(center_x, center_y);
        let annotation = ellipse_at(rect_around(center_x, center_y, x_radius, y_radius), rotation);

        // Build query points in the ellipse frame, then rotate into pixel space.
        for (factor, expected) in [(inside_factor, true), (outside_factor, false)] {
            let local = Point::new(
                center_x + x_radius * factor * direction.cos(),
                center_y + y_radius * factor * direction.sin(),
            );
            let query = rotate_about(local, center, rotation.to_radians());
            prop_assert_eq!(
                annotation.in_range(query.x, query.y, HitAxis::Both, false),
                expected
            );
        }
    }

    #[test]
    fn co_rotating_shape_and_query_preserves_the_hit_result(
        center_x in -1_000.0f64..1_000.0,
        center_y in -1_000.0f64..1_000.0,
        x_radius in 1.0f64..300.0,
        y_radius in 1.0f64..300.0,
        base_rotation in 0.0f64..360.0,
        extra_rotation in 0.0f64..360.0,
        direction in 0.0f64..std::f64::consts::TAU,
        factor in prop_oneof![0.0f64..0.9, 1.1f64..3.0]
    ) {
        let center = Point::new(center_x, center_y);
        let rect = rect_around(center_x, center_y, x_radius, y_radius);
        let base = ellipse_at(rect, base_rotation);
        let rotated = ellipse_at(rect, base_rotation + extra_rotation);

        let local = Point::new(
            center_x + x_radius * factor * direction.cos(),
            center_y + y_radius * factor * direction.sin(),
        );
        let query = rotate_about(local, center, base_rotation.to_radians());
        let co_rotated_query = rotate_about(query, center, extra_rotation.to_radians());

        prop_assert_eq!(
            base.in_range(query.x, query.y, HitAxis::Both, false),
            rotated.in_range(co_rotated_query.x, co_rotated_query.y, HitAxis::Both, false)
        );
    }

    #[test]
    fn degenerate_rects_never_match(
        x in -1_000.0f64..1_000.0,
        y in -1_000.0f64..1_000.0,
        span in 0.5f64..100.0,
        query_x in -2_000.0f64..2_000.0,
        query_y in -2_000.0f64..2_000.0
    ) {
        let flat = ellipse_at(BoundsRect::new(x, y, x + span, y), 0.0);
        let thin = ellipse_at(BoundsRect::new(x, y, x, y + span), 0.0);

        for axis in [HitAxis::Both, HitAxis::X, HitAxis::Y] {
            prop_assert!(!flat.in_range(query_x, query_y, axis, false));
            prop_assert!(!thin.in_range(query_x, query_y, axis, false));
        }
    }

    #[test]
    fn axis_constrained_result_ignores_the_other_coordinate(
        center_x in -1_000.0f64..1_000.0,
        center_y in -1_000.0f64..1_000.0,
        x_radius in 1.0f64..300.0,
        y_radius in 1.0f64..300.0,
        query_y in -2_000.0f64..2_000.0,
        first_x in -2_000.0f64..2_000.0,
        second_x in -2_000.0f64..2_000.0
    ) {
        let annotation = ellipse_at(rect_around(center_x, center_y, x_radius, y_radius), 0.0);
        prop_assert_eq!(
            annotation.in_range(first_x, query_y, HitAxis::Y, false),
            annotation.in_range(second_x, query_y, HitAxis::Y, false)
        );
    }

    #[test]
    fn linear_scale_round_trip_property(
        domain_start in -1_000_000.0f64..1_000_000.0,
        domain_span in 0.001f64..1_000_000.0,
        pixel_start in 0.0f64..4_096.0,
        pixel_span in 1.0f64..4_096.0,
        value_factor in 0.0f64..1.0
    ) {
        let domain_end = domain_start + domain_span;
        let value = domain_start + value_factor * domain_span;

        let scale = LinearScale::new(domain_start, domain_end, pixel_start, pixel_start + pixel_span)
            .expect("valid scale");

        let px = scale.to_pixel(value).expect("to pixel");
        let recovered = scale.to_domain(px).expect("from pixel");

        prop_assert!((recovered - value).abs() <= domain_span * 1e-9 + 1e-9);
    }
}
