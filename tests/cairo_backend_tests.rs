#![cfg(feature = "cairo-backend")]

use chart_annotations::AnnotationError;
use chart_annotations::core::BoundsRect;
use chart_annotations::render::{CairoSurface, Color, DrawSurface};
use chart_annotations::{ChartView, EllipseAnnotation, EllipseOptions};

#[test]
fn cairo_surface_rejects_invalid_surface_size() {
    let err = CairoSurface::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, AnnotationError::InvalidSurfaceSize { .. }));

    let err = CairoSurface::new(320, -1).expect_err("invalid height must fail");
    assert!(matches!(err, AnnotationError::InvalidSurfaceSize { .. }));
}

#[test]
fn cairo_surface_rejects_unbalanced_restore() {
    let mut surface = CairoSurface::new(64, 64).expect("surface");
    assert!(surface.restore().is_err());

    surface.save().expect("save");
    surface.restore().expect("matched restore");
    assert!(surface.restore().is_err());
}

#[test]
fn cairo_surface_draws_an_annotation_and_encodes_png() {
    let mut surface = CairoSurface::new(320, 200).expect("surface");
    surface.clear(Color::rgb(1.0, 1.0, 1.0)).expect("clear");

    let options = EllipseOptions {
        background_color: Some(Color::rgba(0.2, 0.4, 0.8, 1.0)),
        border_color: Some(Color::rgb(0.1, 0.1, 0.1)),
        border_width: 2.0,
        rotation: 30.0,
        ..EllipseOptions::default()
    };
    let mut annotation = EllipseAnnotation::new("png", options);
    annotation
        .geometry_mut()
        .set_target(BoundsRect::new(60.0, 40.0, 260.0, 160.0));
    annotation.geometry_mut().snap_to_target();

    let view = ChartView::new(BoundsRect::new(0.0, 0.0, 320.0, 200.0));
    annotation.draw(&mut surface, &view).expect("draw");

    let mut png = Vec::new();
    surface.write_png(&mut png).expect("png");
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn cairo_surface_draws_shadowed_shapes() {
    let mut surface = CairoSurface::new(200, 200).expect("surface");

    let options = EllipseOptions {
        background_color: Some(Color::rgb(0.9, 0.3, 0.3)),
        background_shadow_color: Color::rgba(0.0, 0.0, 0.0, 0.5),
        shadow_offset_x: 4.0,
        shadow_offset_y: 4.0,
        border_width: 0.0,
        ..EllipseOptions::default()
    };
    let mut annotation = EllipseAnnotation::new("shadowed", options);
    annotation
        .geometry_mut()
        .set_target(BoundsRect::new(40.0, 40.0, 160.0, 120.0));
    annotation.geometry_mut().snap_to_target();

    let view = ChartView::new(BoundsRect::new(0.0, 0.0, 200.0, 200.0));
    annotation.draw(&mut surface, &view).expect("draw");
}
