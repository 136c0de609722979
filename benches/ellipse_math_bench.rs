use chart_annotations::core::{BoundsRect, LinearScale};
use chart_annotations::render::RecordingSurface;
use chart_annotations::{ChartScale, ChartView, EllipseAnnotation, EllipseOptions, HitAxis};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn sample_view() -> ChartView {
    let x_scale = LinearScale::new(0.0, 10_000.0, 0.0, 1_920.0).expect("valid x scale");
    let y_scale = LinearScale::new(0.0, 2_500.0, 1_080.0, 0.0).expect("valid y scale");
    ChartView::new(BoundsRect::new(0.0, 0.0, 1_920.0, 1_080.0))
        .with_scale("x", ChartScale::x(x_scale))
        .with_scale("y", ChartScale::y(y_scale))
}

fn rotated_ellipse() -> EllipseAnnotation {
    let options = EllipseOptions {
        rotation: 30.0,
        border_width: 3.0,
        ..EllipseOptions::default()
    };
    let mut annotation = EllipseAnnotation::new("bench", options);
    annotation
        .geometry_mut()
        .set_target(BoundsRect::new(200.0, 100.0, 900.0, 600.0));
    annotation.geometry_mut().snap_to_target();
    annotation
}

fn bench_hit_test_full(c: &mut Criterion) {
    let annotation = rotated_ellipse();

    c.bench_function("ellipse_hit_test_full", |b| {
        b.iter(|| {
            annotation.in_range(
                black_box(520.0),
                black_box(340.0),
                black_box(HitAxis::Both),
                black_box(false),
            )
        })
    });
}

fn bench_hit_test_axis_constrained(c: &mut Criterion) {
    let annotation = rotated_ellipse();

    c.bench_function("ellipse_hit_test_axis_constrained", |b| {
        b.iter(|| {
            annotation.in_range(
                black_box(520.0),
                black_box(340.0),
                black_box(HitAxis::Y),
                black_box(false),
            )
        })
    });
}

fn bench_resolve_chart_rect(c: &mut Criterion) {
    let view = sample_view();
    let options = EllipseOptions {
        x_scale_id: Some("x".to_owned()),
        y_scale_id: Some("y".to_owned()),
        x_min: Some(1_000.0),
        x_max: Some(4_000.0),
        y_min: Some(500.0),
        y_max: Some(1_500.0),
        ..EllipseOptions::default()
    };

    c.bench_function("ellipse_resolve_chart_rect", |b| {
        b.iter(|| {
            EllipseAnnotation::resolve_chart_rect(black_box(&view), black_box(&options))
                .expect("resolution should succeed")
        })
    });
}

fn bench_draw_recorded(c: &mut Criterion) {
    let view = sample_view();
    let annotation = rotated_ellipse();

    c.bench_function("ellipse_draw_recorded", |b| {
        b.iter(|| {
            let mut surface = RecordingSurface::new();
            annotation
                .draw(black_box(&mut surface), black_box(&view))
                .expect("draw should succeed");
            surface.ops.len()
        })
    });
}

criterion_group!(
    benches,
    bench_hit_test_full,
    bench_hit_test_axis_constrained,
    bench_resolve_chart_rect,
    bench_draw_recorded
);
criterion_main!(benches);
