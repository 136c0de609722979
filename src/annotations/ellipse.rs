use std::f64::consts::{FRAC_PI_2, PI};

use serde::{Deserialize, Serialize};

use crate::core::{BoundsRect, EPSILON, HIT_TOLERANCE, LinearScale, Point, rotate_about};
use crate::error::AnnotationResult;
use crate::render::{DrawSurface, apply_border_style, apply_shadow_style};

use super::element::{AnimatedRect, GeometryProvider, HitAxis};
use super::options::EllipseOptions;
use super::view::ChartView;

/// Ellipse overlay bound to chart-scale coordinates.
///
/// The shape is the ellipse inscribed in the rect resolved from the options'
/// data-space bounds; `rotation` tilts it about the rect center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EllipseAnnotation {
    id: String,
    geometry: AnimatedRect,
    options: EllipseOptions,
}

impl EllipseAnnotation {
    /// Identity under which hosts recognize this annotation type.
    pub const TYPE_ID: &'static str = "ellipseAnnotation";

    #[must_use]
    pub fn new(id: impl Into<String>, options: EllipseOptions) -> Self {
        Self {
            id: id.into(),
            geometry: AnimatedRect::new(BoundsRect::ZERO),
            options,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn options(&self) -> &EllipseOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut EllipseOptions {
        &mut self.options
    }

    #[must_use]
    pub fn geometry(&self) -> &AnimatedRect {
        &self.geometry
    }

    pub fn geometry_mut(&mut self) -> &mut AnimatedRect {
        &mut self.geometry
    }

    /// Computes the pixel rect declared by `options` against the view.
    ///
    /// Each axis maps its data-space bounds through the named scale; a
    /// missing bound falls back to the plot-area edge and a missing or
    /// unknown scale id to the full plot-area span on that axis.
    pub fn resolve_chart_rect(
        view: &ChartView,
        options: &EllipseOptions,
    ) -> AnnotationResult<BoundsRect> {
        let area = view.plot_area();
        let (x, x2) = resolve_axis_span(
            view,
            options.x_scale_id.as_deref(),
            options.x_min,
            options.x_max,
            area.x,
            area.x2,
        )?;
        let (y, y2) = resolve_axis_span(
            view,
            options.y_scale_id.as_deref(),
            options.y_min,
            options.y_max,
            area.y,
            area.y2,
        )?;
        Ok(BoundsRect::from_corners(
            Point::new(x, y),
            Point::new(x2, y2),
        ))
    }

    /// Re-resolves geometry and installs it as the animation target.
    pub fn resolve_element_properties(&mut self, view: &ChartView) -> AnnotationResult<BoundsRect> {
        let rect = Self::resolve_chart_rect(view, &self.options)?;
        self.geometry.set_target(rect);
        Ok(rect)
    }

    /// Like [`Self::resolve_element_properties`] but also snaps the current
    /// rect, for initial placement without an entry animation.
    pub fn resolve_and_snap(&mut self, view: &ChartView) -> AnnotationResult<BoundsRect> {
        let rect = self.resolve_element_properties(view)?;
        self.geometry.snap_to_target();
        Ok(rect)
    }

    /// Geometric center of the selected rect.
    #[must_use]
    pub fn center_point(&self, use_final: bool) -> Point {
        self.geometry.rect(use_final).center()
    }

    /// Tests whether the pixel point hits the shape.
    ///
    /// `HitAxis::Both` is true ellipse containment, grown by half the border
    /// width. A constrained axis reduces the shape to its un-rotated interval
    /// on that axis after rotating the query point into shape space.
    #[must_use]
    pub fn in_range(&self, x: f64, y: f64, axis: HitAxis, use_final: bool) -> bool {
        let rect = self.geometry.rect(use_final);
        // A zero-area ellipse misses on every axis, constrained or not.
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return false;
        }
        let rotation = self.options.rotation;

        match axis {
            HitAxis::Both => {
                point_in_ellipse(Point::new(x, y), rect, rotation, self.options.border_width)
            }
            HitAxis::X | HitAxis::Y => {
                let half_border = self.options.border_width / 2.0;
                let rotated =
                    rotate_about(Point::new(x, y), rect.center(), (-rotation).to_radians());
                let (coordinate, start, end) = match axis {
                    HitAxis::X => (rotated.x, rect.x, rect.x2),
                    _ => (rotated.y, rect.y, rect.y2),
                };
                coordinate >= start - half_border - EPSILON
                    && coordinate <= end + half_border + EPSILON
            }
        }
    }

    /// Paints the shape through `surface`.
    ///
    /// `view` supplies the palette for routed colors. Does nothing when
    /// `display` is off.
    pub fn draw(&self, surface: &mut dyn DrawSurface, view: &ChartView) -> AnnotationResult<()> {
        if !self.options.display {
            return Ok(());
        }

        let rect = self.geometry.current();
        let center = rect.center();

        surface.save()?;
        rotate_about_center(surface, center, self.options.rotation)?;
        apply_shadow_style(surface, self.options.background_shadow())?;
        surface.begin_path()?;
        surface.set_fill_color(self.options.resolved_background_color(view))?;
        let stroke = apply_border_style(surface, &self.options.border_style(view))?;
        // The x radius takes height/2 and the quarter-turn path rotation puts
        // width back on the horizontal axis.
        surface.ellipse(
            center.x,
            center.y,
            rect.height() / 2.0,
            rect.width() / 2.0,
            FRAC_PI_2,
            0.0,
            2.0 * PI,
        )?;
        surface.fill()?;
        if stroke {
            surface.set_shadow_color(self.options.border_shadow_color)?;
            surface.stroke()?;
        }
        surface.restore()?;
        Ok(())
    }
}

fn resolve_axis_span(
    view: &ChartView,
    scale_id: Option<&str>,
    min: Option<f64>,
    max: Option<f64>,
    fallback_start: f64,
    fallback_end: f64,
) -> AnnotationResult<(f64, f64)> {
    let Some(id) = scale_id else {
        return Ok((fallback_start, fallback_end));
    };
    let Some(chart_scale) = view.scale(id) else {
        tracing::debug!(
            scale_id = id,
            "annotation references unknown scale, using plot area span"
        );
        return Ok((fallback_start, fallback_end));
    };

    let start = scale_pixel(chart_scale.scale, min, fallback_start)?;
    let end = scale_pixel(chart_scale.scale, max, fallback_end)?;
    Ok((start, end))
}

fn scale_pixel(scale: LinearScale, value: Option<f64>, fallback: f64) -> AnnotationResult<f64> {
    match value {
        Some(value) if value.is_finite() => scale.to_pixel(value),
        _ => Ok(fallback),
    }
}

/// Transforms the surface so the shape's rotation happens about its center.
fn rotate_about_center(
    surface: &mut dyn DrawSurface,
    center: Point,
    rotation_degrees: f64,
) -> AnnotationResult<()> {
    surface.translate(center.x, center.y)?;
    surface.rotate(rotation_degrees.to_radians())?;
    surface.translate(-center.x, -center.y)?;
    Ok(())
}

/// Rotated point-in-ellipse test with the border included in the radii.
fn point_in_ellipse(
    point: Point,
    rect: BoundsRect,
    rotation_degrees: f64,
    border_width: f64,
) -> bool {
    let x_radius = rect.width() / 2.0;
    let y_radius = rect.height() / 2.0;
    if x_radius <= 0.0 || y_radius <= 0.0 {
        return false;
    }

    let center = rect.center();
    let half_border = border_width / 2.0;
    let (sin, cos) = rotation_degrees.to_radians().sin_cos();
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    let major = (cos * dx + sin * dy).powi(2);
    let minor = (sin * dx - cos * dy).powi(2);
    major / (x_radius + half_border).powi(2) + minor / (y_radius + half_border).powi(2)
        <= HIT_TOLERANCE
}
