mod recording;
mod style;

pub use recording::{DrawOp, RecordingSurface};
pub use style::{BorderStyle, Color, DashPattern, LineCap, LineJoin, ShadowStyle};

use crate::error::AnnotationResult;

/// Contract implemented by any drawing backend.
///
/// The surface is a stateful 2D context: style setters persist until changed,
/// transforms compose until the matching `restore`, and a traced path stays
/// current until the next `begin_path`.
pub trait DrawSurface {
    fn save(&mut self) -> AnnotationResult<()>;
    fn restore(&mut self) -> AnnotationResult<()>;
    fn translate(&mut self, dx: f64, dy: f64) -> AnnotationResult<()>;
    fn rotate(&mut self, radians: f64) -> AnnotationResult<()>;
    fn begin_path(&mut self) -> AnnotationResult<()>;

    /// Appends a full or partial ellipse to the current path.
    ///
    /// `rotation` tilts the radii axes; `start_angle`/`end_angle` bound the
    /// sweep. All angles are radians.
    #[allow(clippy::too_many_arguments)]
    fn ellipse(
        &mut self,
        center_x: f64,
        center_y: f64,
        radius_x: f64,
        radius_y: f64,
        rotation: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> AnnotationResult<()>;

    fn set_fill_color(&mut self, color: Color) -> AnnotationResult<()>;
    fn fill(&mut self) -> AnnotationResult<()>;
    fn set_stroke_color(&mut self, color: Color) -> AnnotationResult<()>;
    fn set_line_width(&mut self, width: f64) -> AnnotationResult<()>;
    fn set_line_cap(&mut self, cap: LineCap) -> AnnotationResult<()>;
    fn set_line_join(&mut self, join: LineJoin) -> AnnotationResult<()>;
    fn set_line_dash(&mut self, pattern: &[f64], offset: f64) -> AnnotationResult<()>;
    fn set_shadow(&mut self, shadow: ShadowStyle) -> AnnotationResult<()>;
    fn set_shadow_color(&mut self, color: Color) -> AnnotationResult<()>;
    fn stroke(&mut self) -> AnnotationResult<()>;
}

/// Applies stroke styling and reports whether a stroke pass is wanted.
///
/// Nothing is applied for a zero-width border.
pub fn apply_border_style(
    surface: &mut dyn DrawSurface,
    border: &BorderStyle,
) -> AnnotationResult<bool> {
    border.validate()?;
    if border.width == 0.0 {
        return Ok(false);
    }

    surface.set_line_cap(border.cap)?;
    surface.set_line_dash(&border.dash, border.dash_offset)?;
    surface.set_stroke_color(border.color)?;
    surface.set_line_width(border.width)?;
    surface.set_line_join(border.join)?;
    Ok(true)
}

/// Installs shadow state for subsequent fill/stroke passes.
pub fn apply_shadow_style(
    surface: &mut dyn DrawSurface,
    shadow: ShadowStyle,
) -> AnnotationResult<()> {
    surface.set_shadow(shadow)
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::CairoSurface;
