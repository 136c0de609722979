use cairo::{Context, Format, ImageSurface};

use crate::error::{AnnotationError, AnnotationResult};
use crate::render::{Color, DrawSurface, LineCap, LineJoin, ShadowStyle};

#[derive(Debug, Clone, Copy)]
struct EllipseParams {
    center_x: f64,
    center_y: f64,
    radius_x: f64,
    radius_y: f64,
    rotation: f64,
    start_angle: f64,
    end_angle: f64,
}

#[derive(Debug, Clone, Copy)]
struct SurfaceState {
    fill_color: Color,
    stroke_color: Color,
    shadow: ShadowStyle,
}

/// Cairo image-surface drawing backend.
///
/// Cairo has no shadow state, so shadows are emulated with an offset pre-pass
/// in the shadow color covering the most recent ellipse sub-path; blur is not
/// approximated.
pub struct CairoSurface {
    surface: ImageSurface,
    context: Context,
    state: SurfaceState,
    saved_states: Vec<SurfaceState>,
    last_ellipse: Option<EllipseParams>,
}

impl std::fmt::Debug for CairoSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CairoSurface")
            .field("width", &self.surface.width())
            .field("height", &self.surface.height())
            .field("state", &self.state)
            .field("save_depth", &self.saved_states.len())
            .finish_non_exhaustive()
    }
}

impl CairoSurface {
    pub fn new(width: i32, height: i32) -> AnnotationResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(AnnotationError::InvalidSurfaceSize { width, height });
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        let context = Context::new(&surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        Ok(Self {
            surface,
            context,
            state: SurfaceState {
                fill_color: Color::rgb(0.0, 0.0, 0.0),
                stroke_color: Color::rgb(0.0, 0.0, 0.0),
                shadow: ShadowStyle {
                    color: Color::TRANSPARENT,
                    blur: 0.0,
                    offset_x: 0.0,
                    offset_y: 0.0,
                },
            },
            saved_states: Vec::new(),
            last_ellipse: None,
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    /// Fills the whole surface with `color`.
    pub fn clear(&mut self, color: Color) -> AnnotationResult<()> {
        color.validate()?;
        apply_color(&self.context, color);
        self.context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))
    }

    pub fn write_png<W: std::io::Write>(&mut self, writer: &mut W) -> AnnotationResult<()> {
        self.surface.flush();
        self.surface
            .write_to_png(writer)
            .map_err(|err| AnnotationError::InvalidData(format!("failed to encode png: {err}")))
    }

    fn append_ellipse(&self, params: EllipseParams, dx: f64, dy: f64) -> AnnotationResult<()> {
        // Non-positive radii trace nothing; a zero scale factor would poison
        // the cairo matrix instead.
        if params.radius_x <= 0.0 || params.radius_y <= 0.0 {
            return Ok(());
        }

        self.context
            .save()
            .map_err(|err| map_backend_error("failed to save cairo state", err))?;
        self.context
            .translate(params.center_x + dx, params.center_y + dy);
        self.context.rotate(params.rotation);
        self.context.scale(params.radius_x, params.radius_y);
        self.context.new_sub_path();
        self.context
            .arc(0.0, 0.0, 1.0, params.start_angle, params.end_angle);
        self.context
            .restore()
            .map_err(|err| map_backend_error("failed to restore cairo state", err))
    }

    fn shadow_prepass(&self, paint_stroke: bool) -> AnnotationResult<()> {
        let Some(params) = self.last_ellipse else {
            return Ok(());
        };
        if !self.state.shadow.color.is_visible() {
            return Ok(());
        }

        self.context.new_path();
        self.append_ellipse(params, self.state.shadow.offset_x, self.state.shadow.offset_y)?;
        apply_color(&self.context, self.state.shadow.color);
        let painted = if paint_stroke {
            self.context.stroke()
        } else {
            self.context.fill()
        };
        painted.map_err(|err| map_backend_error("failed to paint shadow pass", err))?;

        self.context.new_path();
        self.append_ellipse(params, 0.0, 0.0)
    }
}

impl DrawSurface for CairoSurface {
    fn save(&mut self) -> AnnotationResult<()> {
        self.saved_states.push(self.state);
        self.context
            .save()
            .map_err(|err| map_backend_error("failed to save cairo state", err))
    }

    fn restore(&mut self) -> AnnotationResult<()> {
        let Some(state) = self.saved_states.pop() else {
            return Err(AnnotationError::InvalidData(
                "restore without matching save".to_owned(),
            ));
        };
        self.state = state;
        self.context
            .restore()
            .map_err(|err| map_backend_error("failed to restore cairo state", err))
    }

    fn translate(&mut self, dx: f64, dy: f64) -> AnnotationResult<()> {
        self.context.translate(dx, dy);
        Ok(())
    }

    fn rotate(&mut self, radians: f64) -> AnnotationResult<()> {
        self.context.rotate(radians);
        Ok(())
    }

    fn begin_path(&mut self) -> AnnotationResult<()> {
        self.context.new_path();
        self.last_ellipse = None;
        Ok(())
    }

    fn ellipse(
        &mut self,
        center_x: f64,
        center_y: f64,
        radius_x: f64,
        radius_y: f64,
        rotation: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> AnnotationResult<()> {
        let params = EllipseParams {
            center_x,
            center_y,
            radius_x,
            radius_y,
            rotation,
            start_angle,
            end_angle,
        };
        self.append_ellipse(params, 0.0, 0.0)?;
        self.last_ellipse = Some(params);
        Ok(())
    }

    fn set_fill_color(&mut self, color: Color) -> AnnotationResult<()> {
        color.validate()?;
        self.state.fill_color = color;
        Ok(())
    }

    fn fill(&mut self) -> AnnotationResult<()> {
        self.shadow_prepass(false)?;
        apply_color(&self.context, self.state.fill_color);
        self.context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill path", err))
    }

    fn set_stroke_color(&mut self, color: Color) -> AnnotationResult<()> {
        color.validate()?;
        self.state.stroke_color = color;
        Ok(())
    }

    fn set_line_width(&mut self, width: f64) -> AnnotationResult<()> {
        if !width.is_finite() || width <= 0.0 {
            return Err(AnnotationError::InvalidData(
                "line width must be finite and > 0".to_owned(),
            ));
        }
        self.context.set_line_width(width);
        Ok(())
    }

    fn set_line_cap(&mut self, cap: LineCap) -> AnnotationResult<()> {
        self.context.set_line_cap(match cap {
            LineCap::Butt => cairo::LineCap::Butt,
            LineCap::Round => cairo::LineCap::Round,
            LineCap::Square => cairo::LineCap::Square,
        });
        Ok(())
    }

    fn set_line_join(&mut self, join: LineJoin) -> AnnotationResult<()> {
        self.context.set_line_join(match join {
            LineJoin::Miter => cairo::LineJoin::Miter,
            LineJoin::Round => cairo::LineJoin::Round,
            LineJoin::Bevel => cairo::LineJoin::Bevel,
        });
        Ok(())
    }

    fn set_line_dash(&mut self, pattern: &[f64], offset: f64) -> AnnotationResult<()> {
        for segment in pattern {
            if !segment.is_finite() || *segment < 0.0 {
                return Err(AnnotationError::InvalidData(
                    "dash segments must be finite and >= 0".to_owned(),
                ));
            }
        }
        if !offset.is_finite() {
            return Err(AnnotationError::InvalidData(
                "dash offset must be finite".to_owned(),
            ));
        }
        self.context.set_dash(pattern, offset);
        Ok(())
    }

    fn set_shadow(&mut self, shadow: ShadowStyle) -> AnnotationResult<()> {
        shadow.validate()?;
        self.state.shadow = shadow;
        Ok(())
    }

    fn set_shadow_color(&mut self, color: Color) -> AnnotationResult<()> {
        color.validate()?;
        self.state.shadow.color = color;
        Ok(())
    }

    fn stroke(&mut self) -> AnnotationResult<()> {
        self.shadow_prepass(true)?;
        apply_color(&self.context, self.state.stroke_color);
        self.context
            .stroke_preserve()
            .map_err(|err| map_backend_error("failed to stroke path", err))
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> AnnotationError {
    AnnotationError::InvalidData(format!("{prefix}: {err}"))
}
