use crate::error::{AnnotationError, AnnotationResult};
use crate::render::{Color, DashPattern, DrawSurface, LineCap, LineJoin, ShadowStyle};

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Save,
    Restore,
    Translate {
        dx: f64,
        dy: f64,
    },
    Rotate {
        radians: f64,
    },
    BeginPath,
    Ellipse {
        center_x: f64,
        center_y: f64,
        radius_x: f64,
        radius_y: f64,
        rotation: f64,
        start_angle: f64,
        end_angle: f64,
    },
    SetFillColor(Color),
    Fill,
    SetStrokeColor(Color),
    SetLineWidth(f64),
    SetLineCap(LineCap),
    SetLineJoin(LineJoin),
    SetLineDash {
        pattern: DashPattern,
        offset: f64,
    },
    SetShadow(ShadowStyle),
    SetShadowColor(Color),
    Stroke,
}

/// Recording surface used by tests and headless hosts.
///
/// It validates every call so tests catch invalid geometry or styling before
/// a real backend is involved, and keeps the full op sequence for assertions.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
    save_depth: usize,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `save` count not yet matched by a `restore`.
    #[must_use]
    pub fn save_depth(&self) -> usize {
        self.save_depth
    }

    #[must_use]
    pub fn count(&self, probe: impl Fn(&DrawOp) -> bool) -> usize {
        self.ops.iter().filter(|op| probe(op)).count()
    }
}

fn ensure_finite(values: &[(&str, f64)]) -> AnnotationResult<()> {
    for (name, value) in values {
        if !value.is_finite() {
            return Err(AnnotationError::InvalidData(format!(
                "`{name}` must be finite"
            )));
        }
    }
    Ok(())
}

impl DrawSurface for RecordingSurface {
    fn save(&mut self) -> AnnotationResult<()> {
        self.save_depth += 1;
        self.ops.push(DrawOp::Save);
        Ok(())
    }

    fn restore(&mut self) -> AnnotationResult<()> {
        if self.save_depth == 0 {
            return Err(AnnotationError::InvalidData(
                "restore without matching save".to_owned(),
            ));
        }
        self.save_depth -= 1;
        self.ops.push(DrawOp::Restore);
        Ok(())
    }

    fn translate(&mut self, dx: f64, dy: f64) -> AnnotationResult<()> {
        ensure_finite(&[("dx", dx), ("dy", dy)])?;
        self.ops.push(DrawOp::Translate { dx, dy });
        Ok(())
    }

    fn rotate(&mut self, radians: f64) -> AnnotationResult<()> {
        ensure_finite(&[("radians", radians)])?;
        self.ops.push(DrawOp::Rotate { radians });
        Ok(())
    }

    fn begin_path(&mut self) -> AnnotationResult<()> {
        self.ops.push(DrawOp::BeginPath);
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
        ensure_finite(&[
            ("center_x", center_x),
            ("center_y", center_y),
            ("radius_x", radius_x),
            ("radius_y", radius_y),
            ("rotation", rotation),
            ("start_angle", start_angle),
            ("end_angle", end_angle),
        ])?;
        self.ops.push(DrawOp::Ellipse {
            center_x,
            center_y,
            radius_x,
            radius_y,
            rotation,
            start_angle,
            end_angle,
        });
        Ok(())
    }

    fn set_fill_color(&mut self, color: Color) -> AnnotationResult<()> {
        color.validate()?;
        self.ops.push(DrawOp::SetFillColor(color));
        Ok(())
    }

    fn fill(&mut self) -> AnnotationResult<()> {
        self.ops.push(DrawOp::Fill);
        Ok(())
    }

    fn set_stroke_color(&mut self, color: Color) -> AnnotationResult<()> {
        color.validate()?;
        self.ops.push(DrawOp::SetStrokeColor(color));
        Ok(())
    }

    fn set_line_width(&mut self, width: f64) -> AnnotationResult<()> {
        if !width.is_finite() || width <= 0.0 {
            return Err(AnnotationError::InvalidData(
                "line width must be finite and > 0".to_owned(),
            ));
        }
        self.ops.push(DrawOp::SetLineWidth(width));
        Ok(())
    }

    fn set_line_cap(&mut self, cap: LineCap) -> AnnotationResult<()> {
        self.ops.push(DrawOp::SetLineCap(cap));
        Ok(())
    }

    fn set_line_join(&mut self, join: LineJoin) -> AnnotationResult<()> {
        self.ops.push(DrawOp::SetLineJoin(join));
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
        ensure_finite(&[("offset", offset)])?;
        self.ops.push(DrawOp::SetLineDash {
            pattern: DashPattern::from_slice(pattern),
            offset,
        });
        Ok(())
    }

    fn set_shadow(&mut self, shadow: ShadowStyle) -> AnnotationResult<()> {
        shadow.validate()?;
        self.ops.push(DrawOp::SetShadow(shadow));
        Ok(())
    }

    fn set_shadow_color(&mut self, color: Color) -> AnnotationResult<()> {
        color.validate()?;
        self.ops.push(DrawOp::SetShadowColor(color));
        Ok(())
    }

    fn stroke(&mut self) -> AnnotationResult<()> {
        self.ops.push(DrawOp::Stroke);
        Ok(())
    }
}
