use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{AnnotationError, AnnotationResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn is_visible(self) -> bool {
        self.alpha > 0.0
    }

    pub fn validate(self) -> AnnotationResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(AnnotationError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Dash pattern storage sized for the common two-segment case.
pub type DashPattern = SmallVec<[f64; 4]>;

/// Stroke end-cap shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

/// Stroke corner join shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

/// Stroke styling captured from annotation options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorderStyle {
    pub width: f64,
    pub color: Color,
    pub cap: LineCap,
    pub join: LineJoin,
    pub dash: DashPattern,
    pub dash_offset: f64,
}

impl BorderStyle {
    pub fn validate(&self) -> AnnotationResult<()> {
        if !self.width.is_finite() || self.width < 0.0 {
            return Err(AnnotationError::InvalidData(
                "border width must be finite and >= 0".to_owned(),
            ));
        }
        for segment in &self.dash {
            if !segment.is_finite() || *segment < 0.0 {
                return Err(AnnotationError::InvalidData(
                    "dash segments must be finite and >= 0".to_owned(),
                ));
            }
        }
        if !self.dash_offset.is_finite() {
            return Err(AnnotationError::InvalidData(
                "dash offset must be finite".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Shadow styling captured from annotation options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShadowStyle {
    pub color: Color,
    pub blur: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl ShadowStyle {
    pub fn validate(self) -> AnnotationResult<()> {
        if !self.blur.is_finite()
            || self.blur < 0.0
            || !self.offset_x.is_finite()
            || !self.offset_y.is_finite()
        {
            return Err(AnnotationError::InvalidData(
                "shadow blur must be finite and >= 0 and offsets finite".to_owned(),
            ));
        }
        self.color.validate()
    }
}
