use serde::{Deserialize, Serialize};

use crate::render::{BorderStyle, Color, DashPattern, LineCap, LineJoin, ShadowStyle};

use super::view::ChartView;

/// Option-to-option fallback applied when a color is unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionRoute {
    pub option: &'static str,
    pub source: &'static str,
}

/// Recognized configuration for an ellipse annotation.
///
/// External keys are camelCase so host config files keep the conventional
/// annotation-plugin spelling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EllipseOptions {
    pub adjust_scale_range: bool,
    pub background_color: Option<Color>,
    pub background_shadow_color: Color,
    pub border_cap_style: LineCap,
    pub border_color: Option<Color>,
    pub border_dash: DashPattern,
    pub border_dash_offset: f64,
    pub border_join_style: LineJoin,
    pub border_shadow_color: Color,
    pub border_width: f64,
    pub display: bool,
    /// Clockwise rotation in degrees about the shape center.
    pub rotation: f64,
    pub shadow_blur: f64,
    pub shadow_offset_x: f64,
    pub shadow_offset_y: f64,
    pub x_max: Option<f64>,
    pub x_min: Option<f64>,
    #[serde(rename = "xScaleID")]
    pub x_scale_id: Option<String>,
    pub y_max: Option<f64>,
    pub y_min: Option<f64>,
    #[serde(rename = "yScaleID")]
    pub y_scale_id: Option<String>,
    /// Draw order; higher values paint on top.
    pub z: f64,
}

impl Default for EllipseOptions {
    fn default() -> Self {
        Self {
            adjust_scale_range: true,
            background_color: None,
            background_shadow_color: Color::TRANSPARENT,
            border_cap_style: LineCap::Butt,
            border_color: None,
            border_dash: DashPattern::new(),
            border_dash_offset: 0.0,
            border_join_style: LineJoin::Miter,
            border_shadow_color: Color::TRANSPARENT,
            border_width: 1.0,
            display: true,
            rotation: 0.0,
            shadow_blur: 0.0,
            shadow_offset_x: 0.0,
            shadow_offset_y: 0.0,
            x_max: None,
            x_min: None,
            x_scale_id: None,
            y_max: None,
            y_min: None,
            y_scale_id: None,
            z: 0.0,
        }
    }
}

impl EllipseOptions {
    /// Color fallbacks applied when the option is unset.
    pub const DEFAULT_ROUTES: [OptionRoute; 2] = [
        OptionRoute {
            option: "borderColor",
            source: "color",
        },
        OptionRoute {
            option: "backgroundColor",
            source: "color",
        },
    ];

    #[must_use]
    pub fn resolved_border_color(&self, view: &ChartView) -> Color {
        self.border_color.unwrap_or_else(|| view.color())
    }

    #[must_use]
    pub fn resolved_background_color(&self, view: &ChartView) -> Color {
        self.background_color.unwrap_or_else(|| view.color())
    }

    /// Assembles the stroke style with routed colors applied.
    #[must_use]
    pub fn border_style(&self, view: &ChartView) -> BorderStyle {
        BorderStyle {
            width: self.border_width,
            color: self.resolved_border_color(view),
            cap: self.border_cap_style,
            join: self.border_join_style,
            dash: self.border_dash.clone(),
            dash_offset: self.border_dash_offset,
        }
    }

    /// Shadow applied to the background fill pass.
    #[must_use]
    pub fn background_shadow(&self) -> ShadowStyle {
        ShadowStyle {
            color: self.background_shadow_color,
            blur: self.shadow_blur,
            offset_x: self.shadow_offset_x,
            offset_y: self.shadow_offset_y,
        }
    }
}
