use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{BoundsRect, LinearScale};
use crate::render::Color;

/// Orientation of a host chart scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleAxis {
    X,
    Y,
}

/// One host scale: its orientation plus its pixel mapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartScale {
    pub axis: ScaleAxis,
    pub scale: LinearScale,
}

impl ChartScale {
    #[must_use]
    pub const fn x(scale: LinearScale) -> Self {
        Self {
            axis: ScaleAxis::X,
            scale,
        }
    }

    #[must_use]
    pub const fn y(scale: LinearScale) -> Self {
        Self {
            axis: ScaleAxis::Y,
            scale,
        }
    }
}

/// Read-only host chart snapshot consumed by annotation resolution.
///
/// `IndexMap` preserves scale declaration order for stable serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartView {
    plot_area: BoundsRect,
    scales: IndexMap<String, ChartScale>,
    color: Color,
}

impl ChartView {
    /// Palette fallback applied when the host declares no color of its own.
    pub const DEFAULT_COLOR: Color = Color::rgba(0.0, 0.0, 0.0, 0.1);

    #[must_use]
    pub fn new(plot_area: BoundsRect) -> Self {
        Self {
            plot_area,
            scales: IndexMap::new(),
            color: Self::DEFAULT_COLOR,
        }
    }

    #[must_use]
    pub fn with_scale(mut self, id: impl Into<String>, scale: ChartScale) -> Self {
        self.scales.insert(id.into(), scale);
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn plot_area(&self) -> BoundsRect {
        self.plot_area
    }

    #[must_use]
    pub fn scale(&self, id: &str) -> Option<&ChartScale> {
        self.scales.get(id)
    }

    #[must_use]
    pub fn scales(&self) -> &IndexMap<String, ChartScale> {
        &self.scales
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }
}
