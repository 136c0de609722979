use serde::{Deserialize, Serialize};

use crate::core::types::Point;

/// Interval slack applied by axis-constrained hit tests.
pub const EPSILON: f64 = 0.001;

/// Upper bound accepted by the implicit-ellipse containment test.
///
/// Slightly above 1.0 so points on the mathematical boundary survive
/// floating-point error.
pub const HIT_TOLERANCE: f64 = 1.0001;

/// Pixel-space rectangle stored as two corners.
///
/// Resolved geometry keeps `x <= x2` and `y <= y2`; rects in mid-animation
/// may pass through any state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundsRect {
    pub x: f64,
    pub y: f64,
    pub x2: f64,
    pub y2: f64,
}

impl BoundsRect {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        x2: 0.0,
        y2: 0.0,
    };

    #[must_use]
    pub const fn new(x: f64, y: f64, x2: f64, y2: f64) -> Self {
        Self { x, y, x2, y2 }
    }

    /// Builds a rect from two opposite corners in any order.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            x2: a.x.max(b.x),
            y2: a.y.max(b.y),
        }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.x2 - self.x
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.y2 - self.y
    }

    #[must_use]
    pub fn center(self) -> Point {
        Point::new(self.x + self.width() / 2.0, self.y + self.height() / 2.0)
    }
}

/// Rotates `point` around `center` by `radians`.
#[must_use]
pub fn rotate_about(point: Point, center: Point, radians: f64) -> Point {
    let (sin, cos) = radians.sin_cos();
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    Point::new(
        center.x + cos * dx - sin * dy,
        center.y + sin * dx + cos * dy,
    )
}
