use serde::{Deserialize, Serialize};

use crate::core::BoundsRect;

/// Axis selector for hit tests.
///
/// `Both` is the full containment test; `X`/`Y` treat the shape as its
/// un-rotated interval along that axis only (crosshair-style interaction).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HitAxis {
    #[default]
    Both,
    X,
    Y,
}

/// Animated element geometry exposed through its two endpoint snapshots.
///
/// The host owns property animation; elements only ever ask for the current
/// or the post-animation rect.
pub trait GeometryProvider {
    fn current(&self) -> BoundsRect;
    fn target(&self) -> BoundsRect;

    /// Selects the post-animation rect when `use_final` is set.
    fn rect(&self, use_final: bool) -> BoundsRect {
        if use_final { self.target() } else { self.current() }
    }
}

/// Two-snapshot geometry provider with linear interpolation between them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimatedRect {
    current: BoundsRect,
    target: BoundsRect,
}

impl AnimatedRect {
    #[must_use]
    pub const fn new(rect: BoundsRect) -> Self {
        Self {
            current: rect,
            target: rect,
        }
    }

    #[must_use]
    pub const fn with_target(current: BoundsRect, target: BoundsRect) -> Self {
        Self { current, target }
    }

    /// Installs a new animation target, leaving the current rect in place.
    pub fn set_target(&mut self, target: BoundsRect) {
        self.target = target;
    }

    /// Moves the current rect toward the target by `fraction`, clamped to [0, 1].
    pub fn advance(&mut self, fraction: f64) {
        let fraction = if fraction.is_finite() {
            fraction.clamp(0.0, 1.0)
        } else {
            1.0
        };
        self.current = BoundsRect::new(
            lerp(self.current.x, self.target.x, fraction),
            lerp(self.current.y, self.target.y, fraction),
            lerp(self.current.x2, self.target.x2, fraction),
            lerp(self.current.y2, self.target.y2, fraction),
        );
    }

    /// Completes the animation.
    pub fn snap_to_target(&mut self) {
        self.current = self.target;
    }
}

impl GeometryProvider for AnimatedRect {
    fn current(&self) -> BoundsRect {
        self.current
    }

    fn target(&self) -> BoundsRect {
        self.target
    }
}

fn lerp(from: f64, to: f64, fraction: f64) -> f64 {
    from + (to - from) * fraction
}
