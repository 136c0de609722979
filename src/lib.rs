//! chart-annotations: scale-bound shape overlays for charting hosts.
//!
//! The crate computes annotation geometry from chart-scale coordinates,
//! hit-tests it for pointer interaction, and paints it through a
//! backend-agnostic 2D drawing surface. The host chart engine stays
//! external: its scales, palette and plot area arrive as a [`ChartView`]
//! snapshot, and drawing backends implement [`render::DrawSurface`].

pub mod annotations;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use annotations::{
    AnimatedRect, AnnotationSet, ChartScale, ChartView, EllipseAnnotation, EllipseOptions,
    GeometryProvider, HitAxis, ScaleAxis,
};
pub use error::{AnnotationError, AnnotationResult};
