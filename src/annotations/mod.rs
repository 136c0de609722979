//! Annotation elements and their host-facing surface.

pub mod element;
pub mod ellipse;
pub mod options;
pub mod set;
pub mod view;

pub use element::{AnimatedRect, GeometryProvider, HitAxis};
pub use ellipse::EllipseAnnotation;
pub use options::{EllipseOptions, OptionRoute};
pub use set::AnnotationSet;
pub use view::{ChartScale, ChartView, ScaleAxis};
