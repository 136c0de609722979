pub mod geometry;
pub mod scale;
pub mod types;

pub use geometry::{BoundsRect, EPSILON, HIT_TOLERANCE, rotate_about};
pub use scale::LinearScale;
pub use types::Point;
