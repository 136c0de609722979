use serde::{Deserialize, Serialize};

use crate::error::{AnnotationError, AnnotationResult};

/// Linear mapping from a data-space domain onto a pixel range.
///
/// The pixel range may run in either direction; vertical scales hand in a
/// top-down range so larger domain values land higher on screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    pixel_start: f64,
    pixel_end: f64,
}

impl LinearScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        pixel_start: f64,
        pixel_end: f64,
    ) -> AnnotationResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(AnnotationError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        if !pixel_start.is_finite() || !pixel_end.is_finite() || pixel_start == pixel_end {
            return Err(AnnotationError::InvalidData(
                "scale pixel range must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            pixel_start,
            pixel_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn pixel_range(self) -> (f64, f64) {
        (self.pixel_start, self.pixel_end)
    }

    pub fn to_pixel(self, value: f64) -> AnnotationResult<f64> {
        if !value.is_finite() {
            return Err(AnnotationError::InvalidData(
                "value must be finite".to_owned(),
            ));
        }

        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        Ok(self.pixel_start + normalized * (self.pixel_end - self.pixel_start))
    }

    pub fn to_domain(self, pixel: f64) -> AnnotationResult<f64> {
        if !pixel.is_finite() {
            return Err(AnnotationError::InvalidData(
                "pixel must be finite".to_owned(),
            ));
        }

        let normalized = (pixel - self.pixel_start) / (self.pixel_end - self.pixel_start);
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }
}
