use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use tracing::warn;

use crate::error::{AnnotationError, AnnotationResult};
use crate::render::DrawSurface;

use super::element::HitAxis;
use super::ellipse::EllipseAnnotation;
use super::view::ChartView;

/// Annotations owned by one chart, keyed by unique id.
///
/// Iteration follows insertion order; the draw pass additionally sorts by
/// `z`, ties broken by insertion order.
#[derive(Debug, Default)]
pub struct AnnotationSet {
    annotations: IndexMap<String, EllipseAnnotation>,
}

impl AnnotationSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an annotation with unique non-empty id.
    pub fn register(&mut self, annotation: EllipseAnnotation) -> AnnotationResult<()> {
        let id = annotation.id().to_owned();
        if id.is_empty() {
            return Err(AnnotationError::InvalidData(
                "annotation id must not be empty".to_owned(),
            ));
        }
        if self.annotations.contains_key(&id) {
            return Err(AnnotationError::InvalidData(format!(
                "annotation with id `{id}` is already registered"
            )));
        }
        self.annotations.insert(id, annotation);
        Ok(())
    }

    /// Unregisters an annotation by id. Returns `true` when removed.
    pub fn unregister(&mut self, id: &str) -> bool {
        self.annotations.shift_remove(id).is_some()
    }

    #[must_use]
    pub fn has(&self, id: &str) -> bool {
        self.annotations.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&EllipseAnnotation> {
        self.annotations.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut EllipseAnnotation> {
        self.annotations.get_mut(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EllipseAnnotation> {
        self.annotations.values()
    }

    /// Re-resolves every annotation's geometry target against the view.
    ///
    /// Returns how many resolved. Failures are logged and skipped so one bad
    /// annotation cannot hide the rest.
    pub fn resolve_all(&mut self, view: &ChartView) -> usize {
        let mut resolved = 0;
        for (id, annotation) in &mut self.annotations {
            match annotation.resolve_element_properties(view) {
                Ok(_) => resolved += 1,
                Err(err) => warn!(
                    annotation_id = %id,
                    error = %err,
                    "skipping annotation with unresolvable geometry"
                ),
            }
        }
        resolved
    }

    /// Like [`Self::resolve_all`] but snaps current geometry to the result,
    /// for initial placement without an entry animation.
    pub fn snap_all(&mut self, view: &ChartView) -> usize {
        let mut resolved = 0;
        for (id, annotation) in &mut self.annotations {
            match annotation.resolve_and_snap(view) {
                Ok(_) => resolved += 1,
                Err(err) => warn!(
                    annotation_id = %id,
                    error = %err,
                    "skipping annotation with unresolvable geometry"
                ),
            }
        }
        resolved
    }

    /// Advances every annotation's animation by `fraction`.
    pub fn advance_all(&mut self, fraction: f64) {
        for annotation in self.annotations.values_mut() {
            annotation.geometry_mut().advance(fraction);
        }
    }

    /// Draws displayable annotations in ascending `z`.
    pub fn draw_all(
        &self,
        surface: &mut dyn DrawSurface,
        view: &ChartView,
    ) -> AnnotationResult<()> {
        for annotation in self.draw_order() {
            annotation.draw(surface, view)?;
        }
        Ok(())
    }

    /// Ids of displayed annotations containing the point, in draw order.
    #[must_use]
    pub fn annotations_at(&self, x: f64, y: f64, axis: HitAxis) -> Vec<&str> {
        self.draw_order()
            .into_iter()
            .filter(|annotation| {
                annotation.options().display && annotation.in_range(x, y, axis, false)
            })
            .map(EllipseAnnotation::id)
            .collect()
    }

    /// Union of data-space bounds declared on `scale_id` by annotations
    /// opting into scale-range adjustment.
    ///
    /// `None` when no annotation contributes to that scale.
    #[must_use]
    pub fn declared_scale_range(&self, scale_id: &str) -> Option<(f64, f64)> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for annotation in self.annotations.values() {
            let options = annotation.options();
            if !options.adjust_scale_range {
                continue;
            }
            if options.x_scale_id.as_deref() == Some(scale_id) {
                accumulate(&mut min, &mut max, options.x_min);
                accumulate(&mut min, &mut max, options.x_max);
            }
            if options.y_scale_id.as_deref() == Some(scale_id) {
                accumulate(&mut min, &mut max, options.y_min);
                accumulate(&mut min, &mut max, options.y_max);
            }
        }

        (min <= max).then_some((min, max))
    }

    fn draw_order(&self) -> Vec<&EllipseAnnotation> {
        let mut order: Vec<(usize, &EllipseAnnotation)> =
            self.annotations.values().enumerate().collect();
        order.sort_by_key(|(index, annotation)| (OrderedFloat(annotation.options().z), *index));
        order.into_iter().map(|(_, annotation)| annotation).collect()
    }
}

fn accumulate(min: &mut f64, max: &mut f64, value: Option<f64>) {
    if let Some(value) = value {
        if value.is_finite() {
            *min = min.min(value);
            *max = max.max(value);
        }
    }
}
