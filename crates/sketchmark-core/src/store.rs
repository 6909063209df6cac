//! The ordered shape collection.

use crate::hit_test::point_in_shape_with_tolerance;
use crate::shapes::{Shape, ShapeId, ShapeKind};
use kurbo::Point;

/// Field updates for a stored shape.
///
/// Only the fields that are `Some` are written. Geometry and kind are not
/// patchable: coordinates freeze once a shape is committed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapePatch {
    pub annotation: Option<String>,
    /// Displayed content; ignored for non-text shapes.
    pub text: Option<String>,
    pub is_editing: Option<bool>,
}

impl ShapePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn editing(mut self, is_editing: bool) -> Self {
        self.is_editing = Some(is_editing);
        self
    }

    fn apply(self, shape: &mut Shape) {
        if let Some(annotation) = self.annotation {
            shape.annotation = annotation;
        }
        if let Some(text) = self.text {
            if let ShapeKind::Text(t) = shape.kind_mut() {
                t.content = text;
            }
        }
        if let Some(is_editing) = self.is_editing {
            shape.is_editing = is_editing;
        }
    }
}

/// Shapes in back-to-front insertion order, plus the id allocator.
#[derive(Debug, Clone)]
pub struct ShapeStore {
    shapes: Vec<Shape>,
    next_id: ShapeId,
}

impl Default for ShapeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            next_id: 1,
        }
    }

    /// Hand out the next id. Ids are never reissued, even if the shape built
    /// with one is never added.
    ///
    /// Once the id space is exhausted this keeps returning `ShapeId::MAX`,
    /// which [`add`](Self::add) refuses to store.
    pub fn allocate_id(&mut self) -> ShapeId {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        id
    }

    /// Append a shape on top of the others.
    ///
    /// A shape whose id is already stored, or whose id is `ShapeId::MAX`, is ignored.
    pub fn add(&mut self, shape: Shape) {
        let id = shape.id();
        let Some(next) = id.checked_add(1) else {
            log::warn!("Ignoring shape with reserved id {}", id);
            return;
        };
        if self.contains(id) {
            log::warn!("Ignoring shape with duplicate id {}", id);
            return;
        }
        if next > self.next_id {
            self.next_id = next;
        }
        self.shapes.push(shape);
    }

    /// Apply `patch` to the shape with `id`. Returns false if no shape matched.
    pub fn update(&mut self, id: ShapeId, patch: ShapePatch) -> bool {
        match self.find_mut(id) {
            Some(shape) => {
                patch.apply(shape);
                true
            }
            None => false,
        }
    }

    /// Remove a shape, keeping the order of the rest.
    pub fn remove(&mut self, id: ShapeId) -> Option<Shape> {
        let pos = self.shapes.iter().position(|s| s.id() == id)?;
        Some(self.shapes.remove(pos))
    }

    /// Get a shape by ID.
    pub fn find(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    pub(crate) fn find_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id() == id)
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.find(id).is_some()
    }

    /// Shapes back to front.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Shape> {
        self.shapes.iter()
    }

    pub fn as_slice(&self) -> &[Shape] {
        &self.shapes
    }

    /// Find shapes at a point, front to back.
    pub fn shapes_at_point(&self, point: Point, tolerance: f64) -> Vec<ShapeId> {
        self.shapes
            .iter()
            .rev()
            .filter(|s| point_in_shape_with_tolerance(point, s, tolerance))
            .map(Shape::id)
            .collect()
    }

    /// Ids of every shape currently in edit mode, back to front.
    pub fn editing_ids(&self) -> Vec<ShapeId> {
        self.shapes
            .iter()
            .filter(|s| s.is_editing())
            .map(Shape::id)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }
}
