//! Shape definitions for the drawing surface.

mod circle;
mod line;
mod rectangle;
mod text;

pub use circle::Circle;
pub use line::Line;
pub use rectangle::Rectangle;
pub use text::Text;

use kurbo::{BezPath, Point, Rect};

/// Unique identifier for shapes.
///
/// Assigned monotonically by [`crate::ShapeStore::allocate_id`] and never reused.
pub type ShapeId = u64;

/// Distance from a point to the line segment `a -> b`.
///
/// The point is projected onto the infinite line through `a` and `b` and the
/// projection parameter is clamped to the segment. A zero-length segment uses
/// the sentinel parameter `-1`, so the distance is measured to `a`.
pub fn distance_to_segment(point: Point, a: Point, b: Point) -> f64 {
    let seg = b - a;
    let pv = point - a;
    let len_sq = seg.hypot2();

    let t = if len_sq == 0.0 { -1.0 } else { pv.dot(seg) / len_sq };

    let closest = if t < 0.0 {
        a
    } else if t > 1.0 {
        b
    } else {
        a + seg * t
    };
    point.distance(closest)
}

/// Geometry shared by every shape kind.
pub trait Geometry {
    /// Axis-aligned bounding box in surface coordinates.
    fn bounds(&self) -> Rect;

    /// Check if a point lies on or inside the shape, allowing `tolerance` pixels of slack.
    fn hit_test(&self, point: Point, tolerance: f64) -> bool;

    /// Outline for rendering.
    fn to_path(&self) -> BezPath;
}

/// Kind-specific payload of a [`Shape`].
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    Line(Line),
    Rectangle(Rectangle),
    Circle(Circle),
    Text(Text),
}

impl ShapeKind {
    /// Lowercase tag used by the toolbar and in log output.
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Line(_) => "line",
            ShapeKind::Rectangle(_) => "rectangle",
            ShapeKind::Circle(_) => "circle",
            ShapeKind::Text(_) => "text",
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            ShapeKind::Line(s) => s.bounds(),
            ShapeKind::Rectangle(s) => s.bounds(),
            ShapeKind::Circle(s) => s.bounds(),
            ShapeKind::Text(s) => s.bounds(),
        }
    }

    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        match self {
            ShapeKind::Line(s) => s.hit_test(point, tolerance),
            ShapeKind::Rectangle(s) => s.hit_test(point, tolerance),
            ShapeKind::Circle(s) => s.hit_test(point, tolerance),
            ShapeKind::Text(s) => s.hit_test(point, tolerance),
        }
    }

    pub fn to_path(&self) -> BezPath {
        match self {
            ShapeKind::Line(s) => s.to_path(),
            ShapeKind::Rectangle(s) => s.to_path(),
            ShapeKind::Circle(s) => s.to_path(),
            ShapeKind::Text(s) => s.to_path(),
        }
    }

    /// The `(x1, y1)` / `(x2, y2)` pair for drag-drawn kinds.
    pub fn corners(&self) -> Option<(Point, Point)> {
        match self {
            ShapeKind::Line(s) => Some((s.start, s.end)),
            ShapeKind::Rectangle(s) => Some((s.start, s.end)),
            ShapeKind::Circle(s) => Some((s.start, s.end)),
            ShapeKind::Text(_) => None,
        }
    }

    /// Move the drag end point. Text has no drag phase and is left untouched.
    pub(crate) fn set_end(&mut self, point: Point) {
        match self {
            ShapeKind::Line(s) => s.end = point,
            ShapeKind::Rectangle(s) => s.end = point,
            ShapeKind::Circle(s) => s.end = point,
            ShapeKind::Text(_) => {}
        }
    }

    /// True when a drag-drawn shape has identical start and end points.
    pub fn is_degenerate(&self) -> bool {
        self.corners().is_some_and(|(start, end)| start == end)
    }
}

/// One drawn primitive plus its annotation and edit state.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub(crate) id: ShapeId,
    /// Free-text label. For text shapes it mirrors the displayed content.
    pub(crate) annotation: String,
    /// Whether an input field is open against this shape.
    pub(crate) is_editing: bool,
    kind: ShapeKind,
}

impl Shape {
    /// Create a shape with an empty annotation, not in edit mode.
    pub fn new(id: ShapeId, kind: ShapeKind) -> Self {
        Self {
            id,
            annotation: String::new(),
            is_editing: false,
            kind,
        }
    }

    /// Create a text shape. Text starts out in edit mode.
    pub fn text(id: ShapeId, position: Point, content: impl Into<String>) -> Self {
        Self {
            id,
            annotation: String::new(),
            is_editing: true,
            kind: ShapeKind::Text(Text::new(position, content)),
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn annotation(&self) -> &str {
        &self.annotation
    }

    pub fn is_editing(&self) -> bool {
        self.is_editing
    }

    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    pub(crate) fn kind_mut(&mut self) -> &mut ShapeKind {
        &mut self.kind
    }

    pub fn is_text(&self) -> bool {
        matches!(self.kind, ShapeKind::Text(_))
    }

    pub fn as_text(&self) -> Option<&Text> {
        match &self.kind {
            ShapeKind::Text(t) => Some(t),
            _ => None,
        }
    }

    /// The string an edit field opens with: text content for text shapes, annotation otherwise.
    pub fn editable_text(&self) -> &str {
        match &self.kind {
            ShapeKind::Text(t) => &t.content,
            _ => &self.annotation,
        }
    }

    pub fn bounds(&self) -> Rect {
        self.kind.bounds()
    }

    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        self.kind.hit_test(point, tolerance)
    }

    pub fn to_path(&self) -> BezPath {
        self.kind.to_path()
    }
}
