//! Rectangle shape.

use super::Geometry;
use kurbo::{BezPath, Point, Rect, Shape as KurboShape};

/// An axis-aligned rectangle spanned by two opposite corners.
///
/// The corners are stored as drawn; either may be the top-left one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    /// Corner where the drag started.
    pub start: Point,
    /// Corner where the drag ended.
    pub end: Point,
}

impl Rectangle {
    /// Create a rectangle from two corner points.
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Get the rectangle as a normalized kurbo Rect.
    pub fn as_rect(&self) -> Rect {
        Rect::from_points(self.start, self.end)
    }

    pub fn width(&self) -> f64 {
        (self.end.x - self.start.x).abs()
    }

    pub fn height(&self) -> f64 {
        (self.end.y - self.start.y).abs()
    }
}

impl Geometry for Rectangle {
    fn bounds(&self) -> Rect {
        self.as_rect()
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        // Inclusive on every edge; kurbo's Rect::contains excludes the max edges.
        let rect = self.as_rect();
        point.x >= rect.x0 - tolerance
            && point.x <= rect.x1 + tolerance
            && point.y >= rect.y0 - tolerance
            && point.y <= rect.y1 + tolerance
    }

    fn to_path(&self) -> BezPath {
        self.as_rect().to_path(0.1)
    }
}
