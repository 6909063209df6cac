//! Circle shape.

use super::Geometry;
use kurbo::{BezPath, Circle as KurboCircle, Point, Rect, Shape as KurboShape};

/// A circle whose bounding diagonal runs from `start` to `end`.
///
/// The center is the diagonal's midpoint and the radius is half its length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub start: Point,
    pub end: Point,
}

impl Circle {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn center(&self) -> Point {
        self.start.midpoint(self.end)
    }

    pub fn radius(&self) -> f64 {
        self.start.distance(self.end) / 2.0
    }

    pub fn as_kurbo(&self) -> KurboCircle {
        KurboCircle::new(self.center(), self.radius())
    }
}

impl Geometry for Circle {
    fn bounds(&self) -> Rect {
        let r = self.radius();
        Rect::from_center_size(self.center(), (r * 2.0, r * 2.0))
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        point.distance(self.center()) <= self.radius() + tolerance
    }

    fn to_path(&self) -> BezPath {
        self.as_kurbo().to_path(0.1)
    }
}
