//! Line shape.

use super::{Geometry, distance_to_segment};
use kurbo::{BezPath, Line as KurboLine, Point, Rect};

/// A straight segment between two literal endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    /// Start point (`x1`, `y1`).
    pub start: Point,
    /// End point (`x2`, `y2`).
    pub end: Point,
}

impl Line {
    /// Create a new line.
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Get the length of the line.
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Get the midpoint of the line.
    pub fn midpoint(&self) -> Point {
        self.start.midpoint(self.end)
    }

    /// Get as a kurbo Line.
    pub fn as_kurbo(&self) -> KurboLine {
        KurboLine::new(self.start, self.end)
    }
}

impl Geometry for Line {
    fn bounds(&self) -> Rect {
        Rect::from_points(self.start, self.end)
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        distance_to_segment(point, self.start, self.end) < tolerance
    }

    fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        if self.start == self.end {
            return path;
        }
        path.move_to(self.start);
        path.line_to(self.end);
        path
    }
}
