//! Hit-testing predicates used for selection.
//!
//! Every predicate is forgiving by [`HIT_TOLERANCE`] pixels so a click near an
//! edge still counts.

use crate::shapes::{Shape, ShapeId};
use kurbo::Point;

/// Slack, in pixels, granted around every shape.
pub const HIT_TOLERANCE: f64 = 5.0;

/// Check if `point` counts as "on" `shape` with the default tolerance.
pub fn point_in_shape(point: Point, shape: &Shape) -> bool {
    point_in_shape_with_tolerance(point, shape, HIT_TOLERANCE)
}

/// Check if `point` counts as "on" `shape`.
///
/// - Line: clamped distance to the segment is strictly below `tolerance`.
/// - Rectangle: inside the normalized bounds grown by `tolerance` on every side.
/// - Circle: distance to the center is at most `radius + tolerance`.
/// - Text: inside the fixed label box, padded by `tolerance` above and left.
pub fn point_in_shape_with_tolerance(point: Point, shape: &Shape, tolerance: f64) -> bool {
    shape.hit_test(point, tolerance)
}

/// Find the topmost shape under `point`.
///
/// `shapes` is in back-to-front order, so the search runs in reverse and the
/// most recently inserted match wins.
pub fn topmost_hit(shapes: &[Shape], point: Point, tolerance: f64) -> Option<ShapeId> {
    shapes
        .iter()
        .rev()
        .find(|s| point_in_shape_with_tolerance(point, s, tolerance))
        .map(Shape::id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Circle, Line, Rectangle, ShapeKind};

    fn line(id: ShapeId, a: (f64, f64), b: (f64, f64)) -> Shape {
        Shape::new(id, ShapeKind::Line(Line::new(a.into(), b.into())))
    }

    fn rect(id: ShapeId, a: (f64, f64), b: (f64, f64)) -> Shape {
        Shape::new(id, ShapeKind::Rectangle(Rectangle::new(a.into(), b.into())))
    }

    #[test]
    fn test_line_boundary() {
        let l = line(1, (0.0, 0.0), (100.0, 0.0));
        assert!(point_in_shape(Point::new(50.0, 3.0), &l));
        assert!(!point_in_shape(Point::new(50.0, 10.0), &l));
    }

    #[test]
    fn test_degenerate_line_measures_to_endpoint() {
        let l = line(1, (10.0, 10.0), (10.0, 10.0));
        assert!(point_in_shape(Point::new(10.0, 10.0), &l));
        assert!(point_in_shape(Point::new(13.0, 13.0), &l));
        // distance 5 is not strictly below the tolerance
        assert!(!point_in_shape(Point::new(13.0, 14.0), &l));
    }

    #[test]
    fn test_rectangle_tolerance() {
        let r = rect(1, (0.0, 0.0), (50.0, 50.0));
        assert!(point_in_shape(Point::new(-4.0, 25.0), &r));
        assert!(!point_in_shape(Point::new(-6.0, 25.0), &r));
    }

    #[test]
    fn test_circle_tolerance() {
        let c = Shape::new(
            1,
            ShapeKind::Circle(Circle::new(Point::new(0.0, 0.0), Point::new(0.0, 20.0))),
        );
        assert!(point_in_shape(Point::new(15.0, 10.0), &c));
        assert!(!point_in_shape(Point::new(16.0, 10.0), &c));
    }

    #[test]
    fn test_text_box() {
        let t = Shape::text(1, Point::new(0.0, 0.0), "label");
        assert!(point_in_shape(Point::new(-5.0, -5.0), &t));
        assert!(point_in_shape(Point::new(100.0, 20.0), &t));
        assert!(!point_in_shape(Point::new(101.0, 10.0), &t));
    }

    #[test]
    fn test_topmost_wins() {
        let shapes = vec![
            rect(1, (0.0, 0.0), (100.0, 100.0)),
            rect(2, (50.0, 50.0), (150.0, 150.0)),
        ];
        assert_eq!(topmost_hit(&shapes, Point::new(75.0, 75.0), HIT_TOLERANCE), Some(2));
        assert_eq!(topmost_hit(&shapes, Point::new(25.0, 25.0), HIT_TOLERANCE), Some(1));
        assert_eq!(topmost_hit(&shapes, Point::new(400.0, 400.0), HIT_TOLERANCE), None);
    }

    #[test]
    fn test_custom_tolerance() {
        let r = rect(1, (0.0, 0.0), (50.0, 50.0));
        assert!(!point_in_shape_with_tolerance(Point::new(-4.0, 25.0), &r, 0.0));
        assert!(point_in_shape_with_tolerance(Point::new(-9.0, 25.0), &r, 10.0));
    }
}
