//! Text shape.

use super::Geometry;
use kurbo::{BezPath, Point, Rect};

/// A free text label anchored at a point.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    /// Anchor (top-left of the label).
    pub position: Point,
    /// The displayed string.
    pub content: String,
}

impl Text {
    /// Content given to text created with the text tool.
    pub const PLACEHOLDER: &'static str = "Select then double click to edit";

    /// Width of the fixed hit box, independent of the rendered text length.
    pub const HIT_WIDTH: f64 = 100.0;

    /// Height of the fixed hit box.
    pub const HIT_HEIGHT: f64 = 20.0;

    pub fn new(position: Point, content: impl Into<String>) -> Self {
        Self {
            position,
            content: content.into(),
        }
    }
}

impl Geometry for Text {
    fn bounds(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + Self::HIT_WIDTH,
            self.position.y + Self::HIT_HEIGHT,
        )
    }

    /// The tolerance only pads the top and left edges.
    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        point.x >= self.position.x - tolerance
            && point.x <= self.position.x + Self::HIT_WIDTH
            && point.y >= self.position.y - tolerance
            && point.y <= self.position.y + Self::HIT_HEIGHT
    }

    /// Glyph layout belongs to the renderer.
    fn to_path(&self) -> BezPath {
        BezPath::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_box_is_fixed() {
        let short = Text::new(Point::new(10.0, 10.0), "a");
        let long = Text::new(Point::new(10.0, 10.0), "a much longer label than the box");
        for text in [&short, &long] {
            assert!(text.hit_test(Point::new(110.0, 30.0), 5.0));
            assert!(!text.hit_test(Point::new(111.0, 20.0), 5.0));
            assert!(!text.hit_test(Point::new(50.0, 31.0), 5.0));
        }
    }

    #[test]
    fn test_hit_box_padding_top_left() {
        let text = Text::new(Point::new(10.0, 10.0), "x");
        assert!(text.hit_test(Point::new(5.0, 5.0), 5.0));
        assert!(!text.hit_test(Point::new(4.9, 10.0), 5.0));
        assert!(!text.hit_test(Point::new(10.0, 4.9), 5.0));
    }
}
