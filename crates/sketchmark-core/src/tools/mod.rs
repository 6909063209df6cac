//! Tool system for the drawing surface.

use crate::error::ToolParseError;
use crate::shapes::{Circle, Line, Rectangle, Shape, ShapeId, ShapeKind};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    #[default]
    Select,
    Line,
    Rectangle,
    Circle,
    Text,
}

impl ToolKind {
    /// Name the toolbar forwards for this tool.
    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Select => "select",
            ToolKind::Line => "line",
            ToolKind::Rectangle => "rectangle",
            ToolKind::Circle => "circle",
            ToolKind::Text => "text",
        }
    }

    /// Get all tools in toolbar order.
    pub fn all() -> &'static [ToolKind] {
        &[
            ToolKind::Select,
            ToolKind::Line,
            ToolKind::Rectangle,
            ToolKind::Circle,
            ToolKind::Text,
        ]
    }

    /// Whether this tool draws by dragging.
    pub fn is_drawing_tool(self) -> bool {
        matches!(self, ToolKind::Line | ToolKind::Rectangle | ToolKind::Circle)
    }

    /// Payload for a drag that starts and (so far) ends at `point`.
    fn degenerate_kind(self, point: Point) -> Option<ShapeKind> {
        match self {
            ToolKind::Line => Some(ShapeKind::Line(Line::new(point, point))),
            ToolKind::Rectangle => Some(ShapeKind::Rectangle(Rectangle::new(point, point))),
            ToolKind::Circle => Some(ShapeKind::Circle(Circle::new(point, point))),
            ToolKind::Select | ToolKind::Text => None,
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ToolKind {
    type Err = ToolParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolKind::all()
            .iter()
            .copied()
            .find(|tool| tool.name() == s)
            .ok_or_else(|| ToolParseError::Unknown(s.to_string()))
    }
}

/// State of a drawing gesture.
#[derive(Debug, Clone, Default)]
pub enum ToolState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A drag is in progress. The preview is not part of the store yet.
    Active {
        /// Transient shape being drawn. Its start corner is the drag origin.
        preview: Shape,
    },
}

/// Manages the current tool and the in-progress drawing gesture.
#[derive(Debug, Clone, Default)]
pub struct ToolManager {
    /// Currently selected tool.
    pub current_tool: ToolKind,
    /// Current state of the tool.
    pub state: ToolState,
}

impl ToolManager {
    /// Create a new tool manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a drag with the current tool. Returns false for tools that don't draw by dragging.
    pub fn begin(&mut self, id: ShapeId, point: Point) -> bool {
        let Some(kind) = self.current_tool.degenerate_kind(point) else {
            return false;
        };
        self.state = ToolState::Active {
            preview: Shape::new(id, kind),
        };
        true
    }

    /// Move the preview's end point.
    pub fn update(&mut self, point: Point) {
        if let ToolState::Active { preview } = &mut self.state {
            preview.kind_mut().set_end(point);
        }
    }

    /// End the drag and return the shape to commit, if it has any extent.
    ///
    /// Degenerate previews are discarded.
    pub fn end(&mut self) -> Option<Shape> {
        match std::mem::take(&mut self.state) {
            ToolState::Active { preview } if !preview.kind().is_degenerate() => Some(preview),
            ToolState::Active { preview } => {
                log::debug!("Discarding zero-area {} {}", preview.kind().name(), preview.id());
                None
            }
            ToolState::Idle => None,
        }
    }

    /// Check if a drag is active.
    pub fn is_active(&self) -> bool {
        matches!(self.state, ToolState::Active { .. })
    }

    /// Get the transient shape for the current drag.
    pub fn preview_shape(&self) -> Option<&Shape> {
        match &self.state {
            ToolState::Active { preview } => Some(preview),
            ToolState::Idle => None,
        }
    }
}
