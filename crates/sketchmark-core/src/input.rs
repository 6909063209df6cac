//! Input events delivered by the host UI layer.
//!
//! Positions are in the drawing surface's local coordinate space; the host
//! translates them from screen coordinates before dispatching.

use kurbo::Point;

/// Key name of the delete key, as reported by the host.
pub const DELETE_KEY: &str = "Delete";
/// Key name that commits an open edit field.
pub const ENTER_KEY: &str = "Enter";

/// Pointer event on the drawing surface.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    Up { position: Point },
    /// The pointer left the surface. Finalizes a drag like `Up`.
    Leave,
    DoubleClick { position: Point },
}

impl PointerEvent {
    /// Position carried by the event, if any.
    pub fn position(&self) -> Option<Point> {
        match self {
            PointerEvent::Down { position }
            | PointerEvent::Move { position }
            | PointerEvent::Up { position }
            | PointerEvent::DoubleClick { position } => Some(*position),
            PointerEvent::Leave => None,
        }
    }
}

/// Keyboard event from the global key listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEvent {
    Pressed(String),
    Released(String),
}

impl KeyEvent {
    /// Check if this is a press of `key`.
    pub fn is_press_of(&self, key: &str) -> bool {
        matches!(self, KeyEvent::Pressed(k) if k == key)
    }
}

/// Event from the edit field open against one shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInputEvent {
    /// The field's value changed.
    Changed(String),
    /// The field lost focus.
    Blur,
    /// A key was pressed inside the field.
    KeyDown(String),
}
