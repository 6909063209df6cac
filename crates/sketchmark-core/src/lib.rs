//! Sketchmark Core Library
//!
//! Platform-agnostic interaction core for a small annotated vector sketcher:
//! shapes, hit-testing, the shape store and the pointer/keyboard state machine.
//! Rendering and event capture belong to the host.

pub mod config;
pub mod controller;
pub mod error;
pub mod hit_test;
pub mod input;
pub mod keyboard;
pub mod shapes;
pub mod store;
pub mod tools;
pub mod view;

pub use config::InteractionConfig;
pub use controller::{InteractionController, InteractionState};
pub use error::{ConfigError, ConfigResult, ToolParseError};
pub use hit_test::{HIT_TOLERANCE, point_in_shape, point_in_shape_with_tolerance, topmost_hit};
pub use input::{DELETE_KEY, ENTER_KEY, KeyEvent, PointerEvent, TextInputEvent};
pub use keyboard::MountGuard;
pub use shapes::{Circle, Geometry, Line, Rectangle, Shape, ShapeId, ShapeKind, Text};
pub use store::{ShapePatch, ShapeStore};
pub use tools::{ToolKind, ToolManager, ToolState};
pub use view::{Label, LabelRole, RenderItem, RenderList};
