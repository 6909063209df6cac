//! Render description of the current interaction state.
//!
//! The core does not draw. A host walks the [`RenderList`] in order and
//! paints each item with its own toolkit.

use crate::controller::InteractionController;
use crate::shapes::{Shape, ShapeId, ShapeKind};
use kurbo::Point;

/// What a label displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelRole {
    /// The visible content of a text shape.
    Content,
    /// The annotation of a drag-drawn shape.
    Annotation,
}

/// A string anchored on the surface, or an open edit field when `editing` is set.
#[derive(Debug, Clone, PartialEq)]
pub struct Label<'a> {
    pub role: LabelRole,
    /// Top-left corner of the label.
    pub anchor: Point,
    /// Committed value, or the live draft while editing.
    pub text: &'a str,
    pub editing: bool,
}

/// One shape to paint.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderItem<'a> {
    pub shape: &'a Shape,
    pub selected: bool,
    /// True for the transient shape of a drag in progress.
    pub preview: bool,
    pub label: Option<Label<'a>>,
}

/// Paint order for one frame: committed shapes back to front, then the preview.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderList<'a> {
    pub items: Vec<RenderItem<'a>>,
}

impl<'a> RenderList<'a> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RenderItem<'a>> {
        self.items.iter()
    }

    /// The item for a committed shape.
    pub fn get(&self, id: ShapeId) -> Option<&RenderItem<'a>> {
        self.items.iter().find(|item| !item.preview && item.shape.id() == id)
    }

    pub fn preview(&self) -> Option<&RenderItem<'a>> {
        self.items.iter().find(|item| item.preview)
    }
}

impl InteractionController {
    /// Describe what to paint.
    ///
    /// Text content is always labelled. Annotation labels for other shapes
    /// appear only with `show_annotations`, anchored `annotation_offset` pixels
    /// above the shape's top-left drag corner. The preview is never selected
    /// and never labelled.
    pub fn view(&self, show_annotations: bool) -> RenderList<'_> {
        let mut items: Vec<RenderItem<'_>> = self
            .store()
            .iter()
            .map(|shape| RenderItem {
                shape,
                selected: self.selection() == Some(shape.id()),
                preview: false,
                label: self.label_for(shape, show_annotations),
            })
            .collect();

        if let Some(shape) = self.preview() {
            items.push(RenderItem {
                shape,
                selected: false,
                preview: true,
                label: None,
            });
        }

        RenderList { items }
    }

    fn label_for<'a>(&'a self, shape: &'a Shape, show_annotations: bool) -> Option<Label<'a>> {
        let editing = shape.is_editing();
        let text = if editing {
            self.draft(shape.id()).unwrap_or_else(|| shape.editable_text())
        } else {
            shape.editable_text()
        };

        match shape.kind() {
            ShapeKind::Text(t) => Some(Label {
                role: LabelRole::Content,
                anchor: t.position,
                text,
                editing,
            }),
            kind if show_annotations => {
                let (start, end) = kind.corners()?;
                Some(Label {
                    role: LabelRole::Annotation,
                    anchor: Point::new(
                        start.x.min(end.x),
                        start.y.min(end.y) - self.config().annotation_offset,
                    ),
                    text,
                    editing,
                })
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::TextInputEvent;
    use crate::tools::ToolKind;

    fn controller_with_rect() -> (InteractionController, ShapeId) {
        let mut c = InteractionController::new();
        c.set_tool(ToolKind::Rectangle);
        c.pointer_down(Point::new(40.0, 60.0));
        c.pointer_up(Point::new(10.0, 30.0));
        let id = c.store().iter().next().unwrap().id();
        (c, id)
    }

    #[test]
    fn test_annotation_anchor() {
        let (c, id) = controller_with_rect();
        let view = c.view(true);
        let label = view.get(id).unwrap().label.as_ref().unwrap();
        assert_eq!(label.role, LabelRole::Annotation);
        assert_eq!(label.anchor, Point::new(10.0, 10.0));
        assert_eq!(label.text, "");
        assert!(!label.editing);
    }

    #[test]
    fn test_annotations_hidden() {
        let (c, id) = controller_with_rect();
        assert!(c.view(false).get(id).unwrap().label.is_none());
    }

    #[test]
    fn test_selected_flag() {
        let (mut c, id) = controller_with_rect();
        c.set_tool(ToolKind::Select);
        c.pointer_down(Point::new(20.0, 40.0));
        assert!(c.view(false).get(id).unwrap().selected);

        c.pointer_down(Point::new(300.0, 300.0));
        assert!(!c.view(false).get(id).unwrap().selected);
    }

    #[test]
    fn test_preview_is_last_and_plain() {
        let (mut c, id) = controller_with_rect();
        c.set_tool(ToolKind::Select);
        c.pointer_down(Point::new(20.0, 40.0));
        c.set_tool(ToolKind::Line);
        c.pointer_down(Point::new(100.0, 100.0));
        c.pointer_move(Point::new(120.0, 100.0));

        let view = c.view(true);
        assert_eq!(view.len(), 2);
        let preview = view.items.last().unwrap();
        assert!(preview.preview);
        assert!(!preview.selected);
        assert!(preview.label.is_none());
        assert_ne!(preview.shape.id(), id);
        assert_eq!(view.preview(), Some(preview));
    }

    #[test]
    fn test_text_label_shows_draft_while_editing() {
        let mut c = InteractionController::new();
        c.set_tool(ToolKind::Text);
        c.pointer_down(Point::new(5.0, 6.0));
        let id = c.store().iter().next().unwrap().id();
        c.handle_text_input(id, TextInputEvent::Changed("draft".to_string()));

        let view = c.view(false);
        let label = view.get(id).unwrap().label.as_ref().unwrap();
        assert_eq!(label.role, LabelRole::Content);
        assert_eq!(label.anchor, Point::new(5.0, 6.0));
        assert_eq!(label.text, "draft");
        assert!(label.editing);
    }
}
