//! Pointer and keyboard driven interaction state machine.

use crate::config::InteractionConfig;
use crate::hit_test::topmost_hit;
use crate::input::{DELETE_KEY, ENTER_KEY, KeyEvent, PointerEvent, TextInputEvent};
use crate::shapes::{Shape, ShapeId};
use crate::store::{ShapePatch, ShapeStore};
use crate::tools::{ToolKind, ToolManager};
use kurbo::Point;
use std::collections::HashMap;

/// Coarse interaction state, derived from the controller's fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionState {
    /// No gesture, nothing selected, nothing being edited.
    Idle,
    /// A drag with a drawing tool is in progress.
    Drawing,
    /// A committed shape is selected.
    SelectionActive(ShapeId),
    /// An edit field is open against this shape.
    EditingAnnotation(ShapeId),
}

/// Turns input events into shape creation, selection, deletion and annotation edits.
///
/// Owns the [`ShapeStore`]. Selection is a plain id checked against the store
/// after every mutation, so deleting a shape can never leave it dangling.
#[derive(Debug, Clone)]
pub struct InteractionController {
    store: ShapeStore,
    tools: ToolManager,
    selection: Option<ShapeId>,
    /// Uncommitted edit-field contents, keyed by shape.
    drafts: HashMap<ShapeId, String>,
    key_listener_attached: bool,
    config: InteractionConfig,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractionController {
    /// Create a controller over an empty store with default settings.
    pub fn new() -> Self {
        Self::with_config(InteractionConfig::default())
    }

    pub fn with_config(config: InteractionConfig) -> Self {
        Self::with_store(ShapeStore::new(), config)
    }

    /// Create a controller over an existing store.
    ///
    /// Out-of-range settings are replaced by their defaults (see
    /// [`InteractionConfig::sanitize`]).
    pub fn with_store(store: ShapeStore, mut config: InteractionConfig) -> Self {
        config.sanitize();
        let mut tools = ToolManager::new();
        tools.current_tool = config.initial_tool;
        let drafts = store
            .iter()
            .filter(|s| s.is_editing())
            .map(|s| (s.id(), s.editable_text().to_string()))
            .collect();
        Self {
            store,
            tools,
            selection: None,
            drafts,
            key_listener_attached: false,
            config,
        }
    }

    pub fn store(&self) -> &ShapeStore {
        &self.store
    }

    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    pub fn tool(&self) -> ToolKind {
        self.tools.current_tool
    }

    /// Switch tools. A drag in progress is finalized first, as if the pointer left the surface.
    pub fn set_tool(&mut self, tool: ToolKind) {
        if self.tools.is_active() {
            self.finish_drawing();
        }
        log::debug!("Tool changed to {}", tool);
        self.tools.current_tool = tool;
    }

    pub fn selection(&self) -> Option<ShapeId> {
        self.selection
    }

    /// The transient shape of the drag in progress.
    pub fn preview(&self) -> Option<&Shape> {
        self.tools.preview_shape()
    }

    /// Live contents of the edit field open against `id`.
    pub fn draft(&self, id: ShapeId) -> Option<&str> {
        self.drafts.get(&id).map(String::as_str)
    }

    pub fn is_key_listener_attached(&self) -> bool {
        self.key_listener_attached
    }

    /// Derive the coarse interaction state.
    ///
    /// Several shapes may be editing at once; the backmost one is reported.
    pub fn state(&self) -> InteractionState {
        if self.tools.is_active() {
            return InteractionState::Drawing;
        }
        if let Some(editing) = self.store.iter().find(|s| s.is_editing()) {
            return InteractionState::EditingAnnotation(editing.id());
        }
        match self.selection {
            Some(id) => InteractionState::SelectionActive(id),
            None => InteractionState::Idle,
        }
    }

    /// Dispatch a pointer event.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { position } => self.pointer_down(position),
            PointerEvent::Move { position } => self.pointer_move(position),
            PointerEvent::Up { position } => self.pointer_up(position),
            PointerEvent::Leave => self.pointer_leave(),
            PointerEvent::DoubleClick { position } => self.double_click(position),
        }
    }

    pub fn pointer_down(&mut self, position: Point) {
        if self.tools.is_active() {
            // The previous drag never saw its pointer-up.
            self.finish_drawing();
        }

        let tool = self.tools.current_tool;
        if tool.is_drawing_tool() {
            let id = self.store.allocate_id();
            if self.tools.begin(id, position) {
                log::debug!(
                    "Started drawing {} {} at ({}, {})",
                    tool,
                    id,
                    position.x,
                    position.y
                );
            }
        } else if tool == ToolKind::Text {
            self.create_text(position);
        } else {
            self.select_at(position);
        }
    }

    pub fn pointer_move(&mut self, position: Point) {
        if self.tools.is_active() {
            log::trace!("Drag moved to ({}, {})", position.x, position.y);
            self.tools.update(position);
        }
    }

    /// Finalize a drag. `position` is the last known pointer position.
    pub fn pointer_up(&mut self, position: Point) {
        if self.tools.is_active() {
            self.tools.update(position);
            self.finish_drawing();
        }
    }

    /// Finalize a drag at the last position seen by `pointer_move`.
    pub fn pointer_leave(&mut self) {
        if self.tools.is_active() {
            self.finish_drawing();
        }
    }

    /// Open an edit field against the topmost shape under `position`.
    ///
    /// Other shapes' edit flags are left alone.
    pub fn double_click(&mut self, position: Point) {
        if let Some(id) = topmost_hit(self.store.as_slice(), position, self.config.hit_tolerance) {
            self.begin_editing(id);
        }
    }

    /// Put `id` into edit mode. Returns false if no such shape exists.
    pub fn begin_editing(&mut self, id: ShapeId) -> bool {
        let Some(shape) = self.store.find(id) else {
            return false;
        };
        let initial = shape.editable_text().to_string();
        self.drafts.entry(id).or_insert(initial);
        self.store.update(id, ShapePatch::new().editing(true));
        log::debug!("Editing shape {}", id);
        true
    }

    /// Route an event from the edit field open against `id`.
    ///
    /// Events for shapes that are not in edit mode are ignored.
    pub fn handle_text_input(&mut self, id: ShapeId, event: TextInputEvent) {
        if !self.store.find(id).is_some_and(Shape::is_editing) {
            log::trace!("Ignoring text input for shape {} not in edit mode", id);
            return;
        }
        match event {
            TextInputEvent::Changed(text) => {
                self.drafts.insert(id, text);
            }
            TextInputEvent::Blur => self.commit_edit(id),
            TextInputEvent::KeyDown(key) if key == ENTER_KEY => self.commit_edit(id),
            TextInputEvent::KeyDown(_) => {}
        }
    }

    /// Write the draft into the shape and close its edit field.
    ///
    /// Text shapes get the draft as both annotation and displayed content.
    fn commit_edit(&mut self, id: ShapeId) {
        let Some(shape) = self.store.find(id) else {
            return;
        };
        let text = self
            .drafts
            .remove(&id)
            .unwrap_or_else(|| shape.editable_text().to_string());
        log::debug!("Committing annotation for shape {}: {:?}", id, text);
        self.store.update(
            id,
            ShapePatch::new()
                .annotation(text.clone())
                .text(text)
                .editing(false),
        );
    }

    /// Handle a key event from the global listener.
    ///
    /// Returns true if the event changed anything. Keys are ignored while the
    /// listener is detached (see [`InteractionController::mount`]).
    pub fn handle_key(&mut self, event: &KeyEvent) -> bool {
        if !self.key_listener_attached {
            return false;
        }
        if event.is_press_of(DELETE_KEY) {
            return self.delete_selected().is_some();
        }
        false
    }

    /// Give the host mutable access to the store, then re-check selection and drafts.
    pub fn update_store<R>(&mut self, f: impl FnOnce(&mut ShapeStore) -> R) -> R {
        let result = f(&mut self.store);
        self.sync_with_store();
        result
    }

    pub(crate) fn set_key_listener_attached(&mut self, attached: bool) {
        self.key_listener_attached = attached;
    }

    fn select_at(&mut self, position: Point) {
        let hit = topmost_hit(self.store.as_slice(), position, self.config.hit_tolerance);
        if hit != self.selection {
            log::debug!("Selection changed: {:?} -> {:?}", self.selection, hit);
        }
        self.selection = hit;
    }

    fn create_text(&mut self, position: Point) {
        let id = self.store.allocate_id();
        let placeholder = self.config.text_placeholder.clone();
        self.drafts.insert(id, placeholder.clone());
        self.store.add(Shape::text(id, position, placeholder));
        log::debug!("Created text {} at ({}, {})", id, position.x, position.y);
    }

    fn finish_drawing(&mut self) {
        if let Some(shape) = self.tools.end() {
            log::debug!("Committed {} {}", shape.kind().name(), shape.id());
            self.store.add(shape);
            self.sync_with_store();
        }
    }

    fn delete_selected(&mut self) -> Option<Shape> {
        let id = self.selection.take()?;
        let removed = self.store.remove(id);
        if removed.is_some() {
            log::debug!("Deleted shape {}", id);
        }
        self.sync_with_store();
        removed
    }

    fn sync_with_store(&mut self) {
        if let Some(id) = self.selection {
            if !self.store.contains(id) {
                log::debug!("Clearing selection of missing shape {}", id);
                self.selection = None;
            }
        }
        let store = &self.store;
        self.drafts
            .retain(|id, _| store.find(*id).is_some_and(Shape::is_editing));
    }
}
