//! Mock layout collaborators for testing.
//!
//! [`MockDocument`] answers geometry queries from a table the test fills in.
//! [`MockColumns`] is a column model whose visibility and widths the test
//! controls and which remembers every moving flag it was given.

use gridwork_core::alloc::HashMap;
use gridwork_core::geometry::Rect;
use gridwork_core::math::Vec2;
use gridwork_dnd::{ColumnId, ColumnModel, Document, ElementId};

/// Mock implementation of [`Document`].
#[derive(Debug, Clone)]
pub struct MockDocument {
    rects: HashMap<ElementId, Rect>,
    viewport: Vec2,
    ghost_root: bool,
}

impl Default for MockDocument {
    fn default() -> Self {
        Self::new(1000.0, 800.0)
    }
}

impl MockDocument {
    /// Create a document with the given viewport size.
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            rects: HashMap::new(),
            viewport: Vec2::new(viewport_width, viewport_height),
            ghost_root: true,
        }
    }

    /// Builder form of [`set_rect`](Self::set_rect).
    pub fn with_rect(mut self, element: ElementId, rect: Rect) -> Self {
        self.set_rect(element, rect);
        self
    }

    /// Make the document report that it has nowhere to mount a ghost.
    pub fn without_ghost_root(mut self) -> Self {
        self.ghost_root = false;
        self
    }

    pub fn set_rect(&mut self, element: ElementId, rect: Rect) {
        self.rects.insert(element, rect);
    }

    /// Collapse `element` to zero size in place, as a hidden element would.
    pub fn hide(&mut self, element: ElementId) {
        if let Some(rect) = self.rects.get_mut(&element) {
            rect.width = 0.0;
            rect.height = 0.0;
        }
    }

    /// Remove `element` entirely, as if it were unmounted.
    pub fn remove(&mut self, element: ElementId) {
        self.rects.remove(&element);
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
    }
}

impl Document for MockDocument {
    fn bounding_client_rect(&self, element: ElementId) -> Option<Rect> {
        self.rects.get(&element).copied()
    }

    fn viewport_size(&self) -> Vec2 {
        self.viewport
    }

    fn has_ghost_root(&self) -> bool {
        self.ghost_root
    }
}

/// Records a moving flag change for verification in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovingCall {
    pub column: ColumnId,
    pub moving: bool,
}

/// Mock implementation of [`ColumnModel`].
#[derive(Debug, Clone, Default)]
pub struct MockColumns {
    displayed: Vec<ColumnId>,
    widths: HashMap<ColumnId, f32>,
    moving_calls: Vec<MovingCall>,
}

impl MockColumns {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a column with its width and whether it is displayed.
    pub fn with_column(mut self, id: &str, width: f32, displayed: bool) -> Self {
        let id = ColumnId::new(id);
        if displayed {
            self.displayed.push(id.clone());
        }
        self.widths.insert(id, width);
        self
    }

    pub fn set_displayed(&mut self, id: &str, displayed: bool) {
        let id = ColumnId::new(id);
        self.displayed.retain(|c| *c != id);
        if displayed {
            self.displayed.push(id);
        }
    }

    /// Every `set_moving` call received, in order.
    pub fn moving_calls(&self) -> &[MovingCall] {
        &self.moving_calls
    }

    /// Whether the latest flag for `id` is "moving".
    pub fn is_moving(&self, id: &str) -> bool {
        self.moving_calls
            .iter()
            .rev()
            .find(|call| call.column.as_str() == id)
            .is_some_and(|call| call.moving)
    }
}

impl ColumnModel for MockColumns {
    fn displayed_columns(&self) -> &[ColumnId] {
        &self.displayed
    }

    fn actual_width(&self, column: &ColumnId) -> f32 {
        self.widths.get(column).copied().unwrap_or(0.0)
    }

    fn set_moving(&mut self, column: &ColumnId, moving: bool) {
        self.moving_calls.push(MovingCall {
            column: column.clone(),
            moving,
        });
    }
}
