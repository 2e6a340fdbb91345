//! Configuration for the drag-and-drop service.

use gridwork_core::math::Vec2;

/// Default header row height in pixels, used as the ghost height.
pub const DEFAULT_HEADER_HEIGHT: f32 = 25.0;

/// Horizontal distance between the pointer and the ghost's left edge.
///
/// Puts the pointer just right of the icon glyph.
pub const DEFAULT_GHOST_ICON_OFFSET: f32 = 30.0;

/// Pixels trimmed from the viewport before clamping the ghost.
///
/// Without the inset a ghost flush against the edge can still bring in
/// document scrollbars.
pub const DEFAULT_VIEWPORT_INSET: f32 = 2.0;

/// Pointer travel in pixels before a press becomes a drag.
pub const DEFAULT_DRAG_THRESHOLD: f32 = 5.0;

/// Settings shared by the coordinator, ghost renderer and pointer tracker.
#[derive(Debug, Clone)]
pub struct DragAndDropConfig {
    /// Height of the grid's header row; the ghost uses it as its height.
    pub header_height: f32,
    /// See [`DEFAULT_GHOST_ICON_OFFSET`].
    pub ghost_icon_offset: f32,
    /// See [`DEFAULT_VIEWPORT_INSET`].
    pub viewport_inset: f32,
    /// Page position of a new ghost before the first pointer move.
    pub ghost_initial_position: Vec2,
    /// See [`DEFAULT_DRAG_THRESHOLD`].
    pub drag_threshold: f32,
}

impl Default for DragAndDropConfig {
    fn default() -> Self {
        Self {
            header_height: DEFAULT_HEADER_HEIGHT,
            ghost_icon_offset: DEFAULT_GHOST_ICON_OFFSET,
            viewport_inset: DEFAULT_VIEWPORT_INSET,
            ghost_initial_position: Vec2::new(20.0, 20.0),
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
        }
    }
}

impl DragAndDropConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header height.
    pub fn header_height(mut self, height: f32) -> Self {
        self.header_height = height.max(0.0);
        self
    }

    /// Set the horizontal pointer offset of the ghost.
    pub fn ghost_icon_offset(mut self, offset: f32) -> Self {
        self.ghost_icon_offset = offset;
        self
    }

    /// Set the viewport inset used for clamping.
    pub fn viewport_inset(mut self, inset: f32) -> Self {
        self.viewport_inset = inset.max(0.0);
        self
    }

    /// Set where a freshly created ghost appears.
    pub fn ghost_initial_position(mut self, position: Vec2) -> Self {
        self.ghost_initial_position = position;
        self
    }

    /// Set the drag start threshold.
    pub fn drag_threshold(mut self, threshold: f32) -> Self {
        self.drag_threshold = threshold.max(0.0);
        self
    }
}
