//! Layout collaborators queried by the service.
//!
//! The service never owns a DOM. It asks a [`Document`] for element bounds
//! and viewport size, and a [`ColumnModel`] for column visibility and widths.

use gridwork_core::geometry::Rect;
use gridwork_core::math::Vec2;

use crate::element::{ColumnId, ElementId};

/// The hosting document.
pub trait Document {
    /// Bounds of `element` in client (viewport) coordinates.
    ///
    /// `None` means the element is not mounted. Hidden elements should report
    /// a zero-sized rectangle.
    fn bounding_client_rect(&self, element: ElementId) -> Option<Rect>;

    /// Current viewport width and height.
    fn viewport_size(&self) -> Vec2;

    /// Whether there is a root to attach the ghost to.
    fn has_ghost_root(&self) -> bool {
        true
    }
}

/// The grid's column model.
pub trait ColumnModel {
    /// Columns currently displayed, in display order.
    fn displayed_columns(&self) -> &[ColumnId];

    /// Rendered width of `column` in pixels.
    fn actual_width(&self, column: &ColumnId) -> f32;

    /// Flag `column` as being moved so the grid can restyle it.
    fn set_moving(&mut self, column: &ColumnId, moving: bool);
}
