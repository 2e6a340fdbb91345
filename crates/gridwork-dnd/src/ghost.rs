//! The floating "ghost" that follows the pointer during a drag.
//!
//! The renderer only keeps the ghost's state: label, page position, size,
//! icon and shake flag. Hosts read it through
//! [`DragAndDropService::ghost`](crate::DragAndDropService::ghost) and draw it
//! however they like.

use std::fmt;
use std::str::FromStr;

use gridwork_core::geometry::Rect;
use gridwork_core::math::Vec2;

use crate::config::DragAndDropConfig;
use crate::document::ColumnModel;
use crate::element::ColumnId;
use crate::error::DndError;
use crate::event::PointerEvent;

/// Icon shown in the ghost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GhostIcon {
    Pinned,
    Add,
    Move,
    Left,
    Right,
    Group,
    /// Shown whenever no drop target is active.
    #[default]
    Hidden,
}

impl GhostIcon {
    pub const ALL: [GhostIcon; 7] = [
        GhostIcon::Pinned,
        GhostIcon::Add,
        GhostIcon::Move,
        GhostIcon::Left,
        GhostIcon::Right,
        GhostIcon::Group,
        GhostIcon::Hidden,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            GhostIcon::Pinned => "pinned",
            GhostIcon::Add => "add",
            GhostIcon::Move => "move",
            GhostIcon::Left => "left",
            GhostIcon::Right => "right",
            GhostIcon::Group => "group",
            GhostIcon::Hidden => "hidden",
        }
    }
}

impl fmt::Display for GhostIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GhostIcon {
    type Err = DndError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GhostIcon::ALL
            .into_iter()
            .find(|icon| icon.name() == s)
            .ok_or_else(|| DndError::UnknownIcon(s.to_string()))
    }
}

/// State of the live ghost.
#[derive(Debug, Clone, PartialEq)]
pub struct Ghost {
    pub label: String,
    /// Top-left corner in page coordinates.
    pub position: Vec2,
    pub size: Vec2,
    pub icon: GhostIcon,
    /// Whether the icon plays the attention shake.
    pub shake: bool,
}

impl Ghost {
    pub fn rect(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.size.x, self.size.y)
    }
}

/// Combined width of the dragged columns that are currently displayed.
///
/// Hidden columns contribute nothing, so dragging a group with one visible
/// column gives a ghost as wide as that one column.
pub fn ghost_width<C>(columns: &C, items: &[ColumnId]) -> f32
where
    C: ColumnModel + ?Sized,
{
    let displayed = columns.displayed_columns();
    items
        .iter()
        .filter(|item| displayed.contains(*item))
        .map(|item| columns.actual_width(item))
        .sum()
}

/// Page position of a ghost of `ghost_size` for a pointer at `pointer_page`.
///
/// The ghost is vertically centred on the pointer and shifted left by the
/// icon offset, then clamped to `[0, viewport - inset - ghost]` on both axes.
/// The upper clamp is skipped when the inset viewport has no positive extent.
pub fn ghost_position(
    pointer_page: Vec2,
    ghost_size: Vec2,
    viewport: Vec2,
    config: &DragAndDropConfig,
) -> Vec2 {
    let usable = viewport - Vec2::splat(config.viewport_inset);

    let mut left = pointer_page.x - config.ghost_icon_offset;
    let mut top = pointer_page.y - ghost_size.y / 2.0;

    if usable.x > 0.0 && left + ghost_size.x > usable.x {
        left = usable.x - ghost_size.x;
    }
    if usable.y > 0.0 && top + ghost_size.y > usable.y {
        top = usable.y - ghost_size.y;
    }

    Vec2::new(left.max(0.0), top.max(0.0))
}

/// Owns the single ghost of the active drag.
#[derive(Debug)]
pub struct GhostRenderer {
    root_available: bool,
    ghost: Option<Ghost>,
}

impl GhostRenderer {
    /// Create a renderer.
    ///
    /// Without a root the renderer stays inert: drags still work, only the
    /// visual feedback is lost.
    pub fn new(root_available: bool) -> Self {
        if !root_available {
            tracing::warn!("No document root to attach the drag ghost to; drag feedback is disabled");
        }
        Self {
            root_available,
            ghost: None,
        }
    }

    pub fn is_inert(&self) -> bool {
        !self.root_available
    }

    /// Create the ghost, replacing any previous one.
    pub fn create(&mut self, label: impl Into<String>, size: Vec2, position: Vec2, icon: GhostIcon) {
        if !self.root_available {
            return;
        }
        let ghost = Ghost {
            label: label.into(),
            position,
            size,
            icon,
            shake: false,
        };
        tracing::trace!(label = %ghost.label, width = size.x, height = size.y, "ghost created");
        self.ghost = Some(ghost);
    }

    /// Move the ghost to follow `event`, keeping it inside the viewport.
    pub fn position(&mut self, event: &PointerEvent, viewport: Vec2, config: &DragAndDropConfig) {
        if let Some(ghost) = self.ghost.as_mut() {
            ghost.position = ghost_position(event.page, ghost.size, viewport, config);
            tracing::trace!(x = ghost.position.x, y = ghost.position.y, "ghost positioned");
        }
    }

    /// Swap the icon. Clears the shake unless `shake` is set.
    pub fn set_icon(&mut self, icon: GhostIcon, shake: bool) {
        if let Some(ghost) = self.ghost.as_mut() {
            ghost.icon = icon;
            ghost.shake = shake;
        }
    }

    /// Drop the ghost. Does nothing if there is none.
    pub fn destroy(&mut self) {
        if self.ghost.take().is_some() {
            tracing::trace!("ghost destroyed");
        }
    }

    pub fn ghost(&self) -> Option<&Ghost> {
        self.ghost.as_ref()
    }
}
