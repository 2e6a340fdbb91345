//! Drag sources: draggable elements and the columns they carry.

use gridwork_core::alloc::HashMap;

use crate::element::{ColumnId, ElementId};
use crate::target::DropTargetId;

/// A draggable element and its payload.
///
/// # Example
/// ```
/// use gridwork_dnd::{ColumnId, DragSource, ElementId};
///
/// let source = DragSource::new(
///     ElementId::new("header-cell-athlete"),
///     vec![ColumnId::new("athlete")],
///     "Athlete",
/// );
/// assert!(source.home_target.is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DragSource {
    /// Element which starts the drag when pressed and moved.
    pub element: ElementId,
    /// Columns carried by the drag.
    pub items: Vec<ColumnId>,
    /// Text shown in the ghost.
    pub label: String,
    /// Target the source lives in. A drag starts inside it without an enter event.
    pub home_target: Option<DropTargetId>,
}

impl DragSource {
    pub fn new(element: ElementId, items: Vec<ColumnId>, label: impl Into<String>) -> Self {
        Self {
            element,
            items,
            label: label.into(),
            home_target: None,
        }
    }

    /// Set the home target.
    pub fn with_home_target(mut self, target: DropTargetId) -> Self {
        self.home_target = Some(target);
        self
    }
}

/// Registered drag sources keyed by their element.
#[derive(Debug, Default)]
pub struct SourceRegistry {
    sources: HashMap<ElementId, DragSource>,
}

impl SourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `source`, returning the one it replaced for the same element.
    pub fn insert(&mut self, source: DragSource) -> Option<DragSource> {
        self.sources.insert(source.element, source)
    }

    pub fn get(&self, element: ElementId) -> Option<&DragSource> {
        self.sources.get(&element)
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}
