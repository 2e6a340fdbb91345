//! Error types for drag-and-drop registration and lookups.

use crate::element::ElementId;
use crate::target::DropTargetId;

/// Errors reported by the drag-and-drop service.
///
/// Ordinary drag traffic never fails; these only surface from registration
/// and from explicit lookups by id or name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DndError {
    /// The name does not belong to the fixed ghost icon set.
    UnknownIcon(String),
    /// A drag source names a home target that was never registered.
    UnknownDropTarget(DropTargetId),
    /// No drag source is registered for the element.
    UnknownSource(ElementId),
}

impl std::fmt::Display for DndError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DndError::UnknownIcon(name) => write!(f, "Unknown ghost icon '{}'", name),
            DndError::UnknownDropTarget(id) => write!(f, "Drop target {:?} is not registered", id),
            DndError::UnknownSource(element) => {
                write!(f, "No drag source registered for {}", element)
            }
        }
    }
}

impl std::error::Error for DndError {}

/// Result type for drag-and-drop operations.
pub type DndResult<T> = Result<T, DndError>;
