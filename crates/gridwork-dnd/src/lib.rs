//! Column drag-and-drop for the Gridwork data grid.
//!
//! This crate coordinates dragging a column header around the grid:
//! - **Sources**: draggable elements and the columns they carry
//! - **Targets**: ordered drop zones with enter/leave/dragging/stop callbacks
//! - **Ghost**: the floating indicator that follows the pointer
//! - **Service**: the state machine tying them together
//!
//! The host supplies a [`Document`] for element geometry and viewport size, a
//! [`ColumnModel`] for column widths and visibility, and pointer input, either
//! raw through [`DragAndDropService::handle_pointer`] or already classified
//! through the `notify_*` methods.
//!
//! # Quick Start
//!
//! ```ignore
//! use gridwork_dnd::{DragAndDropConfig, DragAndDropService, DragSource, DropTarget, GhostIcon};
//!
//! let mut dnd = DragAndDropService::new(DragAndDropConfig::default(), document, columns);
//!
//! let header = dnd.register_target(
//!     DropTarget::new(header_row)
//!         .secondary_container(body_viewport)
//!         .icon(GhostIcon::Move)
//!         .on_dragging(|event| move_column_towards(event.x, event.direction)),
//! );
//!
//! dnd.register_source(
//!     DragSource::new(athlete_cell, vec![athlete], "Athlete").with_home_target(header),
//! )?;
//! ```

pub mod config;
pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod ghost;
pub mod hit_test;
pub mod service;
pub mod source;
pub mod target;
pub mod tracker;

pub use config::DragAndDropConfig;
pub use document::{ColumnModel, Document};
pub use element::{ColumnId, ElementId};
pub use error::{DndError, DndResult};
pub use event::{Direction, DraggingEvent, PointerEvent};
pub use ghost::{Ghost, GhostIcon, GhostRenderer};
pub use service::{DragAndDropService, DragSession};
pub use source::{DragSource, SourceRegistry};
pub use target::{DragCallback, DropTarget, DropTargetId, TargetCallback, TargetRegistry};
pub use tracker::{DragSignal, PointerInput, PointerTracker, ThresholdTracker};
