//! Test utilities for Gridwork.
//!
//! This crate provides stand-ins for the collaborators the drag-and-drop
//! service queries, plus a recorder for drop target callbacks.
//!
//! # Overview
//!
//! - [`CallRecorder`] - Records every callback a drop target receives
//! - `MockDocument` - Element rectangles and viewport size set by the test (requires `mock` feature)
//! - `MockColumns` - Column widths, visibility and moving flags (requires `mock` feature)
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "mock")]
//! # {
//! use gridwork_core::geometry::Rect;
//! use gridwork_dnd::{DragAndDropConfig, DragAndDropService, DropTarget, ElementId};
//! use gridwork_test_utils::{CallRecorder, MockColumns, MockDocument};
//!
//! let document = MockDocument::new(1000.0, 800.0)
//!     .with_rect(ElementId::new("header"), Rect::new(0.0, 0.0, 500.0, 25.0));
//! let mut dnd = DragAndDropService::new(DragAndDropConfig::default(), document, MockColumns::new());
//!
//! let recorder = CallRecorder::new();
//! dnd.register_target(recorder.attach("header", DropTarget::new(ElementId::new("header"))));
//! assert!(recorder.calls().is_empty());
//! # }
//! ```
//!
//! # Interior Mutability
//!
//! Callbacks are `'static` closures owned by the service, so the recorder
//! shares its log through an `Arc<Mutex<_>>` and tests read it back through
//! `&self` methods.

#[cfg(feature = "mock")]
pub mod mock_document;
pub mod recorder;

#[cfg(feature = "mock")]
pub use mock_document::*;
pub use recorder::*;
