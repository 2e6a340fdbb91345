//! The drag-and-drop coordinator.
//!
//! [`DragAndDropService`] owns the registries, the active [`DragSession`] and
//! the ghost. Pointer signals come in through [`handle_pointer`] or the
//! `notify_*` methods; drop targets hear about the drag through their
//! callbacks.
//!
//! # Event ordering
//!
//! At most one target is current at a time. When the pointer moves from one
//! target to another the old target gets exactly one leave, then the new one
//! gets exactly one enter, before any further `on_dragging` call. A drag that
//! starts inside its source's home target does not enter it; moving away and
//! back does.
//!
//! Callbacks receive a [`DraggingEvent`] and nothing else, so they cannot
//! re-enter the service while it is dispatching.
//!
//! [`handle_pointer`]: DragAndDropService::handle_pointer

use gridwork_core::math::Vec2;
#[cfg(feature = "profiling")]
use gridwork_core::profiling::profile_function;

use crate::config::DragAndDropConfig;
use crate::document::{ColumnModel, Document};
use crate::element::ElementId;
use crate::error::{DndError, DndResult};
use crate::event::{Direction, DraggingEvent, PointerEvent};
use crate::ghost::{self, Ghost, GhostIcon, GhostRenderer};
use crate::source::{DragSource, SourceRegistry};
use crate::target::{DropTarget, DropTargetId, TargetCallback, TargetRegistry};
use crate::tracker::{DragSignal, PointerInput, PointerTracker, ThresholdTracker};

/// State of the drag in progress.
///
/// Exists from `notify_start` to `notify_stop`; its presence is what makes
/// the service "dragging".
#[derive(Debug, Clone)]
pub struct DragSession {
    source: DragSource,
    last_event: PointerEvent,
    current_target: Option<DropTargetId>,
}

impl DragSession {
    pub fn source(&self) -> &DragSource {
        &self.source
    }

    pub fn last_event(&self) -> &PointerEvent {
        &self.last_event
    }

    pub fn current_target(&self) -> Option<DropTargetId> {
        self.current_target
    }
}

/// Coordinates column drags between sources, drop targets and the ghost.
///
/// # Example
/// ```
/// use gridwork_core::geometry::Rect;
/// use gridwork_core::math::Vec2;
/// use gridwork_dnd::{
///     ColumnId, ColumnModel, Document, DragAndDropConfig, DragAndDropService, DragSource,
///     DropTarget, ElementId, PointerEvent,
/// };
///
/// struct Page;
///
/// impl Document for Page {
///     fn bounding_client_rect(&self, _element: ElementId) -> Option<Rect> {
///         Some(Rect::new(0.0, 0.0, 400.0, 25.0))
///     }
///
///     fn viewport_size(&self) -> Vec2 {
///         Vec2::new(1024.0, 768.0)
///     }
/// }
///
/// struct Columns(Vec<ColumnId>);
///
/// impl ColumnModel for Columns {
///     fn displayed_columns(&self) -> &[ColumnId] {
///         &self.0
///     }
///
///     fn actual_width(&self, _column: &ColumnId) -> f32 {
///         100.0
///     }
///
///     fn set_moving(&mut self, _column: &ColumnId, _moving: bool) {}
/// }
///
/// let mut dnd = DragAndDropService::new(
///     DragAndDropConfig::default(),
///     Page,
///     Columns(vec![ColumnId::new("age")]),
/// );
/// let header = dnd.register_target(DropTarget::new(ElementId::new("header")));
///
/// let source = DragSource::new(ElementId::new("age-cell"), vec![ColumnId::new("age")], "Age");
/// dnd.notify_start(source, PointerEvent::at(10.0, 10.0));
/// dnd.notify_move(PointerEvent::at(40.0, 10.0));
/// assert_eq!(dnd.current_target(), Some(header));
/// dnd.notify_stop(PointerEvent::at(40.0, 10.0));
/// assert!(!dnd.is_dragging());
/// ```
pub struct DragAndDropService<D, C, T = ThresholdTracker>
where
    D: Document,
    C: ColumnModel,
    T: PointerTracker,
{
    config: DragAndDropConfig,
    document: D,
    columns: C,
    tracker: T,
    sources: SourceRegistry,
    targets: TargetRegistry,
    session: Option<DragSession>,
    ghost: GhostRenderer,
}

impl<D, C> DragAndDropService<D, C, ThresholdTracker>
where
    D: Document,
    C: ColumnModel,
{
    /// Create a service using a [`ThresholdTracker`] built from `config`.
    pub fn new(config: DragAndDropConfig, document: D, columns: C) -> Self {
        let tracker = ThresholdTracker::new(config.drag_threshold);
        Self::with_tracker(config, document, columns, tracker)
    }
}

impl<D, C, T> DragAndDropService<D, C, T>
where
    D: Document,
    C: ColumnModel,
    T: PointerTracker,
{
    /// Create a service with an explicit pointer tracker.
    pub fn with_tracker(config: DragAndDropConfig, document: D, columns: C, tracker: T) -> Self {
        let ghost = GhostRenderer::new(document.has_ghost_root());
        Self {
            config,
            document,
            columns,
            tracker,
            sources: SourceRegistry::new(),
            targets: TargetRegistry::new(),
            session: None,
            ghost,
        }
    }

    /// Make `source.element` draggable.
    ///
    /// Registering the same element again replaces the earlier source. Fails
    /// without registering anything if the source names a home target that
    /// does not exist.
    pub fn register_source(&mut self, source: DragSource) -> DndResult<()> {
        if let Some(home) = source.home_target {
            if !self.targets.contains(home) {
                return Err(DndError::UnknownDropTarget(home));
            }
        }
        tracing::debug!(element = %source.element, label = %source.label, "drag source registered");
        self.tracker.add_drag_source(source.element);
        if let Some(previous) = self.sources.insert(source) {
            tracing::debug!(label = %previous.label, "replaced drag source");
        }
        Ok(())
    }

    /// Append `target` to the hit-test order.
    pub fn register_target(&mut self, target: DropTarget) -> DropTargetId {
        let id = self.targets.push(target);
        tracing::debug!(target = id.0, "drop target registered");
        id
    }

    /// Feed raw pointer input through the tracker and act on its signals.
    pub fn handle_pointer(&mut self, input: PointerInput) {
        for signal in self.tracker.handle_input(input) {
            match signal {
                DragSignal::Start { element, event } => {
                    if self.is_dragging() {
                        tracing::warn!(element = %element, "Ignoring drag start while a drag is in progress");
                        continue;
                    }
                    if let Err(err) = self.start_drag_from(element, event) {
                        tracing::warn!("{}", err);
                    }
                }
                DragSignal::Dragging(event) => {
                    if self.is_dragging() {
                        self.notify_move(event);
                    }
                }
                DragSignal::Stop(event) => {
                    if self.is_dragging() {
                        self.notify_stop(event);
                    }
                }
            }
        }
    }

    /// Start a drag from the source registered for `element`.
    pub fn start_drag_from(&mut self, element: ElementId, event: PointerEvent) -> DndResult<()> {
        let source = self
            .sources
            .get(element)
            .cloned()
            .ok_or(DndError::UnknownSource(element))?;
        self.notify_start(source, event);
        Ok(())
    }

    /// Begin a session for `source`.
    ///
    /// The source's columns are flagged as moving and its home target, if
    /// any, becomes current without an enter event.
    pub fn notify_start(&mut self, source: DragSource, event: PointerEvent) {
        debug_assert!(
            self.session.is_none(),
            "drag started while another drag is in progress"
        );

        for item in &source.items {
            self.columns.set_moving(item, true);
        }

        let current_target = source.home_target;
        let icon = current_target
            .and_then(|id| self.targets.get(id))
            .and_then(|target| target.icon)
            .unwrap_or_default();
        let size = Vec2::new(
            ghost::ghost_width(&self.columns, &source.items),
            self.config.header_height,
        );
        self.ghost
            .create(source.label.clone(), size, self.config.ghost_initial_position, icon);

        tracing::debug!(
            label = %source.label,
            items = source.items.len(),
            home = ?current_target,
            "drag started"
        );

        self.session = Some(DragSession {
            source,
            last_event: event,
            current_target,
        });
    }

    /// Process one pointer move of the active drag.
    pub fn notify_move(&mut self, event: PointerEvent) {
        #[cfg(feature = "profiling")]
        profile_function!();

        let Some(session) = self.session.as_mut() else {
            debug_assert!(false, "notify_move called without an active drag");
            tracing::warn!("Ignoring pointer move outside of a drag");
            return;
        };

        let direction = Direction::between(&session.last_event, &event);
        session.last_event = event;

        self.ghost
            .position(&event, self.document.viewport_size(), &self.config);

        let resolved = self.targets.find_at(event.client, &self.document);

        if resolved != session.current_target {
            if let Some(previous) = session.current_target {
                if let Some(target) = self.targets.get_mut(previous) {
                    let rect = self.document.bounding_client_rect(target.container);
                    let leave = DraggingEvent::new(rect, &event, direction, &session.source);
                    target.fire(TargetCallback::Leave, &leave);
                }
                self.ghost.set_icon(GhostIcon::Hidden, false);
                tracing::trace!(target = previous.0, "drag left target");
            }

            if let Some(next) = resolved {
                if let Some(target) = self.targets.get_mut(next) {
                    let rect = self.document.bounding_client_rect(target.container);
                    let enter = DraggingEvent::new(rect, &event, direction, &session.source);
                    target.fire(TargetCallback::Enter, &enter);
                    self.ghost.set_icon(target.icon.unwrap_or_default(), false);
                }
                tracing::trace!(target = next.0, "drag entered target");
            }

            session.current_target = resolved;
        } else if let Some(current) = resolved {
            if let Some(target) = self.targets.get_mut(current) {
                let rect = self.document.bounding_client_rect(target.container);
                let dragging = DraggingEvent::new(rect, &event, direction, &session.source);
                target.fire(TargetCallback::Dragging, &dragging);
            }
        }
    }

    /// Finish the active drag.
    ///
    /// The current target, if any, gets `on_drag_stop` with no direction.
    pub fn notify_stop(&mut self, event: PointerEvent) {
        let Some(session) = self.session.take() else {
            debug_assert!(false, "notify_stop called without an active drag");
            tracing::warn!("Ignoring drag stop outside of a drag");
            return;
        };

        for item in &session.source.items {
            self.columns.set_moving(item, false);
        }

        if let Some(current) = session.current_target {
            if let Some(target) = self.targets.get_mut(current) {
                let rect = self.document.bounding_client_rect(target.container);
                let stop = DraggingEvent::new(rect, &event, None, &session.source);
                target.fire(TargetCallback::Stop, &stop);
            }
        }

        self.ghost.destroy();
        tracing::debug!(
            label = %session.source.label,
            target = ?session.current_target,
            "drag stopped"
        );
    }

    /// Re-run the last move without new pointer input.
    ///
    /// Use after scrolling or a layout change mid-drag so target membership is
    /// re-evaluated. Does nothing when no drag is active.
    pub fn nudge(&mut self) {
        if let Some(event) = self.session.as_ref().map(|session| session.last_event) {
            self.notify_move(event);
        }
    }

    /// Replace the ghost icon and set or clear the attention shake.
    pub fn set_ghost_icon(&mut self, icon: GhostIcon, shake: bool) {
        self.ghost.set_icon(icon, shake);
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn current_target(&self) -> Option<DropTargetId> {
        self.session.as_ref().and_then(|session| session.current_target)
    }

    pub fn last_event(&self) -> Option<&PointerEvent> {
        self.session.as_ref().map(|session| &session.last_event)
    }

    pub fn ghost(&self) -> Option<&Ghost> {
        self.ghost.ghost()
    }

    pub fn target(&self, id: DropTargetId) -> Option<&DropTarget> {
        self.targets.get(id)
    }

    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    pub fn source(&self, element: ElementId) -> Option<&DragSource> {
        self.sources.get(element)
    }

    pub fn config(&self) -> &DragAndDropConfig {
        &self.config
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    /// Mutable access for hosts that relayout mid-drag. Follow with [`nudge`](Self::nudge).
    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    pub fn columns(&self) -> &C {
        &self.columns
    }

    pub fn columns_mut(&mut self) -> &mut C {
        &mut self.columns
    }

    pub fn tracker(&self) -> &T {
        &self.tracker
    }
}
