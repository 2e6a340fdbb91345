//! Recording drop target callbacks for verification in tests.

use std::sync::Arc;

use gridwork_core::math::Vec2;
use gridwork_dnd::{Direction, DraggingEvent, DropTarget, TargetCallback};
use parking_lot::Mutex;

/// One callback invocation seen by a recorded target.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetCall {
    /// Name given to [`CallRecorder::attach`].
    pub target: &'static str,
    pub kind: TargetCallback,
    pub direction: Option<Direction>,
    /// Pointer position relative to the target's container.
    pub position: Vec2,
    /// Label of the drag source.
    pub source_label: String,
}

/// Shared log of callbacks across any number of targets.
///
/// Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct CallRecorder {
    calls: Arc<Mutex<Vec<TargetCall>>>,
}

impl CallRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill all four callback slots of `target` with recorders tagged `name`.
    pub fn attach(&self, name: &'static str, target: DropTarget) -> DropTarget {
        target
            .on_drag_enter(self.record(name, TargetCallback::Enter))
            .on_drag_leave(self.record(name, TargetCallback::Leave))
            .on_dragging(self.record(name, TargetCallback::Dragging))
            .on_drag_stop(self.record(name, TargetCallback::Stop))
    }

    /// A callback that records into this log. Useful for filling a single slot.
    pub fn record(
        &self,
        name: &'static str,
        kind: TargetCallback,
    ) -> impl FnMut(&DraggingEvent<'_>) + 'static {
        let calls = Arc::clone(&self.calls);
        move |event: &DraggingEvent<'_>| {
            calls.lock().push(TargetCall {
                target: name,
                kind,
                direction: event.direction,
                position: event.position(),
                source_label: event.drag_source.label.clone(),
            });
        }
    }

    /// Get a copy of all recorded calls.
    pub fn calls(&self) -> Vec<TargetCall> {
        self.calls.lock().clone()
    }

    /// Recorded calls as `(target, kind)` pairs, for ordering assertions.
    pub fn sequence(&self) -> Vec<(&'static str, TargetCallback)> {
        self.calls
            .lock()
            .iter()
            .map(|call| (call.target, call.kind))
            .collect()
    }

    /// Count calls of `kind` received by `target`.
    pub fn count(&self, target: &str, kind: TargetCallback) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| call.target == target && call.kind == kind)
            .count()
    }

    pub fn last(&self) -> Option<TargetCall> {
        self.calls.lock().last().cloned()
    }

    pub fn clear(&self) {
        self.calls.lock().clear();
    }
}
