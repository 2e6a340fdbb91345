//! Drop targets and their ordered registry.

use gridwork_core::math::Vec2;

use crate::document::Document;
use crate::element::ElementId;
use crate::event::DraggingEvent;
use crate::ghost::GhostIcon;
use crate::hit_test;

/// Callback attached to one of a drop target's lifecycle slots.
pub type DragCallback = Box<dyn FnMut(&DraggingEvent<'_>)>;

/// Handle of a registered drop target.
///
/// Handles are handed out in registration order, which is also hit-test order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DropTargetId(pub usize);

/// Lifecycle slot of a drop target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetCallback {
    Enter,
    Leave,
    Dragging,
    Stop,
}

/// A drop zone: one primary container, any number of secondary containers,
/// an optional ghost icon and up to four optional callbacks.
///
/// # Example
/// ```
/// use gridwork_dnd::{DropTarget, ElementId, GhostIcon};
///
/// let target = DropTarget::new(ElementId::new("header-row"))
///     .secondary_container(ElementId::new("body-viewport"))
///     .icon(GhostIcon::Move)
///     .on_dragging(|event| println!("over column gap at x={}", event.x));
/// assert!(target.has_callback(gridwork_dnd::TargetCallback::Dragging));
/// ```
pub struct DropTarget {
    /// Container that receives the drop. Callback coordinates are relative to it.
    pub container: ElementId,
    /// Additional containers that also count as this target.
    pub secondary_containers: Vec<ElementId>,
    /// Icon shown in the ghost while this target is active.
    pub icon: Option<GhostIcon>,
    on_drag_enter: Option<DragCallback>,
    on_drag_leave: Option<DragCallback>,
    on_dragging: Option<DragCallback>,
    on_drag_stop: Option<DragCallback>,
}

impl std::fmt::Debug for DropTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DropTarget")
            .field("container", &self.container)
            .field("secondary_containers", &self.secondary_containers)
            .field("icon", &self.icon)
            .field("on_drag_enter", &self.on_drag_enter.as_ref().map(|_| ".."))
            .field("on_drag_leave", &self.on_drag_leave.as_ref().map(|_| ".."))
            .field("on_dragging", &self.on_dragging.as_ref().map(|_| ".."))
            .field("on_drag_stop", &self.on_drag_stop.as_ref().map(|_| ".."))
            .finish()
    }
}

impl DropTarget {
    pub fn new(container: ElementId) -> Self {
        Self {
            container,
            secondary_containers: Vec::new(),
            icon: None,
            on_drag_enter: None,
            on_drag_leave: None,
            on_dragging: None,
            on_drag_stop: None,
        }
    }

    /// Add a secondary container.
    pub fn secondary_container(mut self, element: ElementId) -> Self {
        self.secondary_containers.push(element);
        self
    }

    /// Set the ghost icon.
    pub fn icon(mut self, icon: GhostIcon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn on_drag_enter(mut self, callback: impl FnMut(&DraggingEvent<'_>) + 'static) -> Self {
        self.on_drag_enter = Some(Box::new(callback));
        self
    }

    pub fn on_drag_leave(mut self, callback: impl FnMut(&DraggingEvent<'_>) + 'static) -> Self {
        self.on_drag_leave = Some(Box::new(callback));
        self
    }

    pub fn on_dragging(mut self, callback: impl FnMut(&DraggingEvent<'_>) + 'static) -> Self {
        self.on_dragging = Some(Box::new(callback));
        self
    }

    pub fn on_drag_stop(mut self, callback: impl FnMut(&DraggingEvent<'_>) + 'static) -> Self {
        self.on_drag_stop = Some(Box::new(callback));
        self
    }

    /// Primary container followed by the secondary ones.
    pub fn containers(&self) -> impl Iterator<Item = ElementId> + '_ {
        std::iter::once(self.container).chain(self.secondary_containers.iter().copied())
    }

    pub fn has_callback(&self, kind: TargetCallback) -> bool {
        self.slot(kind).is_some()
    }

    /// Run the callback in `kind`'s slot. An empty slot is a no-op.
    pub fn fire(&mut self, kind: TargetCallback, event: &DraggingEvent<'_>) {
        let slot = match kind {
            TargetCallback::Enter => &mut self.on_drag_enter,
            TargetCallback::Leave => &mut self.on_drag_leave,
            TargetCallback::Dragging => &mut self.on_dragging,
            TargetCallback::Stop => &mut self.on_drag_stop,
        };
        if let Some(callback) = slot.as_mut() {
            callback(event);
        }
    }

    fn slot(&self, kind: TargetCallback) -> Option<&DragCallback> {
        match kind {
            TargetCallback::Enter => self.on_drag_enter.as_ref(),
            TargetCallback::Leave => self.on_drag_leave.as_ref(),
            TargetCallback::Dragging => self.on_dragging.as_ref(),
            TargetCallback::Stop => self.on_drag_stop.as_ref(),
        }
    }
}

/// Drop targets in registration order.
///
/// Registration is append-only and not de-duplicated. When targets overlap
/// the earliest registered one wins, so nested zones must be registered
/// before the zones that enclose them.
#[derive(Debug, Default)]
pub struct TargetRegistry {
    targets: Vec<DropTarget>,
}

impl TargetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, target: DropTarget) -> DropTargetId {
        self.targets.push(target);
        DropTargetId(self.targets.len() - 1)
    }

    pub fn get(&self, id: DropTargetId) -> Option<&DropTarget> {
        self.targets.get(id.0)
    }

    pub fn get_mut(&mut self, id: DropTargetId) -> Option<&mut DropTarget> {
        self.targets.get_mut(id.0)
    }

    pub fn contains(&self, id: DropTargetId) -> bool {
        id.0 < self.targets.len()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// First target, in registration order, with a container under `point`.
    pub fn find_at<D>(&self, point: Vec2, document: &D) -> Option<DropTargetId>
    where
        D: Document + ?Sized,
    {
        hit_test::first_match(
            point,
            self.targets.iter().map(|target| {
                target
                    .containers()
                    .filter_map(|element| document.bounding_client_rect(element))
            }),
        )
        .map(DropTargetId)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gridwork_core::alloc::HashMap;
    use gridwork_core::geometry::Rect;

    use super::*;
    use crate::event::PointerEvent;
    use crate::source::DragSource;

    #[derive(Default)]
    struct Layout {
        rects: HashMap<ElementId, Rect>,
    }

    impl Document for Layout {
        fn bounding_client_rect(&self, element: ElementId) -> Option<Rect> {
            self.rects.get(&element).copied()
        }

        fn viewport_size(&self) -> Vec2 {
            Vec2::new(1000.0, 800.0)
        }
    }

    #[test]
    fn test_ids_follow_registration_order() {
        let mut registry = TargetRegistry::new();
        let a = registry.push(DropTarget::new(ElementId::new("a")));
        let b = registry.push(DropTarget::new(ElementId::new("a")));

        assert_eq!(a, DropTargetId(0));
        assert_eq!(b, DropTargetId(1));
        assert_eq!(registry.len(), 2);
        assert!(registry.contains(b));
        assert!(!registry.contains(DropTargetId(2)));
    }

    #[test]
    fn test_find_at_overlap_prefers_first() {
        let mut layout = Layout::default();
        layout.rects.insert(ElementId::new("inner"), Rect::new(0.0, 0.0, 100.0, 100.0));
        layout.rects.insert(ElementId::new("outer"), Rect::new(0.0, 0.0, 100.0, 100.0));

        let mut registry = TargetRegistry::new();
        let inner = registry.push(DropTarget::new(ElementId::new("inner")));
        registry.push(DropTarget::new(ElementId::new("outer")));

        for point in [Vec2::new(0.0, 0.0), Vec2::new(50.0, 50.0), Vec2::new(100.0, 100.0)] {
            assert_eq!(registry.find_at(point, &layout), Some(inner));
        }
        assert_eq!(registry.find_at(Vec2::new(101.0, 50.0), &layout), None);
    }

    #[test]
    fn test_find_at_uses_secondary_containers() {
        let mut layout = Layout::default();
        layout.rects.insert(ElementId::new("header"), Rect::new(0.0, 0.0, 500.0, 25.0));
        layout.rects.insert(ElementId::new("body"), Rect::new(0.0, 25.0, 500.0, 400.0));

        let mut registry = TargetRegistry::new();
        let id = registry.push(
            DropTarget::new(ElementId::new("header"))
                .secondary_container(ElementId::new("body"))
                .secondary_container(ElementId::new("unmounted")),
        );

        assert_eq!(registry.find_at(Vec2::new(10.0, 200.0), &layout), Some(id));
    }

    #[test]
    fn test_find_at_skips_collapsed_container() {
        let mut layout = Layout::default();
        layout.rects.insert(ElementId::new("hidden"), Rect::new(0.0, 0.0, 0.0, 100.0));

        let mut registry = TargetRegistry::new();
        registry.push(DropTarget::new(ElementId::new("hidden")));

        assert_eq!(registry.find_at(Vec2::new(0.0, 50.0), &layout), None);
    }

    #[test]
    fn test_fire_runs_only_present_slots() {
        let hits = Rc::new(RefCell::new(Vec::new()));
        let log = hits.clone();
        let mut target = DropTarget::new(ElementId::new("zone"))
            .on_drag_enter(move |event| log.borrow_mut().push(event.x));

        let source = DragSource::new(ElementId::new("cell"), Vec::new(), "Cell");
        let pointer = PointerEvent::at(40.0, 10.0);
        let event = DraggingEvent::new(Some(Rect::new(10.0, 0.0, 100.0, 20.0)), &pointer, None, &source);

        assert!(target.has_callback(TargetCallback::Enter));
        assert!(!target.has_callback(TargetCallback::Leave));

        target.fire(TargetCallback::Enter, &event);
        target.fire(TargetCallback::Leave, &event);
        target.fire(TargetCallback::Dragging, &event);
        target.fire(TargetCallback::Stop, &event);

        assert_eq!(*hits.borrow(), vec![30.0]);
    }

    #[test]
    fn test_debug_hides_callbacks() {
        let target = DropTarget::new(ElementId::from_raw(1)).on_drag_stop(|_| {});
        let debug = format!("{:?}", target);
        assert!(debug.contains("on_drag_stop: Some(\"..\")"));
        assert!(debug.contains("on_drag_enter: None"));
    }
}
