//! Pointer tracking: turning raw presses and moves into drag signals.
//!
//! The service does not look at raw input itself. A [`PointerTracker`] knows
//! which elements are draggable and decides when a press has become a drag.
//! [`ThresholdTracker`] is the default: a press on a registered element
//! becomes a drag once the pointer has travelled the configured threshold.

use gridwork_core::alloc::HashSet;
use gridwork_core::math::Vec2;

use crate::config::DEFAULT_DRAG_THRESHOLD;
use crate::element::ElementId;
use crate::event::PointerEvent;

/// Raw pointer input from the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    /// Primary button pressed, over `element` if the host resolved one.
    Down {
        element: Option<ElementId>,
        event: PointerEvent,
    },
    Move(PointerEvent),
    /// Primary button released.
    Up(PointerEvent),
}

/// Classified drag lifecycle signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragSignal {
    /// A drag began on `element`. `event` is the original press.
    Start {
        element: ElementId,
        event: PointerEvent,
    },
    Dragging(PointerEvent),
    Stop(PointerEvent),
}

/// Classifies raw pointer input into drag signals.
///
/// Implementations must deliver at most one `Start` before the matching
/// `Stop`, and never `Dragging` or `Stop` outside a started drag.
pub trait PointerTracker {
    /// Make presses on `element` eligible to start a drag.
    fn add_drag_source(&mut self, element: ElementId);

    /// Feed one input and collect the signals it produces, in order.
    fn handle_input(&mut self, input: PointerInput) -> Vec<DragSignal>;
}

#[derive(Debug, Clone, Copy)]
struct Press {
    element: ElementId,
    start: PointerEvent,
    is_active: bool,
}

/// Default [`PointerTracker`] with a distance threshold.
#[derive(Debug)]
pub struct ThresholdTracker {
    threshold: f32,
    sources: HashSet<ElementId>,
    press: Option<Press>,
}

impl Default for ThresholdTracker {
    fn default() -> Self {
        Self::new(DEFAULT_DRAG_THRESHOLD)
    }
}

impl ThresholdTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            sources: HashSet::new(),
            press: None,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Check if a press has turned into a drag.
    pub fn is_dragging(&self) -> bool {
        self.press.is_some_and(|p| p.is_active)
    }

    /// Check if there's a press that has not yet crossed the threshold.
    pub fn has_pending_drag(&self) -> bool {
        self.press.is_some_and(|p| !p.is_active)
    }

    /// Check if `current` is far enough from `start` to count as a drag.
    pub fn exceeds_threshold(&self, start: Vec2, current: Vec2) -> bool {
        (current - start).length() >= self.threshold
    }
}

impl PointerTracker for ThresholdTracker {
    fn add_drag_source(&mut self, element: ElementId) {
        self.sources.insert(element);
    }

    fn handle_input(&mut self, input: PointerInput) -> Vec<DragSignal> {
        match input {
            PointerInput::Down { element, event } => {
                // A press while dragging means the release was lost.
                let signals = match self.press {
                    Some(press) if press.is_active => vec![DragSignal::Stop(event)],
                    _ => Vec::new(),
                };
                self.press = element
                    .filter(|element| self.sources.contains(element))
                    .map(|element| Press {
                        element,
                        start: event,
                        is_active: false,
                    });
                signals
            }
            PointerInput::Move(event) => {
                let Some(press) = self.press else {
                    return Vec::new();
                };
                if press.is_active {
                    return vec![DragSignal::Dragging(event)];
                }
                if !self.exceeds_threshold(press.start.client, event.client) {
                    return Vec::new();
                }
                self.press = Some(Press {
                    is_active: true,
                    ..press
                });
                vec![
                    DragSignal::Start {
                        element: press.element,
                        event: press.start,
                    },
                    DragSignal::Dragging(event),
                ]
            }
            PointerInput::Up(event) => match self.press.take() {
                Some(press) if press.is_active => vec![DragSignal::Stop(event)],
                _ => Vec::new(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn down(element: &str, x: f32, y: f32) -> PointerInput {
        PointerInput::Down {
            element: Some(ElementId::new(element)),
            event: PointerEvent::at(x, y),
        }
    }

    #[test]
    fn test_small_movement_is_a_click() {
        let mut tracker = ThresholdTracker::new(5.0);
        tracker.add_drag_source(ElementId::new("cell"));

        assert!(tracker.handle_input(down("cell", 100.0, 100.0)).is_empty());
        assert!(tracker.has_pending_drag());
        assert!(tracker.handle_input(PointerInput::Move(PointerEvent::at(103.0, 100.0))).is_empty());
        assert!(!tracker.is_dragging());
        assert!(tracker.handle_input(PointerInput::Up(PointerEvent::at(103.0, 100.0))).is_empty());
        assert!(!tracker.has_pending_drag());
    }

    #[test]
    fn test_crossing_threshold_starts_with_press_event() {
        let mut tracker = ThresholdTracker::new(5.0);
        let cell = ElementId::new("cell");
        tracker.add_drag_source(cell);

        tracker.handle_input(down("cell", 100.0, 100.0));
        let signals = tracker.handle_input(PointerInput::Move(PointerEvent::at(110.0, 100.0)));

        assert_eq!(
            signals,
            vec![
                DragSignal::Start {
                    element: cell,
                    event: PointerEvent::at(100.0, 100.0),
                },
                DragSignal::Dragging(PointerEvent::at(110.0, 100.0)),
            ]
        );
        assert!(tracker.is_dragging());

        let signals = tracker.handle_input(PointerInput::Move(PointerEvent::at(111.0, 100.0)));
        assert_eq!(signals, vec![DragSignal::Dragging(PointerEvent::at(111.0, 100.0))]);

        let signals = tracker.handle_input(PointerInput::Up(PointerEvent::at(111.0, 100.0)));
        assert_eq!(signals, vec![DragSignal::Stop(PointerEvent::at(111.0, 100.0))]);
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn test_press_outside_sources_is_ignored() {
        let mut tracker = ThresholdTracker::default();
        tracker.add_drag_source(ElementId::new("cell"));

        tracker.handle_input(down("elsewhere", 0.0, 0.0));
        assert!(!tracker.has_pending_drag());
        assert!(tracker.handle_input(PointerInput::Move(PointerEvent::at(50.0, 50.0))).is_empty());

        tracker.handle_input(PointerInput::Down {
            element: None,
            event: PointerEvent::at(0.0, 0.0),
        });
        assert!(!tracker.has_pending_drag());
    }

    #[test]
    fn test_press_during_drag_stops_it_first() {
        let mut tracker = ThresholdTracker::new(5.0);
        let cell = ElementId::new("cell");
        tracker.add_drag_source(cell);

        tracker.handle_input(down("cell", 0.0, 10.0));
        tracker.handle_input(PointerInput::Move(PointerEvent::at(50.0, 10.0)));
        assert!(tracker.is_dragging());

        // Release happened outside the window, so the next input is a press.
        let signals = tracker.handle_input(PointerInput::Down {
            element: None,
            event: PointerEvent::at(60.0, 10.0),
        });
        assert_eq!(signals, vec![DragSignal::Stop(PointerEvent::at(60.0, 10.0))]);
        assert!(!tracker.is_dragging());
        assert!(tracker.handle_input(PointerInput::Up(PointerEvent::at(60.0, 10.0))).is_empty());
    }

    #[test]
    fn test_press_on_source_during_drag_restarts_cleanly() {
        let mut tracker = ThresholdTracker::new(5.0);
        let cell = ElementId::new("cell");
        tracker.add_drag_source(cell);

        tracker.handle_input(down("cell", 0.0, 10.0));
        tracker.handle_input(PointerInput::Move(PointerEvent::at(50.0, 10.0)));

        let signals = tracker.handle_input(down("cell", 50.0, 10.0));
        assert_eq!(signals, vec![DragSignal::Stop(PointerEvent::at(50.0, 10.0))]);
        assert!(tracker.has_pending_drag());

        let signals = tracker.handle_input(PointerInput::Move(PointerEvent::at(80.0, 10.0)));
        assert_eq!(
            signals,
            vec![
                DragSignal::Start {
                    element: cell,
                    event: PointerEvent::at(50.0, 10.0),
                },
                DragSignal::Dragging(PointerEvent::at(80.0, 10.0)),
            ]
        );
    }

    #[test]
    fn test_moves_without_press_produce_nothing() {
        let mut tracker = ThresholdTracker::default();
        assert!(tracker.handle_input(PointerInput::Move(PointerEvent::at(5.0, 5.0))).is_empty());
        assert!(tracker.handle_input(PointerInput::Up(PointerEvent::at(5.0, 5.0))).is_empty());
    }
}
