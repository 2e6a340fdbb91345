//! Pointer samples and the events delivered to drop targets.

use std::fmt;

use gridwork_core::geometry::Rect;
use gridwork_core::math::Vec2;

use crate::source::DragSource;

/// A pointer sample delivered by the pointer-tracking layer.
///
/// `client` is relative to the viewport and is used for hit-testing;
/// `page` is relative to the scrolled document and is used to place the ghost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub client: Vec2,
    pub page: Vec2,
}

impl PointerEvent {
    pub fn new(client: Vec2, page: Vec2) -> Self {
        Self { client, page }
    }

    /// A sample on an unscrolled document, where client and page coincide.
    pub fn at(x: f32, y: f32) -> Self {
        let pos = Vec2::new(x, y);
        Self {
            client: pos,
            page: pos,
        }
    }

    pub fn client_x(&self) -> f32 {
        self.client.x
    }

    pub fn client_y(&self) -> f32 {
        self.client.y
    }

    pub fn page_x(&self) -> f32 {
        self.page.x
    }

    pub fn page_y(&self) -> f32 {
        self.page.y
    }
}

/// Horizontal movement between two consecutive pointer samples.
///
/// No movement is represented as `None` rather than a third variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Compare the client x of two samples.
    pub fn between(previous: &PointerEvent, current: &PointerEvent) -> Option<Direction> {
        if previous.client.x > current.client.x {
            Some(Direction::Left)
        } else if previous.client.x < current.client.x {
            Some(Direction::Right)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event handed to a drop target's lifecycle callbacks.
///
/// Built fresh for every invocation. The borrowed fields only live for the
/// duration of the callback.
#[derive(Debug, Clone, Copy)]
pub struct DraggingEvent<'a> {
    /// The raw pointer sample that produced this event.
    pub event: &'a PointerEvent,
    /// Pointer x relative to the left edge of the target's primary container.
    pub x: f32,
    /// Pointer y relative to the top edge of the target's primary container.
    pub y: f32,
    /// Movement since the previous sample. Always `None` on drag stop.
    pub direction: Option<Direction>,
    /// The source the drag was started from.
    pub drag_source: &'a DragSource,
}

impl<'a> DraggingEvent<'a> {
    /// Localise `event` to `container`.
    ///
    /// A container with no measurable rectangle is treated as sitting at the
    /// viewport origin.
    pub fn new(
        container: Option<Rect>,
        event: &'a PointerEvent,
        direction: Option<Direction>,
        drag_source: &'a DragSource,
    ) -> Self {
        let origin = container.map(|rect| rect.origin()).unwrap_or(Vec2::ZERO);
        let local = event.client - origin;
        Self {
            event,
            x: local.x,
            y: local.y,
            direction,
            drag_source,
        }
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}
