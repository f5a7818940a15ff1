// src/ui/core.rs
//! Core UI traits and the event model for the tinypix view tree

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::painter::Painter;

/// Kind of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Button pressed
    Press,
    /// Pointer moved with no button held
    Move,
    /// Pointer moved while the button is held
    Drag,
    /// Button released
    Release,
    /// Broadcast after every release; bounds-filtered like ordinary kinds.
    GlobalRelease,
    /// Broadcast after every move for hover tracking. Containers forward it
    /// without checking their own bounds.
    GlobalMove,
}

/// A pointer event at a position in the receiver's parent space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub position: Point,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, position: Point) -> Self {
        Self { kind, position }
    }
}

/// Scroll-wheel pan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanEvent {
    pub delta_x: f32,
    pub delta_y: f32,
    pub position: Point,
}

/// Pinch or modifier-wheel zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomEvent {
    pub zoom_delta: f32,
    pub position: Point,
}

/// Input delivered through the view tree.
///
/// Events are immutable; crossing into a child's coordinate space produces
/// a translated copy with [`Event::to_local`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    Pointer(PointerEvent),
    Pan(PanEvent),
    Zoom(ZoomEvent),
}

impl Event {
    pub fn pointer(kind: PointerKind, position: Point) -> Self {
        Event::Pointer(PointerEvent::new(kind, position))
    }

    pub fn position(&self) -> Point {
        match self {
            Event::Pointer(ev) => ev.position,
            Event::Pan(ev) => ev.position,
            Event::Zoom(ev) => ev.position,
        }
    }

    /// Copy of this event expressed relative to `origin`.
    pub fn to_local(&self, origin: Point) -> Self {
        let mut local = *self;
        match &mut local {
            Event::Pointer(ev) => ev.position -= origin,
            Event::Pan(ev) => ev.position -= origin,
            Event::Zoom(ev) => ev.position -= origin,
        }
        local
    }

    pub fn pointer_kind(&self) -> Option<PointerKind> {
        match self {
            Event::Pointer(ev) => Some(ev.kind),
            _ => None,
        }
    }

    /// Whether receivers must ignore this event when it falls outside
    /// their bounds. Only ordinary pointer events are bounds-filtered.
    pub fn is_bounds_filtered(&self) -> bool {
        matches!(self.pointer_kind(), Some(kind) if kind != PointerKind::GlobalMove)
    }

    /// Whether every receiver must see this event even after one consumed it.
    ///
    /// Hover tracking needs each button to learn where the pointer went,
    /// including the ones it just left.
    pub fn is_broadcast(&self) -> bool {
        self.pointer_kind() == Some(PointerKind::GlobalMove)
    }
}

/// Result from handling an event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventResult {
    /// Event was not handled, pass to next element
    NotHandled,
    /// Event was handled by this element
    Handled,
    /// Event was handled and triggered an action
    Action(Action),
}

impl EventResult {
    /// Whether dispatch stops here.
    pub fn is_consumed(&self) -> bool {
        !matches!(self, EventResult::NotHandled)
    }

    /// Merge results of delivering one broadcast event to several receivers;
    /// the first consuming result wins.
    pub fn or(self, other: EventResult) -> EventResult {
        if self.is_consumed() {
            self
        } else {
            other
        }
    }

    pub fn action(&self) -> Option<Action> {
        match self {
            EventResult::Action(action) => Some(*action),
            _ => None,
        }
    }
}

/// Actions that UI elements can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// A button built with this id was clicked.
    Clicked(u16),
}

/// Trait for any UI element that can be drawn
pub trait Drawable {
    /// Paint the element at its own position in the painter's current space.
    fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        painter: &mut Painter<'_, D>,
    ) -> Result<(), D::Error>;

    /// Position and size in the parent's coordinate space
    fn bounds(&self) -> Rectangle;
}

/// Trait for UI elements that respond to events
pub trait Touchable {
    /// Check if a point is within this element's bounds.
    ///
    /// Right and bottom edges are excluded.
    fn contains_point(&self, point: Point) -> bool;

    /// Handle an event given in the parent's coordinate space.
    fn handle_event(&mut self, event: &Event) -> EventResult;
}

/// A node of the view tree.
pub trait Widget: Drawable + Touchable {
    /// Recompute own size from children; children are laid out first.
    fn layout(&mut self) {}

    /// Move the element within its parent's space.
    fn set_position(&mut self, position: Point);
}
