// src/ui/components/button.rs
//! Press/release button state machine and the flat-color button

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::debug;

use crate::painter::Painter;
use crate::ui::core::{
    Action, Drawable, Event, EventResult, PointerKind, Touchable, Widget,
};

/// Button state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Idle,
    /// Pressed inside bounds; a release inside bounds clicks.
    Armed,
}

/// Click tracking shared by every button variant.
///
/// # Touch Behavior
/// - A press inside bounds arms the button
/// - A release inside bounds while armed fires the action
/// - Any pointer event outside bounds disarms without firing and is not
///   consumed, so views underneath still see it
/// - Other pointer events inside bounds are absorbed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonCore {
    bounds: Rectangle,
    action: Action,
    state: ButtonState,
}

impl ButtonCore {
    pub fn new(bounds: Rectangle, action: Action) -> Self {
        Self {
            bounds,
            action,
            state: ButtonState::Idle,
        }
    }

    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    pub fn set_position(&mut self, position: Point) {
        self.bounds.top_left = position;
    }

    pub fn set_size(&mut self, size: Size) {
        self.bounds.size = size;
    }

    pub fn action(&self) -> Action {
        self.action
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    pub fn is_armed(&self) -> bool {
        self.state == ButtonState::Armed
    }

    pub fn contains_point(&self, point: Point) -> bool {
        self.bounds.contains(point)
    }

    pub fn handle_event(&mut self, event: &Event) -> EventResult {
        let Event::Pointer(ev) = event else {
            return EventResult::NotHandled;
        };

        if !self.contains_point(ev.position) {
            self.state = ButtonState::Idle;
            return EventResult::NotHandled;
        }

        match ev.kind {
            PointerKind::Press => {
                self.state = ButtonState::Armed;
                EventResult::Handled
            }
            PointerKind::Release if self.is_armed() => {
                self.state = ButtonState::Idle;
                debug!("Button clicked: {:?}", self.action);
                EventResult::Action(self.action)
            }
            _ => EventResult::Handled,
        }
    }
}

/// Button filled with a single flat color
pub struct Button {
    core: ButtonCore,
    color: Rgb565,
}

impl Button {
    pub fn new(bounds: Rectangle, color: Rgb565, action: Action) -> Self {
        Self {
            core: ButtonCore::new(bounds, action),
            color,
        }
    }

    pub fn color(&self) -> Rgb565 {
        self.color
    }

    pub fn set_color(&mut self, color: Rgb565) {
        self.color = color;
    }

    pub fn is_armed(&self) -> bool {
        self.core.is_armed()
    }

    pub fn action(&self) -> Action {
        self.core.action()
    }
}

impl Drawable for Button {
    fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        painter: &mut Painter<'_, D>,
    ) -> Result<(), D::Error> {
        painter.fill_rect(self.core.bounds(), self.color)
    }

    fn bounds(&self) -> Rectangle {
        self.core.bounds()
    }
}

impl Touchable for Button {
    fn contains_point(&self, point: Point) -> bool {
        self.core.contains_point(point)
    }

    fn handle_event(&mut self, event: &Event) -> EventResult {
        self.core.handle_event(event)
    }
}

impl Widget for Button {
    fn set_position(&mut self, position: Point) {
        self.core.set_position(position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::core::PanEvent;

    fn button() -> Button {
        Button::new(
            Rectangle::new(Point::new(10, 10), Size::new(20, 20)),
            Rgb565::BLUE,
            Action::Clicked(7),
        )
    }

    fn at(kind: PointerKind, x: i32, y: i32) -> Event {
        Event::pointer(kind, Point::new(x, y))
    }

    fn clicks(button: &mut Button, events: &[Event]) -> usize {
        events
            .iter()
            .filter(|ev| button.handle_event(ev).action().is_some())
            .count()
    }

    #[test]
    fn test_press_and_release_inside_clicks_once() {
        let mut b = button();
        let n = clicks(
            &mut b,
            &[at(PointerKind::Press, 15, 15), at(PointerKind::Release, 25, 25)],
        );
        assert_eq!(n, 1);
        assert!(!b.is_armed());
    }

    #[test]
    fn test_release_outside_never_clicks() {
        let mut b = button();
        assert_eq!(b.handle_event(&at(PointerKind::Press, 15, 15)), EventResult::Handled);
        assert!(b.is_armed());

        // Leaving bounds disarms and lets the event through.
        assert_eq!(
            b.handle_event(&at(PointerKind::Release, 30, 15)),
            EventResult::NotHandled
        );
        assert!(!b.is_armed());

        // Coming back and releasing inside does not click either.
        assert_eq!(clicks(&mut b, &[at(PointerKind::Release, 15, 15)]), 0);
    }

    #[test]
    fn test_press_outside_never_arms() {
        let mut b = button();
        let n = clicks(
            &mut b,
            &[
                at(PointerKind::Press, 5, 5),
                at(PointerKind::Move, 15, 15),
                at(PointerKind::Release, 15, 15),
            ],
        );
        assert_eq!(n, 0);
        assert!(!b.is_armed());
    }

    #[test]
    fn test_drag_outside_disarms() {
        let mut b = button();
        b.handle_event(&at(PointerKind::Press, 12, 12));
        assert_eq!(
            b.handle_event(&at(PointerKind::Drag, 50, 12)),
            EventResult::NotHandled
        );
        assert_eq!(clicks(&mut b, &[at(PointerKind::Release, 12, 12)]), 0);
    }

    #[test]
    fn test_hover_inside_is_absorbed_without_state_change() {
        let mut b = button();
        assert_eq!(b.handle_event(&at(PointerKind::Move, 12, 12)), EventResult::Handled);
        assert!(!b.is_armed());

        b.handle_event(&at(PointerKind::Press, 12, 12));
        assert_eq!(b.handle_event(&at(PointerKind::Drag, 20, 20)), EventResult::Handled);
        assert!(b.is_armed());
    }

    #[test]
    fn test_bounds_exclude_right_and_bottom_edges() {
        let b = button();
        assert!(b.contains_point(Point::new(10, 10)));
        assert!(b.contains_point(Point::new(29, 29)));
        assert!(!b.contains_point(Point::new(30, 15)));
        assert!(!b.contains_point(Point::new(15, 30)));
        assert!(!b.contains_point(Point::new(9, 15)));
    }

    #[test]
    fn test_pan_is_ignored() {
        let mut b = button();
        let pan = Event::Pan(PanEvent {
            delta_x: 0.0,
            delta_y: 3.0,
            position: Point::new(15, 15),
        });
        assert_eq!(b.handle_event(&pan), EventResult::NotHandled);
    }
}
