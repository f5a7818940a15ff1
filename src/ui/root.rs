// src/ui/root.rs
//! Root controller: top-level views, input translation and the frame loop.

use alloc::vec::Vec;
use embedded_graphics::prelude::*;
use log::{debug, trace};

use crate::config::UiConfig;
use crate::error::Error;
use crate::host::{Host, HostInput};
use crate::painter::Painter;
use crate::surface::{Surface, backing_size_for};
use crate::ui::core::{
    Action, Drawable, Event, EventResult, PanEvent, PointerKind, Touchable, ZoomEvent,
};
use crate::ui::layouts::{Aligner, Alignment, ViewId};
use crate::ui::view::View;

/// Pointer state carried between input notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerState {
    /// A button is held; moves are reported as drags.
    pub button_down: bool,
    /// Last pointer position in surface coordinates. Wheel events use it.
    pub last: Point,
}

/// Owner of the top-level views.
///
/// Views paint in insertion order, so the last one added is on top. Events
/// go the other way: the most recently added view gets the first chance to
/// consume them.
pub struct Ui {
    views: Vec<View>,
    aligners: Vec<Aligner>,
    pointer: PointerState,
    config: UiConfig,
}

impl Default for Ui {
    fn default() -> Self {
        Self::new(UiConfig::default())
    }
}

impl Ui {
    pub fn new(config: UiConfig) -> Self {
        Self {
            views: Vec::new(),
            aligners: Vec::new(),
            pointer: PointerState::default(),
            config,
        }
    }

    /// Register a top-level view, optionally pinned to the surface by an
    /// alignment that is re-applied every frame.
    pub fn add(&mut self, view: impl Into<View>, alignment: Option<Alignment>) -> ViewId {
        let id = ViewId(self.views.len());
        self.views.push(view.into());
        if let Some(alignment) = alignment {
            self.aligners.push(Aligner::new(id, alignment));
        }
        debug!("Added top-level view {} (aligned: {})", id.0, alignment.is_some());
        id
    }

    pub fn view(&self, id: ViewId) -> Option<&View> {
        self.views.get(id.0)
    }

    pub fn view_mut(&mut self, id: ViewId) -> Option<&mut View> {
        self.views.get_mut(id.0)
    }

    pub fn views(&self) -> &[View] {
        &self.views
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    /// Where the surface sits in host coordinates.
    pub fn set_surface_offset(&mut self, offset: Point) {
        self.config.surface_offset = offset;
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    /// Deliver `event` to the top-level views, newest first, stopping at the
    /// first one that consumes it. Broadcast events reach every view.
    pub fn dispatch(&mut self, event: &Event) -> EventResult {
        let mut outcome = EventResult::NotHandled;
        for (index, view) in self.views.iter_mut().enumerate().rev() {
            let result = view.handle_event(event);
            if result.is_consumed() {
                trace!("Event {:?} consumed by view {}: {:?}", event, index, result);
                if !event.is_broadcast() {
                    return result;
                }
            }
            outcome = outcome.or(result);
        }
        outcome
    }

    fn broadcast(&mut self, events: &[Event]) -> Option<Action> {
        let mut action = None;
        for event in events {
            if let Some(a) = self.dispatch(event).action() {
                action = Some(a);
            }
        }
        action
    }

    fn to_surface(&self, host: Point) -> Point {
        host - self.config.surface_offset
    }

    pub fn pointer_down(&mut self, host: Point) -> Option<Action> {
        let position = self.to_surface(host);
        self.pointer.last = position;
        self.pointer.button_down = true;
        self.broadcast(&[Event::pointer(PointerKind::Press, position)])
    }

    pub fn pointer_move(&mut self, host: Point) -> Option<Action> {
        let position = self.to_surface(host);
        self.pointer.last = position;
        let kind = if self.pointer.button_down {
            PointerKind::Drag
        } else {
            PointerKind::Move
        };
        self.broadcast(&[
            Event::pointer(kind, position),
            Event::pointer(PointerKind::GlobalMove, position),
        ])
    }

    pub fn pointer_up(&mut self, host: Point) -> Option<Action> {
        let position = self.to_surface(host);
        self.pointer.last = position;
        self.pointer.button_down = false;
        self.broadcast(&[
            Event::pointer(PointerKind::Release, position),
            Event::pointer(PointerKind::GlobalRelease, position),
        ])
    }

    /// Scroll wheel at the last known pointer position.
    pub fn wheel(&mut self, delta_x: f32, delta_y: f32, zoom_modifier: bool) -> Option<Action> {
        let position = self.pointer.last;
        let event = if zoom_modifier {
            Event::Zoom(ZoomEvent {
                zoom_delta: delta_y,
                position,
            })
        } else {
            Event::Pan(PanEvent {
                delta_x,
                delta_y,
                position,
            })
        };
        self.broadcast(&[event])
    }

    pub fn handle_input(&mut self, input: HostInput) -> Option<Action> {
        match input {
            HostInput::PointerDown(p) => self.pointer_down(p),
            HostInput::PointerMove(p) => self.pointer_move(p),
            HostInput::PointerUp(p) => self.pointer_up(p),
            HostInput::Wheel {
                delta_x,
                delta_y,
                zoom_modifier,
            } => self.wheel(delta_x, delta_y, zoom_modifier),
        }
    }

    /// Re-run every aligner against a surface of logical size `surface`.
    pub fn align(&mut self, surface: Size) {
        for aligner in &self.aligners {
            if let Some(view) = self.views.get_mut(aligner.view().0) {
                aligner.align(view, surface);
            }
        }
    }

    /// Draw one frame.
    ///
    /// Keeps the backing store at logical size × pixel ratio, aligns the
    /// pinned views, then paints every view in insertion order.
    pub fn frame<S: Surface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        let ratio = surface.device_pixel_ratio();
        let logical = surface.logical_size();
        let backing = backing_size_for(logical, ratio);
        if surface.backing_size() != backing {
            debug!(
                "Backing store {}x{} for logical {}x{} at ratio {}",
                backing.width, backing.height, logical.width, logical.height, ratio
            );
            surface.set_backing_size(backing);
        }

        if let Some(color) = self.config.clear_color {
            surface.clear(color)?;
        }

        self.align(logical);

        trace!("Drawing {} top-level views", self.views.len());
        let mut painter = Painter::with_scale(surface, ratio);
        painter.save();
        for view in &self.views {
            view.draw(&mut painter)?;
        }
        painter.restore();
        Ok(())
    }

    /// Run frames until the host stops delivering them.
    ///
    /// Each iteration handles the input that arrived since the previous
    /// frame, draws, then presents.
    pub fn run<H: Host>(&mut self, host: &mut H) -> Result<(), Error>
    where
        Error: From<<H::Surface as DrawTarget>::Error>,
    {
        let mut input = Vec::new();
        while host.next_frame(&mut input) {
            for event in input.drain(..) {
                if let Some(action) = self.handle_input(event) {
                    host.on_action(action);
                }
            }
            self.frame(host.surface())?;
            host.present()?;
        }
        debug!("Host stopped delivering frames");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SurfaceConfig;
    use crate::framebuffer::FrameBuffer;
    use crate::ui::components::{Button, ColorButton, ColorSpec};
    use crate::ui::layouts::{HorizontalAlignment, Stack, VerticalAlignment};
    use alloc::vec;
    use embedded_graphics::pixelcolor::Rgb565;
    use embedded_graphics::primitives::Rectangle;

    fn square(x: i32, y: i32, size: u32, color: Rgb565, id: u16) -> Button {
        Button::new(
            Rectangle::new(Point::new(x, y), Size::new(size, size)),
            color,
            Action::Clicked(id),
        )
    }

    fn hover(size: u32, id: u16) -> ColorButton {
        ColorButton::new(
            Rectangle::new(Point::zero(), Size::new(size, size)),
            ColorSpec::Hover {
                hover: Rgb565::RED,
                rest: Rgb565::GREEN,
            },
            Action::Clicked(id),
        )
    }

    fn active_color(ui: &Ui, id: ViewId, child: usize) -> Rgb565 {
        ui.view(id).unwrap().as_stack().unwrap().children()[child]
            .as_color_button()
            .unwrap()
            .active_color()
    }

    fn click(ui: &mut Ui, at: Point) -> Option<Action> {
        ui.pointer_down(at);
        ui.pointer_up(at)
    }

    #[test]
    fn test_topmost_view_receives_event_first() {
        let mut ui = Ui::default();
        ui.add(square(0, 0, 20, Rgb565::RED, 1), None);
        ui.add(square(10, 10, 20, Rgb565::BLUE, 2), None);

        assert_eq!(click(&mut ui, Point::new(15, 15)), Some(Action::Clicked(2)));
        assert_eq!(click(&mut ui, Point::new(5, 5)), Some(Action::Clicked(1)));
        assert_eq!(click(&mut ui, Point::new(25, 25)), Some(Action::Clicked(2)));
    }

    #[test]
    fn test_consumed_event_never_reaches_lower_view() {
        let mut ui = Ui::default();
        let below = ui.add(square(0, 0, 20, Rgb565::RED, 1), None);
        ui.add(square(0, 0, 20, Rgb565::BLUE, 2), None);

        ui.pointer_down(Point::new(5, 5));
        match ui.view(below) {
            Some(View::Button(b)) => assert!(!b.is_armed()),
            _ => panic!("expected a button"),
        }
    }

    #[test]
    fn test_unconsumed_event_falls_through() {
        let mut ui = Ui::default();
        ui.add(square(0, 0, 20, Rgb565::RED, 1), None);
        ui.add(square(100, 100, 20, Rgb565::BLUE, 2), None);

        assert_eq!(
            ui.dispatch(&Event::pointer(PointerKind::Press, Point::new(5, 5))),
            EventResult::Handled
        );
        assert_eq!(
            ui.dispatch(&Event::pointer(PointerKind::Press, Point::new(50, 50))),
            EventResult::NotHandled
        );
    }

    #[test]
    fn test_drag_away_then_release_does_not_click() {
        let mut ui = Ui::default();
        ui.add(square(0, 0, 20, Rgb565::RED, 1), None);

        ui.pointer_down(Point::new(5, 5));
        assert!(ui.pointer().button_down);
        ui.pointer_move(Point::new(50, 5));
        ui.pointer_move(Point::new(5, 5));
        assert_eq!(ui.pointer_up(Point::new(5, 5)), None);
        assert!(!ui.pointer().button_down);
    }

    #[test]
    fn test_host_coordinates_are_offset_by_surface_position() {
        let mut ui = Ui::new(UiConfig::default().with_surface_offset(Point::new(100, 40)));
        ui.add(square(0, 0, 10, Rgb565::RED, 1), None);

        assert_eq!(click(&mut ui, Point::new(5, 5)), None);
        assert_eq!(click(&mut ui, Point::new(105, 45)), Some(Action::Clicked(1)));
        assert_eq!(ui.pointer().last, Point::new(5, 5));

        ui.set_surface_offset(Point::zero());
        assert_eq!(click(&mut ui, Point::new(5, 5)), Some(Action::Clicked(1)));
    }

    #[test]
    fn test_hover_follows_pointer_across_top_level_views() {
        let mut ui = Ui::default();
        let tools = ui.add(Stack::vertical(Point::zero()).with(hover(10, 1)), None);
        let menu = ui.add(Stack::vertical(Point::new(20, 0)).with(hover(10, 2)), None);

        ui.pointer_move(Point::new(5, 5));
        assert_eq!(active_color(&ui, tools, 0), Rgb565::RED);
        assert_eq!(active_color(&ui, menu, 0), Rgb565::GREEN);

        // Straight onto the other view's button: both must update.
        ui.pointer_move(Point::new(25, 5));
        assert_eq!(active_color(&ui, tools, 0), Rgb565::GREEN);
        assert_eq!(active_color(&ui, menu, 0), Rgb565::RED);

        ui.pointer_move(Point::new(200, 200));
        assert_eq!(active_color(&ui, tools, 0), Rgb565::GREEN);
        assert_eq!(active_color(&ui, menu, 0), Rgb565::GREEN);
    }

    #[test]
    fn test_wheel_uses_last_pointer_position() {
        let mut ui = Ui::default();
        ui.pointer_move(Point::new(12, 34));
        assert_eq!(ui.wheel(0.0, 4.0, true), None);
        assert_eq!(ui.wheel(1.0, 4.0, false), None);
        assert_eq!(ui.pointer().last, Point::new(12, 34));
    }

    #[test]
    fn test_frame_aligns_then_paints_in_insertion_order() {
        let mut ui = Ui::default();
        let menu = ui.add(
            Stack::horizontal(Point::zero())
                .with(square(0, 0, 4, Rgb565::BLUE, 1))
                .with(square(0, 0, 2, Rgb565::YELLOW, 2)),
            Some(Alignment::new(
                HorizontalAlignment::Center,
                VerticalAlignment::Top,
            )),
        );
        // Unaligned, painted last, overlaps the menu's left edge.
        ui.add(square(7, 0, 1, Rgb565::WHITE, 3), None);

        let mut fb = FrameBuffer::new(SurfaceConfig::new(Size::new(20, 10), 1.0));
        ui.frame(&mut fb).unwrap();

        assert_eq!(fb.backing_size(), Size::new(20, 10));
        // Menu is 6 wide: floor(20/2) - floor(6/2) = 7.
        assert_eq!(ui.view(menu).unwrap().bounds().top_left, Point::new(7, 0));
        assert_eq!(fb.pixel(Point::new(7, 0)), Some(Rgb565::WHITE));
        assert_eq!(fb.pixel(Point::new(8, 0)), Some(Rgb565::BLUE));
        assert_eq!(fb.pixel(Point::new(11, 1)), Some(Rgb565::YELLOW));
        assert_eq!(fb.pixel(Point::new(13, 0)), Some(Rgb565::BLACK));
    }

    #[test]
    fn test_frame_follows_surface_resize() {
        let mut ui = Ui::default();
        let id = ui.add(
            square(0, 0, 4, Rgb565::RED, 1),
            Some(Alignment::new(
                HorizontalAlignment::Right,
                VerticalAlignment::Bottom,
            )),
        );

        let mut fb = FrameBuffer::new(SurfaceConfig::new(Size::new(10, 10), 1.0));
        ui.frame(&mut fb).unwrap();
        assert_eq!(ui.view(id).unwrap().bounds().top_left, Point::new(6, 6));

        fb.set_logical_size(Size::new(30, 20));
        ui.frame(&mut fb).unwrap();
        assert_eq!(fb.backing_size(), Size::new(30, 20));
        assert_eq!(ui.view(id).unwrap().bounds().top_left, Point::new(26, 16));
        assert_eq!(fb.pixel(Point::new(29, 19)), Some(Rgb565::RED));
    }

    #[test]
    fn test_frame_scales_by_device_pixel_ratio() {
        let mut ui = Ui::new(UiConfig::default().with_clear_color(Rgb565::BLACK));
        ui.add(square(1, 1, 2, Rgb565::GREEN, 1), None);

        let mut fb = FrameBuffer::new(SurfaceConfig::new(Size::new(8, 8), 2.0));
        ui.frame(&mut fb).unwrap();

        assert_eq!(fb.backing_size(), Size::new(16, 16));
        assert_eq!(fb.pixel(Point::new(2, 2)), Some(Rgb565::GREEN));
        assert_eq!(fb.pixel(Point::new(5, 5)), Some(Rgb565::GREEN));
        assert_eq!(fb.pixel(Point::new(6, 6)), Some(Rgb565::BLACK));
        assert_eq!(fb.pixel(Point::new(1, 1)), Some(Rgb565::BLACK));
    }

    struct ScriptedHost {
        surface: FrameBuffer,
        frames: Vec<Vec<HostInput>>,
        presented: usize,
        actions: Vec<Action>,
    }

    impl Host for ScriptedHost {
        type Surface = FrameBuffer;

        fn surface(&mut self) -> &mut FrameBuffer {
            &mut self.surface
        }

        fn next_frame(&mut self, input: &mut Vec<HostInput>) -> bool {
            if self.frames.is_empty() {
                return false;
            }
            input.extend(self.frames.remove(0));
            true
        }

        fn present(&mut self) -> Result<(), Error> {
            self.presented += 1;
            Ok(())
        }

        fn on_action(&mut self, action: Action) {
            self.actions.push(action);
        }
    }

    #[test]
    fn test_run_drives_frames_until_host_stops() {
        let mut ui = Ui::default();
        ui.add(square(0, 0, 10, Rgb565::RED, 9), None);

        let mut host = ScriptedHost {
            surface: FrameBuffer::new(SurfaceConfig::new(Size::new(16, 16), 1.0)),
            frames: vec![
                vec![HostInput::PointerDown(Point::new(3, 3))],
                vec![
                    HostInput::PointerMove(Point::new(4, 4)),
                    HostInput::PointerUp(Point::new(4, 4)),
                ],
                vec![HostInput::Wheel {
                    delta_x: 0.0,
                    delta_y: -1.0,
                    zoom_modifier: false,
                }],
            ],
            presented: 0,
            actions: Vec::new(),
        };

        ui.run(&mut host).unwrap();

        assert_eq!(host.presented, 3);
        assert_eq!(host.actions, [Action::Clicked(9)]);
        assert_eq!(host.surface.pixel(Point::new(9, 9)), Some(Rgb565::RED));
    }
}
