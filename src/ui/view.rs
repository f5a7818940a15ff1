// src/ui/view.rs
//! The closed set of view variants that make up a view tree.
//!
//! [`View`] is an enum that forwards every [`Widget`] method to the
//! concrete widget it holds, so containers can own heterogeneous children
//! without trait objects. When adding a new widget type, add a variant here
//! and a match arm in each impl below.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::painter::Painter;
use crate::ui::components::{Button, ColorButton, ImageButton};
use crate::ui::core::{Drawable, Event, EventResult, Touchable, Widget};
use crate::ui::layouts::Stack;

/// Inert rectangle: draws nothing and consumes nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseView {
    bounds: Rectangle,
}

impl BaseView {
    pub fn new(bounds: Rectangle) -> Self {
        Self { bounds }
    }
}

impl Drawable for BaseView {
    fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        _painter: &mut Painter<'_, D>,
    ) -> Result<(), D::Error> {
        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }
}

impl Touchable for BaseView {
    fn contains_point(&self, point: Point) -> bool {
        self.bounds.contains(point)
    }

    fn handle_event(&mut self, _event: &Event) -> EventResult {
        EventResult::NotHandled
    }
}

impl Widget for BaseView {
    fn set_position(&mut self, position: Point) {
        self.bounds.top_left = position;
    }
}

/// Fixed-size placeholder that only reserves room in a stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacer {
    inner: BaseView,
}

impl Spacer {
    pub fn new(size: Size) -> Self {
        Self {
            inner: BaseView::new(Rectangle::new(Point::zero(), size)),
        }
    }
}

impl Drawable for Spacer {
    fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        painter: &mut Painter<'_, D>,
    ) -> Result<(), D::Error> {
        self.inner.draw(painter)
    }

    fn bounds(&self) -> Rectangle {
        self.inner.bounds()
    }
}

impl Touchable for Spacer {
    fn contains_point(&self, point: Point) -> bool {
        self.inner.contains_point(point)
    }

    fn handle_event(&mut self, event: &Event) -> EventResult {
        self.inner.handle_event(event)
    }
}

impl Widget for Spacer {
    fn set_position(&mut self, position: Point) {
        self.inner.set_position(position);
    }
}

/// Any node of the view tree.
pub enum View {
    Base(BaseView),
    Spacer(Spacer),
    Button(Button),
    ColorButton(ColorButton),
    ImageButton(ImageButton),
    Stack(Stack),
}

impl View {
    pub fn as_stack(&self) -> Option<&Stack> {
        match self {
            View::Stack(stack) => Some(stack),
            _ => None,
        }
    }

    pub fn as_stack_mut(&mut self) -> Option<&mut Stack> {
        match self {
            View::Stack(stack) => Some(stack),
            _ => None,
        }
    }

    pub fn as_color_button(&self) -> Option<&ColorButton> {
        match self {
            View::ColorButton(button) => Some(button),
            _ => None,
        }
    }

    pub fn as_image_button_mut(&mut self) -> Option<&mut ImageButton> {
        match self {
            View::ImageButton(button) => Some(button),
            _ => None,
        }
    }
}

impl Drawable for View {
    fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        painter: &mut Painter<'_, D>,
    ) -> Result<(), D::Error> {
        match self {
            View::Base(view) => view.draw(painter),
            View::Spacer(view) => view.draw(painter),
            View::Button(view) => view.draw(painter),
            View::ColorButton(view) => view.draw(painter),
            View::ImageButton(view) => view.draw(painter),
            View::Stack(view) => view.draw(painter),
        }
    }

    fn bounds(&self) -> Rectangle {
        match self {
            View::Base(view) => view.bounds(),
            View::Spacer(view) => view.bounds(),
            View::Button(view) => view.bounds(),
            View::ColorButton(view) => view.bounds(),
            View::ImageButton(view) => view.bounds(),
            View::Stack(view) => view.bounds(),
        }
    }
}

impl Touchable for View {
    fn contains_point(&self, point: Point) -> bool {
        match self {
            View::Base(view) => view.contains_point(point),
            View::Spacer(view) => view.contains_point(point),
            View::Button(view) => view.contains_point(point),
            View::ColorButton(view) => view.contains_point(point),
            View::ImageButton(view) => view.contains_point(point),
            View::Stack(view) => view.contains_point(point),
        }
    }

    fn handle_event(&mut self, event: &Event) -> EventResult {
        match self {
            View::Base(view) => view.handle_event(event),
            View::Spacer(view) => view.handle_event(event),
            View::Button(view) => view.handle_event(event),
            View::ColorButton(view) => view.handle_event(event),
            View::ImageButton(view) => view.handle_event(event),
            View::Stack(view) => view.handle_event(event),
        }
    }
}

impl Widget for View {
    fn layout(&mut self) {
        match self {
            View::Base(view) => view.layout(),
            View::Spacer(view) => view.layout(),
            View::Button(view) => view.layout(),
            View::ColorButton(view) => view.layout(),
            View::ImageButton(view) => view.layout(),
            View::Stack(view) => view.layout(),
        }
    }

    fn set_position(&mut self, position: Point) {
        match self {
            View::Base(view) => view.set_position(position),
            View::Spacer(view) => view.set_position(position),
            View::Button(view) => view.set_position(position),
            View::ColorButton(view) => view.set_position(position),
            View::ImageButton(view) => view.set_position(position),
            View::Stack(view) => view.set_position(position),
        }
    }
}

impl From<BaseView> for View {
    fn from(view: BaseView) -> Self {
        View::Base(view)
    }
}

impl From<Spacer> for View {
    fn from(view: Spacer) -> Self {
        View::Spacer(view)
    }
}

impl From<Button> for View {
    fn from(view: Button) -> Self {
        View::Button(view)
    }
}

impl From<ColorButton> for View {
    fn from(view: ColorButton) -> Self {
        View::ColorButton(view)
    }
}

impl From<ImageButton> for View {
    fn from(view: ImageButton) -> Self {
        View::ImageButton(view)
    }
}

impl From<Stack> for View {
    fn from(view: Stack) -> Self {
        View::Stack(view)
    }
}
