// src/ui/components/color_button.rs
//! Button whose fill color reacts to hover

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::painter::Painter;
use crate::ui::components::button::ButtonCore;
use crate::ui::core::{
    Action, Drawable, Event, EventResult, PointerKind, Touchable, Widget,
};

/// Fill color of a [`ColorButton`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorSpec {
    /// Same color whether hovered or not.
    Solid(Rgb565),
    /// `hover` while the pointer is over the button, `rest` otherwise.
    Hover { hover: Rgb565, rest: Rgb565 },
}

impl ColorSpec {
    fn resting(&self) -> Rgb565 {
        match *self {
            ColorSpec::Solid(color) => color,
            ColorSpec::Hover { rest, .. } => rest,
        }
    }
}

impl From<Rgb565> for ColorSpec {
    fn from(color: Rgb565) -> Self {
        ColorSpec::Solid(color)
    }
}

/// Button filled with a hover-reactive color.
///
/// The drawn color is cached and only recomputed on
/// [`PointerKind::GlobalMove`] events, which reach the button even when the
/// pointer is outside it. That is how it learns the pointer has left.
///
/// # Examples
/// ```ignore
/// let tool = ColorButton::new(
///     Rectangle::new(Point::zero(), Size::new(48, 48)),
///     ColorSpec::Hover { hover: Rgb565::RED, rest: Rgb565::GREEN },
///     Action::Clicked(1),
/// );
/// ```
pub struct ColorButton {
    core: ButtonCore,
    color: ColorSpec,
    active_color: Rgb565,
}

impl ColorButton {
    pub fn new(bounds: Rectangle, color: impl Into<ColorSpec>, action: Action) -> Self {
        let color = color.into();
        Self {
            core: ButtonCore::new(bounds, action),
            active_color: color.resting(),
            color,
        }
    }

    /// Color used by the next draw.
    pub fn active_color(&self) -> Rgb565 {
        self.active_color
    }

    pub fn color(&self) -> ColorSpec {
        self.color
    }

    pub fn is_armed(&self) -> bool {
        self.core.is_armed()
    }

    pub fn action(&self) -> Action {
        self.core.action()
    }
}

impl Drawable for ColorButton {
    fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        painter: &mut Painter<'_, D>,
    ) -> Result<(), D::Error> {
        painter.fill_rect(self.core.bounds(), self.active_color)
    }

    fn bounds(&self) -> Rectangle {
        self.core.bounds()
    }
}

impl Touchable for ColorButton {
    fn contains_point(&self, point: Point) -> bool {
        self.core.contains_point(point)
    }

    fn handle_event(&mut self, event: &Event) -> EventResult {
        if let Event::Pointer(ev) = event
            && ev.kind == PointerKind::GlobalMove
            && let ColorSpec::Hover { hover, rest } = self.color
        {
            self.active_color = if self.core.contains_point(ev.position) {
                hover
            } else {
                rest
            };
        }
        self.core.handle_event(event)
    }
}

impl Widget for ColorButton {
    fn set_position(&mut self, position: Point) {
        self.core.set_position(position);
    }
}
