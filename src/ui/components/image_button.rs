// src/ui/components/image_button.rs
//! Button that renders a bitmap

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::bitmap::Bitmap;
use crate::painter::Painter;
use crate::ui::components::button::ButtonCore;
use crate::ui::core::{Action, Drawable, Event, EventResult, Touchable, Widget};

/// Button drawn as a bitmap stretched over its own rectangle.
///
/// The rectangle starts at the bitmap's native size and can be changed with
/// [`ImageButton::set_size`] independently of the bitmap.
pub struct ImageButton {
    core: ButtonCore,
    image: Bitmap,
}

impl ImageButton {
    pub fn new(position: Point, image: Bitmap, action: Action) -> Self {
        let bounds = Rectangle::new(position, image.size());
        Self {
            core: ButtonCore::new(bounds, action),
            image,
        }
    }

    /// Builder form of [`ImageButton::set_size`].
    pub fn with_size(mut self, size: Size) -> Self {
        self.set_size(size);
        self
    }

    /// Replace the bitmap; the button takes the new bitmap's native size.
    pub fn set_image(&mut self, image: Bitmap) {
        self.core.set_size(image.size());
        self.image = image;
    }

    pub fn set_size(&mut self, size: Size) {
        self.core.set_size(size);
    }

    pub fn image(&self) -> &Bitmap {
        &self.image
    }

    pub fn is_armed(&self) -> bool {
        self.core.is_armed()
    }
}

impl Drawable for ImageButton {
    fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        painter: &mut Painter<'_, D>,
    ) -> Result<(), D::Error> {
        painter.draw_bitmap(&self.image, self.core.bounds())
    }

    fn bounds(&self) -> Rectangle {
        self.core.bounds()
    }
}

impl Touchable for ImageButton {
    fn contains_point(&self, point: Point) -> bool {
        self.core.contains_point(point)
    }

    fn handle_event(&mut self, event: &Event) -> EventResult {
        self.core.handle_event(event)
    }
}

impl Widget for ImageButton {
    fn set_position(&mut self, position: Point) {
        self.core.set_position(position);
    }
}
