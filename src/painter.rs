//! Immediate-mode drawing context with a save/translate/restore stack.
//!
//! Views draw in their parent's logical coordinate space. Containers
//! translate the origin before delegating to children, so every level draws
//! in pure local coordinates. The painter maps logical coordinates onto the
//! physical draw target through a uniform scale (the device pixel ratio).

use alloc::vec::Vec;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::warn;

use crate::bitmap::Bitmap;
use crate::surface::round_to_i32;

/// Drawing context over a physical draw target.
pub struct Painter<'a, D> {
    target: &'a mut D,
    scale: f32,
    origin: Point,
    saved: Vec<Point>,
}

impl<'a, D> Painter<'a, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    /// Painter with an identity transform.
    pub fn new(target: &'a mut D) -> Self {
        Self::with_scale(target, 1.0)
    }

    /// Painter where one logical pixel covers `scale` physical pixels.
    pub fn with_scale(target: &'a mut D, scale: f32) -> Self {
        Self {
            target,
            scale,
            origin: Point::zero(),
            saved: Vec::new(),
        }
    }

    /// Current logical origin relative to the surface.
    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn save(&mut self) {
        self.saved.push(self.origin);
    }

    pub fn restore(&mut self) {
        match self.saved.pop() {
            Some(origin) => self.origin = origin,
            None => warn!("Painter::restore called without a matching save"),
        }
    }

    pub fn translate(&mut self, offset: Point) {
        self.origin += offset;
    }

    /// Run `f` with the origin translated by `offset`, restoring afterwards
    /// whether or not `f` succeeds.
    pub fn with_translation<F>(&mut self, offset: Point, f: F) -> Result<(), D::Error>
    where
        F: FnOnce(&mut Self) -> Result<(), D::Error>,
    {
        self.save();
        self.translate(offset);
        let result = f(self);
        self.restore();
        result
    }

    /// Fill a logical rectangle with a solid color.
    pub fn fill_rect(&mut self, rect: Rectangle, color: Rgb565) -> Result<(), D::Error> {
        let Some(area) = self.to_physical(rect) else {
            return Ok(());
        };
        self.target.fill_solid(&area, color)
    }

    /// Blit `bitmap` scaled to cover the logical rectangle `dest`.
    ///
    /// Scaling is nearest-neighbour; pixel art stays crisp.
    pub fn draw_bitmap(&mut self, bitmap: &Bitmap, dest: Rectangle) -> Result<(), D::Error> {
        let src = bitmap.size();
        if src.width == 0 || src.height == 0 {
            return Ok(());
        }
        let Some(area) = self.to_physical(dest) else {
            return Ok(());
        };

        let (dw, dh) = (area.size.width as u64, area.size.height as u64);
        let (sw, sh) = (src.width as u64, src.height as u64);
        let colors = (0..dh).flat_map(move |dy| {
            let sy = (dy * sh / dh) as u32;
            (0..dw).map(move |dx| {
                let sx = (dx * sw / dw) as u32;
                bitmap.pixel(sx, sy).unwrap_or(Rgb565::BLACK)
            })
        });
        self.target.fill_contiguous(&area, colors)
    }

    /// Map a logical rectangle to device pixels; `None` when it is empty.
    fn to_physical(&self, rect: Rectangle) -> Option<Rectangle> {
        let x0 = rect.top_left.x + self.origin.x;
        let y0 = rect.top_left.y + self.origin.y;
        let x1 = x0 + rect.size.width as i32;
        let y1 = y0 + rect.size.height as i32;

        let (px0, py0) = (self.device(x0), self.device(y0));
        let (px1, py1) = (self.device(x1), self.device(y1));
        if px1 <= px0 || py1 <= py0 {
            return None;
        }
        Some(Rectangle::new(
            Point::new(px0, py0),
            Size::new((px1 - px0) as u32, (py1 - py0) as u32),
        ))
    }

    #[inline]
    fn device(&self, logical: i32) -> i32 {
        round_to_i32(logical as f32 * self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SurfaceConfig;
    use crate::framebuffer::FrameBuffer;
    use crate::surface::Surface;
    use alloc::vec;

    fn surface(width: u32, height: u32) -> FrameBuffer {
        let mut fb = FrameBuffer::new(SurfaceConfig::new(Size::new(width, height), 1.0));
        fb.set_backing_size(Size::new(width, height));
        fb
    }

    #[test]
    fn test_translation_is_restored() {
        let mut fb = surface(16, 16);
        let mut painter = Painter::new(&mut fb);

        painter.save();
        painter.translate(Point::new(4, 5));
        painter.save();
        painter.translate(Point::new(1, 1));
        assert_eq!(painter.origin(), Point::new(5, 6));
        painter.restore();
        assert_eq!(painter.origin(), Point::new(4, 5));
        painter.restore();
        assert_eq!(painter.origin(), Point::zero());

        // Unbalanced restore leaves the origin alone.
        painter.restore();
        assert_eq!(painter.origin(), Point::zero());
    }

    #[test]
    fn test_fill_rect_uses_translated_origin() {
        let mut fb = surface(16, 16);
        {
            let mut painter = Painter::new(&mut fb);
            painter
                .with_translation(Point::new(4, 4), |p| {
                    p.fill_rect(Rectangle::new(Point::new(1, 1), Size::new(2, 2)), Rgb565::RED)
                })
                .unwrap();
            assert_eq!(painter.origin(), Point::zero());
        }

        assert_eq!(fb.pixel(Point::new(5, 5)), Some(Rgb565::RED));
        assert_eq!(fb.pixel(Point::new(6, 6)), Some(Rgb565::RED));
        assert_eq!(fb.pixel(Point::new(7, 7)), Some(Rgb565::BLACK));
        assert_eq!(fb.pixel(Point::new(4, 4)), Some(Rgb565::BLACK));
    }

    #[test]
    fn test_scale_maps_logical_to_device_pixels() {
        let mut fb = surface(16, 16);
        {
            let mut painter = Painter::with_scale(&mut fb, 2.0);
            painter
                .fill_rect(Rectangle::new(Point::new(1, 1), Size::new(2, 1)), Rgb565::GREEN)
                .unwrap();
        }

        // Logical (1,1)-(3,2) covers device (2,2)-(6,4).
        assert_eq!(fb.pixel(Point::new(2, 2)), Some(Rgb565::GREEN));
        assert_eq!(fb.pixel(Point::new(5, 3)), Some(Rgb565::GREEN));
        assert_eq!(fb.pixel(Point::new(6, 3)), Some(Rgb565::BLACK));
        assert_eq!(fb.pixel(Point::new(2, 4)), Some(Rgb565::BLACK));
    }

    #[test]
    fn test_draw_bitmap_scales_nearest_neighbour() {
        let bitmap = Bitmap::new(
            Size::new(2, 1),
            vec![Rgb565::RED, Rgb565::BLUE],
        )
        .unwrap();
        let mut fb = surface(8, 8);
        {
            let mut painter = Painter::new(&mut fb);
            painter
                .draw_bitmap(&bitmap, Rectangle::new(Point::zero(), Size::new(4, 2)))
                .unwrap();
        }

        assert_eq!(fb.pixel(Point::new(0, 0)), Some(Rgb565::RED));
        assert_eq!(fb.pixel(Point::new(1, 1)), Some(Rgb565::RED));
        assert_eq!(fb.pixel(Point::new(2, 0)), Some(Rgb565::BLUE));
        assert_eq!(fb.pixel(Point::new(3, 1)), Some(Rgb565::BLUE));
        assert_eq!(fb.pixel(Point::new(4, 0)), Some(Rgb565::BLACK));
    }

    #[test]
    fn test_empty_rect_draws_nothing() {
        let mut fb = surface(4, 4);
        {
            let mut painter = Painter::new(&mut fb);
            painter
                .fill_rect(Rectangle::new(Point::new(1, 1), Size::new(0, 3)), Rgb565::RED)
                .unwrap();
        }
        assert_eq!(fb.pixel(Point::new(1, 1)), Some(Rgb565::BLACK));
    }
}
