//! Heap-backed framebuffer with a resizable backing store.
//!
//! The UI draws into this RAM buffer at physical resolution. Hosts copy it
//! onto their real display with [`FrameBuffer::flush`], which only sends the
//! rectangular region containing changed pixels.

use alloc::vec;
use alloc::vec::Vec;
use core::convert::Infallible;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PointsIter, Rectangle};
use log::debug;

use crate::config::SurfaceConfig;
use crate::surface::{Surface, backing_size_for};

/// Bounding box of pixels that have changed since the last flush.
#[derive(Debug, Clone, Copy)]
struct DirtyRect {
    min_x: usize,
    min_y: usize,
    max_x: usize,
    max_y: usize,
}

impl DirtyRect {
    fn expand(&mut self, x: usize, y: usize) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    fn from_point(x: usize, y: usize) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        }
    }

    fn covering(size: Size) -> Option<Self> {
        if size.width == 0 || size.height == 0 {
            return None;
        }
        Some(Self {
            min_x: 0,
            min_y: 0,
            max_x: size.width as usize - 1,
            max_y: size.height as usize - 1,
        })
    }
}

/// RAM framebuffer implementing [`Surface`].
///
/// Starts with a backing store of zero size; the root controller sizes it on
/// the first frame, the same way a fresh canvas gets its pixel size from its
/// layout size.
pub struct FrameBuffer {
    logical: Size,
    ratio: f32,
    backing: Size,
    pixels: Vec<Rgb565>,
    dirty: Option<DirtyRect>,
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new(SurfaceConfig::default())
    }
}

impl FrameBuffer {
    pub fn new(config: SurfaceConfig) -> Self {
        Self {
            logical: config.logical_size,
            ratio: config.device_pixel_ratio,
            backing: Size::zero(),
            pixels: Vec::new(),
            dirty: None,
        }
    }

    /// Change the logical size, as when the host window is resized.
    ///
    /// The backing store follows on the next frame.
    pub fn set_logical_size(&mut self, size: Size) {
        self.logical = size;
    }

    pub fn set_device_pixel_ratio(&mut self, ratio: f32) {
        if ratio > 0.0 {
            self.ratio = ratio;
        }
    }

    /// Backing store size this surface should have for its current logical
    /// size and pixel ratio.
    pub fn target_backing_size(&self) -> Size {
        backing_size_for(self.logical, self.ratio)
    }

    /// Read back a physical pixel.
    pub fn pixel(&self, point: Point) -> Option<Rgb565> {
        self.index(point.x, point.y).map(|idx| self.pixels[idx])
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let (w, h) = (self.backing.width as i32, self.backing.height as i32);
        if x >= 0 && y >= 0 && x < w && y < h {
            Some(y as usize * w as usize + x as usize)
        } else {
            None
        }
    }

    /// Write a single pixel, expanding the dirty rect only if the color changed.
    #[inline]
    fn set_pixel(&mut self, x: i32, y: i32, color: Rgb565) {
        let Some(idx) = self.index(x, y) else {
            return;
        };
        if self.pixels[idx] != color {
            self.pixels[idx] = color;
            let (x, y) = (x as usize, y as usize);
            match &mut self.dirty {
                Some(rect) => rect.expand(x, y),
                None => self.dirty = Some(DirtyRect::from_point(x, y)),
            }
        }
    }

    /// Copy the changed region to `display`, then reset the dirty state.
    pub fn flush<D>(&mut self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let Some(rect) = self.dirty.take() else {
            return Ok(());
        };

        let width = rect.max_x - rect.min_x + 1;
        let height = rect.max_y - rect.min_y + 1;

        debug!(
            "Flushing {}x{} dirty region at ({}, {})",
            width, height, rect.min_x, rect.min_y
        );

        let area = Rectangle::new(
            Point::new(rect.min_x as i32, rect.min_y as i32),
            Size::new(width as u32, height as u32),
        );

        let pixels = &self.pixels;
        let stride = self.backing.width as usize;
        let pixel_iter = (rect.min_y..=rect.max_y).flat_map(move |y| {
            let row_start = y * stride + rect.min_x;
            pixels[row_start..row_start + width].iter().copied()
        });

        display.fill_contiguous(&area, pixel_iter)
    }
}

impl Surface for FrameBuffer {
    fn logical_size(&self) -> Size {
        self.logical
    }

    fn device_pixel_ratio(&self) -> f32 {
        self.ratio
    }

    fn backing_size(&self) -> Size {
        self.backing
    }

    fn set_backing_size(&mut self, size: Size) {
        debug!(
            "Resizing backing store {}x{} -> {}x{}",
            self.backing.width, self.backing.height, size.width, size.height
        );
        self.backing = size;
        self.pixels = vec![Rgb565::BLACK; size.width as usize * size.height as usize];
        self.dirty = DirtyRect::covering(size);
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        self.backing
    }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            self.set_pixel(coord.x, coord.y, color);
        }
        Ok(())
    }

    fn fill_contiguous<I>(&mut self, area: &Rectangle, colors: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        // Colors map to the unclipped area row by row; off-surface ones are dropped.
        for (point, color) in area.points().zip(colors) {
            self.set_pixel(point.x, point.y, color);
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let clipped = area.intersection(&self.bounding_box());
        for point in clipped.points() {
            self.set_pixel(point.x, point.y, color);
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        let (w, h) = (self.backing.width as i32, self.backing.height as i32);
        for y in 0..h {
            for x in 0..w {
                self.set_pixel(x, y, color);
            }
        }
        Ok(())
    }
}
