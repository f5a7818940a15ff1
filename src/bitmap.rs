//! Owned RGB565 bitmaps for image buttons.

use alloc::vec;
use alloc::vec::Vec;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::error::Error;

/// Row-major pixel buffer with a native size.
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap {
    size: Size,
    pixels: Vec<Rgb565>,
}

impl Bitmap {
    /// Wrap `pixels`, which must hold exactly `size.width * size.height` entries.
    pub fn new(size: Size, pixels: Vec<Rgb565>) -> Result<Self, Error> {
        let expected = size.width as usize * size.height as usize;
        if pixels.len() != expected {
            return Err(Error::InvalidBitmap {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self { size, pixels })
    }

    /// A bitmap of a single color.
    pub fn filled(size: Size, color: Rgb565) -> Self {
        Self {
            size,
            pixels: vec![color; size.width as usize * size.height as usize],
        }
    }

    /// Native size in pixels.
    pub fn size(&self) -> Size {
        self.size
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb565> {
        if x < self.size.width && y < self.size.height {
            Some(self.pixels[(y * self.size.width + x) as usize])
        } else {
            None
        }
    }

    pub fn pixels(&self) -> &[Rgb565] {
        &self.pixels
    }
}
