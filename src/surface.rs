//! Drawing surface abstraction.
//!
//! A surface is an `embedded-graphics` draw target addressed in physical
//! (backing store) pixels, plus the logical size that layout and alignment
//! work in. The root controller keeps the backing store at
//! `round(logical_size × device_pixel_ratio)` every frame.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

/// A draw target with a logical size and a resizable backing store.
pub trait Surface: DrawTarget<Color = Rgb565> {
    /// Size in logical pixels.
    fn logical_size(&self) -> Size;

    /// Physical pixels per logical pixel.
    fn device_pixel_ratio(&self) -> f32;

    /// Current size of the physical backing store.
    fn backing_size(&self) -> Size;

    /// Resize the physical backing store. Contents are not preserved.
    fn set_backing_size(&mut self, size: Size);
}

/// Backing store size needed for `logical` at `ratio`.
pub fn backing_size_for(logical: Size, ratio: f32) -> Size {
    Size::new(
        round_to_i32(logical.width as f32 * ratio).max(0) as u32,
        round_to_i32(logical.height as f32 * ratio).max(0) as u32,
    )
}

/// Round half away from zero; `f32::round` is not available in `core`.
pub(crate) fn round_to_i32(value: f32) -> i32 {
    if value >= 0.0 {
        (value + 0.5) as i32
    } else {
        (value - 0.5) as i32
    }
}
