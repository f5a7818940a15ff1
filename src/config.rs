//! Runtime configuration for the root controller and the drawing surface.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

/// Logical surface size used when the host does not provide one.
pub const DEFAULT_LOGICAL_WIDTH: u32 = 320;
pub const DEFAULT_LOGICAL_HEIGHT: u32 = 240;

/// Root controller settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiConfig {
    /// On-screen offset of the surface, subtracted from host pointer coordinates.
    pub surface_offset: Point,
    /// Color the backing store is cleared to before each frame. `None` keeps
    /// the previous frame's pixels underneath.
    pub clear_color: Option<Rgb565>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            surface_offset: Point::zero(),
            clear_color: None,
        }
    }
}

impl UiConfig {
    pub fn with_surface_offset(mut self, offset: Point) -> Self {
        self.surface_offset = offset;
        self
    }

    pub fn with_clear_color(mut self, color: Rgb565) -> Self {
        self.clear_color = Some(color);
        self
    }
}

/// Initial geometry of a [`FrameBuffer`](crate::framebuffer::FrameBuffer).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceConfig {
    /// Size in logical (CSS-like) pixels; all layout happens in this space.
    pub logical_size: Size,
    /// Physical pixels per logical pixel.
    pub device_pixel_ratio: f32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            logical_size: Size::new(DEFAULT_LOGICAL_WIDTH, DEFAULT_LOGICAL_HEIGHT),
            device_pixel_ratio: 1.0,
        }
    }
}

impl SurfaceConfig {
    pub fn new(logical_size: Size, device_pixel_ratio: f32) -> Self {
        Self {
            logical_size,
            device_pixel_ratio: if device_pixel_ratio > 0.0 {
                device_pixel_ratio
            } else {
                1.0
            },
        }
    }
}
