//! Host environment interface: input notifications and frame callbacks.

use alloc::vec::Vec;
use embedded_graphics::prelude::*;

use crate::error::Error;
use crate::surface::Surface;
use crate::ui::Action;

/// Primitive input notification from the host, in host coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostInput {
    PointerDown(Point),
    PointerMove(Point),
    PointerUp(Point),
    /// Scroll wheel. With the zoom modifier held (ctrl, or a trackpad pinch)
    /// it zooms; otherwise it pans.
    Wheel {
        delta_x: f32,
        delta_y: f32,
        zoom_modifier: bool,
    },
}

/// Environment that drives the UI frame loop.
///
/// The loop is single-threaded: input handling and frames never overlap.
pub trait Host {
    type Surface: Surface;

    /// Surface the UI draws into.
    fn surface(&mut self) -> &mut Self::Surface;

    /// Wait for the next frame callback, collecting the input that arrived
    /// since the previous one. Returns `false` once the host stops
    /// delivering frames.
    fn next_frame(&mut self, input: &mut Vec<HostInput>) -> bool;

    /// Show the frame that was just drawn.
    fn present(&mut self) -> Result<(), Error>;

    /// A click or other action came out of dispatch.
    fn on_action(&mut self, _action: Action) {}
}
