//! Retained-mode toolbar UI core for tinypix
//!
//! A small view tree drawn onto a single 2D surface: flat, hover-reactive and
//! image buttons arranged in stacking containers, pinned to the surface edges
//! or center. The crate owns layout, hit-testing, event dispatch and button
//! state; hosts supply the surface, the frame callbacks and the pointer input.
//!
//! It is `#![no_std]` with `extern crate alloc` and draws through
//! `embedded-graphics`, so the same tree renders into a desktop window, an
//! in-memory [`FrameBuffer`](framebuffer::FrameBuffer) in tests, or a device
//! display.

#![no_std]

extern crate alloc;

pub mod assets;
pub mod bitmap;
pub mod config;
pub mod error;
pub mod framebuffer;
pub mod host;
pub mod painter;
pub mod surface;
pub mod ui;

pub use error::Error;
