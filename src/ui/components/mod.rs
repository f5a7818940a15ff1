// src/ui/components/mod.rs
//! Leaf widgets

pub mod button;
pub mod color_button;
pub mod image_button;

pub use button::{Button, ButtonCore, ButtonState};
pub use color_button::{ColorButton, ColorSpec};
pub use image_button::ImageButton;
