// src/ui/mod.rs
//! tinypix UI system - a retained-mode view tree for toolbar controls
//!
//! This module provides:
//! - The event model and core traits for drawable and touchable elements
//! - Leaf widgets (flat, hover-reactive and image buttons, spacers)
//! - Stacking containers with eager layout
//! - Surface alignment for top-level views
//! - The root controller that translates host input and drives frames

pub mod components;
pub mod core;
pub mod layouts;
pub mod root;
pub mod view;

// Re-export commonly used items
pub use components::{Button, ButtonState, ColorButton, ColorSpec, ImageButton};
pub use self::core::{
    Action, Drawable, Event, EventResult, PanEvent, PointerEvent, PointerKind, Touchable, Widget,
    ZoomEvent,
};
pub use layouts::{
    Aligner, Alignment, Direction, HorizontalAlignment, Stack, VerticalAlignment, ViewId,
};
pub use root::{PointerState, Ui};
pub use view::{BaseView, Spacer, View};
