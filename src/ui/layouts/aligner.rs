// src/ui/layouts/aligner.rs
//! Edge and center alignment of top-level views against the surface

use embedded_graphics::prelude::*;

use crate::ui::core::{Drawable, Widget};
use crate::ui::view::View;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAlignment {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlignment {
    Top,
    Center,
    Bottom,
}

/// Where a top-level view sits on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alignment {
    pub horizontal: HorizontalAlignment,
    pub vertical: VerticalAlignment,
}

impl Alignment {
    pub const TOP_LEFT: Self = Self::new(HorizontalAlignment::Left, VerticalAlignment::Top);
    pub const CENTER: Self = Self::new(HorizontalAlignment::Center, VerticalAlignment::Center);

    pub const fn new(horizontal: HorizontalAlignment, vertical: VerticalAlignment) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

/// Handle of a top-level view registered with [`Ui`](crate::ui::Ui).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewId(pub(crate) usize);

impl ViewId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Alignment policy bound to one top-level view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aligner {
    view: ViewId,
    alignment: Alignment,
}

impl Aligner {
    pub fn new(view: ViewId, alignment: Alignment) -> Self {
        Self { view, alignment }
    }

    pub fn view(&self) -> ViewId {
        self.view
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// Reposition `view` for a surface of logical size `surface`.
    ///
    /// Uses the view's current size; layout must already be up to date.
    pub fn align(&self, view: &mut View, surface: Size) {
        let origin = aligned_origin(self.alignment, surface, view.bounds().size);
        view.set_position(origin);
    }
}

/// Origin of a `view`-sized box aligned inside `surface`.
///
/// Centering floors both halves independently, so odd sizes lean up-left.
pub fn aligned_origin(alignment: Alignment, surface: Size, view: Size) -> Point {
    let x = match alignment.horizontal {
        HorizontalAlignment::Left => 0,
        HorizontalAlignment::Center => (surface.width / 2) as i32 - (view.width / 2) as i32,
        HorizontalAlignment::Right => surface.width as i32 - view.width as i32,
    };
    let y = match alignment.vertical {
        VerticalAlignment::Top => 0,
        VerticalAlignment::Center => (surface.height / 2) as i32 - (view.height / 2) as i32,
        VerticalAlignment::Bottom => surface.height as i32 - view.height as i32,
    };
    Point::new(x, y)
}
