// src/ui/layouts/stack.rs
//! Stacking container that lays children out back to back

use alloc::vec::Vec;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::painter::Painter;
use crate::ui::core::{Drawable, Event, EventResult, Touchable, Widget};
use crate::ui::view::View;

/// Direction for stack layout
///
/// Children are laid out sequentially along the main axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Horizontal layout (left to right)
    Horizontal,
    /// Vertical layout (top to bottom)
    Vertical,
}

/// Container that stacks its children along one axis.
///
/// The stack's size always equals the bounding box of its children and is
/// recomputed eagerly on every [`Stack::add`]. Children are positioned in
/// the stack's local space, starting at the origin.
///
/// The cross-axis extent is the largest child *width* in both directions.
/// For a horizontal stack this means its height follows its children's
/// widths, not their heights.
///
/// # Examples
/// ```ignore
/// let mut tools = Stack::vertical(Point::zero());
/// tools
///     .add(ColorButton::new(rect_48, Rgb565::RED, Action::Clicked(1)))
///     .add(Spacer::new(Size::new(48, 8)));
/// ```
pub struct Stack {
    bounds: Rectangle,
    direction: Direction,
    children: Vec<View>,
}

impl Stack {
    pub fn new(origin: Point, direction: Direction) -> Self {
        Self {
            bounds: Rectangle::new(origin, Size::zero()),
            direction,
            children: Vec::new(),
        }
    }

    /// Top-to-bottom stack.
    pub fn vertical(origin: Point) -> Self {
        Self::new(origin, Direction::Vertical)
    }

    /// Left-to-right stack.
    pub fn horizontal(origin: Point) -> Self {
        Self::new(origin, Direction::Horizontal)
    }

    /// Append a child and recompute layout.
    pub fn add(&mut self, view: impl Into<View>) -> &mut Self {
        self.children.push(view.into());
        self.layout();
        self
    }

    /// Builder form of [`Stack::add`].
    pub fn with(mut self, view: impl Into<View>) -> Self {
        self.add(view);
        self
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn children(&self) -> &[View] {
        &self.children
    }

    /// Mutable access to a child. Call [`Widget::layout`] on the stack after
    /// changing a child's size.
    pub fn child_mut(&mut self, index: usize) -> Option<&mut View> {
        self.children.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Drawable for Stack {
    fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        painter: &mut Painter<'_, D>,
    ) -> Result<(), D::Error> {
        painter.with_translation(self.bounds.top_left, |painter| {
            for child in &self.children {
                child.draw(painter)?;
            }
            Ok(())
        })
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }
}

impl Touchable for Stack {
    fn contains_point(&self, point: Point) -> bool {
        self.bounds.contains(point)
    }

    fn handle_event(&mut self, event: &Event) -> EventResult {
        if event.is_bounds_filtered() && !self.contains_point(event.position()) {
            return EventResult::NotHandled;
        }

        let local = event.to_local(self.bounds.top_left);
        let mut outcome = EventResult::NotHandled;
        for child in &mut self.children {
            let result = child.handle_event(&local);
            if result.is_consumed() && !local.is_broadcast() {
                return result;
            }
            outcome = outcome.or(result);
        }
        outcome
    }
}

impl Widget for Stack {
    fn layout(&mut self) {
        let mut cross = 0u32;
        for child in &mut self.children {
            child.layout();
            cross = cross.max(child.bounds().size.width);
        }

        let mut main = 0u32;
        for child in &mut self.children {
            let size = child.bounds().size;
            match self.direction {
                Direction::Vertical => {
                    child.set_position(Point::new(0, main as i32));
                    main += size.height;
                }
                Direction::Horizontal => {
                    child.set_position(Point::new(main as i32, 0));
                    main += size.width;
                }
            }
        }

        self.bounds.size = match self.direction {
            Direction::Vertical => Size::new(cross, main),
            Direction::Horizontal => Size::new(main, cross),
        };
    }

    fn set_position(&mut self, position: Point) {
        self.bounds.top_left = position;
    }
}
