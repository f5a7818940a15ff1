// src/ui/layouts/mod.rs
//! Layout components for arranging UI elements

pub mod aligner;
pub mod stack;

pub use aligner::{
    Aligner, Alignment, HorizontalAlignment, VerticalAlignment, ViewId, aligned_origin,
};
pub use stack::{Direction, Stack};
