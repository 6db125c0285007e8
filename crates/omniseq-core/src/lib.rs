//! Core types shared across the omniseq crates.
//!
//! Provides the virtual-pixel geometry the page layout and motion effects
//! work in, and the binary color scheme every drawing surface styles with.

mod geometry;
mod theme;

pub use geometry::{Rect, Vec2};
pub use theme::Theme;
