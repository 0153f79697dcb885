//! Core geometry types for floating surfaces
//!
//! These types provide the 2D math for positioning, sizing, and hit
//! testing. All coordinates are pixels relative to the viewport origin.

mod rect;
mod size;
mod vec2;

pub use rect::Rect;
pub use size::Size;
pub use vec2::Vec2;
