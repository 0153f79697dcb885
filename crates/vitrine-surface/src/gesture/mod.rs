//! Drag/resize gesture sessions and the pure update math

mod edge;
mod state;

pub use edge::ResizeEdge;
pub use state::{Gesture, GestureMode};

use crate::geometry::Geometry;
use crate::math::{Size, Vec2};

/// Calculate the surface position for a drag tick
///
/// Pure function of the absolute pointer position and the offset captured at
/// gesture start; no delta accumulation, so lost pointer-move events cannot
/// cause drift. No clamping happens here: screen-edge constraints, if any,
/// are the caller's concern.
#[inline]
pub fn drag_position(offset: Vec2, pointer: Vec2) -> Vec2 {
    pointer - offset
}

/// Calculate new geometry for a resize tick
///
/// Each moving boundary follows the pointer delta from gesture start, with
/// the resulting size clamped into `[min, max]`. For boundaries that are the
/// surface origin (west/north) the position is recomputed from the clamped
/// size, so the opposite boundary stays fixed even when clamping kicks in.
pub fn resize_geometry(
    edge: ResizeEdge,
    start_pos: Vec2,
    start_size: Size,
    start_pointer: Vec2,
    pointer: Vec2,
    min: Size,
    max: Size,
) -> Geometry {
    let delta = pointer - start_pointer;
    let mut position = start_pos;
    let mut size = start_size;

    if edge.resizes_east() {
        size.width = (start_size.width + delta.x).clamp(min.width, max.width);
    }
    if edge.resizes_west() {
        let fixed_right = start_pos.x + start_size.width;
        size.width = (start_size.width - delta.x).clamp(min.width, max.width);
        position.x = fixed_right - size.width;
    }
    if edge.resizes_south() {
        size.height = (start_size.height + delta.y).clamp(min.height, max.height);
    }
    if edge.resizes_north() {
        let fixed_bottom = start_pos.y + start_size.height;
        size.height = (start_size.height - delta.y).clamp(min.height, max.height);
        position.y = fixed_bottom - size.height;
    }

    Geometry::new(position, size)
}
