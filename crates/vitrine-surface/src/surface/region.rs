//! Surface frame hit testing

use crate::gesture::ResizeEdge;
use crate::math::{Rect, Vec2};

use super::style::FrameStyle;

/// Region of a surface frame for hit testing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceRegion {
    /// Drag handle strip (for moving the surface)
    DragHandle,
    /// Content area
    Content,
    /// Resize handle
    Resize(ResizeEdge),
}

impl SurfaceRegion {
    /// Get CSS cursor style for this region
    pub fn cursor(&self) -> &'static str {
        match self {
            SurfaceRegion::DragHandle => "move",
            SurfaceRegion::Content => "default",
            SurfaceRegion::Resize(edge) => edge.cursor(),
        }
    }
}

/// Classify a pointer position against a surface rectangle
///
/// Corners take priority over the drag handle so corner grabs work at the
/// top of the surface; the drag handle takes priority over plain edges.
/// Returns `None` when the pointer is outside the surface.
pub fn frame_region(rect: Rect, pointer: Vec2, style: &FrameStyle) -> Option<SurfaceRegion> {
    if !rect.contains(pointer) {
        return None;
    }

    if let Some(edge) = hit_test_corners(rect, pointer, style.corner_handle_size) {
        return Some(SurfaceRegion::Resize(edge));
    }

    if pointer.y < rect.y + style.drag_handle_height {
        return Some(SurfaceRegion::DragHandle);
    }

    if let Some(edge) = hit_test_edges(rect, pointer, style.resize_handle_size) {
        return Some(SurfaceRegion::Resize(edge));
    }

    Some(SurfaceRegion::Content)
}

/// Hit test corner resize handles
fn hit_test_corners(rect: Rect, pointer: Vec2, handle: f32) -> Option<ResizeEdge> {
    let in_left = pointer.x < rect.x + handle;
    let in_right = pointer.x > rect.right() - handle;
    let in_top = pointer.y < rect.y + handle;
    let in_bottom = pointer.y > rect.bottom() - handle;

    if in_top && in_left {
        return Some(ResizeEdge::NW);
    }
    if in_top && in_right {
        return Some(ResizeEdge::NE);
    }
    if in_bottom && in_left {
        return Some(ResizeEdge::SW);
    }
    if in_bottom && in_right {
        return Some(ResizeEdge::SE);
    }
    None
}

/// Hit test edge resize handles (non-corner)
fn hit_test_edges(rect: Rect, pointer: Vec2, handle: f32) -> Option<ResizeEdge> {
    if pointer.y < rect.y + handle {
        return Some(ResizeEdge::N);
    }
    if pointer.y > rect.bottom() - handle {
        return Some(ResizeEdge::S);
    }
    if pointer.x < rect.x + handle {
        return Some(ResizeEdge::W);
    }
    if pointer.x > rect.right() - handle {
        return Some(ResizeEdge::E);
    }
    None
}
