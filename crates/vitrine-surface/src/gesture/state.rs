//! Gesture session state

use crate::math::{Size, Vec2};

use super::ResizeEdge;

/// An in-flight pointer gesture
///
/// Sessions capture everything at pointer-down; each pointer-move is then a
/// pure function of the absolute pointer position, so dropped intermediate
/// move events cannot make the surface drift.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    /// Moving the surface
    Drag {
        /// Offset from surface origin to the pointer at gesture start
        offset: Vec2,
    },
    /// Resizing the surface
    Resize {
        /// Which handle is being dragged
        edge: ResizeEdge,
        /// Surface position at start
        start_pos: Vec2,
        /// Surface size at start
        start_size: Size,
        /// Pointer position at start
        start_pointer: Vec2,
    },
}

impl Gesture {
    /// Check if this is a drag operation
    #[inline]
    pub fn is_drag(&self) -> bool {
        matches!(self, Gesture::Drag { .. })
    }

    /// Check if this is a resize operation
    #[inline]
    pub fn is_resize(&self) -> bool {
        matches!(self, Gesture::Resize { .. })
    }

    /// Project onto the coarse gesture mode
    pub fn mode(&self) -> GestureMode {
        match self {
            Gesture::Drag { .. } => GestureMode::Dragging,
            Gesture::Resize { edge, .. } => GestureMode::Resizing(*edge),
        }
    }
}

/// Coarse gesture mode, for callers that only need to know what is active
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GestureMode {
    /// No gesture in flight
    #[default]
    Idle,
    /// Surface is being moved
    Dragging,
    /// Surface is being resized via the given handle
    Resizing(ResizeEdge),
}

impl GestureMode {
    /// Check if no gesture is active
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, GestureMode::Idle)
    }
}
