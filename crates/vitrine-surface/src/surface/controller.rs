//! Floating surface state machine

use crate::geometry::{Geometry, GeometryStore};
use crate::gesture::{self, Gesture, GestureMode, ResizeEdge};
use crate::math::{Size, Vec2};

use super::region::{frame_region, SurfaceRegion};
use super::style::{SurfaceStyle, FRAME_STYLE};
use super::SurfaceConfig;

/// State machine for one floating surface
///
/// Owns the geometry for its storage key; two live controllers sharing a
/// key are unsupported (last writer wins). The view layer translates raw
/// input events into `Vec2` pointer positions and calls the `pointer_*`
/// methods; out-of-protocol calls (pointer-up without pointer-down,
/// pointer-down mid-gesture) are no-ops because pointer event ordering
/// across devices is unreliable.
///
/// Every mutating operation persists through the store before returning;
/// store failures are logged inside the store seam and never surface here.
/// Dropping the controller discards any in-flight gesture.
pub struct FloatingSurface<S: GeometryStore> {
    config: SurfaceConfig,
    store: S,
    geometry: Geometry,
    gesture: Option<Gesture>,
}

impl<S: GeometryStore> FloatingSurface<S> {
    /// Create a controller, restoring persisted geometry when present
    ///
    /// A persisted or configured size that violates the bounds (bounds may
    /// change between sessions) is clamped rather than rejected. A max
    /// bound below the min bound is raised to the min bound. The repaired
    /// initial size is what `reset` restores.
    pub fn new(mut config: SurfaceConfig, store: S) -> Self {
        config.max_size = config.max_size.max(config.min_size);
        config.initial_size = config.initial_size.clamp(config.min_size, config.max_size);

        let fallback = Geometry::new(config.initial_position, config.initial_size);
        let mut geometry = store.load(&config.storage_key).unwrap_or(fallback);
        geometry.size = geometry.size.clamp(config.min_size, config.max_size);

        Self {
            config,
            store,
            geometry,
            gesture: None,
        }
    }

    /// Current geometry
    #[inline]
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Current gesture mode
    pub fn mode(&self) -> GestureMode {
        self.gesture.map(|g| g.mode()).unwrap_or_default()
    }

    /// Current render style; a fresh projection on every call
    #[inline]
    pub fn style(&self) -> SurfaceStyle {
        SurfaceStyle::from_geometry(&self.geometry)
    }

    /// Begin a drag gesture from the drag handle
    ///
    /// Ignored unless idle: a second pointer-down mid-gesture is a protocol
    /// violation, not an error.
    pub fn pointer_down_drag_handle(&mut self, pointer: Vec2) {
        if self.gesture.is_some() {
            return;
        }
        self.gesture = Some(Gesture::Drag {
            offset: pointer - self.geometry.position,
        });
    }

    /// Begin a resize gesture from an edge or corner handle
    ///
    /// Ignored unless idle.
    pub fn pointer_down_resize_handle(&mut self, edge: ResizeEdge, pointer: Vec2) {
        if self.gesture.is_some() {
            return;
        }
        self.gesture = Some(Gesture::Resize {
            edge,
            start_pos: self.geometry.position,
            start_size: self.geometry.size,
            start_pointer: pointer,
        });
    }

    /// Classify a pointer-down against the frame and begin the matching
    /// gesture
    ///
    /// Convenience for hosts that don't pre-classify their hit regions.
    /// Returns the region hit, or `None` when the pointer missed the
    /// surface.
    pub fn pointer_down(&mut self, pointer: Vec2) -> Option<SurfaceRegion> {
        let region = frame_region(self.geometry.rect(), pointer, &FRAME_STYLE)?;
        match region {
            SurfaceRegion::DragHandle => self.pointer_down_drag_handle(pointer),
            SurfaceRegion::Resize(edge) => self.pointer_down_resize_handle(edge, pointer),
            SurfaceRegion::Content => {}
        }
        Some(region)
    }

    /// Handle a pointer-move tick; no-op when idle
    pub fn pointer_move(&mut self, pointer: Vec2) {
        match self.gesture {
            None => return,
            Some(Gesture::Drag { offset }) => {
                self.geometry.position = gesture::drag_position(offset, pointer);
            }
            Some(Gesture::Resize {
                edge,
                start_pos,
                start_size,
                start_pointer,
            }) => {
                self.geometry = gesture::resize_geometry(
                    edge,
                    start_pos,
                    start_size,
                    start_pointer,
                    pointer,
                    self.config.min_size,
                    self.config.max_size,
                );
            }
        }
        self.persist();
    }

    /// End the active gesture; idempotent
    ///
    /// Pointer-up can fire without a matching pointer-down having been seen
    /// (the gesture may have started over a child element that stopped
    /// propagation), so calling this while idle is a no-op.
    pub fn pointer_up(&mut self) {
        self.gesture = None;
    }

    /// Restore the constructor defaults, discarding any in-flight gesture
    /// and the persisted value
    pub fn reset(&mut self) {
        self.gesture = None;
        self.geometry = Geometry::new(self.config.initial_position, self.config.initial_size);
        self.store.clear(&self.config.storage_key);
        self.persist();
    }

    /// Center the surface in the given viewport, floored at the origin
    pub fn center(&mut self, viewport: Size) {
        let centered = (viewport.as_vec2() - self.geometry.size.as_vec2()) / 2.0;
        self.geometry.position = centered.max(Vec2::ZERO);
        self.persist();
    }

    /// Dispose the controller, discarding any in-flight gesture and
    /// returning the backing store
    ///
    /// Matches view unmount: the gesture is implicitly cancelled, the last
    /// persisted geometry stays in the store.
    pub fn into_store(self) -> S {
        self.store
    }

    fn persist(&mut self) {
        self.store.save(&self.config.storage_key, &self.geometry);
    }
}
