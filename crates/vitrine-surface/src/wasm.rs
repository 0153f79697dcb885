//! WASM exports for the floating surface controller
//!
//! This module provides wasm-bindgen exports for `FloatingSurface`,
//! allowing the view layer to drive surfaces directly from pointer event
//! handlers, with geometry persisted in `localStorage`.

use wasm_bindgen::prelude::*;

use crate::geometry::{GeometryStore, StoreError};
use crate::gesture::ResizeEdge;
use crate::math::{Size, Vec2};
use crate::surface::{frame_region, FloatingSurface, SurfaceConfig, FRAME_STYLE};

/// Geometry store backed by the browser's `localStorage`
///
/// The backend is resolved per call; a page without `localStorage` (storage
/// disabled, sandboxed frame) reports `Unavailable` and the store seam
/// degrades to the in-memory fallback behavior.
#[derive(Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    /// Create a new localStorage-backed store
    pub fn new() -> Self {
        Self
    }

    fn backend() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .ok_or(StoreError::Unavailable)?
            .local_storage()
            .map_err(|_| StoreError::Unavailable)?
            .ok_or(StoreError::Unavailable)
    }
}

impl GeometryStore for LocalStorageStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        Self::backend()?
            .get_item(key)
            .map_err(|_| StoreError::Backend("getItem failed".to_string()))
    }

    fn set_raw(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        // setItem rejection is almost always the quota
        Self::backend()?
            .set_item(key, value)
            .map_err(|_| StoreError::QuotaExceeded)
    }

    fn remove_raw(&mut self, key: &str) -> Result<(), StoreError> {
        Self::backend()?
            .remove_item(key)
            .map_err(|_| StoreError::Backend("removeItem failed".to_string()))
    }
}

/// Surface controller for WASM - wraps `FloatingSurface` with a JS-friendly
/// API
#[wasm_bindgen]
pub struct SurfaceController {
    surface: FloatingSurface<LocalStorageStore>,
}

#[wasm_bindgen]
impl SurfaceController {
    /// Create a controller for a named surface
    #[wasm_bindgen(constructor)]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        storage_key: String,
        initial_x: f32,
        initial_y: f32,
        initial_width: f32,
        initial_height: f32,
        min_width: f32,
        min_height: f32,
        max_width: f32,
        max_height: f32,
    ) -> Self {
        let config = SurfaceConfig {
            initial_position: Vec2::new(initial_x, initial_y),
            initial_size: Size::new(initial_width, initial_height),
            min_size: Size::new(min_width, min_height),
            max_size: Size::new(max_width, max_height),
            storage_key,
        };
        Self {
            surface: FloatingSurface::new(config, LocalStorageStore::new()),
        }
    }

    /// Begin a drag gesture from the drag handle
    #[wasm_bindgen]
    pub fn begin_drag(&mut self, x: f32, y: f32) {
        self.surface.pointer_down_drag_handle(Vec2::new(x, y));
    }

    /// Begin a resize gesture; unknown directions are ignored
    #[wasm_bindgen]
    pub fn begin_resize(&mut self, direction: &str, x: f32, y: f32) {
        let edge = match ResizeEdge::parse(direction) {
            Some(edge) => edge,
            None => return,
        };
        self.surface.pointer_down_resize_handle(edge, Vec2::new(x, y));
    }

    /// Hit test a pointer-down and begin the matching gesture
    ///
    /// Returns true when the pointer hit the surface.
    #[wasm_bindgen]
    pub fn pointer_down(&mut self, x: f32, y: f32) -> bool {
        self.surface.pointer_down(Vec2::new(x, y)).is_some()
    }

    /// Handle a pointer-move tick
    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.surface.pointer_move(Vec2::new(x, y));
    }

    /// End the active gesture
    #[wasm_bindgen]
    pub fn pointer_up(&mut self) {
        self.surface.pointer_up();
    }

    /// Restore the constructor defaults
    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.surface.reset();
    }

    /// Center the surface in the viewport
    #[wasm_bindgen]
    pub fn center(&mut self, viewport_width: f32, viewport_height: f32) {
        self.surface.center(Size::new(viewport_width, viewport_height));
    }

    /// Check if a gesture is in flight
    #[wasm_bindgen]
    pub fn is_gesturing(&self) -> bool {
        !self.surface.mode().is_idle()
    }

    /// Get the render style as JSON (`{left, top, width, height}`)
    #[wasm_bindgen]
    pub fn style_json(&self) -> String {
        serde_json::to_string(&self.surface.style()).unwrap_or_else(|_| "{}".to_string())
    }

    /// CSS cursor name for a pointer position over the surface frame
    #[wasm_bindgen]
    pub fn cursor_at(&self, x: f32, y: f32) -> String {
        frame_region(self.surface.geometry().rect(), Vec2::new(x, y), &FRAME_STYLE)
            .map(|region| region.cursor())
            .unwrap_or("default")
            .to_string()
    }
}
