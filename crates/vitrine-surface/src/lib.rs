//! Floating surface core for the Vitrine chat windows
//!
//! This crate provides the state management behind Vitrine's floating,
//! user-repositionable chat surfaces (the popup window and the vitrine
//! overlay):
//!
//! - Drag and resize gesture state machine
//! - Geometry clamping against per-surface size bounds
//! - Best-effort geometry persistence behind a key-value store seam
//! - Hit testing of pointer positions against the surface frame
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`math`]: Core geometry types (`Vec2`, `Size`, `Rect`)
//! - [`geometry`]: Persisted geometry and the [`GeometryStore`] seam
//! - [`gesture`]: Drag/resize sessions and the pure update math
//! - [`surface`]: The [`FloatingSurface`] controller composing the above
//!
//! ## Example
//!
//! ```rust
//! use vitrine_surface::{FloatingSurface, MemoryStore, Size, SurfaceConfig, Vec2};
//!
//! let mut surface = FloatingSurface::new(
//!     SurfaceConfig {
//!         initial_position: Vec2::new(984.0, 16.0),
//!         initial_size: Size::new(320.0, 400.0),
//!         min_size: Size::new(280.0, 300.0),
//!         max_size: Size::new(600.0, 800.0),
//!         storage_key: "chatPopup".to_string(),
//!     },
//!     MemoryStore::new(),
//! );
//!
//! surface.pointer_down_drag_handle(Vec2::new(1000.0, 30.0));
//! surface.pointer_move(Vec2::new(1050.0, 80.0));
//! surface.pointer_up();
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is pure Rust, testable
//!    without a browser
//! 2. **Total Operations**: Out-of-range input is clamped and protocol
//!    violations (pointer-up without pointer-down, duplicate pointer-down)
//!    are no-ops; no public operation panics or returns an error
//! 3. **Advisory Persistence**: Store failures are logged and swallowed; the
//!    worst case is a surface that stays at its last good position

pub mod geometry;
pub mod gesture;
pub mod math;
pub mod surface;

// Browser exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

pub use geometry::{Geometry, GeometrySnapshot, GeometryStore, MemoryStore, StoreError};
pub use gesture::{Gesture, GestureMode, ResizeEdge};
pub use math::{Rect, Size, Vec2};
pub use surface::{
    frame_region, FloatingSurface, FrameStyle, SurfaceConfig, SurfaceRegion, SurfaceStyle,
    FRAME_STYLE,
};
