//! Surface geometry and its persistence envelope

use serde::{Deserialize, Serialize};

use crate::math::{Rect, Size, Vec2};

/// Position and size of a floating surface
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    /// Top-left corner, viewport coordinates
    pub position: Vec2,
    /// Surface dimensions
    pub size: Size,
}

impl Geometry {
    /// Create a new geometry
    #[inline]
    pub const fn new(position: Vec2, size: Size) -> Self {
        Self { position, size }
    }

    /// Get the bounding rectangle
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.position, self.size)
    }
}

/// Versioned envelope for persisted geometry
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GeometrySnapshot {
    /// Version for migration support
    pub version: u32,
    /// The persisted geometry
    pub geometry: Geometry,
}

impl GeometrySnapshot {
    /// Current snapshot version
    pub const CURRENT_VERSION: u32 = 1;

    /// Wrap a geometry in a current-version snapshot
    pub fn new(geometry: Geometry) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            geometry,
        }
    }

    /// Check if snapshot needs migration
    pub fn needs_migration(&self) -> bool {
        self.version < Self::CURRENT_VERSION
    }

    /// Migrate snapshot to current version
    pub fn migrate(&mut self) {
        // Add migration logic as versions increase
        self.version = Self::CURRENT_VERSION;
    }
}
