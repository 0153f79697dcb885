//! Surface configuration

use crate::math::{Size, Vec2};

/// Configuration for a floating surface
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceConfig {
    /// Position used on first launch and after `reset`
    pub initial_position: Vec2,
    /// Size used on first launch and after `reset`
    pub initial_size: Size,
    /// Minimum size constraint
    pub min_size: Size,
    /// Maximum size constraint
    pub max_size: Size,
    /// Persistence key identifying this surface (e.g. `"chatPopup"`)
    pub storage_key: String,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            initial_position: Vec2::ZERO,
            initial_size: Size::new(320.0, 400.0),
            min_size: Size::new(200.0, 150.0),
            max_size: Size::new(f32::INFINITY, f32::INFINITY),
            storage_key: String::new(),
        }
    }
}
