//! Render projection and frame hit-region constants

use serde::Serialize;

use crate::geometry::Geometry;

/// Absolute-positioning style for rendering a surface
///
/// A pure projection of the current geometry; recompute it after every
/// mutation rather than caching it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SurfaceStyle {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl SurfaceStyle {
    /// Project a geometry into its render style
    #[inline]
    pub fn from_geometry(geometry: &Geometry) -> Self {
        Self {
            left: geometry.position.x,
            top: geometry.position.y,
            width: geometry.size.width,
            height: geometry.size.height,
        }
    }
}

/// Frame hit-region dimensions for surface chrome
pub struct FrameStyle {
    /// Height of the drag handle strip at the top of the surface
    pub drag_handle_height: f32,
    /// Thickness of the edge resize handles
    pub resize_handle_size: f32,
    /// Side length of the corner resize handles
    pub corner_handle_size: f32,
}

/// Default frame style matching the chat window chrome
pub const FRAME_STYLE: FrameStyle = FrameStyle {
    drag_handle_height: 36.0,
    resize_handle_size: 8.0,
    corner_handle_size: 12.0,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Size, Vec2};

    #[test]
    fn test_style_projection() {
        let g = Geometry::new(Vec2::new(984.0, 16.0), Size::new(320.0, 400.0));
        let style = SurfaceStyle::from_geometry(&g);

        assert!((style.left - 984.0).abs() < 0.001);
        assert!((style.top - 16.0).abs() < 0.001);
        assert!((style.width - 320.0).abs() < 0.001);
        assert!((style.height - 400.0).abs() < 0.001);
    }

    #[test]
    fn test_style_serializes_to_css_keys() {
        let g = Geometry::new(Vec2::new(1.0, 2.0), Size::new(3.0, 4.0));
        let json = serde_json::to_string(&SurfaceStyle::from_geometry(&g)).unwrap();

        assert!(json.contains("\"left\""));
        assert!(json.contains("\"top\""));
        assert!(json.contains("\"width\""));
        assert!(json.contains("\"height\""));
    }
}
