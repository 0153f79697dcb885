//! Floating surface controller
//!
//! Composes the geometry store and gesture math into the state machine a
//! view binds to: pointer handlers in, a render style out.

mod config;
mod controller;
mod region;
mod style;

pub use config::SurfaceConfig;
pub use controller::FloatingSurface;
pub use region::{frame_region, SurfaceRegion};
pub use style::{FrameStyle, SurfaceStyle, FRAME_STYLE};
