//! Coordinate types shared by input handling and the renderer.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! The view shader flips Y; see `view` for the pan sign convention.

mod vec2;
mod viewport;

pub use vec2::Vec2;
pub use viewport::Viewport;
