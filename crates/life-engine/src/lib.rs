//! life-engine.
//!
//! Platform + GPU runtime for the life-view viewer: window and event loop,
//! input translation, frame timing, view (pan/zoom) state, GLSL shader
//! validation and a full-screen quad renderer.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod shader;
pub mod view;
