//! wgpu device and window surface.
//!
//! [`Gpu`] is created once per window from a [`GpuInit`] and hands out one
//! [`Frame`] at a time to the frame loop.

mod context;
mod init;
mod surface;

pub use context::{Frame, Gpu};
pub use init::GpuInit;
pub use surface::SurfaceErrorAction;
