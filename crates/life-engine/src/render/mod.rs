//! GPU rendering subsystem.
//!
//! The only geometry is a static full-screen quad; all per-frame state
//! reaches the shaders through one uniform block (`ViewUniform`).
//!
//! Convention:
//! - Quad corners sit at clip-space -1..1 on both axes.
//! - UV equals position (-1..1, +Y up); the fragment stage derives pixel
//!   offsets from it using the viewport uniform.

mod ctx;
mod quad;

pub use ctx::{RenderCtx, RenderTarget};
pub use quad::{QuadRenderer, ViewUniform};
