//! GLSL shader loading and validation.
//!
//! Sources are parsed with naga's GLSL front end and validated before any
//! GPU object exists, so compile and interface errors surface with readable
//! diagnostics. The validated modules are handed to wgpu as naga IR.

mod error;
mod program;
mod source;

pub use error::{ShaderError, ShaderStage};
pub use program::ShaderProgram;
pub use source::{ShaderSources, FRAGMENT_FILE, VERTEX_FILE};
