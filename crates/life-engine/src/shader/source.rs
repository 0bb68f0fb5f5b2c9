use std::path::Path;

use super::ShaderError;

pub const VERTEX_FILE: &str = "main.vert";
pub const FRAGMENT_FILE: &str = "main.frag";

/// Raw GLSL text of the two pipeline stages.
#[derive(Debug, Clone, PartialEq)]
pub struct ShaderSources {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderSources {
    pub fn new(vertex: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self {
            vertex: vertex.into(),
            fragment: fragment.into(),
        }
    }

    /// Reads `dir/main.vert` and `dir/main.frag`.
    pub fn load(dir: &Path) -> Result<Self, ShaderError> {
        let read = |name: &str| {
            let path = dir.join(name);
            std::fs::read_to_string(&path).map_err(|source| ShaderError::Io { path, source })
        };

        let sources = Self::new(read(VERTEX_FILE)?, read(FRAGMENT_FILE)?);
        log::debug!("loaded shader sources from {}", dir.display());
        Ok(sources)
    }
}
