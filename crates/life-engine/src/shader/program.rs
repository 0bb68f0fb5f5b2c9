use std::borrow::Cow;
use std::collections::BTreeSet;

use naga::valid::{Capabilities, ValidationFlags, Validator};

use super::{ShaderError, ShaderSources, ShaderStage};

/// Entry point name the GLSL front end gives every stage.
const ENTRY_POINT: &str = "main";

/// A validated vertex + fragment pair.
#[derive(Debug, Clone)]
pub struct ShaderProgram {
    vertex: naga::Module,
    fragment: naga::Module,
}

impl ShaderProgram {
    /// Compiles both stages and checks that they agree on their interface.
    pub fn build(sources: &ShaderSources) -> Result<Self, ShaderError> {
        let vertex = compile(ShaderStage::Vertex, &sources.vertex)?;
        let fragment = compile(ShaderStage::Fragment, &sources.fragment)?;

        link(&vertex, &fragment)?;
        log::info!("shader program built");

        Ok(Self { vertex, fragment })
    }

    #[inline]
    pub fn entry_point(&self) -> &'static str {
        ENTRY_POINT
    }

    /// Creates the wgpu shader module for `stage`.
    pub fn create_module(&self, device: &wgpu::Device, stage: ShaderStage) -> wgpu::ShaderModule {
        let (label, module) = match stage {
            ShaderStage::Vertex => ("life vertex shader", &self.vertex),
            ShaderStage::Fragment => ("life fragment shader", &self.fragment),
        };

        device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label),
            source: wgpu::ShaderSource::Naga(Cow::Owned(module.clone())),
        })
    }
}

fn compile(stage: ShaderStage, source: &str) -> Result<naga::Module, ShaderError> {
    let options = naga::front::glsl::Options::from(stage.to_naga());
    let module = naga::front::glsl::Frontend::default()
        .parse(&options, source)
        .map_err(|e| ShaderError::Compile {
            stage,
            log: e
                .errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n"),
        })?;

    Validator::new(ValidationFlags::all(), Capabilities::all())
        .validate(&module)
        .map_err(|e| ShaderError::Compile {
            stage,
            log: e.into_inner().to_string(),
        })?;

    log::debug!("{stage} shader compiled");
    Ok(module)
}

/// Every location the fragment stage reads must be written by the vertex stage.
fn link(vertex: &naga::Module, fragment: &naga::Module) -> Result<(), ShaderError> {
    let written = stage_outputs(vertex);
    let read = stage_inputs(fragment);

    let missing: Vec<String> = read.difference(&written).map(u32::to_string).collect();
    if missing.is_empty() {
        return Ok(());
    }

    Err(ShaderError::Link {
        log: format!(
            "fragment input location(s) {} not written by the vertex stage",
            missing.join(", ")
        ),
    })
}

fn stage_outputs(module: &naga::Module) -> BTreeSet<u32> {
    let mut out = BTreeSet::new();
    for ep in &module.entry_points {
        if let Some(result) = &ep.function.result {
            collect_locations(module, result.ty, result.binding.as_ref(), &mut out);
        }
    }
    out
}

fn stage_inputs(module: &naga::Module) -> BTreeSet<u32> {
    let mut out = BTreeSet::new();
    for ep in &module.entry_points {
        for arg in &ep.function.arguments {
            collect_locations(module, arg.ty, arg.binding.as_ref(), &mut out);
        }
    }
    out
}

fn collect_locations(
    module: &naga::Module,
    ty: naga::Handle<naga::Type>,
    binding: Option<&naga::Binding>,
    out: &mut BTreeSet<u32>,
) {
    match binding {
        Some(naga::Binding::Location { location, .. }) => {
            out.insert(*location);
        }
        Some(naga::Binding::BuiltIn(_)) => {}
        None => {
            if let naga::TypeInner::Struct { members, .. } = &module.types[ty].inner {
                for m in members {
                    collect_locations(module, m.ty, m.binding.as_ref(), out);
                }
            }
        }
    }
}
