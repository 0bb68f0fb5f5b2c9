use std::path::PathBuf;

use life_engine::device::GpuInit;
use life_engine::input::KeyState;
use life_engine::time::FrameStats;
use life_engine::window::RuntimeConfig;
use winit::dpi::LogicalSize;

/// Which edge of the Escape key ends the program.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, clap::ValueEnum)]
pub enum ExitTrigger {
    /// Exit as soon as Escape goes down (repeats ignored).
    Press,
    /// Exit when Escape is let go.
    #[default]
    Release,
}

impl ExitTrigger {
    pub fn fires_on(self, state: KeyState, repeat: bool) -> bool {
        match self {
            ExitTrigger::Press => state == KeyState::Pressed && !repeat,
            ExitTrigger::Release => state == KeyState::Released,
        }
    }
}

/// Graphics API wgpu may use.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, clap::ValueEnum)]
pub enum Backend {
    #[default]
    Auto,
    Gl,
    Vulkan,
    Metal,
    Dx12,
}

impl Backend {
    fn to_wgpu(self) -> wgpu::Backends {
        match self {
            Backend::Auto => wgpu::Backends::all(),
            Backend::Gl => wgpu::Backends::GL,
            Backend::Vulkan => wgpu::Backends::VULKAN,
            Backend::Metal => wgpu::Backends::METAL,
            Backend::Dx12 => wgpu::Backends::DX12,
        }
    }
}

/// Everything the viewer needs to start, independent of how it was parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub shader_dir: PathBuf,
    pub exit_trigger: ExitTrigger,
    pub report_interval: f64,
    pub vsync: bool,
    pub backend: Backend,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "Game of Life".to_string(),
            width: 800.0,
            height: 600.0,
            shader_dir: PathBuf::from("shader"),
            exit_trigger: ExitTrigger::default(),
            report_interval: FrameStats::DEFAULT_REPORT_INTERVAL,
            vsync: true,
            backend: Backend::default(),
        }
    }
}

impl ViewerConfig {
    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: self.title.clone(),
            initial_size: LogicalSize::new(self.width, self.height),
        }
    }

    pub fn gpu_init(&self) -> GpuInit {
        GpuInit {
            backends: self.backend.to_wgpu(),
            present_mode: if self.vsync {
                wgpu::PresentMode::Fifo
            } else {
                wgpu::PresentMode::AutoNoVsync
            },
            ..GpuInit::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_trigger_ignores_press() {
        let t = ExitTrigger::Release;
        assert!(!t.fires_on(KeyState::Pressed, false));
        assert!(t.fires_on(KeyState::Released, false));
    }

    #[test]
    fn press_trigger_ignores_repeats_and_release() {
        let t = ExitTrigger::Press;
        assert!(t.fires_on(KeyState::Pressed, false));
        assert!(!t.fires_on(KeyState::Pressed, true));
        assert!(!t.fires_on(KeyState::Released, false));
    }

    #[test]
    fn defaults_match_classic_window() {
        let cfg = ViewerConfig::default();
        let rt = cfg.runtime_config();
        assert_eq!(rt.title, "Game of Life");
        assert_eq!(rt.initial_size, LogicalSize::new(800.0, 600.0));
        assert_eq!(cfg.gpu_init().present_mode, wgpu::PresentMode::Fifo);
        assert_eq!(cfg.gpu_init().backends, wgpu::Backends::all());
    }

    #[test]
    fn no_vsync_and_gl_backend() {
        let cfg = ViewerConfig { vsync: false, backend: Backend::Gl, ..ViewerConfig::default() };
        let gpu = cfg.gpu_init();
        assert_eq!(gpu.present_mode, wgpu::PresentMode::AutoNoVsync);
        assert_eq!(gpu.backends, wgpu::Backends::GL);
    }
}
