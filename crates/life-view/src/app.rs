use winit::window::WindowId;

use life_engine::core::{App, AppControl, FrameCtx};
use life_engine::input::{self, InputEvent, InputHandler};
use life_engine::render::{QuadRenderer, ViewUniform};
use life_engine::shader::ShaderProgram;
use life_engine::time::{status_title, FrameStats};

use crate::config::ViewerConfig;
use crate::controller::InputController;

/// The viewer: input controller + quad renderer + fps title reporting.
pub struct LifeViewApp {
    title: String,
    controller: InputController,
    renderer: QuadRenderer,
    stats: FrameStats,
}

impl LifeViewApp {
    pub fn new(config: &ViewerConfig, program: ShaderProgram) -> Self {
        Self {
            title: config.title.clone(),
            controller: InputController::new(config.exit_trigger),
            renderer: QuadRenderer::new(program),
            stats: FrameStats::new(config.report_interval, 0.0),
        }
    }
}

impl App for LifeViewApp {
    fn on_input(&mut self, _window_id: WindowId, event: &InputEvent) -> AppControl {
        input::dispatch(&mut self.controller, event)
    }

    fn on_resize(&mut self, _window_id: WindowId, width: f32, height: f32) {
        log::debug!("viewport resized to {width}x{height}");
        self.controller.on_resize(width, height);
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let uniform = ViewUniform::from_view(self.controller.view(), self.controller.viewport());

        let renderer = &mut self.renderer;
        let control = ctx.render(|rctx, target| renderer.render(rctx, target, &uniform));

        if let Some(report) = self.stats.tick(ctx.time.elapsed) {
            let title = status_title(&self.title, report.fps, self.controller.view().zoom());
            ctx.window.set_title(&title);
            log::debug!("{title} [{} frames]", report.frame_count);
        }

        control
    }
}
