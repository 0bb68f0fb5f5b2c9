use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use life_engine::logging::{init_logging, LoggingConfig};
use life_engine::shader::{ShaderProgram, ShaderSources};
use life_engine::window::Runtime;

mod app;
mod cli;
mod config;
mod controller;

use app::LifeViewApp;
use cli::Args;
use config::ViewerConfig;

/// Exit status for any startup failure (the classic `exit(-1)`).
const INIT_FAILURE: u8 = 255;

fn main() -> ExitCode {
    let args = Args::parse();

    init_logging(LoggingConfig {
        env_filter: args.log_filter(),
        ..LoggingConfig::default()
    });

    match run(args.into()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(INIT_FAILURE)
        }
    }
}

fn run(config: ViewerConfig) -> Result<()> {
    log::info!("starting {} ({}x{})", config.title, config.width, config.height);

    let sources = ShaderSources::load(&config.shader_dir)?;
    let program = ShaderProgram::build(&sources)
        .with_context(|| format!("building shaders from {}", config.shader_dir.display()))?;

    let app = LifeViewApp::new(&config, program);
    Runtime::run(config.runtime_config(), config.gpu_init(), app)?;

    log::info!("shutting down");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn bundled_shaders_build() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../shader");
        let sources = ShaderSources::load(&dir).unwrap();
        ShaderProgram::build(&sources).unwrap();
    }
}
