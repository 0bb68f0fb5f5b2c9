use std::path::PathBuf;

use clap::Parser;

use crate::config::{Backend, ExitTrigger, ViewerConfig};

/// Pan/zoom viewer for a GPU Game of Life canvas
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Window width in logical pixels
    #[arg(long, default_value_t = 800.0)]
    pub width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 600.0)]
    pub height: f64,

    /// Base window title (fps and zoom are appended)
    #[arg(long, default_value = "Game of Life")]
    pub title: String,

    /// Directory holding main.vert and main.frag
    #[arg(long, value_name = "DIR", default_value = "shader")]
    pub shader_dir: PathBuf,

    /// Escape key edge that quits
    #[arg(long, value_enum, default_value_t = ExitTrigger::Release)]
    pub exit_on: ExitTrigger,

    /// Seconds between fps title updates
    #[arg(long, value_name = "SECS", default_value_t = 0.25, value_parser = parse_interval)]
    pub report_interval: f64,

    /// Present without waiting for vertical sync
    #[arg(long)]
    pub no_vsync: bool,

    /// Graphics backend
    #[arg(long, value_enum, default_value_t = Backend::Auto)]
    pub backend: Backend,

    /// Increase logging verbosity (default: info, -v: debug, -vv+: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,

    /// Explicit env_logger filter; overrides -v and RUST_LOG
    #[arg(long, value_name = "FILTER")]
    pub log_filter: Option<String>,
}

impl Args {
    /// Logger filter implied by the flags, `None` to defer to `RUST_LOG`.
    pub fn log_filter(&self) -> Option<String> {
        if let Some(filter) = &self.log_filter {
            return Some(filter.clone());
        }
        let level = match self.verbosity {
            0 => return None,
            1 => "debug",
            _ => "trace",
        };
        Some(format!("{level},wgpu_core=warn,wgpu_hal=warn,naga=warn"))
    }
}

impl From<Args> for ViewerConfig {
    fn from(args: Args) -> Self {
        Self {
            title: args.title,
            width: args.width,
            height: args.height,
            shader_dir: args.shader_dir,
            exit_trigger: args.exit_on,
            report_interval: args.report_interval,
            vsync: !args.no_vsync,
            backend: args.backend,
        }
    }
}

fn parse_interval(s: &str) -> Result<f64, String> {
    let secs: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if secs > 0.0 && secs.is_finite() {
        Ok(secs)
    } else {
        Err("must be a positive number of seconds".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("life-view").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_convert_to_default_config() {
        let cfg: ViewerConfig = parse(&[]).into();
        assert_eq!(cfg, ViewerConfig::default());
    }

    #[test]
    fn flags_reach_config() {
        let cfg: ViewerConfig = parse(&[
            "--width", "1024",
            "--height", "768",
            "--exit-on", "press",
            "--report-interval", "1",
            "--no-vsync",
            "--backend", "gl",
            "--shader-dir", "assets/glsl",
        ])
        .into();

        assert_eq!(cfg.width, 1024.0);
        assert_eq!(cfg.height, 768.0);
        assert_eq!(cfg.exit_trigger, ExitTrigger::Press);
        assert_eq!(cfg.report_interval, 1.0);
        assert!(!cfg.vsync);
        assert_eq!(cfg.backend, Backend::Gl);
        assert_eq!(cfg.shader_dir, PathBuf::from("assets/glsl"));
    }

    #[test]
    fn non_positive_interval_is_rejected() {
        assert!(Args::try_parse_from(["life-view", "--report-interval", "0"]).is_err());
        assert!(Args::try_parse_from(["life-view", "--report-interval", "-1"]).is_err());
    }

    #[test]
    fn verbosity_maps_to_filter() {
        assert_eq!(parse(&[]).log_filter(), None);
        assert!(parse(&["-v"]).log_filter().unwrap().starts_with("debug,"));
        assert!(parse(&["-vvv"]).log_filter().unwrap().starts_with("trace,"));
        assert_eq!(parse(&["-v", "--log-filter", "warn"]).log_filter().as_deref(), Some("warn"));
    }
}
