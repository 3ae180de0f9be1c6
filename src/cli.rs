// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "prism-viewer")]
#[command(about = "Decagonal prism viewer with a free-fly camera", long_about = None)]
pub struct Cli {
    /// JSON settings file; missing fields keep their defaults
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable the HUD overlay
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,

    /// Advance every frame by this many seconds instead of wall-clock time
    #[arg(long = "fixed-step", value_name = "SECONDS")]
    pub fixed_step: Option<f32>,

    /// Camera movement speed in units per second
    #[arg(long)]
    pub speed: Option<f32>,

    /// Degrees of yaw/pitch per pixel of pointer movement
    #[arg(long)]
    pub sensitivity: Option<f32>,

    /// Initial window width in logical pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Initial window height in logical pixels
    #[arg(long)]
    pub height: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_overrides() {
        let cli = Cli::try_parse_from([
            "prism-viewer",
            "--no-ui",
            "--fixed-step",
            "0.01",
            "--speed",
            "4",
            "--config",
            "view.json",
        ])
        .unwrap();

        assert!(cli.no_ui);
        assert_eq!(cli.fixed_step, Some(0.01));
        assert_eq!(cli.speed, Some(4.0));
        assert_eq!(cli.config, Some(PathBuf::from("view.json")));
        assert_eq!(cli.width, None);
    }

    #[test]
    fn defaults_are_empty() {
        let cli = Cli::try_parse_from(["prism-viewer"]).unwrap();
        assert!(!cli.no_ui);
        assert!(cli.config.is_none());
        assert!(cli.sensitivity.is_none());
    }
}
