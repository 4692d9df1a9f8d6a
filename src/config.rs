use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "photo_filter.json";

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

#[derive(Debug, Parser)]
#[command(name = "photo-filter", version, about = "View an image and invert it")]
pub struct Cli {
    /// Image to open at startup (png, jpg, jpeg)
    pub image: Option<PathBuf>,

    /// Where "Save as BMP" writes the filtered image
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// JSON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// Config file
// ---------------------------------------------------------------------------

/// Settings read from the JSON config file. Every field is optional.
///
/// ```json
/// { "output_path": "out.bmp", "zoom_step": 1.1, "window_size": [1024.0, 640.0] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output_path: PathBuf,
    /// Multiplier applied per zoom in / zoom out step.
    pub zoom_step: f32,
    pub window_size: [f32; 2],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("out.bmp"),
            zoom_step: 1.1,
            window_size: [1024.0, 640.0],
        }
    }
}

impl Config {
    /// Resolve the effective config from the command line.
    ///
    /// An explicit `--config` must exist; the default file is optional.
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };

        if let Some(output) = &cli.output {
            config.output_path = output.clone();
        }
        if config.zoom_step.is_nan() || config.zoom_step <= 1.0 {
            log::warn!(
                "zoom_step {} must be greater than 1, using the default",
                config.zoom_step
            );
            config.zoom_step = Self::default().zoom_step;
        }
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;

    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("photo-filter-{}-{name}", std::process::id()))
    }

    #[test]
    fn parses_positional_image_and_flags() {
        let cli = Cli::parse_from(["photo-filter", "cat.png", "-o", "inverted.bmp"]);
        assert_eq!(cli.image, Some(PathBuf::from("cat.png")));
        assert_eq!(cli.output, Some(PathBuf::from("inverted.bmp")));
        assert_eq!(cli.config, None);
    }

    #[test]
    fn no_arguments_is_valid() {
        let cli = Cli::parse_from(["photo-filter"]);
        assert!(cli.image.is_none());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = serde_json::from_str(r#"{ "zoom_step": 1.5 }"#).unwrap();
        assert_eq!(config.zoom_step, 1.5);
        assert_eq!(config.output_path, PathBuf::from("out.bmp"));
        assert_eq!(config.window_size, [1024.0, 640.0]);
    }

    #[test]
    fn cli_output_overrides_config_file() {
        let path = temp_path("config.json");
        std::fs::write(&path, r#"{ "output_path": "from_file.bmp", "zoom_step": 2.0 }"#)
            .unwrap();

        let cli = Cli::parse_from([
            OsString::from("photo-filter"),
            OsString::from("--config"),
            path.clone().into_os_string(),
            OsString::from("--output"),
            OsString::from("from_cli.bmp"),
        ]);
        let config = Config::load(&cli).unwrap();
        assert_eq!(config.output_path, PathBuf::from("from_cli.bmp"));
        assert_eq!(config.zoom_step, 2.0);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let cli = Cli::parse_from([
            OsString::from("photo-filter"),
            OsString::from("-c"),
            temp_path("nope.json").into_os_string(),
        ]);
        let err = Config::load(&cli).unwrap_err();
        assert!(format!("{err:#}").contains("reading config file"));
    }

    #[test]
    fn rejects_zoom_step_that_would_not_zoom() {
        let path = temp_path("bad-step.json");
        std::fs::write(&path, r#"{ "zoom_step": 0.5 }"#).unwrap();

        let cli = Cli::parse_from([
            OsString::from("photo-filter"),
            OsString::from("-c"),
            path.clone().into_os_string(),
        ]);
        assert_eq!(Config::load(&cli).unwrap().zoom_step, 1.1);

        std::fs::remove_file(&path).ok();
    }
}
