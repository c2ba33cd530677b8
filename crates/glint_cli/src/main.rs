//! Glint command line front end.
//!
//! Renders the demo scene once and writes the RGBA buffer to a PNG file.
//! The two light switches are exposed as flags; each invocation is one full
//! frame.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use glint_core::Scene;
use glint_renderer::{render, ImageBuffer, RenderConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Switch {
    On,
    Off,
}

impl Switch {
    fn is_on(self) -> bool {
        self == Switch::On
    }
}

/// Whitted ray tracer: renders the demo scene to a PNG.
#[derive(Debug, Parser)]
#[command(name = "glint", version)]
struct Args {
    /// JSON render settings; missing fields use the defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Vertical field of view in degrees
    #[arg(long)]
    fov: Option<f32>,

    /// Maximum reflection/refraction depth (at most 16)
    #[arg(long)]
    max_depth: Option<u32>,

    /// First light (upper left)
    #[arg(long, value_enum, default_value = "on")]
    light1: Switch,

    /// Second light (upper right)
    #[arg(long, value_enum, default_value = "on")]
    light2: Switch,

    /// Output PNG path
    #[arg(short, long, default_value = "glint.png")]
    output: PathBuf,

    /// Print the effective settings as JSON and exit
    #[arg(long)]
    print_config: bool,
}

impl Args {
    /// Settings file (if any) with command line overrides applied.
    fn render_config(&self) -> Result<RenderConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => RenderConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(fov) = self.fov {
            config.fov = fov;
        }
        if let Some(max_depth) = self.max_depth {
            config.max_depth = max_depth;
        }

        config.validate()?;
        Ok(config)
    }
}

fn load_config(path: &Path) -> Result<RenderConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    log::info!("Loaded settings from {}", path.display());
    Ok(config)
}

fn save_png(image: ImageBuffer, path: &Path) -> Result<()> {
    let (width, height) = (image.width, image.height);
    let buffer = image::RgbaImage::from_raw(width, height, image.into_bytes())
        .context("Pixel buffer does not match image dimensions")?;
    buffer
        .save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = args.render_config()?;

    if args.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let mut scene = Scene::demo()?;
    scene.set_light_enabled(0, args.light1.is_on())?;
    scene.set_light_enabled(1, args.light2.is_on())?;

    let start = Instant::now();
    let image = render(&scene, &config)?;
    log::info!("Rendered in {:?}", start.elapsed());

    save_png(image, &args.output)?;
    log::info!("Saved to {}", args.output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["glint"]).unwrap();
        assert!(args.light1.is_on());
        assert!(args.light2.is_on());
        assert_eq!(args.output, PathBuf::from("glint.png"));
        assert_eq!(args.render_config().unwrap(), RenderConfig::default());
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "glint",
            "--width",
            "64",
            "--height",
            "48",
            "--max-depth",
            "0",
            "--light2",
            "off",
        ])
        .unwrap();

        let config = args.render_config().unwrap();
        assert_eq!((config.width, config.height), (64, 48));
        assert_eq!(config.max_depth, 0);
        assert_eq!(config.fov, 60.0);
        assert!(args.light1.is_on());
        assert!(!args.light2.is_on());
    }

    #[test]
    fn test_invalid_override_rejected() {
        let args = Args::try_parse_from(["glint", "--fov", "0"]).unwrap();
        assert!(args.render_config().is_err());

        let args = Args::try_parse_from(["glint", "--max-depth", "1000"]).unwrap();
        let err = args.render_config().unwrap_err();
        assert!(err.to_string().contains("Max depth"), "{err}");

        assert!(Args::try_parse_from(["glint", "--light1", "dim"]).is_err());
    }

    #[test]
    fn test_missing_config_file() {
        let args = Args::try_parse_from(["glint", "--config", "/nonexistent/glint.json"]).unwrap();
        let err = args.render_config().unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }

    #[test]
    fn test_config_file_with_overrides() {
        let path = std::env::temp_dir().join(format!("glint_cli_test_{}.json", std::process::id()));
        fs::write(&path, r#"{ "width": 100, "height": 50, "fov": 45.0 }"#).unwrap();

        let path_arg = path.to_string_lossy().into_owned();
        let args = Args::try_parse_from(["glint", "--config", path_arg.as_str(), "--height", "75"])
            .unwrap();
        let config = args.render_config().unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(config.width, 100);
        assert_eq!(config.height, 75);
        assert_eq!(config.fov, 45.0);
        assert_eq!(config.max_depth, 5);
    }

    #[test]
    fn test_save_png_round_trip_size() {
        let path = std::env::temp_dir().join(format!("glint_cli_test_{}.png", std::process::id()));
        let mut image = ImageBuffer::new(3, 2);
        image.set(2, 1, [10, 20, 30, 255]);

        save_png(image, &path).unwrap();
        let metadata = fs::metadata(&path).unwrap();
        fs::remove_file(&path).ok();
        assert!(metadata.len() > 0);
    }
}
