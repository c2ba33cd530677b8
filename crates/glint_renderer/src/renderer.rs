//! Frame rendering.
//!
//! Maps every pixel to a primary ray, traces it, gamma-encodes the result
//! and packs it into an RGBA8 buffer:
//! - One ray per pixel through the pixel center
//! - Rows traced in parallel with rayon
//! - Gamma applied before clamping

use std::time::Instant;

use glint_core::{Color, Scene};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{trace, Camera};

/// Largest accepted `max_depth`. A surface that both reflects and refracts
/// spawns two rays per bounce, so work per pixel grows as `2^max_depth`.
pub const MAX_DEPTH_LIMIT: u32 = 16;

/// Errors for render settings that cannot produce an image.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Image must have at least one pixel, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("Field of view must be between 0 and 180 degrees, got {0}")]
    InvalidFov(f32),

    #[error("Gamma must be finite and positive, got {0}")]
    InvalidGamma(f32),

    #[error("Max depth must be at most {max}, got {0}", max = MAX_DEPTH_LIMIT)]
    DepthTooLarge(u32),
}

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Maximum number of reflection/refraction bounces
    pub max_depth: u32,
    /// Display gamma; channels are raised to 1/gamma
    pub gamma: f32,
    /// Color returned by rays that hit nothing
    pub background: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            fov: 60.0,
            max_depth: 5,
            gamma: 2.2,
            background: Color::new(0.2, 0.7, 1.0),
        }
    }
}

impl RenderConfig {
    /// Check that the settings describe a renderable image.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyImage {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.fov > 0.0 && self.fov < 180.0) {
            return Err(ConfigError::InvalidFov(self.fov));
        }
        if !(self.gamma.is_finite() && self.gamma > 0.0) {
            return Err(ConfigError::InvalidGamma(self.gamma));
        }
        if self.max_depth > MAX_DEPTH_LIMIT {
            return Err(ConfigError::DepthTooLarge(self.max_depth));
        }
        Ok(())
    }

    /// The camera these settings describe.
    pub fn camera(&self) -> Camera {
        Camera::new(self.width, self.height, self.fov)
    }
}

/// Convert a linear color to 8-bit RGBA.
///
/// Each channel is gamma-encoded first and clamped afterwards, so values
/// above 1.0 saturate after encoding. A negative channel has no real power
/// and saturates to 255, as does any NaN.
pub fn color_to_rgba(color: Color, gamma: f32) -> [u8; 4] {
    let inv_gamma = 1.0 / gamma;
    // `f32::min` returns the non-NaN operand, so NaN lands on 1.0 here.
    let encode = |c: f32| (c.powf(inv_gamma).min(1.0).max(0.0) * 255.0) as u8;
    [encode(color.x), encode(color.y), encode(color.z), 255]
}

/// Render a single pixel to RGBA.
pub fn render_pixel(
    scene: &Scene,
    camera: &Camera,
    config: &RenderConfig,
    x: u32,
    y: u32,
) -> [u8; 4] {
    let ray = camera.primary_ray(x, y);
    let color = trace(&ray, scene, 0, config);
    color_to_rgba(color, config.gamma)
}

/// RGBA8 image, row-major from the top-left pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    /// `width * height * 4` bytes, `[R, G, B, A]` per pixel
    pub pixels: Vec<u8>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with transparent black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.offset(x, y);
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let i = self.offset(x, y);
        self.pixels[i..i + 4].copy_from_slice(&rgba);
    }

    /// Raw RGBA bytes (for display or saving).
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.pixels
    }
}

/// Render the entire scene, one rayon task per image row.
///
/// Pixels are independent, so the result is identical to `render_serial`.
pub fn render(scene: &Scene, config: &RenderConfig) -> Result<ImageBuffer, ConfigError> {
    config.validate()?;
    log_frame_start(scene, config);

    let start = Instant::now();
    let camera = config.camera();
    let mut image = ImageBuffer::new(config.width, config.height);
    let row_bytes = config.width as usize * 4;

    image
        .pixels
        .par_chunks_mut(row_bytes)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, px) in row.chunks_exact_mut(4).enumerate() {
                px.copy_from_slice(&render_pixel(scene, &camera, config, x as u32, y as u32));
            }
        });

    log::debug!("Frame rendered in {:?}", start.elapsed());
    Ok(image)
}

/// Render the entire scene on the calling thread.
pub fn render_serial(scene: &Scene, config: &RenderConfig) -> Result<ImageBuffer, ConfigError> {
    config.validate()?;
    log_frame_start(scene, config);

    let start = Instant::now();
    let camera = config.camera();
    let mut image = ImageBuffer::new(config.width, config.height);

    for y in 0..config.height {
        for x in 0..config.width {
            image.set(x, y, render_pixel(scene, &camera, config, x, y));
        }
    }

    log::debug!("Frame rendered serially in {:?}", start.elapsed());
    Ok(image)
}

fn log_frame_start(scene: &Scene, config: &RenderConfig) {
    log::info!(
        "Rendering {}x{} (fov {}, depth {}), {} surfaces, {}/{} lights on",
        config.width,
        config.height,
        config.fov,
        config.max_depth,
        scene.surface_count(),
        scene.enabled_light_count(),
        scene.lights().len()
    );
}
