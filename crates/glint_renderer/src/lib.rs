//! Glint Renderer - CPU Whitted ray tracing
//!
//! A deterministic recursive ray tracer: direct lighting with hard shadows,
//! plus perfect mirror reflection and refraction weighted by the Fresnel
//! term, bounded by a fixed recursion depth.

mod camera;
mod optics;
mod renderer;
mod shading;
mod tracer;

pub use camera::Camera;
pub use optics::{fresnel, reflect, refract};
pub use renderer::{
    color_to_rgba, render, render_pixel, render_serial, ConfigError, ImageBuffer, RenderConfig,
    MAX_DEPTH_LIMIT,
};
pub use shading::{direct_light, direct_lighting, in_shadow, SHADOW_AMBIENT};
pub use tracer::{trace, RAY_BIAS};

/// Re-export the scene types from glint_core
pub use glint_core::{Color, Material, PointLight, Scene};

/// Re-export Vec3 and Ray from glint_math
pub use glint_math::{Ray, Vec3};
