//! Recursive Whitted ray tracing.
//!
//! `trace` finds the nearest surface, lights it directly, then blends in the
//! mirror and transmitted rays for reflective/refractive materials. The only
//! termination criteria are leaving the scene and exceeding the depth bound.

use glint_core::{Color, Scene};
use glint_math::{NormalizeOrSelf, Ray};

use crate::optics::{fresnel, reflect, refract};
use crate::shading::direct_lighting;
use crate::RenderConfig;

/// Offset applied to secondary ray origins along the surface normal to
/// avoid re-hitting the surface they start on.
pub const RAY_BIAS: f32 = 1e-4;

/// Compute the color seen along a ray.
///
/// `depth` is the number of bounces already taken; rays past
/// `config.max_depth` return black. Rays that escape return
/// `config.background`. The result is unclamped.
pub fn trace(ray: &Ray, scene: &Scene, depth: u32, config: &RenderConfig) -> Color {
    if depth > config.max_depth {
        return Color::ZERO;
    }

    let Some(rec) = scene.nearest_hit(ray) else {
        return config.background;
    };

    let point = ray.at(rec.t);
    let normal = rec.normal;
    let material = rec.material;

    let mut color = direct_lighting(scene, point, normal, rec.color());

    if material.is_specular() {
        let reflection = material.reflection();
        let refraction = material.refraction();
        let kr = fresnel(ray.direction, normal, material.ior());

        let mut reflection_color = Color::ZERO;
        if reflection > 0.0 {
            let dir = reflect(ray.direction, normal).normalize_or_self();
            let bounced = Ray::new(point + normal * RAY_BIAS, dir);
            reflection_color = trace(&bounced, scene, depth + 1, config);
        }

        let mut refraction_color = Color::ZERO;
        if refraction > 0.0 {
            // Total internal reflection leaves the transmitted part black.
            if let Some(dir) = refract(ray.direction, normal, material.ior()) {
                let transmitted = Ray::new(point - normal * RAY_BIAS, dir.normalize_or_self());
                refraction_color = trace(&transmitted, scene, depth + 1, config);
            }
        }

        // Direct light is scaled by the material's own weights; only the
        // reflected/transmitted split uses the Fresnel term.
        let secondary =
            reflection_color * kr * reflection + refraction_color * (1.0 - kr) * refraction;
        color = color * (1.0 - (reflection + refraction)) + secondary;
    }

    color
}
