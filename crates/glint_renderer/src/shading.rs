//! Direct lighting from point lights with hard shadows.

use glint_core::{Color, PointLight, Scene};
use glint_math::{NormalizeOrSelf, Ray, Vec3};

use crate::tracer::RAY_BIAS;

/// Shading factor for a point that a light cannot see.
///
/// Shadows are lifted to this floor instead of going fully black.
pub const SHADOW_AMBIENT: f32 = 0.2;

/// Test whether any surface blocks the path from `point` toward a light.
///
/// The shadow ray starts slightly above the surface along `normal`. Any hit
/// counts, including hits beyond the light itself.
pub fn in_shadow(scene: &Scene, point: Vec3, normal: Vec3, light_pos: Vec3) -> bool {
    let light_dir = (light_pos - point).normalize_or_self();
    let shadow_ray = Ray::new(point + normal * RAY_BIAS, light_dir);
    scene.any_hit(&shadow_ray)
}

/// Lambertian contribution of a single light at a surface point.
pub fn direct_light(
    scene: &Scene,
    point: Vec3,
    normal: Vec3,
    surface_color: Color,
    light: &PointLight,
) -> Color {
    if !light.enabled {
        return Color::ZERO;
    }

    let light_dir = (light.position - point).normalize_or_self();
    let shade = if in_shadow(scene, point, normal, light.position) {
        SHADOW_AMBIENT
    } else {
        normal.dot(light_dir).max(0.0)
    };

    surface_color * shade
}

/// Sum of `direct_light` over every light in the scene.
pub fn direct_lighting(scene: &Scene, point: Vec3, normal: Vec3, surface_color: Color) -> Color {
    scene
        .lights()
        .iter()
        .map(|light| direct_light(scene, point, normal, surface_color, light))
        .fold(Color::ZERO, |acc, c| acc + c)
}
