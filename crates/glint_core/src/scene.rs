//! Scene container for Glint.
//!
//! A scene is an ordered list of surfaces and the point lights that
//! illuminate them. It is read-only while a frame is traced; light switches
//! are flipped between frames through `&mut Scene`.

use glint_math::{Ray, Vec3};
use thiserror::Error;

use crate::surface::{HitRecord, Hittable, Plane, Sphere, Surface};
use crate::{Color, Material, PointLight};

/// Errors that can occur while building or editing a scene.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("Sphere radius must be finite and positive, got {0}")]
    InvalidRadius(f32),

    #[error("Plane normal must be a non-zero finite vector")]
    ZeroNormal,

    #[error("Invalid material {field}: {value}")]
    InvalidMaterial { field: &'static str, value: f32 },

    #[error("No light at index {0}")]
    NoSuchLight(usize),
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// A complete scene: surfaces plus point lights.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    /// Surfaces in insertion order. Order only decides ties between
    /// hits at exactly the same distance.
    surfaces: Vec<Surface>,

    /// Point lights, each individually switchable
    lights: Vec<PointLight>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// The demo scene: three spheres over a floor plane, lit by two lights.
    ///
    /// - red mirror sphere on the left
    /// - green glass sphere on the right
    /// - small blue sphere in front that both reflects and refracts
    /// - white, slightly reflective floor at `y = -1.5`
    pub fn demo() -> SceneResult<Self> {
        let mut scene = Self::new();
        for surface in demo_surfaces()? {
            scene.add(surface);
        }

        scene.add_light(PointLight::new(Vec3::new(-2.0, 5.0, -3.0)));
        scene.add_light(PointLight::new(Vec3::new(2.0, 5.0, -2.0)));
        Ok(scene)
    }

    /// Add a surface to the scene.
    pub fn add(&mut self, surface: impl Into<Surface>) {
        self.surfaces.push(surface.into());
    }

    /// Add a light and return its index.
    pub fn add_light(&mut self, light: PointLight) -> usize {
        let index = self.lights.len();
        self.lights.push(light);
        index
    }

    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }

    /// Get surface count.
    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }

    /// Number of lights currently switched on.
    pub fn enabled_light_count(&self) -> usize {
        self.lights.iter().filter(|l| l.enabled).count()
    }

    /// Switch a light on or off.
    pub fn set_light_enabled(&mut self, index: usize, enabled: bool) -> SceneResult<()> {
        let light = self
            .lights
            .get_mut(index)
            .ok_or(SceneError::NoSuchLight(index))?;
        light.enabled = enabled;
        log::debug!("Light {} {}", index, if enabled { "on" } else { "off" });
        Ok(())
    }

    /// Flip a light's switch and return its new state.
    pub fn toggle_light(&mut self, index: usize) -> SceneResult<bool> {
        let enabled = !self
            .lights
            .get(index)
            .ok_or(SceneError::NoSuchLight(index))?
            .enabled;
        self.set_light_enabled(index, enabled)?;
        Ok(enabled)
    }

    /// Find the closest surface hit by the ray.
    ///
    /// Linear scan over every surface; the first of several hits at exactly
    /// the same distance wins.
    pub fn nearest_hit(&self, ray: &Ray) -> Option<HitRecord<'_>> {
        let mut closest: Option<HitRecord<'_>> = None;

        for surface in &self.surfaces {
            if let Some(rec) = surface.hit(ray) {
                if closest.map_or(true, |c| rec.t < c.t) {
                    closest = Some(rec);
                }
            }
        }

        closest
    }

    /// True if the ray hits any surface at all, however far away.
    pub fn any_hit(&self, ray: &Ray) -> bool {
        self.surfaces.iter().any(|s| s.hit(ray).is_some())
    }
}

fn demo_surfaces() -> SceneResult<[Surface; 4]> {
    Ok([
        Sphere::new(
            Vec3::new(-1.5, 0.0, -5.0),
            1.0,
            Material::new(Color::new(1.0, 0.0, 0.0), 0.5, 0.0, 1.0)?,
        )?
        .into(),
        Sphere::new(
            Vec3::new(1.5, 0.0, -5.0),
            1.0,
            Material::new(Color::new(0.0, 1.0, 0.0), 0.0, 0.8, 1.5)?,
        )?
        .into(),
        Sphere::new(
            Vec3::new(0.0, -0.5, -3.0),
            0.5,
            Material::new(Color::new(0.0, 0.0, 1.0), 0.3, 0.5, 1.3)?,
        )?
        .into(),
        Plane::new(
            Vec3::Y,
            1.5,
            Material::new(Color::new(1.0, 1.0, 1.0), 0.1, 0.0, 1.0)?,
        )?
        .into(),
    ])
}
