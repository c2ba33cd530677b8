//! Surface material description.

use glint_math::Vec3;

use crate::scene::{SceneError, SceneResult};

/// Color type alias (linear RGB, nominally 0-1 but never clamped while tracing)
pub type Color = Vec3;

/// Optical properties of a surface.
///
/// `reflection` and `refraction` are the fractions of the shaded color taken
/// from the mirror and transmitted rays. Their sum is expected to stay at or
/// below 1.0; nothing checks it, and larger sums give a negative weight to
/// the direct lighting term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    color: Color,
    reflection: f32,
    refraction: f32,
    ior: f32,
}

impl Material {
    /// Create a material, validating each scalar on its own.
    ///
    /// - `reflection`, `refraction`: must lie in `[0, 1]`
    /// - `ior`: index of refraction, must be `>= 1.0` (1.0 = no bending)
    pub fn new(color: Color, reflection: f32, refraction: f32, ior: f32) -> SceneResult<Self> {
        check_fraction("reflection", reflection)?;
        check_fraction("refraction", refraction)?;
        if !(ior.is_finite() && ior >= 1.0) {
            return Err(SceneError::InvalidMaterial {
                field: "ior",
                value: ior,
            });
        }

        Ok(Self {
            color,
            reflection,
            refraction,
            ior,
        })
    }

    /// A purely diffuse material: no reflection, no refraction.
    pub fn diffuse(color: Color) -> Self {
        Self {
            color,
            reflection: 0.0,
            refraction: 0.0,
            ior: 1.0,
        }
    }

    /// Surface color.
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Weight of the mirror-reflected ray.
    #[inline]
    pub fn reflection(&self) -> f32 {
        self.reflection
    }

    /// Weight of the transmitted ray.
    #[inline]
    pub fn refraction(&self) -> f32 {
        self.refraction
    }

    /// Index of refraction.
    #[inline]
    pub fn ior(&self) -> f32 {
        self.ior
    }

    /// True if hits on this material spawn secondary rays.
    #[inline]
    pub fn is_specular(&self) -> bool {
        self.reflection > 0.0 || self.refraction > 0.0
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::diffuse(Color::new(0.5, 0.5, 0.5))
    }
}

fn check_fraction(field: &'static str, value: f32) -> SceneResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SceneError::InvalidMaterial { field, value })
    }
}
