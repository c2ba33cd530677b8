//! Camera for primary ray generation.

use glint_math::{NormalizeOrSelf, Ray, Vec3};

/// Pinhole camera at the origin looking down `-Z` with `+Y` up.
///
/// There is no camera transform; the scene is placed in front of it.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,

    // Cached computed values
    aspect_ratio: f32,
    /// tan(vfov / 2): half-height of the image plane at distance 1
    scale: f32,
}

impl Camera {
    /// Create a camera for an image of `width x height` pixels.
    ///
    /// `vfov` is the vertical field of view in degrees.
    pub fn new(width: u32, height: u32, vfov: f32) -> Self {
        Self {
            image_width: width,
            image_height: height,
            aspect_ratio: width as f32 / height as f32,
            scale: (vfov * 0.5).to_radians().tan(),
        }
    }

    /// Generate the ray through the center of pixel (x, y).
    ///
    /// Pixel (0, 0) is the top-left corner of the image.
    pub fn primary_ray(&self, x: u32, y: u32) -> Ray {
        let xx = (2.0 * ((x as f32 + 0.5) / self.image_width as f32) - 1.0)
            * self.scale
            * self.aspect_ratio;
        let yy = (1.0 - 2.0 * ((y as f32 + 0.5) / self.image_height as f32)) * self.scale;

        Ray::new(Vec3::ZERO, Vec3::new(xx, yy, -1.0).normalize_or_self())
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_ray_looks_down_neg_z() {
        let camera = Camera::new(3, 3, 60.0);
        let ray = camera.primary_ray(1, 1);

        assert_eq!(ray.origin, Vec3::ZERO);
        assert!((ray.direction - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn test_corner_rays() {
        let camera = Camera::new(800, 600, 60.0);

        let top_left = camera.primary_ray(0, 0).direction;
        assert!(top_left.x < 0.0 && top_left.y > 0.0 && top_left.z < 0.0);

        let bottom_right = camera.primary_ray(799, 599).direction;
        assert!(bottom_right.x > 0.0 && bottom_right.y < 0.0);

        // Mirror-symmetric about the image center
        assert!((top_left.x + bottom_right.x).abs() < 1e-5);
        assert!((top_left.y + bottom_right.y).abs() < 1e-5);
    }

    #[test]
    fn test_ray_directions_are_unit() {
        let camera = Camera::new(16, 9, 90.0);
        for (x, y) in [(0, 0), (15, 0), (7, 4), (15, 8)] {
            let d = camera.primary_ray(x, y).direction;
            assert!((d.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_field_of_view() {
        // With a 90 degree fov the top edge of the image plane sits at y = 1.
        let camera = Camera::new(1, 1000, 90.0);
        let d = camera.primary_ray(0, 0).direction;
        let slope = d.y / -d.z;
        assert!((slope - 0.999).abs() < 1e-4, "slope = {slope}");
        assert_eq!(camera.aspect_ratio(), 0.001);
    }
}
