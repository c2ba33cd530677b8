//! Reflection, refraction and the Fresnel equations.
//!
//! All functions take the incident direction pointing TOWARD the surface and
//! the surface normal as stored by the primitive. Whether the ray enters or
//! leaves the medium is decided from the sign of `incident.dot(normal)`, so
//! callers never flip the normal themselves.

use glint_math::Vec3;

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(incident: Vec3, normal: Vec3) -> Vec3 {
    incident - normal * 2.0 * incident.dot(normal)
}

/// Refract a vector through a surface with index of refraction `ior`.
///
/// The outside medium is assumed to have index 1.0. Returns `None` on total
/// internal reflection.
pub fn refract(incident: Vec3, normal: Vec3, ior: f32) -> Option<Vec3> {
    let mut cosi = incident.dot(normal).clamp(-1.0, 1.0);
    let (mut etai, mut etat) = (1.0, ior);
    let mut n = normal;

    if cosi < 0.0 {
        // Entering: make cosi positive
        cosi = -cosi;
    } else {
        // Leaving: swap media and flip the normal to the ray's side
        std::mem::swap(&mut etai, &mut etat);
        n = -normal;
    }

    let eta = etai / etat;
    let k = 1.0 - eta * eta * (1.0 - cosi * cosi);

    if k < 0.0 {
        None
    } else {
        Some(incident * eta + n * (eta * cosi - k.sqrt()))
    }
}

/// Fraction of light reflected at a dielectric boundary.
///
/// Unpolarized Fresnel reflectance: the mean of the squared s- and
/// p-polarized amplitude ratios. Returns exactly `1.0` beyond the critical
/// angle.
pub fn fresnel(incident: Vec3, normal: Vec3, ior: f32) -> f32 {
    let cosi = incident.dot(normal).clamp(-1.0, 1.0);
    let (mut etai, mut etat) = (1.0, ior);

    if cosi > 0.0 {
        std::mem::swap(&mut etai, &mut etat);
    }

    // Snell's law
    let sint = etai / etat * (1.0 - cosi * cosi).max(0.0).sqrt();
    if sint >= 1.0 {
        return 1.0;
    }

    let cost = (1.0 - sint * sint).max(0.0).sqrt();
    let cosi = cosi.abs();

    let rs = ((etat * cosi) - (etai * cost)) / ((etat * cosi) + (etai * cost));
    let rp = ((etai * cosi) - (etat * cost)) / ((etai * cosi) + (etat * cost));
    (rs * rs + rp * rp) * 0.5
}
