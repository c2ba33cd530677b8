// Re-export glam for convenience
pub use glam::*;

// Glint math types
mod ray;
pub use ray::Ray;

/// Normalization that tolerates degenerate vectors.
///
/// glam's `normalize` yields NaN for a zero-length vector. Tracing code
/// produces such vectors for degenerate geometry and expects them to pass
/// through untouched instead.
pub trait NormalizeOrSelf {
    /// Returns the unit vector in the same direction, or `self` if the
    /// length is zero.
    fn normalize_or_self(self) -> Self;
}

impl NormalizeOrSelf for Vec3 {
    #[inline]
    fn normalize_or_self(self) -> Self {
        let len = self.length();
        if len > 0.0 {
            self * (1.0 / len)
        } else {
            self
        }
    }
}
