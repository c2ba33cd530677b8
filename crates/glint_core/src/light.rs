//! Point light sources.

use glint_math::Vec3;

/// An omnidirectional light with implicit white, unit intensity.
///
/// The light has no color of its own; it only scales the color of the
/// surface it illuminates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    /// World-space position
    pub position: Vec3,
    /// Disabled lights contribute nothing
    pub enabled: bool,
}

impl PointLight {
    /// Create an enabled light at `position`.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            enabled: true,
        }
    }

    /// Set the initial enabled state.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}
