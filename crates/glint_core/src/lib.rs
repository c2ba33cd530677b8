//! Glint Core - Scene description for the Whitted ray tracer.
//!
//! This crate provides:
//!
//! - **Surfaces**: `Sphere` and `Plane` primitives behind the `Hittable` trait
//! - **Materials**: surface color plus reflection/refraction weights
//! - **Scene**: the surface list and the point lights that illuminate it
//!
//! # Example
//!
//! ```ignore
//! use glint_core::Scene;
//!
//! let mut scene = Scene::demo()?;
//! scene.toggle_light(0)?;
//! println!("{} surfaces, {} lights on",
//!     scene.surface_count(),
//!     scene.enabled_light_count());
//! ```

pub mod light;
pub mod material;
pub mod scene;
pub mod surface;

// Re-export commonly used types
pub use light::PointLight;
pub use material::{Color, Material};
pub use scene::{Scene, SceneError, SceneResult};
pub use surface::{HitRecord, Hittable, Plane, Sphere, Surface};
