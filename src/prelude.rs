pub use crate::camera::{create_prime, Camera};
pub use crate::errors::{RenderError, Result};
pub use crate::geometry::{Element, Plane, Sphere, SphereRoots, Surface};
pub use crate::hittable::{Hittable, Intersection};
pub use crate::integrator::{DirectLightingIntegrator, Integrator, LightPower, ShadingSettings};
pub use crate::light::DirectionalLight;
pub use crate::math::*;
pub use crate::renderer::{render, Film, Renderer};
pub use crate::scene::{Scene, MAX_TRACE_DISTANCE};
