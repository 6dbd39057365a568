#[macro_use]
extern crate tracing;

pub mod camera;
pub mod errors;
pub mod geometry;
pub mod hittable;
pub mod integrator;
pub mod light;
pub mod math;
pub mod parsing;
pub mod prelude;
pub mod profile;
pub mod renderer;
pub mod scene;
pub mod vec2d;
