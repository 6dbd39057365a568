mod color;
mod point;
mod ray;
mod vec;

pub use color::{clamp01, RGBColor};
pub use point::Point3;
pub use ray::Ray;
pub use vec::Vec3;

pub use std::f32::consts::PI;
