mod plane;
mod sphere;

pub use plane::{Plane, PLANE_EPSILON};
pub use sphere::{Sphere, SphereRoots};

use crate::hittable::Hittable;
use crate::math::*;

/// Shading attributes shared by every element.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Surface {
    pub color: RGBColor,
    pub albedo: f32,
}

impl Surface {
    pub const DEFAULT_ALBEDO: f32 = 1.0;

    pub fn new(color: RGBColor) -> Self {
        Surface {
            color,
            albedo: Self::DEFAULT_ALBEDO,
        }
    }
    pub fn with_albedo(mut self, albedo: f32) -> Self {
        self.albedo = albedo;
        self
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Element {
    Sphere(Sphere),
    Plane(Plane),
}

impl Element {
    pub fn surface(&self) -> &Surface {
        match self {
            Element::Sphere(sphere) => &sphere.surface,
            Element::Plane(plane) => &plane.surface,
        }
    }
}

impl From<Sphere> for Element {
    fn from(data: Sphere) -> Self {
        Element::Sphere(data)
    }
}

impl From<Plane> for Element {
    fn from(data: Plane) -> Self {
        Element::Plane(data)
    }
}

impl Hittable for Element {
    fn intersect(&self, r: Ray, roots: SphereRoots) -> Option<f32> {
        match self {
            Element::Sphere(sphere) => sphere.intersect(r, roots),
            Element::Plane(plane) => plane.intersect(r, roots),
        }
    }
    fn surface_normal(&self, point: Point3) -> Vec3 {
        match self {
            Element::Sphere(sphere) => sphere.surface_normal(point),
            Element::Plane(plane) => plane.surface_normal(point),
        }
    }
}
