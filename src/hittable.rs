use crate::geometry::SphereRoots;
use crate::math::*;

/// Result of a nearest hit search. `element` indexes into `Scene::elements`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Intersection {
    pub distance: f32,
    pub element: usize,
}

impl Intersection {
    pub fn new(distance: f32, element: usize) -> Self {
        Intersection { distance, element }
    }
}

pub trait Hittable {
    /// distance along `r` to the surface, if it is hit.
    fn intersect(&self, r: Ray, roots: SphereRoots) -> Option<f32>;
    fn surface_normal(&self, point: Point3) -> Vec3;
}
