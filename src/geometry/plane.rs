use super::{Surface, SphereRoots};
use crate::hittable::Hittable;
use crate::math::*;

pub const PLANE_EPSILON: f32 = 1e-6;

/// One sided plane. Only rays travelling along `normal` (`normal * direction > 0`) can hit it,
/// so `normal` points away from the side the plane is visible from.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Plane {
    pub origin: Point3,
    pub normal: Vec3,
    pub surface: Surface,
}

impl Plane {
    pub fn new(origin: Point3, normal: Vec3, surface: Surface) -> Plane {
        Plane {
            origin,
            normal,
            surface,
        }
    }
}

impl Hittable for Plane {
    fn intersect(&self, r: Ray, _roots: SphereRoots) -> Option<f32> {
        let denom = self.normal * r.direction;
        if denom > PLANE_EPSILON {
            let v = self.origin - r.origin;
            let distance = (v * self.normal) / denom;
            if distance >= 0.0 {
                return Some(distance);
            }
        }
        None
    }

    fn surface_normal(&self, _point: Point3) -> Vec3 {
        -self.normal
    }
}
