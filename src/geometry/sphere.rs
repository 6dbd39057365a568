use super::Surface;
use crate::hittable::Hittable;
use crate::math::*;

use serde::{Deserialize, Serialize};

/// How a sphere reports its distance when the ray starts inside it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SphereRoots {
    /// always the smaller root, which is negative from inside the sphere.
    #[default]
    Baseline,
    /// the smaller root if it is non-negative, otherwise the larger one.
    NearestPositive,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    pub center: Point3,
    pub radius: f32,
    pub surface: Surface,
}

impl Sphere {
    pub fn new(center: Point3, radius: f32, surface: Surface) -> Sphere {
        Sphere {
            center,
            radius,
            surface,
        }
    }
}

impl Hittable for Sphere {
    fn intersect(&self, r: Ray, roots: SphereRoots) -> Option<f32> {
        let l: Vec3 = self.center - r.origin;
        let adj = l * r.direction;
        let d2 = l * l - adj * adj;
        let radius2 = self.radius * self.radius;
        if d2 > radius2 {
            return None;
        }
        let thc = (radius2 - d2).sqrt();
        let t0 = adj - thc;
        let t1 = adj + thc;

        if t0 < 0.0 && t1 < 0.0 {
            // entirely behind the ray origin
            return None;
        }
        let (near, far) = if t0 < t1 { (t0, t1) } else { (t1, t0) };
        match roots {
            SphereRoots::Baseline => Some(near),
            SphereRoots::NearestPositive if near < 0.0 => Some(far),
            SphereRoots::NearestPositive => Some(near),
        }
    }

    fn surface_normal(&self, point: Point3) -> Vec3 {
        (point - self.center).normalized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_sphere_at(center: Point3) -> Sphere {
        Sphere::new(center, 1.0, Surface::new(RGBColor::RED))
    }

    #[test]
    fn test_head_on_hit() {
        let sphere = unit_sphere_at(Point3::new(0.0, 0.0, -5.0));
        let ray = Ray::new(Point3::ORIGIN, -Vec3::Z);
        let distance = sphere.intersect(ray, SphereRoots::Baseline).unwrap();
        assert_relative_eq!(distance, 4.0, epsilon = 1e-5);

        let sphere = Sphere::new(Point3::new(3.0, 4.0, 0.0), 2.0, Surface::new(RGBColor::RED));
        let ray = Ray::new(Point3::ORIGIN, Vec3::new(3.0, 4.0, 0.0).normalized());
        let distance = sphere.intersect(ray, SphereRoots::Baseline).unwrap();
        assert_relative_eq!(distance, 3.0, epsilon = 1e-5);
    }

    #[test]
    fn test_aimed_away_misses() {
        let sphere = unit_sphere_at(Point3::new(0.0, 0.0, -5.0));
        let ray = Ray::new(Point3::ORIGIN, Vec3::Z);
        assert!(sphere.intersect(ray, SphereRoots::Baseline).is_none());
        assert!(sphere.intersect(ray, SphereRoots::NearestPositive).is_none());
    }

    #[test]
    fn test_passing_beside_misses() {
        let sphere = unit_sphere_at(Point3::new(0.0, 0.0, -5.0));
        let ray = Ray::new(Point3::new(1.5, 0.0, 0.0), -Vec3::Z);
        assert!(sphere.intersect(ray, SphereRoots::Baseline).is_none());
    }

    #[test]
    fn test_origin_inside_sphere() {
        let sphere = unit_sphere_at(Point3::ORIGIN);
        let ray = Ray::new(Point3::ORIGIN, Vec3::X);
        let baseline = sphere.intersect(ray, SphereRoots::Baseline).unwrap();
        assert_relative_eq!(baseline, -1.0, epsilon = 1e-6);
        let corrected = sphere.intersect(ray, SphereRoots::NearestPositive).unwrap();
        assert_relative_eq!(corrected, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_surface_normal() {
        let sphere = Sphere::new(Point3::new(0.0, 0.0, -5.0), 2.0, Surface::new(RGBColor::RED));
        let normal = sphere.surface_normal(Point3::new(0.0, 0.0, -3.0));
        assert_relative_eq!(normal.z, 1.0, epsilon = 1e-6);
        assert_relative_eq!(normal.norm(), 1.0, epsilon = 1e-6);
    }
}
