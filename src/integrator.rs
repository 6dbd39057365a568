use crate::geometry::SphereRoots;
use crate::hittable::{Hittable, Intersection};
use crate::math::*;
use crate::profile::Profile;
use crate::scene::Scene;

use serde::{Deserialize, Serialize};

/// Whether a surface facing away from the light may receive negative light power.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LightPower {
    #[default]
    Unclamped,
    /// light power is `max(0, n * l) * intensity`
    Clamped,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadingSettings {
    pub light_power: LightPower,
    pub sphere_roots: SphereRoots,
}

pub trait Integrator {
    /// color seen along `r`, or None if nothing was hit.
    fn color(&self, r: Ray, profile: &mut Profile) -> Option<RGBColor>;
}

/// Lambertian shading from the scene's single directional light, with a binary shadow test.
pub struct DirectLightingIntegrator<'a> {
    pub scene: &'a Scene,
}

impl<'a> DirectLightingIntegrator<'a> {
    pub fn new(scene: &'a Scene) -> Self {
        DirectLightingIntegrator { scene }
    }
}

impl Integrator for DirectLightingIntegrator<'_> {
    fn color(&self, r: Ray, profile: &mut Profile) -> Option<RGBColor> {
        profile.camera_rays += 1;
        let intersection = self.scene.trace(r, None)?;
        profile.hits += 1;
        Some(shade(self.scene, r, intersection, profile))
    }
}

/// true if anything other than the element at `exclude` blocks the light from `point`.
pub fn in_shadow(scene: &Scene, point: Point3, normal: Vec3, exclude: usize) -> bool {
    let shadow_ray = Ray::new(
        point + normal * scene.shadow_bias,
        scene.light.direction_to_light(),
    );
    scene.trace(shadow_ray, Some(exclude)).is_some()
}

pub fn shade(
    scene: &Scene,
    ray: Ray,
    intersection: Intersection,
    profile: &mut Profile,
) -> RGBColor {
    let element = scene.element(&intersection);
    let surface = element.surface();
    let light = &scene.light;

    let hit_point = ray.point_at_parameter(intersection.distance);
    let normal = element.surface_normal(hit_point);
    let direction_to_light = light.direction_to_light();

    let mut light_power = (normal * direction_to_light) * light.intensity;
    if scene.settings.light_power == LightPower::Clamped {
        light_power = light_power.max(0.0);
    }
    let light_reflected = surface.albedo / PI;

    profile.shadow_rays += 1;
    if in_shadow(scene, hit_point, normal, intersection.element) {
        profile.shadowed += 1;
        return RGBColor::BLACK;
    }

    let [er, eg, eb] = surface.color.to_unit();
    let [lr, lg, lb] = light.color.to_unit();
    let factor = light_power * light_reflected;
    RGBColor::from_unit([er * lr * factor, eg * lg * factor, eb * lb * factor])
}
