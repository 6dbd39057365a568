use crate::geometry::Element;
use crate::hittable::{Hittable, Intersection};
use crate::integrator::ShadingSettings;
use crate::light::DirectionalLight;
use crate::math::*;

/// hits at or beyond this distance are ignored.
pub const MAX_TRACE_DISTANCE: f32 = 30000.0;
pub const SHADOW_BIAS: f32 = 1e-4;

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    /// vertical field of view in degrees
    pub fov: f32,
    pub shadow_bias: f32,
    pub elements: Vec<Element>,
    pub light: DirectionalLight,
    pub settings: ShadingSettings,
}

impl Scene {
    pub fn new(
        width: u32,
        height: u32,
        fov: f32,
        elements: Vec<Element>,
        light: DirectionalLight,
    ) -> Self {
        Scene {
            width,
            height,
            fov,
            shadow_bias: SHADOW_BIAS,
            elements,
            light,
            settings: ShadingSettings::default(),
        }
    }

    pub fn with_shadow_bias(mut self, shadow_bias: f32) -> Self {
        self.shadow_bias = shadow_bias;
        self
    }

    pub fn with_settings(mut self, settings: ShadingSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn element(&self, intersection: &Intersection) -> &Element {
        &self.elements[intersection.element]
    }

    /// Nearest non-negative hit along `ray`, skipping the element at index `exclude`.
    /// Ties go to the element that comes first in `elements`.
    pub fn trace(&self, ray: Ray, exclude: Option<usize>) -> Option<Intersection> {
        let mut nearest_distance = MAX_TRACE_DISTANCE;
        let mut nearest = None;
        for (index, element) in self.elements.iter().enumerate() {
            if Some(index) == exclude {
                continue;
            }
            if let Some(distance) = element.intersect(ray, self.settings.sphere_roots) {
                if distance >= 0.0 && distance < nearest_distance {
                    nearest_distance = distance;
                    nearest = Some(Intersection::new(distance, index));
                }
            }
        }
        nearest
    }
}
