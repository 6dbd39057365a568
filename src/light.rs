use crate::math::*;

/// Light arriving everywhere from the same direction, like sunlight.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DirectionalLight {
    /// direction the light travels in. need not be unit length, but must not be zero.
    pub direction: Vec3,
    pub color: RGBColor,
    pub intensity: f32,
}

impl DirectionalLight {
    pub fn new(direction: Vec3, color: RGBColor, intensity: f32) -> Self {
        DirectionalLight {
            direction,
            color,
            intensity,
        }
    }

    /// unit vector from any point in the scene towards the light
    pub fn direction_to_light(&self) -> Vec3 {
        -self.direction.normalized()
    }
}
