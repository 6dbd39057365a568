use crate::errors::{RenderError, Result};
use crate::math::*;
use crate::scene::Scene;

/// Pinhole camera at the origin looking down -Z.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera {
    width: u32,
    height: u32,
    fov_adjustment: f32,
    aspect_ratio: f32,
}

impl Camera {
    /// `fov` is in degrees and spans the vertical extent of the sensor,
    /// so `width >= height` is required.
    pub fn new(width: u32, height: u32, fov: f32) -> Result<Camera> {
        if width == 0 || height == 0 {
            return Err(RenderError::EmptySensor { width, height });
        }
        if width < height {
            return Err(RenderError::NonLandscapeSensor { width, height });
        }
        if !(fov > 0.0 && fov < 180.0) {
            return Err(RenderError::InvalidFov(fov));
        }
        let fov_adjustment = (fov.to_radians() / 2.0).tan();
        let aspect_ratio = width as f32 / height as f32;
        debug!(
            "camera with fov adjustment {} and aspect ratio {}",
            fov_adjustment, aspect_ratio
        );
        Ok(Camera {
            width,
            height,
            fov_adjustment,
            aspect_ratio,
        })
    }

    pub fn for_scene(scene: &Scene) -> Result<Camera> {
        Camera::new(scene.width, scene.height, scene.fov)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// primary ray through the center of pixel (x, y). y grows downwards.
    pub fn get_ray(&self, x: u32, y: u32) -> Ray {
        debug_assert!(x < self.width && y < self.height);
        let sensor_x = ((x as f32 + 0.5) / self.width as f32 * 2.0 - 1.0)
            * self.aspect_ratio
            * self.fov_adjustment;
        let sensor_y = (1.0 - (y as f32 + 0.5) / self.height as f32 * 2.0) * self.fov_adjustment;

        Ray::new(
            Point3::ORIGIN,
            Vec3::new(sensor_x, sensor_y, -1.0).normalized(),
        )
    }
}

/// Primary ray for pixel (x, y) of `scene`. Fails if the scene's sensor is invalid.
pub fn create_prime(x: u32, y: u32, scene: &Scene) -> Result<Ray> {
    Ok(Camera::for_scene(scene)?.get_ray(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_primary_rays_are_unit_length() {
        for (width, height, fov) in [(100, 100, 90.0), (800, 600, 90.0), (37, 11, 30.0)] {
            let camera = Camera::new(width, height, fov).unwrap();
            for x in 0..width {
                for y in 0..height {
                    let ray = camera.get_ray(x, y);
                    assert_relative_eq!(ray.direction.norm(), 1.0, epsilon = 1e-5);
                    assert_eq!(ray.origin, Point3::ORIGIN);
                    assert!(ray.direction.z < 0.0);
                }
            }
        }
    }

    #[test]
    fn test_sensor_mapping() {
        let camera = Camera::new(2, 2, 90.0).unwrap();
        // top left pixel looks up and to the left
        let ray = camera.get_ray(0, 0);
        assert!(ray.direction.x < 0.0 && ray.direction.y > 0.0);
        let expected = Vec3::new(-0.5, 0.5, -1.0).normalized();
        assert_relative_eq!(ray.direction.x, expected.x, epsilon = 1e-5);
        assert_relative_eq!(ray.direction.y, expected.y, epsilon = 1e-5);
        assert_relative_eq!(ray.direction.z, expected.z, epsilon = 1e-5);

        let ray = camera.get_ray(1, 1);
        assert!(ray.direction.x > 0.0 && ray.direction.y < 0.0);
    }

    #[test]
    fn test_rejects_portrait_sensor() {
        assert!(matches!(
            Camera::new(600, 800, 90.0),
            Err(RenderError::NonLandscapeSensor {
                width: 600,
                height: 800
            })
        ));
    }

    #[test]
    fn test_create_prime_uses_scene_sensor() {
        let mut scene = crate::parsing::default_scene();
        let ray = create_prime(400, 300, &scene).unwrap();
        assert_eq!(ray, Camera::new(800, 600, 90.0).unwrap().get_ray(400, 300));

        scene.height = 900;
        assert!(matches!(
            create_prime(0, 0, &scene),
            Err(RenderError::NonLandscapeSensor { .. })
        ));
    }

    #[test]
    fn test_rejects_bad_fov_and_empty_sensor() {
        assert!(matches!(
            Camera::new(10, 10, 180.0),
            Err(RenderError::InvalidFov(_))
        ));
        assert!(matches!(
            Camera::new(10, 10, 0.0),
            Err(RenderError::InvalidFov(_))
        ));
        assert!(matches!(
            Camera::new(0, 0, 90.0),
            Err(RenderError::EmptySensor { .. })
        ));
    }
}
