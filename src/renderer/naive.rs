use super::{blank_film, Film, Renderer};

use crate::camera::Camera;
use crate::errors::Result;
use crate::integrator::{DirectLightingIntegrator, Integrator};
use crate::parsing::config::RenderSettings;
use crate::profile::Profile;
use crate::scene::Scene;

#[cfg(feature = "pbr")]
use pbr::ProgressBar;

use std::time::Instant;

/// Single threaded renderer. Visits every row of a column before moving to the next column.
#[derive(Default)]
pub struct NaiveRenderer {}

impl NaiveRenderer {
    pub fn new() -> NaiveRenderer {
        NaiveRenderer {}
    }
}

impl Renderer for NaiveRenderer {
    fn render(&self, scene: &Scene, settings: &RenderSettings) -> Result<Film> {
        let camera = Camera::for_scene(scene)?;
        let (width, height) = (camera.width(), camera.height());
        info!("starting render with film resolution {}x{}", width, height);

        let now = Instant::now();
        let mut film = blank_film(width, height, settings);
        let integrator = DirectLightingIntegrator::new(scene);
        let mut profile = Profile::default();

        #[cfg(feature = "pbr")]
        let mut pb = ProgressBar::new(width as u64);

        for x in 0..width {
            for y in 0..height {
                let ray = camera.get_ray(x, y);
                if let Some(color) = integrator.color(ray, &mut profile) {
                    film.write_at(x as usize, y as usize, color);
                }
            }
            #[cfg(feature = "pbr")]
            pb.inc();
        }
        #[cfg(feature = "pbr")]
        pb.finish();

        let elapsed = (now.elapsed().as_millis() as f32) / 1000.0;
        info!("took {}s", elapsed);
        profile.pretty_print(elapsed, 1);
        Ok(film)
    }
}
