use super::{blank_film, Film, Renderer};

use crate::camera::Camera;
use crate::errors::Result;
use crate::integrator::{DirectLightingIntegrator, Integrator};
use crate::parsing::config::RenderSettings;
use crate::profile::Profile;
use crate::scene::Scene;

use rayon::prelude::*;

use std::time::Instant;

pub const DEFAULT_TILE_ROWS: u32 = 16;

/// Splits the film into bands of `tile_rows` full rows and renders the bands in parallel.
/// Bands are disjoint slices of the film, so no two workers ever write the same pixel.
pub struct TiledRenderer {
    tile_rows: u32,
}

impl TiledRenderer {
    pub fn new(tile_rows: u32) -> TiledRenderer {
        TiledRenderer {
            tile_rows: tile_rows.max(1),
        }
    }
}

impl Renderer for TiledRenderer {
    fn render(&self, scene: &Scene, settings: &RenderSettings) -> Result<Film> {
        let camera = Camera::for_scene(scene)?;
        let (width, height) = (camera.width(), camera.height());
        let threads = settings
            .threads
            .map(|t| t as usize)
            .unwrap_or_else(num_cpus::get);
        info!(
            "starting render with film resolution {}x{}, {} rows per tile on {} threads",
            width, height, self.tile_rows, threads
        );
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()?;

        let now = Instant::now();
        let mut film = blank_film(width, height, settings);
        let integrator = DirectLightingIntegrator::new(scene);
        let tile_len = self.tile_rows as usize * width as usize;

        let stats: Profile = pool.install(|| {
            film.buffer
                .par_chunks_mut(tile_len)
                .enumerate()
                .map(|(tile_index, tile)| {
                    let mut profile = Profile::default();
                    let first_pixel = tile_index * tile_len;
                    for (offset, pixel_ref) in tile.iter_mut().enumerate() {
                        let pixel_index = first_pixel + offset;
                        let y = (pixel_index / width as usize) as u32;
                        let x = (pixel_index % width as usize) as u32;
                        if let Some(color) = integrator.color(camera.get_ray(x, y), &mut profile) {
                            *pixel_ref = color;
                        }
                    }
                    profile
                })
                .reduce(Profile::default, |a, b| a.combine(b))
        });

        let elapsed = (now.elapsed().as_millis() as f32) / 1000.0;
        info!("took {}s", elapsed);
        stats.pretty_print(elapsed, threads);
        Ok(film)
    }
}
