mod naive;
mod tiled;

pub use naive::NaiveRenderer;
pub use tiled::TiledRenderer;

use crate::errors::Result;
use crate::math::RGBColor;
use crate::parsing::config::{RenderSettings, RendererType};
use crate::scene::Scene;
use crate::vec2d::Vec2D;

use std::fs;
use std::path::PathBuf;

pub type Film = Vec2D<RGBColor>;

pub const DEFAULT_BACKGROUND: RGBColor = RGBColor::LIGHT_SKY_BLUE;

pub trait Renderer {
    /// Fails before touching any pixel if the scene's sensor is invalid.
    fn render(&self, scene: &Scene, settings: &RenderSettings) -> Result<Film>;
}

pub fn construct_renderer(renderer_type: RendererType) -> Box<dyn Renderer> {
    match renderer_type {
        RendererType::Naive => Box::new(NaiveRenderer::new()),
        RendererType::Tiled { tile_rows } => {
            Box::new(TiledRenderer::new(tile_rows.unwrap_or(tiled::DEFAULT_TILE_ROWS)))
        }
    }
}

/// Single threaded render with the default background.
pub fn render(scene: &Scene) -> Result<Film> {
    NaiveRenderer::new().render(scene, &RenderSettings::default())
}

fn blank_film(width: u32, height: u32, settings: &RenderSettings) -> Film {
    Film::new(
        width as usize,
        height as usize,
        settings.background.unwrap_or(DEFAULT_BACKGROUND),
    )
}

/// writes `film` as an RGBA png to `<output_directory>/<filename>.png` and returns that path.
pub fn output_film(settings: &RenderSettings, film: &Film) -> Result<PathBuf> {
    let directory = PathBuf::from(
        settings
            .output_directory
            .clone()
            .unwrap_or_else(|| String::from("output")),
    );
    let filename_str = settings
        .filename
        .clone()
        .unwrap_or_else(|| String::from("test"));
    fs::create_dir_all(&directory)?;
    let png_filename = directory.join(format!("{}.png", filename_str));

    let img = image::RgbaImage::from_fn(film.width as u32, film.height as u32, |x, y| {
        image::Rgba(film.at(x as usize, y as usize).to_rgba())
    });
    info!("saving image to {}", png_filename.to_string_lossy());
    img.save(&png_filename)?;
    Ok(png_filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RenderError;
    use crate::geometry::{Element, Sphere, Surface};
    use crate::light::DirectionalLight;
    use crate::math::*;
    use crate::parsing::default_scene;

    fn red_sphere_scene(light_direction: Vec3) -> Scene {
        let sphere: Element = Sphere::new(
            Point3::new(0.0, 0.0, -5.0),
            1.0,
            Surface::new(RGBColor::RED),
        )
        .into();
        Scene::new(
            100,
            100,
            90.0,
            vec![sphere],
            DirectionalLight::new(light_direction, RGBColor::WHITE, 1.0),
        )
    }

    #[test]
    fn test_red_sphere_end_to_end() {
        let film = render(&red_sphere_scene(-Vec3::Z)).unwrap();
        assert_eq!((film.width, film.height), (100, 100));

        let center = film.at(50, 50);
        assert!(center.r > 0);
        assert_eq!((center.g, center.b), (0, 0));

        for (x, y) in [(0, 0), (99, 0), (0, 99), (99, 99), (5, 50), (50, 5)] {
            assert_eq!(film.at(x, y), DEFAULT_BACKGROUND, "pixel ({}, {})", x, y);
        }
    }

    #[test]
    fn test_light_behind_sphere_leaves_dark_disk() {
        let film = render(&red_sphere_scene(Vec3::Z)).unwrap();
        assert_eq!(film.at(50, 50), RGBColor::BLACK);
        assert_eq!(film.at(0, 0), DEFAULT_BACKGROUND);
    }

    #[test]
    fn test_background_setting() {
        let settings = RenderSettings {
            background: Some(RGBColor::new(1, 2, 3)),
            ..Default::default()
        };
        let film = NaiveRenderer::new()
            .render(&red_sphere_scene(-Vec3::Z), &settings)
            .unwrap();
        assert_eq!(film.at(0, 0), RGBColor::new(1, 2, 3));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let mut scene = default_scene();
        scene.width = 160;
        scene.height = 120;
        let first = render(&scene).unwrap();
        let second = render(&scene).unwrap();
        assert_eq!(first, second);

        let settings = RenderSettings {
            threads: Some(3),
            ..Default::default()
        };
        for tile_rows in [1, 7, 120, 500] {
            let tiled = TiledRenderer::new(tile_rows).render(&scene, &settings).unwrap();
            assert_eq!(first, tiled, "tile_rows = {}", tile_rows);
        }
    }

    #[test]
    fn test_portrait_scene_is_rejected() {
        let mut scene = red_sphere_scene(-Vec3::Z);
        scene.width = 50;
        for renderer in [
            construct_renderer(RendererType::Naive),
            construct_renderer(RendererType::Tiled { tile_rows: None }),
        ] {
            assert!(matches!(
                renderer.render(&scene, &RenderSettings::default()),
                Err(RenderError::NonLandscapeSensor {
                    width: 50,
                    height: 100
                })
            ));
        }
    }

    #[test]
    fn test_output_film() {
        let directory = std::env::temp_dir().join(format!("rust_raycaster_{}", std::process::id()));
        let settings = RenderSettings {
            filename: Some(String::from("red_sphere")),
            output_directory: Some(directory.to_string_lossy().into_owned()),
            ..Default::default()
        };
        let film = render(&red_sphere_scene(-Vec3::Z)).unwrap();
        let path = output_film(&settings, &film).unwrap();
        assert_eq!(path, directory.join("red_sphere.png"));

        let written = image::open(&path).unwrap().to_rgba8();
        assert_eq!(written.dimensions(), (100, 100));
        assert_eq!(written.get_pixel(50, 50).0, film.at(50, 50).to_rgba());
        assert_eq!(written.get_pixel(0, 0).0, [135, 206, 250, 255]);
        fs::remove_dir_all(directory).unwrap();
    }
}
