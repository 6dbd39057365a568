pub mod config;

use crate::camera::Camera;
use crate::errors::Result;
use crate::geometry::*;
use crate::integrator::ShadingSettings;
use crate::light::DirectionalLight;
use crate::math::*;
use crate::scene::{Scene, SHADOW_BIAS};

use config::TOMLConfig;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use std::fs::File;
use std::io::Read;
use std::path::Path;

pub type Vec3Data = [f32; 3];
pub type Point3Data = [f32; 3];

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(tag = "type")]
pub enum ElementData {
    Sphere {
        center: Point3Data,
        radius: f32,
        color: RGBColor,
        albedo: Option<f32>, // defaults to 1.0
    },
    Plane {
        origin: Point3Data,
        normal: Vec3Data,
        color: RGBColor,
        albedo: Option<f32>, // defaults to 1.0
    },
}

impl From<ElementData> for Element {
    fn from(data: ElementData) -> Self {
        match data {
            ElementData::Sphere {
                center,
                radius,
                color,
                albedo,
            } => Sphere::new(
                Point3::from(center),
                radius,
                Surface::new(color).with_albedo(albedo.unwrap_or(Surface::DEFAULT_ALBEDO)),
            )
            .into(),
            ElementData::Plane {
                origin,
                normal,
                color,
                albedo,
            } => {
                let normal = Vec3::from(normal);
                if (normal.norm() - 1.0).abs() > 1e-4 {
                    warn!(
                        "plane normal {:?} is not unit length, distances will be scaled",
                        normal
                    );
                }
                Plane::new(
                    Point3::from(origin),
                    normal,
                    Surface::new(color).with_albedo(albedo.unwrap_or(Surface::DEFAULT_ALBEDO)),
                )
                .into()
            }
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LightData {
    pub direction: Vec3Data,
    pub color: RGBColor,
    pub intensity: f32,
}

impl From<LightData> for DirectionalLight {
    fn from(data: LightData) -> Self {
        DirectionalLight::new(Vec3::from(data.direction), data.color, data.intensity)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SceneData {
    pub width: u32,
    pub height: u32,
    pub fov: f32,
    pub shadow_bias: Option<f32>, // defaults to SHADOW_BIAS
    pub light: LightData,
    #[serde(default)]
    pub elements: Vec<ElementData>,
    #[serde(default)]
    pub settings: ShadingSettings,
}

impl SceneData {
    /// builds the scene and checks that its sensor can be rendered.
    pub fn resolve(self) -> Result<Scene> {
        let elements: Vec<Element> = self.elements.into_iter().map(Element::from).collect();
        let scene = Scene::new(
            self.width,
            self.height,
            self.fov,
            elements,
            self.light.into(),
        )
        .with_shadow_bias(self.shadow_bias.unwrap_or(SHADOW_BIAS))
        .with_settings(self.settings);
        Camera::for_scene(&scene)?;
        Ok(scene)
    }
}

fn load_arbitrary<T>(filepath: &Path) -> Result<T>
where
    T: DeserializeOwned,
{
    info!("loading file at {}", filepath.to_string_lossy());
    let mut input = String::new();
    let read_count = File::open(filepath)
        .and_then(|mut f| f.read_to_string(&mut input))
        .inspect_err(|e| {
            error!("{}", e.to_string());
        })?;
    info!("done: {} bytes", read_count);

    let data: T = toml::from_str(&input).inspect_err(|e| {
        error!(
            "encountered error when parsing {}: {}",
            filepath.to_string_lossy(),
            e.to_string()
        );
    })?;
    Ok(data)
}

pub fn get_settings(filepath: &Path) -> Result<TOMLConfig> {
    load_arbitrary(filepath)
}

pub fn load_scene(filepath: &Path) -> Result<SceneData> {
    load_arbitrary(filepath)
}

pub fn construct_scene(scene_file: &Path) -> Result<Scene> {
    let scene = load_scene(scene_file)?.resolve()?;
    info!(
        "constructed {}x{} scene with {} elements",
        scene.width,
        scene.height,
        scene.elements.len()
    );
    Ok(scene)
}

/// Two spheres above a floor, lit from straight above.
pub fn default_scene() -> Scene {
    Scene::new(
        800,
        600,
        90.0,
        vec![
            Sphere::new(
                Point3::new(-1.0, 0.0, -3.0),
                1.5,
                Surface::new(RGBColor::LIME),
            )
            .into(),
            Sphere::new(
                Point3::new(1.0, 1.0, -5.0),
                1.0,
                Surface::new(RGBColor::RED),
            )
            .into(),
            Plane::new(
                Point3::new(0.0, -2.0, -5.0),
                Vec3::new(0.0, -1.0, 0.0),
                Surface::new(RGBColor::LIGHT_GREEN),
            )
            .into(),
        ],
        DirectionalLight::new(Vec3::new(0.0, -1.0, 0.0), RGBColor::WHITE, 2.0),
    )
}
