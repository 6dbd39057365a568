use crate::math::RGBColor;

use serde::Deserialize;

use std::path::PathBuf;

#[derive(Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum RendererType {
    Naive,
    Tiled { tile_rows: Option<u32> },
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct RenderSettings {
    pub filename: Option<String>,         // defaults to "test"
    pub output_directory: Option<String>, // defaults to "output"
    pub background: Option<RGBColor>,     // defaults to light sky blue
    pub threads: Option<u16>,             // defaults to the number of cpus, tiled renderer only
}

#[derive(Deserialize, Clone, Debug)]
pub struct TOMLConfig {
    pub default_scene_file: Option<String>,
    pub renderer: RendererType,
    #[serde(default)]
    pub render_settings: RenderSettings,
}

#[derive(Clone, Debug)]
pub struct Config {
    /// None renders the built in demo scene.
    pub scene_file: Option<PathBuf>,
    pub renderer: RendererType,
    pub render_settings: RenderSettings,
}

impl From<TOMLConfig> for Config {
    fn from(data: TOMLConfig) -> Self {
        Config {
            scene_file: data.default_scene_file.map(PathBuf::from),
            renderer: data.renderer,
            render_settings: data.render_settings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let input = r#"
            default_scene_file = "data/scenes/default.toml"

            [renderer]
            type = "Tiled"
            tile_rows = 8

            [render_settings]
            filename = "beauty"
            background = [0, 0, 0]
            threads = 4
        "#;
        let config: Config = toml::from_str::<TOMLConfig>(input).unwrap().into();
        assert_eq!(
            config.scene_file,
            Some(PathBuf::from("data/scenes/default.toml"))
        );
        assert_eq!(config.renderer, RendererType::Tiled { tile_rows: Some(8) });
        assert_eq!(config.render_settings.filename.as_deref(), Some("beauty"));
        assert_eq!(config.render_settings.output_directory, None);
        assert_eq!(config.render_settings.background, Some(RGBColor::BLACK));
        assert_eq!(config.render_settings.threads, Some(4));
    }

    #[test]
    fn test_render_settings_optional() {
        let config: TOMLConfig = toml::from_str("[renderer]\ntype = \"Naive\"\n").unwrap();
        assert_eq!(config.renderer, RendererType::Naive);
        assert_eq!(config.render_settings, RenderSettings::default());
        assert!(config.default_scene_file.is_none());
    }
}
