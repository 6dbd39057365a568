extern crate rust_raycaster as root;

use root::parsing::config::{Config, TOMLConfig};
use root::parsing::{construct_scene, default_scene, get_settings};
use root::prelude::*;
use root::renderer::{construct_renderer, output_film};

#[macro_use]
extern crate tracing;

use anyhow::Context;
use structopt::StructOpt;
use tracing::level_filters::LevelFilter;

use std::path::PathBuf;

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    #[structopt(long)]
    pub scene_file: Option<String>,
    #[structopt(long, default_value = "data/config.toml")]
    pub config_file: String,
    #[structopt(short = "n", long)]
    pub dry_run: bool,
    #[structopt(short = "l", long, default_value = "info")]
    pub log_level: String,
}

fn parse_log_level(level: &str, default: LevelFilter) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "warn" => LevelFilter::WARN,
        "info" => LevelFilter::INFO,
        "trace" => LevelFilter::TRACE,
        "error" => LevelFilter::ERROR,
        "debug" => LevelFilter::DEBUG,
        "off" => LevelFilter::OFF,
        _ => default,
    }
}

fn construct_world(config: &Config) -> anyhow::Result<Scene> {
    match &config.scene_file {
        Some(path) => construct_scene(path)
            .with_context(|| format!("fatal error parsing scene {}", path.to_string_lossy())),
        None => {
            info!("no scene file given, using the built in scene");
            let scene = default_scene();
            Camera::for_scene(&scene)?;
            Ok(scene)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let opts = Opt::from_args();
    tracing_subscriber::fmt()
        .with_max_level(parse_log_level(&opts.log_level, LevelFilter::INFO))
        .init();

    let toml_config: TOMLConfig = get_settings(&PathBuf::from(&opts.config_file))
        .with_context(|| format!("couldn't read {}", opts.config_file))?;
    let mut config = Config::from(toml_config);

    // override scene file based on provided command line argument
    if let Some(scene_file) = opts.scene_file {
        config.scene_file = Some(PathBuf::from(scene_file));
    }

    let scene = construct_world(&config)?;
    if opts.dry_run {
        info!("dry run, scene is valid. exiting without rendering");
        return Ok(());
    }

    let renderer = construct_renderer(config.renderer);
    let film = renderer.render(&scene, &config.render_settings)?;
    let path = output_film(&config.render_settings, &film).context("failed to write image")?;
    info!("wrote {}", path.to_string_lossy());
    Ok(())
}
