use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    /// The fov adjustment is derived from the vertical extent, which must be the narrower one.
    #[error("sensor must be at least as wide as it is tall, got {width}x{height}")]
    NonLandscapeSensor { width: u32, height: u32 },

    #[error("sensor has no pixels, got {width}x{height}")]
    EmptySensor { width: u32, height: u32 },

    #[error("field of view must be strictly between 0 and 180 degrees, got {0}")]
    InvalidFov(f32),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("failed to parse toml: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to build render thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, RenderError>;
