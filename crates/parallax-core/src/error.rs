use thiserror::Error;

/// Errors raised while building or resizing a parallax scene.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParallaxError {
    #[error("viewport must be non-empty, got {width}x{height} pixels")]
    EmptyViewport { width: u32, height: u32 },

    #[error("layer `{image}` has invalid depth {depth}")]
    InvalidDepth { image: String, depth: f32 },

    #[error("layer `{image}` has invalid speed {speed} (must be finite and >= 0)")]
    InvalidSpeed { image: String, speed: f32 },

    #[error("config value `{name}` is invalid: {value}")]
    InvalidConfig { name: &'static str, value: f32 },
}

pub type Result<T, E = ParallaxError> = std::result::Result<T, E>;
