use crate::constants::DEFAULT_LAYERS;
use crate::error::{ParallaxError, Result};

/// One row of the layer definition table.
///
/// `depth` doubles as the tile z coordinate and the parallax weight;
/// `speed` multiplies the global base scroll speed.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerSpec {
    pub image: String,
    pub depth: f32,
    pub speed: f32,
}

impl LayerSpec {
    pub fn new(image: impl Into<String>, depth: f32, speed: f32) -> Self {
        Self {
            image: image.into(),
            depth,
            speed,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.depth.is_finite() {
            return Err(ParallaxError::InvalidDepth {
                image: self.image.clone(),
                depth: self.depth,
            });
        }
        if !(self.speed.is_finite() && self.speed >= 0.0) {
            return Err(ParallaxError::InvalidSpeed {
                image: self.image.clone(),
                speed: self.speed,
            });
        }
        Ok(())
    }

    /// Horizontal distance both tiles travel each animation step.
    #[inline]
    pub fn scroll_per_step(&self, base_speed: f32) -> f32 {
        base_speed * self.speed
    }

    /// Deeper layers react more strongly to the pointer.
    #[inline]
    pub fn parallax_weight(&self) -> f32 {
        self.depth.abs() + 1.0
    }
}

/// The two-layer table the demo ships with.
pub fn default_layers() -> Vec<LayerSpec> {
    DEFAULT_LAYERS
        .iter()
        .map(|&(image, depth, speed)| LayerSpec::new(image, depth, speed))
        .collect()
}
