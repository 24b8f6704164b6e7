use crate::constants::*;
use crate::error::{ParallaxError, Result};

/// Scene-wide tuning, defaulting to the values in [`crate::constants`].
#[derive(Clone, Debug, PartialEq)]
pub struct ParallaxConfig {
    pub frustum_size: f32,
    pub base_speed: f32,
    pub parallax_strength: f32,
    pub pointer_scale: f32,
    pub camera_z: f32,
    pub near: f32,
    pub far: f32,
    pub alpha_test: f32,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            frustum_size: FRUSTUM_SIZE,
            base_speed: BASE_SPEED,
            parallax_strength: PARALLAX_STRENGTH,
            pointer_scale: POINTER_SCALE,
            camera_z: CAMERA_Z,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            alpha_test: ALPHA_TEST,
        }
    }
}

impl ParallaxConfig {
    pub fn validate(&self) -> Result<()> {
        positive("frustum_size", self.frustum_size)?;
        finite("base_speed", self.base_speed)?;
        finite("parallax_strength", self.parallax_strength)?;
        finite("pointer_scale", self.pointer_scale)?;
        finite("camera_z", self.camera_z)?;
        positive("near", self.near)?;
        if !(self.far.is_finite() && self.far > self.near) {
            return Err(ParallaxError::InvalidConfig {
                name: "far",
                value: self.far,
            });
        }
        if !(0.0..=1.0).contains(&self.alpha_test) {
            return Err(ParallaxError::InvalidConfig {
                name: "alpha_test",
                value: self.alpha_test,
            });
        }
        Ok(())
    }
}

fn finite(name: &'static str, value: f32) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParallaxError::InvalidConfig { name, value })
    }
}

fn positive(name: &'static str, value: f32) -> Result<()> {
    finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ParallaxError::InvalidConfig { name, value })
    }
}
