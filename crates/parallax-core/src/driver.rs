use crate::constants::MAX_PIXEL_RATIO;
use crate::pointer::PointerState;
use crate::scene::ParallaxScene;
use crate::viewport::OrthoCamera;
use instant::Instant;
use std::time::Duration;

/// The drawing collaborator the animation hands each frame to.
pub trait Renderer {
    type Error;

    /// Resize the output to the given logical (CSS) pixel size.
    fn set_size(&mut self, width: u32, height: u32);
    fn set_pixel_ratio(&mut self, ratio: f32);
    fn render(&mut self, scene: &ParallaxScene, camera: &OrthoCamera) -> Result<(), Self::Error>;
}

/// Device pixel ratios above 2x cost fill rate without a visible gain.
#[inline]
pub fn clamp_pixel_ratio(device_pixel_ratio: f32) -> f32 {
    if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio.min(MAX_PIXEL_RATIO)
    } else {
        1.0
    }
}

const FPS_REPORT_INTERVAL: Duration = Duration::from_secs(5);

/// Per-refresh driver: steps the scene while `running` and draws every tick.
pub struct AnimationDriver {
    pub running: bool,
    frames: u64,
    window_frames: u32,
    window_start: Instant,
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationDriver {
    pub fn new() -> Self {
        Self {
            running: true,
            frames: 0,
            window_frames: 0,
            window_start: Instant::now(),
        }
    }

    /// Total ticks seen, stepped or not.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Step the scene if running, without drawing.
    pub fn advance(&mut self, scene: &mut ParallaxScene, pointer: PointerState) {
        self.frames += 1;
        if self.running {
            scene.step(pointer);
        }
        self.report_fps();
    }

    pub fn tick<R: Renderer>(
        &mut self,
        scene: &mut ParallaxScene,
        pointer: PointerState,
        renderer: &mut R,
    ) -> Result<(), R::Error> {
        self.advance(scene, pointer);
        let scene: &ParallaxScene = scene;
        renderer.render(scene, scene.camera())
    }

    fn report_fps(&mut self) {
        self.window_frames += 1;
        let elapsed = self.window_start.elapsed();
        if elapsed >= FPS_REPORT_INTERVAL {
            log::debug!(
                "[frame] {:.1} fps over {} frames",
                self.window_frames as f32 / elapsed.as_secs_f32(),
                self.window_frames
            );
            self.window_frames = 0;
            self.window_start = Instant::now();
        }
    }
}
