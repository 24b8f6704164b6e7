// Host-side tests for the animation driver and the renderer contract.

use parallax_core::*;

#[derive(Default)]
struct RecordingRenderer {
    renders: usize,
    last_left_x: Vec<f32>,
    sizes: Vec<(u32, u32)>,
    ratio: Option<f32>,
    fail: bool,
}

impl Renderer for RecordingRenderer {
    type Error = &'static str;

    fn set_size(&mut self, width: u32, height: u32) {
        self.sizes.push((width, height));
    }

    fn set_pixel_ratio(&mut self, ratio: f32) {
        self.ratio = Some(clamp_pixel_ratio(ratio));
    }

    fn render(&mut self, scene: &ParallaxScene, camera: &OrthoCamera) -> Result<(), Self::Error> {
        assert_eq!(camera, scene.camera());
        self.renders += 1;
        self.last_left_x = scene.pairs().iter().map(|p| p.left().position.x).collect();
        if self.fail {
            Err("lost")
        } else {
            Ok(())
        }
    }
}

fn scene() -> ParallaxScene {
    ParallaxScene::new(default_layers(), 800, 450, ParallaxConfig::default()).unwrap()
}

#[test]
fn tick_steps_then_renders_once() {
    let mut scene = scene();
    let mut driver = AnimationDriver::new();
    let mut renderer = RecordingRenderer::default();
    assert!(driver.running);

    driver
        .tick(&mut scene, PointerState::default(), &mut renderer)
        .unwrap();
    assert_eq!(renderer.renders, 1);
    assert_eq!(driver.frames(), 1);
    // The draw sees the already advanced positions.
    let expected = -BASE_SPEED * scene.layers()[0].speed;
    assert!((renderer.last_left_x[0] - expected).abs() < 1e-6);
}

#[test]
fn paused_driver_still_draws_but_does_not_move() {
    let mut scene = scene();
    let mut driver = AnimationDriver::new();
    driver.running = false;
    let mut renderer = RecordingRenderer::default();
    for _ in 0..5 {
        driver
            .tick(&mut scene, PointerState { x: 0.0, y: 0.5 }, &mut renderer)
            .unwrap();
    }
    assert_eq!(renderer.renders, 5);
    assert_eq!(driver.frames(), 5);
    for pair in scene.pairs() {
        assert_eq!(pair.left().position.x, 0.0);
        assert_eq!(pair.left().position.y, 0.0);
    }
}

#[test]
fn advance_does_not_render() {
    let mut scene = scene();
    let mut driver = AnimationDriver::default();
    driver.advance(&mut scene, PointerState::default());
    assert_eq!(driver.frames(), 1);
    assert!(scene.pairs()[0].left().position.x < 0.0);
}

#[test]
fn render_errors_are_returned_to_the_caller() {
    let mut scene = scene();
    let mut driver = AnimationDriver::new();
    let mut renderer = RecordingRenderer {
        fail: true,
        ..Default::default()
    };
    assert_eq!(
        driver.tick(&mut scene, PointerState::default(), &mut renderer),
        Err("lost")
    );
}

#[test]
fn renderer_receives_size_and_capped_ratio() {
    let mut renderer = RecordingRenderer::default();
    renderer.set_pixel_ratio(3.0);
    renderer.set_size(1600, 450);
    assert_eq!(renderer.ratio, Some(2.0));
    assert_eq!(renderer.sizes, vec![(1600, 450)]);
}

#[test]
fn pixel_ratio_is_capped_at_two() {
    assert_eq!(clamp_pixel_ratio(1.0), 1.0);
    assert_eq!(clamp_pixel_ratio(1.5), 1.5);
    assert_eq!(clamp_pixel_ratio(2.0), 2.0);
    assert_eq!(clamp_pixel_ratio(3.0), MAX_PIXEL_RATIO);
    assert_eq!(clamp_pixel_ratio(f32::NAN), 1.0);
    assert_eq!(clamp_pixel_ratio(0.0), 1.0);
}
