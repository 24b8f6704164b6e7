// Host-side tests for viewport resizing and camera bounds.

use glam::Vec4;
use parallax_core::*;

const EPS: f32 = 1e-4;

fn scene() -> ParallaxScene {
    ParallaxScene::new(default_layers(), 800, 450, ParallaxConfig::default()).unwrap()
}

#[test]
fn camera_bounds_follow_viewport() {
    let scene = scene();
    let cam = scene.camera();
    let width = scene.viewport().width;
    assert!((cam.left + width / 2.0).abs() < EPS);
    assert!((cam.right - width / 2.0).abs() < EPS);
    assert_eq!(cam.top, FRUSTUM_SIZE / 2.0);
    assert_eq!(cam.bottom, -FRUSTUM_SIZE / 2.0);
    assert!((cam.width() - width).abs() < EPS);
}

#[test]
fn view_proj_maps_viewport_edges_to_clip_edges() {
    let scene = scene();
    let cam = scene.camera();
    let vp = cam.view_proj();

    let centre = vp * Vec4::new(0.0, 0.0, -4.0, 1.0);
    assert!(centre.x.abs() < EPS && centre.y.abs() < EPS);
    assert!(centre.z > 0.0 && centre.z < 1.0);

    let corner = vp * Vec4::new(cam.right, cam.top, -2.0, 1.0);
    assert!((corner.x - 1.0).abs() < EPS);
    assert!((corner.y - 1.0).abs() < EPS);
}

#[test]
fn doubling_width_doubles_world_width_and_geometry() {
    let mut scene = scene();
    let old_width = scene.viewport().width;
    scene.resize(1600, 450).unwrap();
    let new_width = scene.viewport().width;
    assert!((new_width - 2.0 * old_width).abs() < EPS);
    assert!((scene.camera().right - new_width / 2.0).abs() < EPS);
    for pair in scene.pairs() {
        for tile in pair.tiles() {
            assert_eq!(tile.geometry, PlaneGeometry::new(new_width, FRUSTUM_SIZE));
        }
        assert!((pair.separation() - new_width).abs() < EPS);
    }
}

#[test]
fn resize_keeps_left_positions_and_corrects_right() {
    let mut scene = scene();
    for _ in 0..123 {
        scene.step(PointerState { x: 0.0, y: 0.1 });
    }
    let lefts: Vec<f32> = scene.pairs().iter().map(|p| p.left().position.x).collect();
    let ys: Vec<f32> = scene.pairs().iter().map(|p| p.left().position.y).collect();
    scene.resize(1024, 768).unwrap();
    let width = scene.viewport().width;
    for (i, pair) in scene.pairs().iter().enumerate() {
        assert_eq!(pair.left().position.x, lefts[i]);
        assert_eq!(pair.left().position.y, ys[i]);
        assert!((pair.separation() - width).abs() < EPS);
    }
}

#[test]
fn resize_fixes_drifted_separation() {
    let mut scene = scene();
    scene.pairs_mut()[1].right_mut().position.x += 0.5;
    scene.resize(800, 450).unwrap();
    let width = scene.viewport().width;
    assert!((scene.pairs()[1].separation() - width).abs() < EPS);
}

#[test]
fn empty_viewport_is_rejected_and_state_kept() {
    let mut scene = scene();
    let before = *scene.viewport();
    let err = scene.resize(0, 450).unwrap_err();
    assert_eq!(
        err,
        ParallaxError::EmptyViewport {
            width: 0,
            height: 450
        }
    );
    assert_eq!(*scene.viewport(), before);
}

#[test]
fn viewport_from_pixels_uses_aspect() {
    let vp = ViewportState::from_pixels(800, 450, 10.0).unwrap();
    assert!((vp.aspect() - 1.777_778).abs() < EPS);
    assert!((vp.width - 17.777_779).abs() < EPS);
    assert_eq!(vp.height, 10.0);
}
