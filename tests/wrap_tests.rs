// Host-side tests for the two-tile wrap/swap rule.

use glam::Vec3;
use parallax_core::*;

const EPS: f32 = 1e-4;

fn tile(id: usize, x: f32) -> VisualTile {
    VisualTile {
        id: TileId(id),
        position: Vec3::new(x, 0.0, -4.0),
        geometry: PlaneGeometry::new(10.0, 10.0),
        material: TileMaterial::default(),
    }
}

#[test]
fn wrapped_moves_left_tile_behind_right_and_swaps_roles() {
    let pair = TilePair::new(tile(0, -10.0), tile(1, 0.0)).wrapped(10.0);
    assert_eq!(pair.left().id, TileId(1));
    assert_eq!(pair.left().position.x, 0.0);
    assert_eq!(pair.right().id, TileId(0));
    assert_eq!(pair.right().position.x, 10.0);
}

#[test]
fn wrap_is_a_no_op_while_left_tile_is_still_visible() {
    let original = TilePair::new(tile(0, -9.99), tile(1, 0.01));
    let mut pair = original.clone();
    assert!(!pair.wrap(10.0));
    assert_eq!(pair, original);
}

#[test]
fn wrap_only_checks_the_left_tile() {
    // Right tile far off-screen to the left: nothing happens.
    let original = TilePair::new(tile(0, 5.0), tile(1, -50.0));
    assert_eq!(original.clone().wrapped(10.0), original);
}

#[test]
fn wrap_uses_pre_swap_right_position() {
    // Separation has drifted; the relocated tile follows the right tile, not the old spacing.
    let mut pair = TilePair::new(tile(0, -12.0), tile(1, 1.5));
    assert!(pair.wrap(10.0));
    assert_eq!(pair.right().id, TileId(0));
    assert_eq!(pair.right().position.x, 11.5);
}

#[test]
fn scene_step_wraps_fast_layer() {
    let layers = vec![LayerSpec::new("fast.png", -1.0, 100.0)];
    let mut scene = ParallaxScene::new(layers, 800, 450, ParallaxConfig::default()).unwrap();
    let width = scene.viewport().width;
    let scroll = layers_scroll(&scene);

    let mut wraps = 0;
    for _ in 0..100 {
        let before = scene.pairs()[0].clone();
        scene.step(PointerState::default());
        let after = &scene.pairs()[0];
        if after.left().id != before.left().id {
            wraps += 1;
            // Old left is now right, parked one width past the old right tile.
            assert_eq!(after.right().id, before.left().id);
            let expected = before.right().position.x - scroll + width;
            assert!((after.right().position.x - expected).abs() < EPS);
            assert!((after.left().position.x - (before.right().position.x - scroll)).abs() < EPS);
        }
        assert!(after.left().position.x > -width);
        assert!(after.left().position.x < after.right().position.x);
    }
    assert!(wraps > 10, "expected repeated wraps, got {}", wraps);
}

#[test]
fn roles_alternate_between_physical_tiles() {
    let layers = vec![LayerSpec::new("fast.png", -1.0, 100.0)];
    let mut scene = ParallaxScene::new(layers, 800, 450, ParallaxConfig::default()).unwrap();
    let mut leaders = Vec::new();
    for _ in 0..40 {
        let before = scene.pairs()[0].left().id;
        scene.step(PointerState::default());
        let now = scene.pairs()[0].left().id;
        if now != before {
            leaders.push(now);
        }
    }
    assert!(leaders.len() >= 4);
    for w in leaders.windows(2) {
        assert_ne!(w[0], w[1]);
    }
}

#[test]
fn wrap_after_resize_uses_current_width() {
    let layers = vec![LayerSpec::new("fast.png", -1.0, 100.0)];
    let mut scene = ParallaxScene::new(layers, 800, 450, ParallaxConfig::default()).unwrap();
    scene.resize(1600, 450).unwrap();
    let width = scene.viewport().width;
    let scroll = layers_scroll(&scene);

    let mut wrapped = false;
    for _ in 0..200 {
        let before = scene.pairs()[0].clone();
        scene.step(PointerState::default());
        let after = &scene.pairs()[0];
        if after.left().id != before.left().id {
            wrapped = true;
            assert!(before.left().position.x - scroll <= -width);
            let expected = before.right().position.x - scroll + width;
            assert!((after.right().position.x - expected).abs() < EPS);
            assert!((after.separation() - width).abs() < EPS);
            break;
        }
    }
    assert!(wrapped);
}

fn layers_scroll(scene: &ParallaxScene) -> f32 {
    scene.layers()[0].scroll_per_step(scene.config().base_speed)
}
