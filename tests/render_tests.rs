// Host-side tests for how tile materials map onto pipeline state.

use parallax_core::TileMaterial;
use parallax_render::{blend_state, cull_mode};

#[test]
fn default_material_is_double_sided_and_blended() {
    let m = TileMaterial::default();
    assert_eq!(cull_mode(&m), None);
    assert_eq!(blend_state(&m), wgpu::BlendState::ALPHA_BLENDING);
}

#[test]
fn single_sided_material_culls_back_faces() {
    let m = TileMaterial {
        double_sided: false,
        ..TileMaterial::default()
    };
    assert_eq!(cull_mode(&m), Some(wgpu::Face::Back));
}

#[test]
fn opaque_material_replaces_the_target() {
    let m = TileMaterial {
        transparent: false,
        ..TileMaterial::default()
    };
    assert_eq!(blend_state(&m), wgpu::BlendState::REPLACE);
    assert_eq!(cull_mode(&m), None);
}
