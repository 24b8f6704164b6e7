//! wgpu renderer for parallax tile pairs.
//!
//! Implements [`parallax_core::Renderer`] for any surface wgpu can target, so
//! the web canvas and the native window share one drawing path.

mod gpu;
mod helpers;
mod layers;
mod tile_image;

pub use gpu::GpuState;
pub use helpers::{logical_size, physical_size, window_surface_size};
pub use layers::{blend_state, cull_mode};
pub use tile_image::TileImage;

// Shaders bundled as string constants
pub static LAYER_WGSL: &str = include_str!("../shaders/layer.wgsl");
