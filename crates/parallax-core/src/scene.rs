use crate::config::ParallaxConfig;
use crate::error::Result;
use crate::layer::LayerSpec;
use crate::pointer::PointerState;
use crate::tile::{PlaneGeometry, TileId, TileMaterial, TilePair, VisualTile};
use crate::viewport::{OrthoCamera, ViewportState};
use glam::Vec3;
use smallvec::SmallVec;

/// Layer table, one tile pair per layer, and the camera that views them.
pub struct ParallaxScene {
    layers: Vec<LayerSpec>,
    pairs: SmallVec<[TilePair; 4]>,
    viewport: ViewportState,
    camera: OrthoCamera,
    config: ParallaxConfig,
}

impl ParallaxScene {
    pub fn new(
        layers: Vec<LayerSpec>,
        pixel_width: u32,
        pixel_height: u32,
        config: ParallaxConfig,
    ) -> Result<Self> {
        config.validate()?;
        for layer in &layers {
            layer.validate()?;
        }
        let viewport = ViewportState::from_pixels(pixel_width, pixel_height, config.frustum_size)?;
        let camera = OrthoCamera::new(&viewport, config.camera_z, config.near, config.far);
        let geometry = PlaneGeometry::new(viewport.width, viewport.height);
        let material = TileMaterial {
            alpha_test: config.alpha_test,
            ..TileMaterial::default()
        };
        let pairs = layers
            .iter()
            .enumerate()
            .map(|(i, layer)| {
                let tile = |slot: usize, x: f32| VisualTile {
                    id: TileId(i * 2 + slot),
                    position: Vec3::new(x, 0.0, layer.depth),
                    geometry,
                    material,
                };
                TilePair::new(tile(0, 0.0), tile(1, viewport.width))
            })
            .collect();
        log::info!(
            "[scene] layers={} viewport={}x{}px world={:.2}x{:.2}",
            layers.len(),
            pixel_width,
            pixel_height,
            viewport.width,
            viewport.height
        );
        Ok(Self {
            layers,
            pairs,
            viewport,
            camera,
            config,
        })
    }

    pub fn layers(&self) -> &[LayerSpec] {
        &self.layers
    }

    pub fn pairs(&self) -> &[TilePair] {
        &self.pairs
    }

    pub fn pairs_mut(&mut self) -> &mut [TilePair] {
        &mut self.pairs
    }

    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    pub fn camera(&self) -> &OrthoCamera {
        &self.camera
    }

    pub fn config(&self) -> &ParallaxConfig {
        &self.config
    }

    /// Convert raw client coordinates into a pointer sample for this viewport.
    pub fn pointer_from_client(&self, client_x: f32, client_y: f32) -> PointerState {
        PointerState::from_client(client_x, client_y, &self.viewport, self.config.pointer_scale)
    }

    /// Advance every tile pair by one frame.
    pub fn step(&mut self, pointer: PointerState) {
        let width = self.viewport.width;
        let base_speed = self.config.base_speed;
        let strength = self.config.parallax_strength;
        for (i, (pair, layer)) in self.pairs.iter_mut().zip(&self.layers).enumerate() {
            pair.translate_x(-layer.scroll_per_step(base_speed));

            // Only the vertical component is applied; tile x is driven by scrolling alone.
            let offset = pointer.parallax_offset(layer.parallax_weight(), strength);
            pair.set_y(offset.y);

            if pair.wrap(width) {
                log::trace!(
                    "[scene] layer {} wrapped, left={:.3} right={:.3}",
                    i,
                    pair.left().position.x,
                    pair.right().position.x
                );
            }
        }
    }

    /// Refit camera and tile geometry to a new window size.
    ///
    /// Tile positions are kept, except that each pair's right tile is pulled
    /// back to exactly one viewport width from its left tile.
    pub fn resize(&mut self, pixel_width: u32, pixel_height: u32) -> Result<()> {
        let viewport =
            ViewportState::from_pixels(pixel_width, pixel_height, self.config.frustum_size)?;
        self.viewport = viewport;
        self.camera.fit(&viewport);
        let geometry = PlaneGeometry::new(viewport.width, viewport.height);
        for pair in &mut self.pairs {
            pair.replace_geometry(geometry);
            pair.enforce_separation(viewport.width);
        }
        log::info!(
            "[scene] resized to {}x{}px, world width {:.2}",
            pixel_width,
            pixel_height,
            viewport.width
        );
        Ok(())
    }

    /// Tiles sorted far to near, the order transparent surfaces must be drawn in.
    pub fn draw_order(&self) -> Vec<&VisualTile> {
        let mut tiles: Vec<&VisualTile> = self.pairs.iter().flat_map(TilePair::tiles).collect();
        tiles.sort_by(|a, b| a.position.z.total_cmp(&b.position.z));
        tiles
    }
}
