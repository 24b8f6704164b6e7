use fnv::FnvHashMap;
use parallax_core::{clamp_pixel_ratio, OrthoCamera, ParallaxScene, Renderer, TileId, VisualTile};

use crate::helpers::{physical_size, window_surface_size};
use crate::layers::{create_layer_resources, create_tile_resources, LayerResources, TileResources, TileUniforms};
use crate::tile_image::TileImage;

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    layers: LayerResources,
    tiles: FnvHashMap<TileId, TileResources>,
    // Size the surface is derived from, scaled by `pixel_ratio`
    width: u32,
    height: u32,
    pixel_ratio: f32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        target: impl Into<wgpu::SurfaceTarget<'a>>,
        width: u32,
        height: u32,
        pixel_ratio: f32,
    ) -> anyhow::Result<Self> {
        let pixel_ratio = clamp_pixel_ratio(pixel_ratio);
        let (pw, ph) = physical_size(width, height, pixel_ratio);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(target)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits keep older WebGPU implementations happy
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: pw,
            height: ph,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!(
            "[gpu] surface {}x{} ({}x{} @ {:.2}x) format={:?}",
            pw,
            ph,
            width,
            height,
            pixel_ratio,
            format
        );

        let layers = create_layer_resources(&device, format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            layers,
            tiles: FnvHashMap::default(),
            width,
            height,
            pixel_ratio,
            clear_color: wgpu::Color::BLACK,
        })
    }

    /// Give a tile its own texture instance. Replaces any previous upload.
    pub fn upload_tile(&mut self, tile: &VisualTile, image: &TileImage) {
        let res = create_tile_resources(&self.device, &self.queue, &mut self.layers, tile, image);
        self.tiles.insert(tile.id, res);
    }

    /// Reapply the current configuration, e.g. after the surface was lost.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    /// Configure the surface straight from a window's physical extent.
    ///
    /// Native swapchains must match the window exactly, so no pixel-ratio
    /// rounding or cap is applied here.
    pub fn resize_physical(&mut self, physical_width: u32, physical_height: u32) {
        if physical_width == 0 || physical_height == 0 {
            return;
        }
        let (w, h) = window_surface_size(physical_width, physical_height);
        self.width = w;
        self.height = h;
        self.pixel_ratio = 1.0;
        self.resize_surface();
    }

    fn resize_surface(&mut self) {
        let (pw, ph) = physical_size(self.width, self.height, self.pixel_ratio);
        if pw != self.config.width || ph != self.config.height {
            self.config.width = pw;
            self.config.height = ph;
            self.surface.configure(&self.device, &self.config);
            log::debug!("[gpu] surface resized to {}x{}", pw, ph);
        }
    }
}

impl Renderer for GpuState<'_> {
    type Error = wgpu::SurfaceError;

    fn set_size(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.width = width;
        self.height = height;
        self.resize_surface();
    }

    fn set_pixel_ratio(&mut self, ratio: f32) {
        self.pixel_ratio = clamp_pixel_ratio(ratio);
        self.resize_surface();
    }

    fn render(&mut self, scene: &ParallaxScene, camera: &OrthoCamera) -> Result<(), wgpu::SurfaceError> {
        let view_proj = camera.view_proj().to_cols_array_2d();
        let draw = scene.draw_order();
        for tile in &draw {
            if let Some(res) = self.tiles.get(&tile.id) {
                let u = TileUniforms {
                    view_proj,
                    model: tile.model_matrix().to_cols_array_2d(),
                    params: [tile.material.alpha_test, 0.0, 0.0, 0.0],
                };
                self.queue
                    .write_buffer(&res.uniform_buffer, 0, bytemuck::bytes_of(&u));
            }
        }

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("layer_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_vertex_buffer(0, self.layers.quad_vb.slice(..));
            for tile in &draw {
                let Some(res) = self.tiles.get(&tile.id) else {
                    continue;
                };
                if let Some(pipeline) = self.layers.pipelines.get(&res.pipeline) {
                    rpass.set_pipeline(pipeline);
                    rpass.set_bind_group(0, &res.bind_group, &[]);
                    rpass.draw(0..6, 0..1);
                }
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
