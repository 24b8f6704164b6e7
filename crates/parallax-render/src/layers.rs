use fnv::FnvHashMap;
use parallax_core::{TileMaterial, VisualTile};
use wgpu::util::DeviceExt;

use crate::helpers;
use crate::tile_image::TileImage;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct QuadVertex {
    pos: [f32; 2],
    uv: [f32; 2],
}

// Unit quad centred on the origin, counter-clockwise when seen from the camera;
// v runs top to bottom to match image rows.
const QUAD_VERTICES: [QuadVertex; 6] = [
    QuadVertex { pos: [-0.5, -0.5], uv: [0.0, 1.0] },
    QuadVertex { pos: [0.5, -0.5], uv: [1.0, 1.0] },
    QuadVertex { pos: [0.5, 0.5], uv: [1.0, 0.0] },
    QuadVertex { pos: [-0.5, -0.5], uv: [0.0, 1.0] },
    QuadVertex { pos: [0.5, 0.5], uv: [1.0, 0.0] },
    QuadVertex { pos: [-0.5, 0.5], uv: [0.0, 0.0] },
];

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct TileUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) params: [f32; 4],
}

/// Face culling for a tile material. Double-sided tiles are never culled.
pub fn cull_mode(material: &TileMaterial) -> Option<wgpu::Face> {
    if material.double_sided {
        None
    } else {
        Some(wgpu::Face::Back)
    }
}

/// Colour blending for a tile material. Opaque tiles overwrite the target.
pub fn blend_state(material: &TileMaterial) -> wgpu::BlendState {
    if material.transparent {
        wgpu::BlendState::ALPHA_BLENDING
    } else {
        wgpu::BlendState::REPLACE
    }
}

/// The material flags that need a distinct pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct PipelineKey {
    double_sided: bool,
    transparent: bool,
}

impl From<&TileMaterial> for PipelineKey {
    fn from(m: &TileMaterial) -> Self {
        Self {
            double_sided: m.double_sided,
            transparent: m.transparent,
        }
    }
}

pub(crate) struct LayerResources {
    shader: wgpu::ShaderModule,
    pipeline_layout: wgpu::PipelineLayout,
    color_format: wgpu::TextureFormat,
    pub(crate) pipelines: FnvHashMap<PipelineKey, wgpu::RenderPipeline>,
    pub(crate) bind_group_layout: wgpu::BindGroupLayout,
    pub(crate) quad_vb: wgpu::Buffer,
}

impl LayerResources {
    /// Pipeline key for `material`, building the pipeline on first use.
    pub(crate) fn ensure_pipeline(
        &mut self,
        device: &wgpu::Device,
        material: &TileMaterial,
    ) -> PipelineKey {
        let key = PipelineKey::from(material);
        if !self.pipelines.contains_key(&key) {
            let pipeline = create_layer_pipeline(
                device,
                &self.shader,
                &self.pipeline_layout,
                self.color_format,
                material,
            );
            log::debug!("[gpu] built layer pipeline {:?}", key);
            self.pipelines.insert(key, pipeline);
        }
        key
    }
}

/// GPU objects owned by a single tile. The texture is independent per tile
/// even when two tiles show the same image.
pub(crate) struct TileResources {
    _texture: wgpu::Texture,
    pub(crate) pipeline: PipelineKey,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

pub(crate) fn create_layer_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
) -> LayerResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("layer_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::LAYER_WGSL.into()),
    });
    let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("layer_bgl"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    view_dimension: wgpu::TextureViewDimension::D2,
                    multisampled: false,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 2,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    });
    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("layer_pl"),
        bind_group_layouts: &[&bind_group_layout],
        push_constant_ranges: &[],
    });
    let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("layer_quad_vb"),
        contents: bytemuck::cast_slice(&QUAD_VERTICES),
        usage: wgpu::BufferUsages::VERTEX,
    });

    LayerResources {
        shader,
        pipeline_layout,
        color_format,
        pipelines: FnvHashMap::default(),
        bind_group_layout,
        quad_vb,
    }
}

fn create_layer_pipeline(
    device: &wgpu::Device,
    shader: &wgpu::ShaderModule,
    layout: &wgpu::PipelineLayout,
    color_format: wgpu::TextureFormat,
    material: &TileMaterial,
) -> wgpu::RenderPipeline {
    let vertex_buffers = [wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<QuadVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x2,
                offset: 0,
                shader_location: 0,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x2,
                offset: 8,
                shader_location: 1,
            },
        ],
    }];
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("layer_pipeline"),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: &vertex_buffers,
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            cull_mode: cull_mode(material),
            ..wgpu::PrimitiveState::default()
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: Some(blend_state(material)),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    })
}

pub(crate) fn create_tile_resources(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    layers: &mut LayerResources,
    tile: &VisualTile,
    image: &TileImage,
) -> TileResources {
    let pipeline = layers.ensure_pipeline(device, &tile.material);
    let label = format!("tile_{}", tile.id.0);
    let (texture, view) = helpers::create_tile_texture(device, queue, &label, image);
    let sampler = helpers::create_tile_sampler(device, tile.material.repeat_wrap_s);
    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("tile_uniforms"),
        size: std::mem::size_of::<TileUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(&label),
        layout: &layers.bind_group_layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::TextureView(&view),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: wgpu::BindingResource::Sampler(&sampler),
            },
        ],
    });
    TileResources {
        _texture: texture,
        pipeline,
        uniform_buffer,
        bind_group,
    }
}
