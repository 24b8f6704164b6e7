use crate::tile_image::TileImage;

/// Backing-store size for a logical size at the given pixel ratio.
#[inline]
pub fn physical_size(width: u32, height: u32, pixel_ratio: f32) -> (u32, u32) {
    let w = (width as f32 * pixel_ratio).round() as u32;
    let h = (height as f32 * pixel_ratio).round() as u32;
    (w.max(1), h.max(1))
}

/// Surface extent for a native window: its physical size, never rescaled.
#[inline]
pub fn window_surface_size(physical_width: u32, physical_height: u32) -> (u32, u32) {
    (physical_width.max(1), physical_height.max(1))
}

/// Logical size of a physical window extent, as used for world-space layout
/// and pointer coordinates.
pub fn logical_size(physical_width: u32, physical_height: u32, scale_factor: f64) -> (u32, u32) {
    let scale = if scale_factor.is_finite() && scale_factor > 0.0 {
        scale_factor
    } else {
        1.0
    };
    let w = (physical_width as f64 / scale).round() as u32;
    let h = (physical_height as f64 / scale).round() as u32;
    (w, h)
}

pub(crate) fn create_tile_texture(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    label: &str,
    image: &TileImage,
) -> (wgpu::Texture, wgpu::TextureView) {
    let size = wgpu::Extent3d {
        width: image.width,
        height: image.height,
        depth_or_array_layers: 1,
    };
    let tex = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &tex,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        &image.rgba,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * image.width),
            rows_per_image: Some(image.height),
        },
        size,
    );
    let view = tex.create_view(&wgpu::TextureViewDescriptor::default());
    (tex, view)
}

/// Repeat horizontally, clamp vertically.
pub(crate) fn create_tile_sampler(device: &wgpu::Device, repeat_s: bool) -> wgpu::Sampler {
    device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("tile_sampler"),
        address_mode_u: if repeat_s {
            wgpu::AddressMode::Repeat
        } else {
            wgpu::AddressMode::ClampToEdge
        },
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Nearest,
        ..Default::default()
    })
}
