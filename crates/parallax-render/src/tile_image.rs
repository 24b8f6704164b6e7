use anyhow::Context;

/// Decoded RGBA8 pixels ready for upload to one tile texture.
#[derive(Clone, Debug, PartialEq)]
pub struct TileImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl TileImage {
    pub fn decode(bytes: &[u8]) -> anyhow::Result<Self> {
        let img = image::load_from_memory(bytes).context("decode tile image")?;
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(Self {
            width,
            height,
            rgba: rgba.into_raw(),
        })
    }

    /// 1x1 fully transparent stand-in for images that failed to load.
    pub fn blank() -> Self {
        Self {
            width: 1,
            height: 1,
            rgba: vec![0, 0, 0, 0],
        }
    }

    /// Decode, falling back to [`TileImage::blank`] with a warning.
    pub fn decode_or_blank(name: &str, bytes: &[u8]) -> Self {
        match Self::decode(bytes) {
            Ok(img) => img,
            Err(e) => {
                log::warn!("[assets] {}: {:#}, using blank tile", name, e);
                Self::blank()
            }
        }
    }
}
