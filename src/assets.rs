use crate::constants::{asset_url, ASSET_BASE_URL};
use fnv::FnvHashMap;
use parallax_core::{ParallaxScene, VisualTile};
use parallax_render::TileImage;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {}: {:?}", url, e))?;
    let resp: web::Response = resp
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("fetch {}: not a Response: {:?}", url, e))?;
    if !resp.ok() {
        anyhow::bail!("fetch {}: HTTP {}", url, resp.status());
    }
    let buf = resp
        .array_buffer()
        .map_err(|e| anyhow::anyhow!("fetch {}: {:?}", url, e))?;
    let buf = JsFuture::from(buf)
        .await
        .map_err(|e| anyhow::anyhow!("fetch {}: {:?}", url, e))?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

/// Fetch every layer image and decode one independent copy per tile.
///
/// A failed fetch or decode yields a blank tile rather than an error.
pub async fn load_tile_images(scene: &ParallaxScene) -> Vec<(VisualTile, TileImage)> {
    let mut fetched: FnvHashMap<String, Option<Vec<u8>>> = FnvHashMap::default();
    let mut out = Vec::with_capacity(scene.pairs().len() * 2);
    for (pair, layer) in scene.pairs().iter().zip(scene.layers()) {
        if !fetched.contains_key(&layer.image) {
            let url = asset_url(ASSET_BASE_URL, &layer.image);
            let bytes = match fetch_bytes(&url).await {
                Ok(b) => Some(b),
                Err(e) => {
                    log::warn!("[assets] {:#}", e);
                    None
                }
            };
            fetched.insert(layer.image.clone(), bytes);
        }
        for tile in pair.tiles() {
            let image = match fetched.get(&layer.image).and_then(Option::as_ref) {
                Some(bytes) => TileImage::decode_or_blank(&layer.image, bytes),
                None => TileImage::blank(),
            };
            out.push((tile.clone(), image));
        }
    }
    log::info!("[assets] prepared {} tile textures", out.len());
    out
}
