// Web front-end constants.

// DOM
pub const CANVAS_ID: &str = "canvas";

// Layer images are fetched relative to the page unless a base is set
pub const ASSET_BASE_URL: &str = "";

#[inline]
pub fn asset_url(base: &str, image: &str) -> String {
    if base.is_empty() {
        image.to_string()
    } else {
        format!("{}/{}", base.trim_end_matches('/'), image.trim_start_matches('/'))
    }
}

// Hidden pages can report 0x0 at startup; lay out at 1x1 until the first real resize
#[inline]
pub fn startup_size(width: u32, height: u32) -> (u32, u32) {
    (width.max(1), height.max(1))
}
