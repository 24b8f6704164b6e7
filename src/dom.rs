use parallax_core::clamp_pixel_ratio;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn find_canvas(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    let el = document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("#{} is not a canvas: {:?}", id, e)))
}

/// Window inner size in CSS pixels; zero if the host reports nothing usable.
pub fn inner_size(window: &web::Window) -> (u32, u32) {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0) as u32
    };
    (read(window.inner_width()), read(window.inner_height()))
}

#[inline]
pub fn pixel_ratio(window: &web::Window) -> f32 {
    clamp_pixel_ratio(window.device_pixel_ratio() as f32)
}

/// Match the canvas backing store to `css size * pixel_ratio` and pin its CSS size.
pub fn size_canvas(canvas: &web::HtmlCanvasElement, width: u32, height: u32, pixel_ratio: f32) {
    let (pw, ph) = parallax_render::physical_size(width, height, pixel_ratio);
    canvas.set_width(pw);
    canvas.set_height(ph);
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", width));
    _ = style.set_property("height", &format!("{}px", height));
}
