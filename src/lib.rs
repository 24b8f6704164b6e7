#![cfg(target_arch = "wasm32")]
use parallax_core::{default_layers, AnimationDriver, ParallaxConfig, ParallaxScene, PointerState};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod constants;
mod dom;
mod events;
mod frame;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("parallax-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::find_canvas(&document, constants::CANVAS_ID)?;

    let (inner_w, inner_h) = dom::inner_size(&window);
    let (width, height) = constants::startup_size(inner_w, inner_h);
    if (width, height) != (inner_w, inner_h) {
        log::info!("[init] window reports {}x{}, waiting for a resize", inner_w, inner_h);
    }
    let pixel_ratio = dom::pixel_ratio(&window);
    let config = ParallaxConfig::default();
    let pointer_scale = config.pointer_scale;
    let scene = ParallaxScene::new(default_layers(), width, height, config)?;
    dom::size_canvas(&canvas, width, height, pixel_ratio);

    let tiles = assets::load_tile_images(&scene).await;
    let gpu = frame::init_gpu(&canvas, width, height, pixel_ratio, &tiles).await;

    let pointer = Rc::new(RefCell::new(PointerState::default()));
    events::wire_pointermove(pointer.clone(), pointer_scale);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        pointer,
        driver: AnimationDriver::new(),
        canvas,
        gpu,
    }));
    events::wire_resize(frame_ctx.clone());

    // Start RAF loop
    frame::start_loop(frame_ctx);
    Ok(())
}
