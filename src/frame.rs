use parallax_core::{AnimationDriver, ParallaxScene, PointerState, Renderer, VisualTile};
use parallax_render::{GpuState, TileImage};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

pub struct FrameContext<'a> {
    pub scene: ParallaxScene,
    pub pointer: Rc<RefCell<PointerState>>,
    pub driver: AnimationDriver,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<GpuState<'a>>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let pointer = *self.pointer.borrow();
        let Some(g) = &mut self.gpu else {
            // Keep the scene moving even without a renderer so state stays consistent.
            self.driver.advance(&mut self.scene, pointer);
            return;
        };
        match self.driver.tick(&mut self.scene, pointer, g) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
            Err(e) => log::error!("render error: {:?}", e),
        }
    }

    pub fn resize(&mut self, width: u32, height: u32, pixel_ratio: f32) {
        if let Err(e) = self.scene.resize(width, height) {
            log::warn!("[resize] ignored: {}", e);
            return;
        }
        dom::size_canvas(&self.canvas, width, height, pixel_ratio);
        if let Some(g) = &mut self.gpu {
            g.set_pixel_ratio(pixel_ratio);
            g.set_size(width, height);
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    width: u32,
    height: u32,
    pixel_ratio: f32,
    tiles: &[(VisualTile, TileImage)],
) -> Option<GpuState<'static>> {
    let target = wgpu::SurfaceTarget::Canvas(canvas.clone());
    match GpuState::new(target, width, height, pixel_ratio).await {
        Ok(mut g) => {
            for (tile, image) in tiles {
                g.upload_tile(tile, image);
            }
            Some(g)
        }
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Drive `frame` from requestAnimationFrame, rescheduling at the end of each tick.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
