use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::frame::FrameContext;

pub fn wire_resize(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let resize_closure = Closure::wrap(Box::new(move || {
        if let Some(window) = web::window() {
            let (w, h) = dom::inner_size(&window);
            let ratio = dom::pixel_ratio(&window);
            frame_ctx.borrow_mut().resize(w, h, ratio);
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}
