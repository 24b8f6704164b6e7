use parallax_core::PointerState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

/// Overwrite the shared pointer sample on every move. No smoothing.
pub fn wire_pointermove(pointer: Rc<RefCell<PointerState>>, pointer_scale: f32) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let Some(window) = web::window() else {
            return;
        };
        let (w, h) = dom::inner_size(&window);
        *pointer.borrow_mut() = PointerState::from_client_px(
            ev.client_x() as f32,
            ev.client_y() as f32,
            w as f32,
            h as f32,
            pointer_scale,
        );
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
