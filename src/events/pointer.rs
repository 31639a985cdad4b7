use crate::core::{pointer_to_ndc, Stage};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer position steers the camera target; the frame loop does the easing.
pub fn wire_pointer(document: &web::Document, stage: Rc<RefCell<Stage>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let Some(window) = web::window() else {
            return;
        };
        let (w, h) = dom::viewport_size(&window);
        let ndc = pointer_to_ndc(
            ev.client_x() as f32,
            ev.client_y() as f32,
            w as f32,
            h as f32,
        );
        stage.borrow_mut().on_pointer(ndc.x, ndc.y);
    }) as Box<dyn FnMut(_)>);

    _ = document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}
