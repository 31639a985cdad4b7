use crate::core::scroll::{
    is_vertical_wheel, normalize_wheel_delta, ScrollSmoother, WheelDeltaMode,
};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Take over wheel scrolling. Pinch-zoom (ctrl+wheel) stays native.
pub fn wire_wheel(window: &web::Window, smoother: Rc<RefCell<ScrollSmoother>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        if ev.ctrl_key() || !is_vertical_wheel(ev.delta_x(), ev.delta_y()) {
            return;
        }
        let Some(window) = web::window() else {
            return;
        };
        let (_, vh) = dom::viewport_size(&window);
        let mode = WheelDeltaMode::from_dom(ev.delta_mode());
        let delta = normalize_wheel_delta(ev.delta_y(), mode, vh);
        ev.prevent_default();
        let mut s = smoother.borrow_mut();
        // Content height can change after load (fonts, images).
        if let Some(document) = window.document() {
            s.set_limit(dom::scroll_limit(&window, &document));
        }
        s.on_wheel(delta);
    }) as Box<dyn FnMut(_)>);

    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        "wheel",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

/// Keyboard, scrollbar and touch scrolling feed back into the smoother.
pub fn wire_native_scroll(window: &web::Window, smoother: Rc<RefCell<ScrollSmoother>>) {
    dom::add_window_listener(window, "scroll", move || {
        let Some(w) = web::window() else {
            return;
        };
        let Some(document) = w.document() else {
            return;
        };
        let mut s = smoother.borrow_mut();
        // Content height can change after load; track it before adopting the offset.
        if !s.is_smoothing() {
            s.set_limit(dom::scroll_limit(&w, &document));
        }
        s.on_native_scroll(dom::scroll_y(&w));
    });
}
