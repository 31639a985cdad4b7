use crate::animations::{self, PageTargets};
use crate::core::scroll::ScrollSmoother;
use crate::core::Stage;
use crate::dom;
use crate::frame::AnimationLoop;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct ResizeWiring {
    pub canvas: web::HtmlCanvasElement,
    pub stage: Rc<RefCell<Stage>>,
    pub smoother: Rc<RefCell<ScrollSmoother>>,
    pub targets: Rc<PageTargets>,
}

impl ResizeWiring {
    /// Resize the surface and re-measure every trigger.
    pub fn refresh(&self) {
        let Some(window) = web::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        dom::sync_canvas_backing_size(&self.canvas);
        let scroll = {
            let mut s = self.smoother.borrow_mut();
            s.set_limit(dom::scroll_limit(&window, &document));
            s.scroll()
        };
        let layout = self.targets.measure(&window, &document);
        let fired = self.stage.borrow_mut().refresh(&layout, scroll);
        animations::apply_reveals(&self.targets, &fired);
        log::debug!(
            "[triggers] refresh viewport={}x{} scroll={:.1}",
            layout.viewport_width,
            layout.viewport_height,
            scroll
        );
    }
}

/// Re-measure on viewport changes and once more after `load`, when images and
/// fonts have settled the document height.
pub fn wire_resize(window: &web::Window, w: ResizeWiring) {
    let on_load = w.clone();
    dom::add_window_listener(window, "load", move || on_load.refresh());
    dom::add_window_listener(window, "resize", move || w.refresh());
}

/// Frame loops pause while the page is hidden in the back/forward cache and
/// stop for good on unload.
pub fn wire_page_lifecycle(window: &web::Window, loops: Vec<AnimationLoop>) {
    let loops_hide = loops.clone();
    let on_hide = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::Event| {
        for l in &loops_hide {
            l.stop();
        }
        log::info!("[lifecycle] pagehide: stopped {} loops", loops_hide.len());
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("pagehide", on_hide.as_ref().unchecked_ref());
    on_hide.forget();

    let on_show = wasm_bindgen::closure::Closure::wrap(Box::new(
        move |ev: web::PageTransitionEvent| {
            if !ev.persisted() {
                return;
            }
            for l in &loops {
                l.resume();
            }
            log::info!("[lifecycle] pageshow: resumed {} loops", loops.len());
        },
    ) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("pageshow", on_show.as_ref().unchecked_ref());
    on_show.forget();
}
