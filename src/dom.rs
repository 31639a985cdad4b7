use crate::constants::{CANVAS_STYLE, MAX_PIXEL_RATIO};
use crate::core::trigger::ElementBounds;
use crate::core::PageLayout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Window inner size in CSS pixels.
pub fn viewport_size(window: &web::Window) -> (f64, f64) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w, h)
}

#[inline]
pub fn capped_pixel_ratio(window: &web::Window) -> f64 {
    window.device_pixel_ratio().min(MAX_PIXEL_RATIO)
}

pub fn create_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    _ = canvas.set_attribute("style", CANVAS_STYLE);
    _ = canvas.set_attribute("aria-hidden", "true");
    Ok(canvas)
}

/// Size the canvas to the viewport; backing store uses the capped pixel ratio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let (css_w, css_h) = viewport_size(&w);
        let dpr = capped_pixel_ratio(&w);
        let style = canvas.style();
        _ = style.set_property("width", &format!("{}px", css_w));
        _ = style.set_property("height", &format!("{}px", css_h));
        canvas.set_width(((css_w * dpr) as u32).max(1));
        canvas.set_height(((css_h * dpr) as u32).max(1));
    }
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

/// Bounds relative to the document, so triggers resolve in scroll space.
pub fn document_bounds(el: &web::Element, scroll_y: f64) -> ElementBounds {
    let rect = el.get_bounding_client_rect();
    ElementBounds {
        top: rect.top() + scroll_y,
        height: rect.height(),
    }
}

pub fn scroll_y(window: &web::Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Largest reachable scroll offset.
pub fn scroll_limit(window: &web::Window, document: &web::Document) -> f64 {
    let (_, vh) = viewport_size(window);
    document
        .document_element()
        .map(|root| (root.scroll_height() as f64 - vh).max(0.0))
        .unwrap_or(0.0)
}

pub fn measure_layout(
    window: &web::Window,
    document: &web::Document,
    hero: Option<&web::Element>,
    reveals: &[web::Element],
) -> PageLayout {
    let (vw, vh) = viewport_size(window);
    let sy = scroll_y(window);
    PageLayout {
        viewport_width: vw,
        viewport_height: vh,
        hero: hero.map(|el| document_bounds(el, sy)),
        reveals: reveals.iter().map(|el| document_bounds(el, sy)).collect(),
    }
}

#[inline]
pub fn add_class(el: &web::Element, class: &str) {
    _ = el.class_list().add_1(class);
}

#[inline]
pub fn set_style_property(el: &web::Element, name: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().set_property(name, value);
    }
}

#[inline]
pub fn add_window_listener(window: &web::Window, event: &str, handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_document_listener(
    document: &web::Document,
    event: &str,
    handler: impl FnMut() + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    _ = document.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}
