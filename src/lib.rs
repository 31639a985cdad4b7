pub mod core;

#[cfg(target_arch = "wasm32")]
mod animations;
#[cfg(target_arch = "wasm32")]
mod constants;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod render;

#[cfg(target_arch = "wasm32")]
pub use web_entry::start;

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use crate::animations::{self, PageTargets};
    use crate::constants::CANVAS_CONTAINER_ID;
    use crate::core::scroll::ScrollSmoother;
    use crate::core::{Stage, PARTICLE_COUNT};
    use crate::{dom, events, frame};
    use instant::Instant;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::spawn_local;
    use web_sys as web;

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("particle-backdrop starting");

        let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
        if document.ready_state() == "loading" {
            dom::add_document_listener(&document, "DOMContentLoaded", spawn_init);
        } else {
            spawn_init();
        }
        Ok(())
    }

    fn spawn_init() {
        static STARTED: AtomicBool = AtomicBool::new(false);
        if STARTED.swap(true, Ordering::SeqCst) {
            return;
        }
        spawn_local(async move {
            if let Err(e) = init().await {
                log::error!("init error: {:?}", e);
            }
        });
    }

    async fn init() -> anyhow::Result<()> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;

        // Smooth scrolling does not depend on the graphics layer.
        let smoother = Rc::new(RefCell::new(ScrollSmoother::new(
            dom::scroll_y(&window),
            dom::scroll_limit(&window, &document),
        )));
        events::wire_wheel(&window, smoother.clone());
        events::wire_native_scroll(&window, smoother.clone());
        let scroll_loop = frame::start_scroll_loop(smoother.clone());
        events::wire_page_lifecycle(&window, vec![scroll_loop]);

        let container = document
            .get_element_by_id(CANVAS_CONTAINER_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_CONTAINER_ID))?;
        let canvas = dom::create_canvas(&document)?;
        container
            .append_child(&canvas)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        dom::sync_canvas_backing_size(&canvas);

        let mut rng = StdRng::from_entropy();
        let stage = Rc::new(RefCell::new(Stage::new(&mut rng)?));
        log::info!(
            "[stage] particles={} camera_z={:.2}",
            stage.borrow().particles.len(),
            stage.borrow().camera.position.z
        );

        let gpu = frame::init_gpu(&canvas, PARTICLE_COUNT).await?;

        // Page animations: hero entrance, reveal triggers, hero parallax.
        let targets = Rc::new(PageTargets::collect(&document));
        animations::apply_hero_pose(&targets, stage.borrow().hero.from);
        let resize = events::ResizeWiring {
            canvas: canvas.clone(),
            stage: stage.clone(),
            smoother: smoother.clone(),
            targets: targets.clone(),
        };
        resize.refresh();
        events::wire_resize(&window, resize);
        events::wire_pointer(&document, stage.clone());
        {
            let stage = stage.clone();
            let targets = targets.clone();
            smoother.borrow_mut().on_scroll(move |update| {
                let fired = stage.borrow_mut().on_scroll(update.scroll);
                animations::apply_reveals(&targets, &fired);
            });
        }

        let render_loop = frame::start_loop(frame::FrameContext {
            stage,
            targets,
            canvas,
            gpu,
            started: Instant::now(),
            hero_done: false,
        });
        events::wire_page_lifecycle(&window, vec![render_loop]);
        Ok(())
    }
}
