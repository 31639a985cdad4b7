use crate::animations::{self, PageTargets};
use crate::core::scroll::ScrollSmoother;
use crate::core::{Stage, DRIFT_TIME_SCALE};
use crate::render;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Self-rescheduling `requestAnimationFrame` callback with a stop hook.
///
/// The callback receives the frame timestamp in milliseconds. `stop` cancels
/// the pending frame; `resume` schedules a new one if the loop was stopped.
#[derive(Clone)]
pub struct AnimationLoop {
    tick: TickSlot,
    pending: Rc<Cell<Option<i32>>>,
    running: Rc<Cell<bool>>,
}

impl AnimationLoop {
    pub fn start(mut step: impl FnMut(f64) + 'static) -> Self {
        let tick: TickSlot = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));
        let running = Rc::new(Cell::new(true));

        let tick_clone = tick.clone();
        let pending_tick = pending.clone();
        let running_tick = running.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |time_ms: f64| {
            pending_tick.set(None);
            if !running_tick.get() {
                return;
            }
            step(time_ms);
            if running_tick.get() {
                pending_tick.set(request_frame(&tick_clone));
            }
        }) as Box<dyn FnMut(f64)>));

        pending.set(request_frame(&tick));
        Self {
            tick,
            pending,
            running,
        }
    }

    pub fn stop(&self) {
        self.running.set(false);
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }

    pub fn resume(&self) {
        if self.running.replace(true) {
            return;
        }
        if self.pending.get().is_none() {
            self.pending.set(request_frame(&self.tick));
        }
    }
}

fn request_frame(tick: &TickSlot) -> Option<i32> {
    let window = web::window()?;
    let slot = tick.borrow();
    let cb = slot.as_ref()?;
    window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .ok()
}

/// Drive the smoother once per display refresh and push its output to the window.
pub fn start_scroll_loop(smoother: Rc<RefCell<ScrollSmoother>>) -> AnimationLoop {
    AnimationLoop::start(move |time_ms| {
        let next = smoother.borrow_mut().raf(time_ms);
        if let (Some(y), Some(w)) = (next, web::window()) {
            w.scroll_to_with_x_and_y(0.0, y);
        }
    })
}

pub struct FrameContext<'a> {
    pub stage: Rc<RefCell<Stage>>,
    pub targets: Rc<PageTargets>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: render::GpuState<'a>,
    pub started: Instant,
    pub hero_done: bool,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let elapsed = js_sys::Date::now() * DRIFT_TIME_SCALE;
        let mut stage = self.stage.borrow_mut();
        stage.advance_frame(elapsed);

        if !self.hero_done {
            let t = self.started.elapsed().as_secs_f32();
            animations::apply_hero_pose(&self.targets, stage.hero.sample(t));
            self.hero_done = stage.hero.is_complete(t);
            if self.hero_done {
                log::debug!("[hero] entrance complete");
            }
        }

        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());
        if let Err(e) = self.gpu.render(&stage.particles, &stage.camera) {
            log::error!("render error: {:?}", e);
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    particle_count: usize,
) -> anyhow::Result<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    render::GpuState::new(leaked_canvas, particle_count).await
}

pub fn start_loop(frame_ctx: FrameContext<'static>) -> AnimationLoop {
    let frame_ctx = RefCell::new(frame_ctx);
    AnimationLoop::start(move |_time_ms| {
        frame_ctx.borrow_mut().frame();
    })
}
