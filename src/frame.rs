use crate::model::HexAnimator;
use crate::render::CanvasSurface;
use crate::stats::FrameStats;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub animator: Rc<RefCell<HexAnimator>>,
    pub surface: CanvasSurface,
    pub stats: FrameStats,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        let mut animator = self.animator.borrow_mut();
        animator.tick(&mut self.surface);

        if let Some(fps) = self.stats.record(dt) {
            log::debug!(
                "[frame] {:.1} fps, tick {}, mean brightness {:.3}",
                fps,
                animator.ticks(),
                animator.mean_brightness()
            );
        }
    }
}

fn request_frame(callback: &Closure<dyn FnMut()>) {
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(callback.as_ref().unchecked_ref());
    }
}

/// Drive `FrameContext::frame` from requestAnimationFrame until the page goes away.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        if let Some(cb) = tick_clone.borrow().as_ref() {
            request_frame(cb);
        }
    }) as Box<dyn FnMut()>));
    if let Some(cb) = tick.borrow().as_ref() {
        request_frame(cb);
    }
}
