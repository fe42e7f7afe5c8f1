use crate::render::{self, CanvasSurface};
use heart_core::AnimationContext;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub animation: AnimationContext<StdRng>,
    pub canvas: web::HtmlCanvasElement,
    pub surface: CanvasSurface,
}

impl FrameContext {
    pub fn frame(&mut self) {
        // Read every frame so a resize applies on the next paint.
        let bounds = render::canvas_bounds(&self.canvas);
        self.animation.frame(&mut self.surface, bounds);
        if self.animation.frames() == 1 {
            log::info!(
                "[frame] first paint particles={} surface={}x{}",
                self.animation.field().len(),
                bounds.width,
                bounds.height
            );
        }
    }
}

/// Drive `frame_ctx` from `requestAnimationFrame` until the page goes away.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    let tick_ref = tick.borrow();
    if let Some(cb) = tick_ref.as_ref() {
        if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame error: {:?}", e);
        }
    }
}
