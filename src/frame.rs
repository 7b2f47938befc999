use crate::constants::*;
use crate::{dom, layout};
use instant::Instant;
use sparkfield_core::AnimationRegistry;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub registry: Rc<RefCell<AnimationRegistry>>,
    pub resize: Rc<RefCell<layout::ResizeDebounce>>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn new(
        registry: Rc<RefCell<AnimationRegistry>>,
        resize: Rc<RefCell<layout::ResizeDebounce>>,
    ) -> Self {
        Self {
            registry,
            resize,
            last_instant: Instant::now(),
        }
    }

    /// One display frame. Returns false once the registry has been stopped.
    pub fn frame(&mut self) -> bool {
        let now = Instant::now();
        let dt_sec = layout::frame_dt((now - self.last_instant).as_secs_f32(), MAX_FRAME_DT_SEC);
        self.last_instant = now;

        let settled = self.resize.borrow_mut().poll(dom::now_ms());
        let mut registry = self.registry.borrow_mut();
        if registry.is_stopped() {
            return false;
        }
        if let Some((w, h)) = settled {
            log::info!("[frame] viewport {w:.0}x{h:.0}");
            registry.resize_all(w, h);
        }
        registry.tick_all(dt_sec);
        true
    }
}

/// Handle to the single `requestAnimationFrame` loop.
pub struct FrameLoop {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    pending: Rc<Cell<Option<i32>>>,
    cancelled: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn start(frame_ctx: Rc<RefCell<FrameContext>>) -> Self {
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));
        let cancelled = Rc::new(Cell::new(false));

        let tick_clone = tick.clone();
        let pending_tick = pending.clone();
        let cancelled_tick = cancelled.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_tick.set(None);
            if cancelled_tick.get() || !frame_ctx.borrow_mut().frame() {
                log::info!("[frame] loop ended");
                return;
            }
            if let Some(cb) = tick_clone.borrow().as_ref() {
                pending_tick.set(request_frame(cb));
            }
        }) as Box<dyn FnMut()>));
        if let Some(cb) = tick.borrow().as_ref() {
            pending.set(request_frame(cb));
        }
        Self {
            tick,
            pending,
            cancelled,
        }
    }

    /// Stop scheduling frames. Safe to call more than once, but not from inside a frame.
    pub fn cancel(&self) {
        if self.cancelled.replace(true) {
            return;
        }
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
    }
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
    web::window().and_then(|w| w.request_animation_frame(cb.as_ref().unchecked_ref()).ok())
}
