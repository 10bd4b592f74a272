use crate::dom;
use crate::error::EffectError;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Work done once per display frame. `now_ms` is the animation-frame
/// timestamp (milliseconds since page load).
pub trait FrameStep {
    fn frame(&mut self, now_ms: f64);
}

struct LoopState {
    running: Cell<bool>,
    pending: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl LoopState {
    fn schedule(&self) -> Result<(), EffectError> {
        let window = dom::window()?;
        if let Some(tick) = self.tick.borrow().as_ref() {
            let id = window.request_animation_frame(tick.as_ref().unchecked_ref())?;
            self.pending.set(Some(id));
        }
        Ok(())
    }

    fn cancel(&self) {
        self.running.set(false);
        if let Some(id) = self.pending.take() {
            if let Some(w) = web_sys::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }
}

/// A running `requestAnimationFrame` loop. Stops when [`FrameLoop::stop`] is
/// called or the handle is dropped.
pub struct FrameLoop {
    state: Rc<LoopState>,
}

impl FrameLoop {
    pub fn stop(&self) {
        self.state.cancel();
    }

    pub fn is_running(&self) -> bool {
        self.state.running.get()
    }

    #[cfg(test)]
    pub fn has_pending_frame(&self) -> bool {
        self.state.pending.get().is_some()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.state.cancel();
    }
}

pub fn start_loop<F>(frame_ctx: Rc<RefCell<F>>) -> Result<FrameLoop, EffectError>
where
    F: FrameStep + 'static,
{
    let state = Rc::new(LoopState {
        running: Cell::new(true),
        pending: Cell::new(None),
        tick: RefCell::new(None),
    });
    // The closure only holds a weak reference so dropping the handle frees it.
    let weak = Rc::downgrade(&state);
    *state.tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
        let Some(state) = weak.upgrade() else {
            return;
        };
        state.pending.set(None);
        if !state.running.get() {
            return;
        }
        frame_ctx.borrow_mut().frame(now_ms);
        if let Err(e) = state.schedule() {
            log::error!("[frame] could not schedule next frame: {e}");
            state.running.set(false);
        }
    }) as Box<dyn FnMut(f64)>));
    state.schedule()?;
    Ok(FrameLoop { state })
}
