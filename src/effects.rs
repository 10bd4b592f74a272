use crate::events::Listeners;
use crate::frame::FrameLoop;

pub mod ghost;
pub mod neuro;

// Pointer events each background listens to on `window`.
pub const GHOST_INPUT_EVENTS: [&str; 3] = ["mousemove", "touchmove", "click"];
pub const NEURO_INPUT_EVENTS: [&str; 3] = ["pointermove", "touchmove", "click"];

/// Element ids an effect is wired to.
#[derive(Clone, Copy, Debug)]
pub struct EffectTarget<'a> {
    pub canvas_id: &'a str,
    pub vertex_id: &'a str,
    pub fragment_id: &'a str,
}

pub const GHOST_TARGET: EffectTarget<'static> = EffectTarget {
    canvas_id: "ghost",
    vertex_id: "vertShader2",
    fragment_id: "fragShader2",
};

pub const NEURO_TARGET: EffectTarget<'static> = EffectTarget {
    canvas_id: "neuro",
    vertex_id: "vertShader",
    fragment_id: "fragShader",
};

/// Frame loop plus the listeners feeding it. Stopping (or dropping) cancels
/// the pending frame and detaches every listener.
pub struct Running {
    frame_loop: FrameLoop,
    listeners: Listeners,
}

impl Running {
    pub fn new(frame_loop: FrameLoop, listeners: Listeners) -> Self {
        Self {
            frame_loop,
            listeners,
        }
    }

    pub fn stop(&mut self) {
        self.frame_loop.stop();
        if !self.listeners.is_empty() {
            log::debug!("detaching {} listeners", self.listener_count());
            self.listeners.detach_all();
        }
    }

    pub fn is_running(&self) -> bool {
        self.frame_loop.is_running()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    #[cfg(test)]
    pub fn has_pending_frame(&self) -> bool {
        self.frame_loop.has_pending_frame()
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{mount, move_pointer};
    use super::*;
    use ghost_core::EffectParams;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn stop_detaches_listeners_and_cancels_the_frame() {
        let target = EffectTarget {
            canvas_id: "t-stop",
            vertex_id: "t-stop-vs",
            fragment_id: "t-stop-fs",
        };
        if !mount(target) {
            return;
        }
        let (effect, mut running) = ghost::start(target, EffectParams::default()).unwrap();
        // input events plus resize
        assert_eq!(running.listener_count(), GHOST_INPUT_EVENTS.len() + 1);
        assert!(running.has_pending_frame());

        move_pointer(200, 300);
        let tracked = effect.borrow().sim().pointer().target;
        assert_eq!(tracked.x, 200.0);
        assert!(effect.borrow().sim().pointer().is_moving());

        running.stop();
        assert!(!running.is_running());
        assert_eq!(running.listener_count(), 0);
        assert!(!running.has_pending_frame());

        move_pointer(20, 30);
        assert_eq!(effect.borrow().sim().pointer().target, tracked);
    }

    #[wasm_bindgen_test]
    fn dropping_the_handle_stops_input() {
        let target = EffectTarget {
            canvas_id: "t-drop",
            vertex_id: "t-drop-vs",
            fragment_id: "t-drop-fs",
        };
        if !mount(target) {
            return;
        }
        let (effect, running) = ghost::start(target, EffectParams::default()).unwrap();
        let before = effect.borrow().sim().pointer().target;
        drop(running);

        move_pointer(640, 480);
        assert_eq!(effect.borrow().sim().pointer().target, before);
    }
}
