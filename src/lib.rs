#![cfg(target_arch = "wasm32")]
use anyhow::Context;
use effects::ghost::GhostEffect;
use effects::{EffectTarget, Running, GHOST_TARGET, NEURO_TARGET};
use ghost_core::EffectParams;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod compositor;
mod dom;
mod effects;
mod error;
mod events;
mod frame;
mod gl;

pub use error::EffectError;

/// Handle to a running ghost cursor. Also carries the live tuning setters.
#[wasm_bindgen]
pub struct GhostHandle {
    effect: Rc<RefCell<GhostEffect>>,
    running: Running,
}

#[wasm_bindgen]
impl GhostHandle {
    /// Cancel the next frame and detach every listener.
    pub fn stop(&mut self) {
        self.running.stop();
        log::info!("[ghost] stopped");
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.running.is_running()
    }

    pub fn set_size(&self, size: f32) -> Result<(), JsValue> {
        Ok(self.effect.borrow_mut().set_size(size)?)
    }

    pub fn set_main_color(&self, r: f32, g: f32, b: f32) {
        self.effect.borrow_mut().set_main_color([r, g, b]);
    }

    pub fn set_border_color(&self, r: f32, g: f32, b: f32) {
        self.effect.borrow_mut().set_border_color([r, g, b]);
    }

    pub fn set_flat_color(&self, flat: bool) {
        self.effect.borrow_mut().set_flat_color(flat);
    }

    /// Height of an overlay panel under the pointer; negative while hovered.
    pub fn set_controls_padding(&self, px: f32) {
        self.effect.borrow_mut().set_controls_padding(px);
    }
}

#[wasm_bindgen]
pub struct NeuroHandle {
    running: Running,
}

#[wasm_bindgen]
impl NeuroHandle {
    pub fn stop(&mut self) {
        self.running.stop();
        log::info!("[neuro] stopped");
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.running.is_running()
    }
}

#[wasm_bindgen]
pub fn start_ghost(
    canvas_id: &str,
    vertex_id: &str,
    fragment_id: &str,
) -> Result<GhostHandle, JsValue> {
    let target = EffectTarget {
        canvas_id,
        vertex_id,
        fragment_id,
    };
    let (effect, running) = effects::ghost::start(target, EffectParams::default())?;
    Ok(GhostHandle { effect, running })
}

#[wasm_bindgen]
pub fn start_neuro(
    canvas_id: &str,
    vertex_id: &str,
    fragment_id: &str,
) -> Result<NeuroHandle, JsValue> {
    let target = EffectTarget {
        canvas_id,
        vertex_id,
        fragment_id,
    };
    let running = effects::neuro::start(target)?;
    Ok(NeuroHandle { running })
}

enum PageEffect {
    Ghost(GhostHandle),
    Neuro(NeuroHandle),
}

thread_local! {
    // Effects started for the page session by `start`.
    static PAGE_EFFECTS: RefCell<Vec<PageEffect>> = const { RefCell::new(Vec::new()) };
}

fn has_element(id: &str) -> bool {
    dom::window_document()
        .and_then(|d| d.get_element_by_id(id))
        .is_some()
}

/// Stop every effect started automatically for the page.
#[wasm_bindgen]
pub fn stop_all() {
    PAGE_EFFECTS.with(|effects| {
        for effect in effects.borrow_mut().iter_mut() {
            match effect {
                PageEffect::Ghost(h) => h.stop(),
                PageEffect::Neuro(h) => h.stop(),
            }
        }
        effects.borrow_mut().clear();
    });
}

fn with_page_ghost<R>(f: impl FnOnce(&GhostHandle) -> R) -> Option<R> {
    PAGE_EFFECTS.with(|effects| {
        effects
            .borrow()
            .iter()
            .find_map(|effect| match effect {
                PageEffect::Ghost(h) => Some(h),
                PageEffect::Neuro(_) => None,
            })
            .map(f)
    })
}

// Tuning for the ghost started on page load. Each returns false when the page
// has no running ghost.

#[wasm_bindgen]
pub fn page_ghost_set_controls_padding(px: f32) -> bool {
    with_page_ghost(|g| g.set_controls_padding(px)).is_some()
}

#[wasm_bindgen]
pub fn page_ghost_set_size(size: f32) -> Result<bool, JsValue> {
    Ok(with_page_ghost(|g| g.set_size(size)).transpose()?.is_some())
}

#[wasm_bindgen]
pub fn page_ghost_set_main_color(r: f32, g: f32, b: f32) -> bool {
    with_page_ghost(|h| h.set_main_color(r, g, b)).is_some()
}

#[wasm_bindgen]
pub fn page_ghost_set_border_color(r: f32, g: f32, b: f32) -> bool {
    with_page_ghost(|h| h.set_border_color(r, g, b)).is_some()
}

#[wasm_bindgen]
pub fn page_ghost_set_flat_color(flat: bool) -> bool {
    with_page_ghost(|h| h.set_flat_color(flat)).is_some()
}

fn start_page_ghost() -> anyhow::Result<PageEffect> {
    let (effect, running) = effects::ghost::start(GHOST_TARGET, EffectParams::default())
        .with_context(|| format!("starting ghost on #{}", GHOST_TARGET.canvas_id))?;
    Ok(PageEffect::Ghost(GhostHandle { effect, running }))
}

fn start_page_neuro() -> anyhow::Result<PageEffect> {
    let running = effects::neuro::start(NEURO_TARGET)
        .with_context(|| format!("starting neuro on #{}", NEURO_TARGET.canvas_id))?;
    Ok(PageEffect::Neuro(NeuroHandle { running }))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ghost-web starting");

    let candidates: [(&str, fn() -> anyhow::Result<PageEffect>); 2] = [
        (GHOST_TARGET.canvas_id, start_page_ghost),
        (NEURO_TARGET.canvas_id, start_page_neuro),
    ];
    let mut started = Vec::new();
    for (canvas_id, start_effect) in candidates {
        if !has_element(canvas_id) {
            log::warn!("no #{canvas_id} canvas; skipping");
            continue;
        }
        match start_effect() {
            Ok(effect) => started.push(effect),
            Err(e) => log::error!("init error: {:?}", e),
        }
    }

    PAGE_EFFECTS.with(|effects| effects.borrow_mut().extend(started));
    Ok(())
}
