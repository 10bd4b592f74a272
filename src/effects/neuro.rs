//! Neural background: pointer, time and scroll progress feed a single
//! full-screen fragment shader. No texture.

use super::{EffectTarget, Running, NEURO_INPUT_EVENTS};
use crate::dom;
use crate::error::EffectError;
use crate::events::{self, Listeners};
use crate::frame::{self, FrameStep};
use crate::gl::GlProgram;
use ghost_core::uniforms::{U_POINTER_POSITION, U_RATIO, U_SCROLL_PROGRESS, U_TIME};
use ghost_core::{NeuroSim, Viewport};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub struct NeuroEffect {
    sim: NeuroSim,
    gl: GlProgram,
    canvas: web::HtmlCanvasElement,
}

impl NeuroEffect {
    pub fn new(
        window: &web::Window,
        document: &web::Document,
        target: EffectTarget<'_>,
    ) -> Result<Self, EffectError> {
        let canvas: web::HtmlCanvasElement =
            dom::element_by_id(document, target.canvas_id, "canvas")?;
        let vs = dom::script_text(document, target.vertex_id)?;
        let fs = dom::script_text(document, target.fragment_id)?;
        let gl = GlProgram::from_canvas(&canvas, &vs, &fs)?;
        let viewport = dom::viewport(window)?;

        let mut effect = Self {
            sim: NeuroSim::new(viewport),
            gl,
            canvas,
        };
        effect.resize(viewport);
        Ok(effect)
    }

    pub fn resize(&mut self, viewport: Viewport) {
        dom::sync_canvas_backing_size(&self.canvas, &viewport);
        let (w, h) = viewport.backing_size();
        self.gl.set_f32(U_RATIO, viewport.aspect());
        self.gl.set_viewport(w, h);
        self.sim.resize(viewport);
    }

    pub fn on_input(&mut self, client: Vec2, now_ms: f64) {
        self.sim.on_input(client, now_ms);
    }
}

impl FrameStep for NeuroEffect {
    fn frame(&mut self, now_ms: f64) {
        let u = self.sim.advance(now_ms, dom::scroll_y());
        self.gl.set_f32(U_TIME, u.time_ms);
        self.gl.set_vec2(U_POINTER_POSITION, u.pointer_position);
        self.gl.set_f32(U_SCROLL_PROGRESS, u.scroll_progress);
        self.gl.draw();
    }
}

pub fn start(target: EffectTarget<'_>) -> Result<Running, EffectError> {
    let window = dom::window()?;
    let document = window
        .document()
        .ok_or_else(|| EffectError::MissingElement {
            id: "document".into(),
        })?;
    let effect = Rc::new(RefCell::new(NeuroEffect::new(&window, &document, target)?));

    let mut listeners = Listeners::default();
    let input_effect = effect.clone();
    events::wire_pointer_input(
        &mut listeners,
        &window,
        &NEURO_INPUT_EVENTS,
        move |pos, now_ms| input_effect.borrow_mut().on_input(pos, now_ms),
    )?;
    let resize_effect = effect.clone();
    events::wire_resize(&mut listeners, &window, move || {
        match dom::window().and_then(|w| dom::viewport(&w)) {
            Ok(vp) => resize_effect.borrow_mut().resize(vp),
            Err(e) => log::warn!("[neuro] resize skipped: {e}"),
        }
    })?;

    let frame_loop = frame::start_loop(effect)?;
    log::info!(
        "[neuro] started on #{} with {} listeners",
        target.canvas_id,
        listeners.len()
    );
    Ok(Running::new(frame_loop, listeners))
}
