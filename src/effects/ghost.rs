//! Ghost cursor: a spring-damped trail rasterized into an offscreen canvas
//! and sampled by the fragment shader as `u_texture`.

use super::{EffectTarget, Running, GHOST_INPUT_EVENTS};
use crate::compositor::Canvas2dSurface;
use crate::dom;
use crate::error::EffectError;
use crate::events::{self, Listeners};
use crate::frame::{self, FrameStep};
use crate::gl::GlProgram;
use ghost_core::uniforms::*;
use ghost_core::{composite, EffectParams, GhostSim, TextureSurface, Viewport};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub struct GhostEffect {
    sim: GhostSim,
    gl: GlProgram,
    canvas: web::HtmlCanvasElement,
    surface: Canvas2dSurface,
}

impl GhostEffect {
    pub fn new(
        window: &web::Window,
        document: &web::Document,
        target: EffectTarget<'_>,
        params: EffectParams,
    ) -> Result<Self, EffectError> {
        let canvas: web::HtmlCanvasElement =
            dom::element_by_id(document, target.canvas_id, "canvas")?;
        let vs = dom::script_text(document, target.vertex_id)?;
        let fs = dom::script_text(document, target.fragment_id)?;

        let mut gl = GlProgram::from_canvas(&canvas, &vs, &fs)?;
        gl.enable_canvas_texture()?;
        let surface = Canvas2dSurface::new(document)?;
        let viewport = dom::viewport(window)?;
        let sim = GhostSim::new(params, viewport)?;

        let mut effect = Self {
            sim,
            gl,
            canvas,
            surface,
        };
        effect.push_static_uniforms();
        effect.resize(viewport)?;
        Ok(effect)
    }

    fn push_static_uniforms(&self) {
        let p = self.sim.params();
        self.gl.set_i32(U_TEXTURE, 0);
        self.gl.set_f32(U_SIZE, p.size);
        self.gl.set_vec3(U_MAIN_COLOR, p.main_color);
        self.gl.set_vec3(U_BORDER_COLOR, p.border_color);
        self.gl.set_f32(U_FLAT_COLOR, if p.is_flat_color { 1.0 } else { 0.0 });
    }

    pub fn sim(&self) -> &GhostSim {
        &self.sim
    }

    pub fn resize(&mut self, viewport: Viewport) -> Result<(), EffectError> {
        dom::sync_canvas_backing_size(&self.canvas, &viewport);
        let (w, h) = viewport.backing_size();
        self.gl.set_viewport(w, h);
        self.gl.set_f32(U_RATIO, viewport.aspect());
        let (tw, th) = viewport.texture_size();
        self.surface.resize(tw, th)?;
        self.sim.resize(viewport);
        Ok(())
    }

    pub fn on_input(&mut self, client: Vec2, now_ms: f64) {
        self.sim.on_input(client, now_ms);
    }

    pub fn set_controls_padding(&mut self, px: f32) {
        self.sim.set_controls_padding(px);
    }

    pub fn set_size(&mut self, size: f32) -> Result<(), EffectError> {
        self.sim.set_size(size)?;
        self.gl.set_f32(U_SIZE, size);
        Ok(())
    }

    pub fn set_main_color(&mut self, rgb: [f32; 3]) {
        self.sim.set_main_color(rgb);
        self.gl.set_vec3(U_MAIN_COLOR, rgb);
    }

    pub fn set_border_color(&mut self, rgb: [f32; 3]) {
        self.sim.set_border_color(rgb);
        self.gl.set_vec3(U_BORDER_COLOR, rgb);
    }

    pub fn set_flat_color(&mut self, flat: bool) {
        self.sim.set_flat_color(flat);
        self.gl.set_f32(U_FLAT_COLOR, if flat { 1.0 } else { 0.0 });
    }
}

impl FrameStep for GhostEffect {
    fn frame(&mut self, now_ms: f64) {
        self.gl.set_f32(U_TIME, now_ms as f32);
        let u = self.sim.advance(now_ms);
        self.gl.set_f32(U_SMILE, u.smile);
        self.gl.set_vec2(U_POINTER, u.pointer);
        self.gl.set_vec2(U_TARGET_POINTER, u.target_pointer);

        if let Err(e) = composite(&mut self.surface, self.sim.trail()) {
            log::error!("[ghost] compositing failed: {e}");
            return;
        }
        if let Err(e) = self.gl.upload_canvas(self.surface.canvas()) {
            log::error!("[ghost] texture upload failed: {e}");
            return;
        }
        self.gl.draw();
    }
}

/// Build the effect, wire input and resize, and start its frame loop.
pub fn start(
    target: EffectTarget<'_>,
    params: EffectParams,
) -> Result<(Rc<RefCell<GhostEffect>>, Running), EffectError> {
    let window = dom::window()?;
    let document = window
        .document()
        .ok_or_else(|| EffectError::MissingElement {
            id: "document".into(),
        })?;
    let effect = Rc::new(RefCell::new(GhostEffect::new(
        &window, &document, target, params,
    )?));

    let mut listeners = Listeners::default();
    let input_effect = effect.clone();
    events::wire_pointer_input(
        &mut listeners,
        &window,
        &GHOST_INPUT_EVENTS,
        move |pos, now_ms| input_effect.borrow_mut().on_input(pos, now_ms),
    )?;
    let resize_effect = effect.clone();
    events::wire_resize(&mut listeners, &window, move || {
        let resized = dom::window()
            .and_then(|w| dom::viewport(&w))
            .and_then(|vp| resize_effect.borrow_mut().resize(vp));
        if let Err(e) = resized {
            log::warn!("[ghost] resize skipped: {e}");
        }
    })?;

    let frame_loop = frame::start_loop(effect.clone())?;
    log::info!(
        "[ghost] started on #{} with {} trail points, {} listeners",
        target.canvas_id,
        effect.borrow().sim().trail().len(),
        listeners.len()
    );
    Ok((effect, Running::new(frame_loop, listeners)))
}
