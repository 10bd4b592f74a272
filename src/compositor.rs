use crate::error::EffectError;
use ghost_core::{DotGradient, TextureSurface};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Detached `<canvas>` with a 2D context; its pixels become the ghost
/// texture.
pub struct Canvas2dSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl Canvas2dSurface {
    pub fn new(document: &web::Document) -> Result<Self, EffectError> {
        let canvas = document
            .create_element("canvas")?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|_| EffectError::ResourceCreation("offscreen canvas"))?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or(EffectError::ContextUnavailable("2d"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| EffectError::ContextUnavailable("2d"))?;
        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }
}

impl TextureSurface for Canvas2dSurface {
    type Error = EffectError;

    fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), EffectError> {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), EffectError> {
        let (w, h) = self.size();
        self.ctx.set_fill_style_str("black");
        self.ctx.fill_rect(0.0, 0.0, w as f64, h as f64);
        Ok(())
    }

    fn fill_radial(&mut self, dot: &DotGradient) -> Result<(), EffectError> {
        if dot.outer_radius <= 0.0 {
            return Ok(());
        }
        let (x, y) = (dot.center.x as f64, dot.center.y as f64);
        let r = dot.outer_radius as f64;
        let grd = self.ctx.create_radial_gradient(
            x,
            y,
            (dot.inner_radius as f64).clamp(0.0, r),
            x,
            y,
            r,
        )?;
        grd.add_color_stop(0.0, &format!("rgba(255, 255, 255, {})", dot.opacity))?;
        grd.add_color_stop(1.0, "rgba(255, 255, 255, 0)")?;

        self.ctx.begin_path();
        self.ctx.set_fill_style_canvas_gradient(&grd);
        self.ctx.arc(x, y, r, 0.0, TAU)?;
        self.ctx.fill();
        Ok(())
    }
}
