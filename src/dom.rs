use crate::error::EffectError;
use ghost_core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window() -> Result<web::Window, EffectError> {
    web::window().ok_or(EffectError::MissingElement {
        id: "window".into(),
    })
}

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Look up `#id` and cast it, failing with a descriptive error either way.
pub fn element_by_id<T: JsCast>(
    document: &web::Document,
    id: &str,
    expected: &'static str,
) -> Result<T, EffectError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| EffectError::MissingElement { id: id.into() })?
        .dyn_into::<T>()
        .map_err(|_| EffectError::WrongElementType {
            id: id.into(),
            expected,
        })
}

/// Text of an inline `<script type="x-shader/...">` block.
pub fn script_text(document: &web::Document, id: &str) -> Result<String, EffectError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| EffectError::MissingElement { id: id.into() })?
        .text_content()
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| EffectError::MissingElement {
            id: format!("{id} (empty)"),
        })
}

pub fn viewport(window: &web::Window) -> Result<Viewport, EffectError> {
    let w = window.inner_width()?.as_f64().unwrap_or(0.0) as f32;
    let h = window.inner_height()?.as_f64().unwrap_or(0.0) as f32;
    Ok(Viewport::new(w, h, window.device_pixel_ratio() as f32)?)
}

/// Milliseconds since page load, same clock as the animation-frame timestamp.
#[inline]
pub fn now_ms() -> f64 {
    web::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

#[inline]
pub fn scroll_y() -> f32 {
    web::window()
        .and_then(|w| w.page_y_offset().ok())
        .unwrap_or(0.0) as f32
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, viewport: &Viewport) {
    let (w, h) = viewport.backing_size();
    canvas.set_width(w);
    canvas.set_height(h);
}
