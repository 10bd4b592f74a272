use crate::dom;
use crate::error::EffectError;
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A registered DOM listener. Dropping it detaches the callback.
pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// Every listener one effect owns, detached together on teardown.
#[derive(Default)]
pub struct Listeners {
    attached: Vec<Listener>,
}

impl Listeners {
    pub fn add(
        &mut self,
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Result<(), EffectError> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
        self.attached.push(Listener {
            target: target.clone(),
            kind,
            closure,
        });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.attached.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attached.is_empty()
    }

    pub fn detach_all(&mut self) {
        self.attached.clear();
    }
}

/// Client coordinates of a mouse, pointer or touch event (first touch).
pub fn event_client_pos(ev: &web::Event) -> Option<Vec2> {
    if let Some(touch_ev) = ev.dyn_ref::<web::TouchEvent>() {
        let touch = touch_ev.target_touches().get(0)?;
        return Some(Vec2::new(touch.client_x() as f32, touch.client_y() as f32));
    }
    ev.dyn_ref::<web::MouseEvent>()
        .map(|m| Vec2::new(m.client_x() as f32, m.client_y() as f32))
}

/// Route each of `kinds` on `target` to `on_input(client_pos, now_ms)`.
pub fn wire_pointer_input<F>(
    listeners: &mut Listeners,
    target: &web::EventTarget,
    kinds: &[&'static str],
    on_input: F,
) -> Result<(), EffectError>
where
    F: FnMut(Vec2, f64) + Clone + 'static,
{
    for &kind in kinds {
        let mut on_input = on_input.clone();
        listeners.add(target, kind, move |ev: web::Event| {
            if let Some(pos) = event_client_pos(&ev) {
                on_input(pos, dom::now_ms());
            }
        })?;
    }
    Ok(())
}

pub fn wire_resize(
    listeners: &mut Listeners,
    window: &web::Window,
    mut on_resize: impl FnMut() + 'static,
) -> Result<(), EffectError> {
    listeners.add(window, "resize", move |_ev: web::Event| on_resize())
}
