use crate::camera::Viewport;
use crate::constants::MAX_PIXEL_DENSITY;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Current CSS-pixel size of the window.
pub fn viewport_size(window: &web::Window) -> Option<Viewport> {
    let w = window.inner_width().ok()?.as_f64()?;
    let h = window.inner_height().ok()?.as_f64()?;
    Some(Viewport::new(w as f32, h as f32))
}

#[inline]
pub fn pixel_density(window: &web::Window) -> f64 {
    window.device_pixel_ratio().min(MAX_PIXEL_DENSITY)
}

#[inline]
pub fn add_listener<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// One-shot `setTimeout`; silently does nothing without a window.
pub fn set_timeout(ms: u32, handler: impl FnOnce() + 'static) {
    if let Some(window) = web::window() {
        let cb = Closure::once_into_js(handler);
        _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.unchecked_ref(),
            ms as i32,
        );
    }
}
