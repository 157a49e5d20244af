use crate::core::SceneSurface;
use crate::dom;
use crate::frame::SharedScene;
use web_sys as web;

/// Pointer position feeds the next update only; no redraw here.
pub fn wire_pointer_move(scene: SharedScene) {
    if let Some(window) = web::window() {
        dom::add_listener(&window, "pointermove", move |ev: web::PointerEvent| {
            scene
                .borrow_mut()
                .on_pointer_move(ev.client_x() as f32, ev.client_y() as f32);
        });
    }
}

/// Viewport, camera aspect and backing store follow the window immediately.
pub fn wire_resize(scene: SharedScene) {
    if let Some(window) = web::window() {
        let window_for_resize = window.clone();
        dom::add_listener(&window, "resize", move |_ev: web::Event| {
            let Some(viewport) = dom::viewport_size(&window_for_resize) else {
                return;
            };
            let mut s = scene.borrow_mut();
            s.surface_mut()
                .set_pixel_density(dom::pixel_density(&window_for_resize));
            s.on_resize(viewport.width, viewport.height);
        });
    }
}
