#![cfg(target_arch = "wasm32")]
use crate::camera::Viewport;
use crate::constants::CANVAS_ID;
use crate::core::AmbientScene;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod camera;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ambient-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let viewport = dom::viewport_size(&window).unwrap_or(Viewport::new(
        canvas.client_width() as f32,
        canvas.client_height() as f32,
    ));

    // No 2D fallback: without WebGPU the page simply has no ambient layer.
    let gpu = render::GpuState::new(canvas, dom::pixel_density(&window)).await?;

    let mut rng = StdRng::from_entropy();
    let scene: frame::SharedScene = Rc::new(RefCell::new(AmbientScene::new(gpu, viewport, &mut rng)));
    let clock = frame::FrameClock::start();

    events::wire_pointer_move(scene.clone());
    events::wire_resize(scene.clone());
    events::wire_form_focus(&document, scene.clone());
    events::wire_contact_submit(&document, scene.clone(), clock);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(scene, clock)));
    frame::start_loop(frame_ctx);
    Ok(())
}
