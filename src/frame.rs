use crate::core::AmbientScene;
use crate::render::GpuState;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedScene = Rc<RefCell<AmbientScene<GpuState>>>;

/// Single timebase for frame updates and warp triggers.
#[derive(Clone, Copy)]
pub struct FrameClock {
    origin: Instant,
}

impl FrameClock {
    pub fn start() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Seconds since the clock started.
    #[inline]
    pub fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

pub struct FrameContext {
    pub scene: SharedScene,
    pub clock: FrameClock,
    frames: u64,
}

impl FrameContext {
    pub fn new(scene: SharedScene, clock: FrameClock) -> Self {
        Self {
            scene,
            clock,
            frames: 0,
        }
    }

    pub fn frame(&mut self) {
        let t = self.clock.now();
        if let Err(e) = self.scene.borrow_mut().update(t) {
            log::error!("render error: {:?}", e);
        }
        self.frames += 1;
        if self.frames == 1 {
            log::info!("[frame] first frame at t={:.3}s", t);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
