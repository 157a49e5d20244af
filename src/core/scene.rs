use glam::{Vec2, Vec3};
use rand::prelude::*;
use std::f32::consts::TAU;

use crate::camera::{Camera, Viewport};
use crate::constants::*;
use crate::input::{client_to_ndc, is_finite_ndc};

/// What the scene needs from a rendering backend.
///
/// The controller never touches GPU objects directly; it hands over the orb
/// pool and camera once per frame and pushes viewport changes synchronously.
pub trait SceneSurface {
    fn set_viewport_size(&mut self, viewport: Viewport);
    fn set_pixel_density(&mut self, ratio: f64);
    fn draw(&mut self, orbs: &[Orb], camera: &Camera) -> anyhow::Result<()>;
}

/// Per-orb parameters fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbParams {
    base_position: Vec3,
    base_angle: f32,
    orbit_radius: f32,
    angular_speed: f32,
    pulse_speed: f32,
    base_scale: f32,
}

impl OrbParams {
    pub fn new(
        base_position: Vec3,
        base_angle: f32,
        orbit_radius: f32,
        angular_speed: f32,
        pulse_speed: f32,
        base_scale: f32,
    ) -> Self {
        Self {
            base_position,
            base_angle,
            orbit_radius,
            angular_speed,
            pulse_speed,
            base_scale,
        }
    }

    /// Draw a parameter set from the construction ranges.
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        let base_position = Vec3::new(
            range(rng, ORB_BASE_X_RANGE),
            range(rng, ORB_BASE_Y_RANGE),
            range(rng, ORB_BASE_Z_RANGE),
        );
        let base_scale = range(rng, ORB_BASE_SCALE_RANGE);
        Self {
            base_position,
            base_angle: rng.gen_range(0.0..TAU),
            orbit_radius: range(rng, ORB_RADIUS_RANGE),
            angular_speed: range(rng, ORB_ANGULAR_SPEED_RANGE),
            pulse_speed: range(rng, ORB_PULSE_SPEED_RANGE),
            base_scale,
        }
    }

    #[inline]
    pub fn base_position(&self) -> Vec3 {
        self.base_position
    }
    #[inline]
    pub fn base_angle(&self) -> f32 {
        self.base_angle
    }
    #[inline]
    pub fn orbit_radius(&self) -> f32 {
        self.orbit_radius
    }
    #[inline]
    pub fn angular_speed(&self) -> f32 {
        self.angular_speed
    }
    #[inline]
    pub fn pulse_speed(&self) -> f32 {
        self.pulse_speed
    }
    #[inline]
    pub fn base_scale(&self) -> f32 {
        self.base_scale
    }
}

#[inline]
fn range<R: Rng>(rng: &mut R, (lo, hi): (f32, f32)) -> f32 {
    rng.gen_range(lo..hi)
}

/// How orbs pick their target this frame. Evaluated once per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LocomotionMode {
    /// No focus, warp running: plain orbit, repulsion suppressed.
    Idle,
    /// A form field has focus; payload is its NDC centre.
    FocusAttract(Vec2),
    /// Orbs flee the pointer; payload is the pointer mapped to world x/y.
    PointerRepulsion(Vec2),
}

impl LocomotionMode {
    #[inline]
    pub fn is_focus(&self) -> bool {
        matches!(self, LocomotionMode::FocusAttract(_))
    }
}

/// One glowing sprite of the ambient field.
#[derive(Clone, Debug)]
pub struct Orb {
    params: OrbParams,
    angle: f32,
    position: Vec3,
    opacity: f32,
    scale: f32,
}

impl Orb {
    fn new(params: OrbParams) -> Self {
        Self {
            params,
            angle: params.base_angle,
            position: params.base_position,
            opacity: IDLE_OPACITY_BASE,
            scale: params.base_scale,
        }
    }

    #[inline]
    pub fn params(&self) -> &OrbParams {
        &self.params
    }
    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }
    #[inline]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }
    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Point on the idle ellipse for the current phase.
    #[inline]
    pub fn orbit_target(&self, index: usize) -> Vec2 {
        let p = &self.params;
        let phase = index as f32;
        Vec2::new(
            p.base_position.x + (self.angle + phase).cos() * p.orbit_radius,
            p.base_position.y + (self.angle * ORBIT_Y_PHASE_RATIO + phase).sin() * p.orbit_radius,
        )
    }

    fn step(&mut self, index: usize, mode: LocomotionMode, warp: bool, t: f64) {
        let speed_multiplier = if warp { WARP_SPEED_MULTIPLIER } else { 1.0 };
        self.angle += self.params.angular_speed * ORBIT_STEP * speed_multiplier;
        let mut target = self.orbit_target(index);

        match mode {
            LocomotionMode::FocusAttract(focus) => {
                let pull = Vec2::new(focus.x * FOCUS_SCALE_X, focus.y * FOCUS_SCALE_Y);
                target = target * (1.0 - FOCUS_PULL) + pull * FOCUS_PULL;
                self.opacity = FOCUS_OPACITY_BASE
                    + FOCUS_OPACITY_SWING * (t * FOCUS_OPACITY_RATE).sin() as f32;
                self.scale = self.params.base_scale * FOCUS_SCALE_FACTOR;
            }
            LocomotionMode::PointerRepulsion(point) => {
                target -= repulsion(point, self.position.truncate());
                self.shimmer(index, t);
            }
            LocomotionMode::Idle => self.shimmer(index, t),
        }

        if warp {
            self.position.z += WARP_Z_STEP;
            if self.position.z > WARP_Z_WRAP_ABOVE {
                self.position.z = WARP_Z_RESET;
            }
        }

        self.position.x += (target.x - self.position.x) * DAMPING;
        self.position.y += (target.y - self.position.y) * DAMPING;
    }

    fn shimmer(&mut self, index: usize, t: f64) {
        let pulse = (self.params.pulse_speed as f64 * t + index as f64).sin() as f32;
        self.opacity = IDLE_OPACITY_BASE + IDLE_OPACITY_SWING * pulse;
        self.scale = self.params.base_scale;
    }
}

/// Offset to subtract from an orb's target so it drifts away from `point`.
#[inline]
pub fn repulsion(point: Vec2, orb_xy: Vec2) -> Vec2 {
    let d = point - orb_xy;
    let dist = d.length();
    if dist < REPULSION_RADIUS {
        let force = (REPULSION_RADIUS - dist) / REPULSION_RADIUS;
        d * force * REPULSION_STRENGTH
    } else {
        Vec2::ZERO
    }
}

/// The ambient background: a fixed pool of orbs, a camera that trails the
/// pointer, and the input state that steers both.
pub struct AmbientScene<S: SceneSurface> {
    orbs: [Orb; ORB_COUNT],
    pointer: Vec2,
    input_focus: Option<Vec2>,
    warp_until: Option<f64>,
    camera: Camera,
    viewport: Viewport,
    surface: S,
}

impl<S: SceneSurface> AmbientScene<S> {
    pub fn new<R: Rng>(surface: S, viewport: Viewport, rng: &mut R) -> Self {
        let params = std::array::from_fn(|_| OrbParams::sample(&mut *rng));
        Self::from_params(surface, viewport, params)
    }

    pub fn with_seed(surface: S, viewport: Viewport, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::new(surface, viewport, &mut rng)
    }

    pub fn from_params(mut surface: S, viewport: Viewport, params: [OrbParams; ORB_COUNT]) -> Self {
        surface.set_viewport_size(viewport);
        log::info!(
            "[scene] orbs={} viewport={}x{}",
            ORB_COUNT,
            viewport.width,
            viewport.height
        );
        Self {
            orbs: params.map(Orb::new),
            pointer: Vec2::ZERO,
            input_focus: None,
            warp_until: None,
            camera: Camera::new(viewport.aspect()),
            viewport,
            surface,
        }
    }

    #[inline]
    pub fn orbs(&self) -> &[Orb] {
        &self.orbs
    }
    #[inline]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }
    #[inline]
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }
    #[inline]
    pub fn input_focus(&self) -> Option<Vec2> {
        self.input_focus
    }
    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }
    #[inline]
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[inline]
    pub fn is_warp_active(&self, t: f64) -> bool {
        matches!(self.warp_until, Some(until) if t < until)
    }

    pub fn locomotion_mode(&self, t: f64) -> LocomotionMode {
        match self.input_focus {
            Some(focus) => LocomotionMode::FocusAttract(focus),
            None if self.is_warp_active(t) => LocomotionMode::Idle,
            None => LocomotionMode::PointerRepulsion(Vec2::new(
                self.pointer.x * POINTER_SCALE_X,
                self.pointer.y * POINTER_SCALE_Y,
            )),
        }
    }

    /// Evolve orbs and camera to time `t` (seconds) without drawing.
    pub fn advance(&mut self, t: f64) {
        let warp = self.is_warp_active(t);
        if !warp && self.warp_until.take().is_some() {
            log::debug!("[scene] warp ended at t={:.3}", t);
        }
        let mode = self.locomotion_mode(t);
        for (i, orb) in self.orbs.iter_mut().enumerate() {
            orb.step(i, mode, warp, t);
        }

        let follow = self.pointer * CAMERA_POINTER_FOLLOW;
        self.camera.position.x += (follow.x - self.camera.position.x) * DAMPING;
        self.camera.position.y += (follow.y - self.camera.position.y) * DAMPING;
    }

    /// One full frame: advance to `t`, then hand the scene to the surface.
    pub fn update(&mut self, t: f64) -> anyhow::Result<()> {
        self.advance(t);
        self.surface.draw(&self.orbs, &self.camera)
    }

    pub fn on_pointer_move(&mut self, client_x: f32, client_y: f32) {
        self.pointer = client_to_ndc(client_x, client_y, self.viewport);
    }

    pub fn on_resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        self.camera.set_aspect_from(self.viewport);
        self.surface.set_viewport_size(self.viewport);
    }

    pub fn set_input_focus(&mut self, x: f32, y: f32) {
        let focus = Vec2::new(x, y);
        if !is_finite_ndc(focus) {
            log::warn!("[scene] ignoring non-finite input focus ({}, {})", x, y);
            return;
        }
        log::debug!("[scene] input focus at ({:.2}, {:.2})", x, y);
        self.input_focus = Some(focus);
    }

    pub fn clear_input_focus(&mut self) {
        self.input_focus = None;
    }

    /// Start (or restart) the warp window at `now` (seconds).
    pub fn trigger_warp(&mut self, now: f64) {
        self.warp_until = Some(now + WARP_DURATION_SEC);
        log::debug!("[scene] warp until t={:.3}", now + WARP_DURATION_SEC);
    }
}
