/// Ambient scene tuning constants.
///
/// Everything the orb field, camera and contact hand-off need to agree on
/// lives here so the update rule reads as formulas rather than magic numbers.

// Orb pool
pub const ORB_COUNT: usize = 6;

// Construction ranges (world units unless noted)
pub const ORB_BASE_X_RANGE: (f32, f32) = (-25.0, 25.0);
pub const ORB_BASE_Y_RANGE: (f32, f32) = (-15.0, 15.0);
pub const ORB_BASE_Z_RANGE: (f32, f32) = (-30.0, -10.0);
pub const ORB_RADIUS_RANGE: (f32, f32) = (5.0, 15.0);
pub const ORB_ANGULAR_SPEED_RANGE: (f32, f32) = (0.1, 0.3);
pub const ORB_PULSE_SPEED_RANGE: (f32, f32) = (0.2, 0.7);
pub const ORB_BASE_SCALE_RANGE: (f32, f32) = (20.0, 40.0);

// Idle orbit
pub const ORBIT_STEP: f32 = 0.01; // phase advance per frame per unit of angular speed
pub const ORBIT_Y_PHASE_RATIO: f32 = 0.8; // y runs slower than x -> ellipse drifts

// Exponential smoothing toward the target, fraction of remaining distance per frame
pub const DAMPING: f32 = 0.05;

// Focus-attract mode
pub const FOCUS_SCALE_X: f32 = 20.0;
pub const FOCUS_SCALE_Y: f32 = 10.0;
pub const FOCUS_PULL: f32 = 0.1; // weight of the focus point in the blended target
pub const FOCUS_OPACITY_BASE: f32 = 0.6;
pub const FOCUS_OPACITY_SWING: f32 = 0.2;
pub const FOCUS_OPACITY_RATE: f64 = 2.0;
pub const FOCUS_SCALE_FACTOR: f32 = 0.6;

// Pointer-repulsion mode
pub const POINTER_SCALE_X: f32 = 30.0;
pub const POINTER_SCALE_Y: f32 = 15.0;
pub const REPULSION_RADIUS: f32 = 15.0;
pub const REPULSION_STRENGTH: f32 = 0.05;
pub const IDLE_OPACITY_BASE: f32 = 0.15;
pub const IDLE_OPACITY_SWING: f32 = 0.05;

// Warp burst
pub const WARP_SPEED_MULTIPLIER: f32 = 5.0;
pub const WARP_Z_STEP: f32 = 0.5;
pub const WARP_Z_WRAP_ABOVE: f32 = 5.0;
pub const WARP_Z_RESET: f32 = -40.0;
pub const WARP_DURATION_SEC: f64 = 2.0;

// Camera
pub const CAMERA_FOV_Y_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
pub const CAMERA_START_Z: f32 = 6.0;
pub const CAMERA_LOOK_AT_Z: f32 = -30.0;
pub const CAMERA_POINTER_FOLLOW: f32 = 0.5;

// Render surface
pub const MAX_PIXEL_DENSITY: f64 = 2.0;

// DOM hooks
pub const CANVAS_ID: &str = "webgl";
pub const FORM_FIELD_SELECTOR: &str = ".form-group input, .form-group textarea";
pub const CONTACT_FORM_ID: &str = "contactForm";
pub const SUCCESS_MSG_CLASS: &str = "success-msg";

// Contact hand-off
pub const CONTACT_RECIPIENT: &str = "dev.lombardo@gmail.com";
pub const SEND_WARP_AT_MS: u32 = 400;
pub const SEND_TAKEOFF_AT_MS: u32 = 500;
pub const SEND_HANDOFF_AT_MS: u32 = 1700;
pub const SEND_SUCCESS_DELAY_MS: u32 = 500;
pub const SEND_RESTORE_DELAY_MS: u32 = 4000;
