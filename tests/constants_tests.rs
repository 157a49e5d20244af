// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

fn ordered((lo, hi): (f32, f32)) -> bool {
    lo < hi
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn construction_ranges_are_ordered() {
    assert!(ordered(ORB_BASE_X_RANGE));
    assert!(ordered(ORB_BASE_Y_RANGE));
    assert!(ordered(ORB_BASE_Z_RANGE));
    assert!(ordered(ORB_RADIUS_RANGE));
    assert!(ordered(ORB_ANGULAR_SPEED_RANGE));
    assert!(ordered(ORB_PULSE_SPEED_RANGE));
    assert!(ordered(ORB_BASE_SCALE_RANGE));

    // Orbs start behind the camera's near plane region
    assert!(ORB_BASE_Z_RANGE.1 < CAMERA_START_Z);
    assert_eq!(ORB_COUNT, 6);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_and_blend_weights_are_fractions() {
    assert!(DAMPING > 0.0 && DAMPING < 1.0);
    assert!(FOCUS_PULL > 0.0 && FOCUS_PULL < 1.0);
    assert!(FOCUS_SCALE_FACTOR > 0.0 && FOCUS_SCALE_FACTOR < 1.0);
    assert!(REPULSION_STRENGTH > 0.0 && REPULSION_STRENGTH < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn opacity_bands_do_not_overlap() {
    let idle_hi = IDLE_OPACITY_BASE + IDLE_OPACITY_SWING;
    let focus_lo = FOCUS_OPACITY_BASE - FOCUS_OPACITY_SWING;
    assert!(IDLE_OPACITY_BASE - IDLE_OPACITY_SWING >= 0.0);
    assert!(FOCUS_OPACITY_BASE + FOCUS_OPACITY_SWING <= 1.0);
    assert!(idle_hi < focus_lo);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn warp_wraps_behind_the_field() {
    assert!(WARP_Z_RESET < ORB_BASE_Z_RANGE.0);
    assert!(WARP_Z_WRAP_ABOVE < CAMERA_START_Z);
    assert!(WARP_Z_STEP > 0.0);
    assert!(WARP_SPEED_MULTIPLIER > 1.0);
    assert!(WARP_DURATION_SEC > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn send_schedule_is_increasing() {
    assert!(SEND_WARP_AT_MS < SEND_TAKEOFF_AT_MS);
    assert!(SEND_TAKEOFF_AT_MS < SEND_HANDOFF_AT_MS);
    assert!(SEND_SUCCESS_DELAY_MS > 0);
    assert!(SEND_RESTORE_DELAY_MS > SEND_SUCCESS_DELAY_MS);
}
