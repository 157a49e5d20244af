// Host-side tests for camera math and pointer/element NDC mapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod camera {
    include!("../src/camera.rs");
}
mod input {
    include!("../src/input.rs");
}

use camera::*;
use glam::{Vec2, Vec3, Vec4};
use input::*;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn viewport_aspect_guards_zero_height() {
    assert!(approx(Viewport::new(800.0, 600.0).aspect(), 800.0 / 600.0));
    assert!(approx(Viewport::new(800.0, 0.0).aspect(), 800.0));
    assert!(Viewport::new(0.0, 600.0).is_empty());
    assert!(!Viewport::new(1.0, 1.0).is_empty());
}

#[test]
fn camera_looks_down_negative_z() {
    let cam = Camera::new(1.5);
    let clip = cam.view_projection() * Vec4::new(0.0, 0.0, -30.0, 1.0);
    let ndc = clip.truncate() / clip.w;
    assert!(approx(ndc.x, 0.0));
    assert!(approx(ndc.y, 0.0));
    assert!(ndc.z > 0.0 && ndc.z < 1.0);

    // Points behind the camera land behind the eye (negative w)
    let behind = cam.view_projection() * Vec4::new(0.0, 0.0, 10.0, 1.0);
    assert!(behind.w < 0.0);
}

#[test]
fn camera_aspect_follows_viewport() {
    let mut cam = Camera::new(1.0);
    cam.set_aspect_from(Viewport::new(1920.0, 1080.0));
    assert!(approx(cam.aspect, 1920.0 / 1080.0));

    // A wider aspect squeezes a fixed x offset toward the centre
    let p = Vec4::new(5.0, 0.0, -20.0, 1.0);
    let wide = cam.view_projection() * p;
    cam.set_aspect_from(Viewport::new(1000.0, 1000.0));
    let square = cam.view_projection() * p;
    assert!((wide.x / wide.w).abs() < (square.x / square.w).abs());
}

#[test]
fn offset_camera_still_targets_fixed_point() {
    let mut cam = Camera::new(1.0);
    cam.position = Vec3::new(0.5, -0.5, 6.0);
    let clip = cam.view_projection() * Vec4::new(0.0, 0.0, -30.0, 1.0);
    assert!(approx(clip.x / clip.w, 0.0));
    assert!(approx(clip.y / clip.w, 0.0));
}

#[test]
fn client_to_ndc_maps_corners_and_centre() {
    let vp = Viewport::new(800.0, 600.0);
    assert_eq!(client_to_ndc(400.0, 300.0, vp), Vec2::ZERO);
    assert_eq!(client_to_ndc(0.0, 0.0, vp), Vec2::new(-1.0, 1.0));
    assert_eq!(client_to_ndc(800.0, 600.0, vp), Vec2::new(1.0, -1.0));
    assert_eq!(client_to_ndc(0.0, 600.0, vp), Vec2::new(-1.0, -1.0));
}

#[test]
fn client_to_ndc_on_empty_viewport_is_origin() {
    assert_eq!(client_to_ndc(10.0, 10.0, Viewport::new(0.0, 0.0)), Vec2::ZERO);
}

#[test]
fn client_outside_viewport_is_not_clamped() {
    let p = client_to_ndc(1200.0, -300.0, Viewport::new(800.0, 600.0));
    assert!(approx(p.x, 2.0));
    assert!(approx(p.y, 2.0));
}

#[test]
fn rect_center_ndc_uses_element_middle() {
    let vp = Viewport::new(1000.0, 500.0);
    // 200x50 field whose centre is at (700, 125)
    let c = rect_center_ndc(600.0, 100.0, 200.0, 50.0, vp);
    assert!(approx(c.x, 0.4));
    assert!(approx(c.y, 0.5));
}

#[test]
fn finite_check_rejects_nan_and_inf() {
    assert!(is_finite_ndc(Vec2::new(0.3, -0.9)));
    assert!(!is_finite_ndc(Vec2::new(f32::NAN, 0.0)));
    assert!(!is_finite_ndc(Vec2::new(0.0, f32::NEG_INFINITY)));
}
