use glam::Vec2;

use crate::camera::Viewport;

/// Map client (CSS pixel) coordinates to normalized device coordinates:
/// origin at the viewport centre, +y up, both axes in [-1, 1] when inside.
///
/// A zero-sized viewport maps everything to the origin.
#[inline]
pub fn client_to_ndc(client_x: f32, client_y: f32, viewport: Viewport) -> Vec2 {
    if viewport.is_empty() {
        return Vec2::ZERO;
    }
    Vec2::new(
        (client_x / viewport.width) * 2.0 - 1.0,
        -(client_y / viewport.height) * 2.0 + 1.0,
    )
}

/// Centre of an element's bounding rect in NDC.
#[inline]
pub fn rect_center_ndc(left: f32, top: f32, width: f32, height: f32, viewport: Viewport) -> Vec2 {
    client_to_ndc(left + width * 0.5, top + height * 0.5, viewport)
}

#[inline]
pub fn is_finite_ndc(p: Vec2) -> bool {
    p.x.is_finite() && p.y.is_finite()
}
