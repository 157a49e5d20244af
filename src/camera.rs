use glam::{Mat4, Vec3};

use crate::constants::{
    CAMERA_FAR, CAMERA_FOV_Y_DEG, CAMERA_LOOK_AT_Z, CAMERA_NEAR, CAMERA_START_Z,
};

/// CSS-pixel size of the page viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width / self.height.max(1.0)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Perspective camera that always looks at a fixed point far down -z.
#[derive(Clone, Debug)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub fov_y_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, CAMERA_START_Z),
            target: Vec3::new(0.0, 0.0, CAMERA_LOOK_AT_Z),
            fov_y_deg: CAMERA_FOV_Y_DEG,
            aspect,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
        }
    }

    pub fn set_aspect_from(&mut self, viewport: Viewport) {
        self.aspect = viewport.aspect();
    }

    #[inline]
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    #[inline]
    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_y_deg.to_radians(),
            self.aspect,
            self.near,
            self.far,
        )
    }

    #[inline]
    pub fn view_projection(&self) -> Mat4 {
        self.projection() * self.view()
    }
}
