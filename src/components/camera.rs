use rapier3d::na;
use bevy_ecs::prelude::*;
use crate::math::Mat4f;

#[derive(Debug, Component)]
pub struct Camera {
    perspective: na::Perspective3<f32>,
}

impl Camera {
    pub fn new(width: u32, height: u32, fovy: f32, znear: f32, zfar: f32) -> Self {
        Self {
            perspective: na::Perspective3::new(width as f32 / height as f32, fovy, znear, zfar),
        }
    }

    pub fn projection_matrix(&self) -> Mat4f {
        self.perspective.as_matrix().clone()
    }

    // Used in WebXR where the projection matrix is provided directly
    // rather than decomposed aspect, fovy, znear, zfar. The platform may
    // hand us non-standard matrices (e.g. with shear), so take it as-is.
    pub fn set_projection_matrix(&mut self, matrix: Mat4f) {
        self.perspective = na::Perspective3::from_matrix_unchecked(matrix);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.perspective.set_aspect(width as f32 / height as f32);
    }
}
