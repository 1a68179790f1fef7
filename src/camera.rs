//! Camera matrix and its GPU representation.

use cgmath::{Matrix4, perspective};

use crate::config::CameraConfig;

/// cgmath builds OpenGL-style projections with depth in [-1, 1];
/// wgpu expects [0, 1].
#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

/// Projection x view for the given camera parameters.
///
/// Pure function of `camera`; calling it twice with the same input returns
/// bit-identical matrices.
pub fn camera_matrix(camera: &CameraConfig) -> Matrix4<f32> {
    let view = Matrix4::look_at_rh(camera.eye, camera.target, camera.up);
    let proj = perspective(camera.fovy, camera.aspect, camera.znear, camera.zfar);
    OPENGL_TO_WGPU_MATRIX * proj * view
}

/// The `camera` uniform as laid out in the shader.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn new(matrix: Matrix4<f32>) -> Self {
        Self {
            view_proj: matrix.into(),
        }
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        use cgmath::SquareMatrix;
        Self::new(Matrix4::identity())
    }
}
