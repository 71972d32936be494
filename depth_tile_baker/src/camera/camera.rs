/// Capture camera.
///
/// Holds the matrices a capture renders with, the frustum extracted
/// from them and the viewport. The capture stage builds one per
/// request and drops it once the request is recorded.

use glam::{Mat4, Vec3};
use crate::renderer::Viewport;
use super::frustum::Frustum;

#[derive(Debug, Clone)]
pub struct Camera {
    view: Mat4,
    projection: Mat4,
    frustum: Frustum,
    viewport: Viewport,
}

impl Camera {
    /// Camera from explicit matrices; the frustum is derived from them
    pub fn new(view: Mat4, projection: Mat4, viewport: Viewport) -> Self {
        Self {
            view,
            projection,
            frustum: Frustum::from_view_projection(&(projection * view)),
            viewport,
        }
    }

    /// Orthographic camera at `eye` looking down -Y
    ///
    /// The view covers `half_extent` on each side of the eye, its up axis
    /// is world -Z, so image columns follow +X and the first image row
    /// is the -Z edge. Depth spans `[near, far]` below the eye.
    pub fn top_down(eye: Vec3, half_extent: f32, near: f32, far: f32, resolution: u32) -> Self {
        let view = Mat4::look_to_rh(eye, Vec3::NEG_Y, Vec3::NEG_Z);
        let projection = Mat4::orthographic_rh(
            -half_extent, half_extent,
            -half_extent, half_extent,
            near, far,
        );
        Self::new(view, projection, Viewport::full(resolution, resolution))
    }

    pub fn view_matrix(&self) -> &Mat4 {
        &self.view
    }

    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection
    }

    /// Projection * view
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection * self.view
    }

    pub fn frustum(&self) -> &Frustum {
        &self.frustum
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Window position of a world point: pixels in x and y, depth in z
    pub fn project(&self, world: Vec3) -> Vec3 {
        let ndc = self.view_projection_matrix().project_point3(world);
        let vp = &self.viewport;
        Vec3::new(
            vp.x + (ndc.x + 1.0) * 0.5 * vp.width,
            vp.y + (1.0 - ndc.y) * 0.5 * vp.height,
            vp.min_depth + ndc.z * (vp.max_depth - vp.min_depth),
        )
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
