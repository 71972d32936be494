/// Frustum: the six clipping planes of a view-projection matrix.
///
/// Planes are `(n, d)` with `n` pointing into the volume; a point `p` is
/// inside a plane when `n · p + d >= 0`. Clip depth is [0, 1], as built
/// by `Mat4::orthographic_rh` and `Mat4::perspective_rh`.

use glam::{Mat4, Vec3, Vec4};
use crate::scene::AABB;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    /// Left, right, bottom, top, near, far
    pub planes: [Vec4; 6],
}

impl Frustum {
    /// Extract the planes from the rows of `vp` (Gribb & Hartmann)
    pub fn from_view_projection(vp: &Mat4) -> Self {
        let (x, y, z, w) = (vp.row(0), vp.row(1), vp.row(2), vp.row(3));
        let planes = [w + x, w - x, w + y, w - y, z, w - z].map(|plane| {
            let len = plane.truncate().length();
            if len > 0.0 { plane / len } else { plane }
        });
        Self { planes }
    }

    pub fn left(&self) -> Vec4 {
        self.planes[0]
    }

    pub fn right(&self) -> Vec4 {
        self.planes[1]
    }

    pub fn near(&self) -> Vec4 {
        self.planes[4]
    }

    pub fn far(&self) -> Vec4 {
        self.planes[5]
    }

    /// Whether `point` is inside or on every plane
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.planes.iter().all(|plane| plane.truncate().dot(point) + plane.w >= 0.0)
    }

    /// Conservative box test: false only when `aabb` is entirely outside one plane
    pub fn intersects_aabb(&self, aabb: &AABB) -> bool {
        self.planes.iter().all(|plane| {
            let normal = plane.truncate();
            // Corner furthest along the normal
            let corner = Vec3::select(normal.cmpge(Vec3::ZERO), aabb.max, aabb.min);
            normal.dot(corner) + plane.w >= 0.0
        })
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
