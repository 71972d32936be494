//! Resource-level mesh type.
//!
//! A `Mesh` is an indexed triangle list in local space, shared by
//! every scene object that draws it. Meshes are immutable once built:
//! the constructor validates the index buffer and computes the local
//! bounding box used for frustum culling.
//!
//! # Example
//!
//! ```text
//! Mesh "seabed"
//! ├── positions: [Vec3; N]   (local space)
//! ├── indices:   [u32; 3*T]  (triangle list)
//! └── bounds:    AABB        (local space)
//! ```

use glam::Vec3;
use crate::error::Result;
use crate::baker_bail;
use crate::scene::AABB;

/// Indexed triangle mesh in local space.
#[derive(Debug, Clone)]
pub struct Mesh {
    /// Debug name
    name: String,
    /// Vertex positions
    positions: Vec<Vec3>,
    /// Triangle list indices (3 per triangle)
    indices: Vec<u32>,
    /// Local-space bounding box
    bounds: AABB,
}

impl Mesh {
    /// Create a mesh from positions and a triangle list
    ///
    /// # Errors
    ///
    /// Returns `InvalidResource` if:
    /// - `positions` is empty or contains a non-finite component
    /// - `indices` is empty or its length is not a multiple of 3
    /// - an index is out of range
    pub fn new(name: &str, positions: Vec<Vec3>, indices: Vec<u32>) -> Result<Self> {
        if positions.is_empty() {
            baker_bail!(InvalidResource, "baker::Mesh", "Mesh '{}' has no vertices", name);
        }
        if let Some(index) = positions.iter().position(|p| !p.is_finite()) {
            baker_bail!(InvalidResource, "baker::Mesh",
                "Mesh '{}' vertex {} is not finite", name, index);
        }
        if indices.is_empty() || indices.len() % 3 != 0 {
            baker_bail!(InvalidResource, "baker::Mesh",
                "Mesh '{}' index count {} is not a non-empty multiple of 3", name, indices.len());
        }
        if let Some(&index) = indices.iter().find(|&&i| i as usize >= positions.len()) {
            baker_bail!(InvalidResource, "baker::Mesh",
                "Mesh '{}' index {} out of range (vertex count: {})", name, index, positions.len());
        }

        let bounds = positions.iter().fold(
            AABB { min: Vec3::splat(f32::MAX), max: Vec3::splat(f32::MIN) },
            |aabb, p| AABB { min: aabb.min.min(*p), max: aabb.max.max(*p) },
        );

        Ok(Self {
            name: name.to_string(),
            positions,
            indices,
            bounds,
        })
    }

    /// Flat square in the XZ plane at y = 0, centered on the origin
    ///
    /// `size` is the full edge length.
    pub fn plane(name: &str, size: f32) -> Result<Self> {
        let h = size * 0.5;
        Self::new(
            name,
            vec![
                Vec3::new(-h, 0.0, -h),
                Vec3::new(h, 0.0, -h),
                Vec3::new(h, 0.0, h),
                Vec3::new(-h, 0.0, h),
            ],
            vec![0, 2, 1, 0, 3, 2],
        )
    }

    /// Axis-aligned box centered on the origin
    pub fn cuboid(name: &str, half_extents: Vec3) -> Result<Self> {
        let Vec3 { x, y, z } = half_extents;
        let positions = vec![
            Vec3::new(-x, -y, -z),
            Vec3::new(x, -y, -z),
            Vec3::new(x, y, -z),
            Vec3::new(-x, y, -z),
            Vec3::new(-x, -y, z),
            Vec3::new(x, -y, z),
            Vec3::new(x, y, z),
            Vec3::new(-x, y, z),
        ];
        let indices = vec![
            // -Z, +Z
            0, 2, 1, 0, 3, 2,
            4, 5, 6, 4, 6, 7,
            // -Y, +Y
            0, 1, 5, 0, 5, 4,
            3, 6, 2, 3, 7, 6,
            // -X, +X
            0, 4, 7, 0, 7, 3,
            1, 2, 6, 1, 6, 5,
        ];
        Self::new(name, positions, indices)
    }

    /// Get the debug name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the vertex positions
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Get the triangle list indices
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Local-space bounding box
    pub fn bounds(&self) -> &AABB {
        &self.bounds
    }

    /// Iterate over triangles as vertex position triples
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.indices.chunks_exact(3).map(move |tri| {
            [
                self.positions[tri[0] as usize],
                self.positions[tri[1] as usize],
                self.positions[tri[2] as usize],
            ]
        })
    }
}

#[cfg(test)]
#[path = "mesh_tests.rs"]
mod tests;
