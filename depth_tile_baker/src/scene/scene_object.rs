/// Scene objects and bounding boxes.
///
/// A SceneObject is a mesh placed in the world on one layer. Its
/// world-space bounding box is computed once when the object is built
/// or moved, and used for frustum culling.

use std::sync::Arc;
use glam::{Mat4, Vec3};
use slotmap::new_key_type;
use crate::error::Result;
use crate::baker_bail;
use crate::resource::Mesh;
use super::layer_mask::LAYER_COUNT;

new_key_type! {
    /// Stable key for a SceneObject in a Scene
    pub struct SceneObjectKey;
}

// ===== AABB =====

/// Axis-Aligned Bounding Box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
}

impl AABB {
    /// Transform this local-space AABB by a matrix, returning a new AABB.
    ///
    /// Uses the Arvo method: projects each matrix axis onto the AABB extents
    /// for an exact (tight) result without transforming all 8 corners.
    pub fn transformed(&self, matrix: &Mat4) -> AABB {
        let translation = matrix.col(3).truncate();
        let mut new_min = translation;
        let mut new_max = translation;

        for i in 0..3 {
            let axis = matrix.col(i).truncate();
            let a = axis * self.min[i];
            let b = axis * self.max[i];
            new_min += a.min(b);
            new_max += a.max(b);
        }

        AABB { min: new_min, max: new_max }
    }

    /// Test if this AABB intersects (overlaps) another AABB.
    ///
    /// Returns `true` if the two AABBs overlap or touch.
    pub fn intersects(&self, other: &AABB) -> bool {
        self.min.x <= other.max.x && self.max.x >= other.min.x
        && self.min.y <= other.max.y && self.max.y >= other.min.y
        && self.min.z <= other.max.z && self.max.z >= other.min.z
    }
}

// ===== SCENE OBJECT =====

/// A mesh instance placed in the world on a single layer
#[derive(Debug, Clone)]
pub struct SceneObject {
    name: String,
    mesh: Arc<Mesh>,
    world_matrix: Mat4,
    layer: u32,
    world_bounds: AABB,
}

impl SceneObject {
    /// Create a scene object
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` if `layer` is outside 0..32.
    pub fn new(name: &str, mesh: Arc<Mesh>, world_matrix: Mat4, layer: u32) -> Result<Self> {
        if layer >= LAYER_COUNT {
            baker_bail!(InvalidRequest, "baker::Scene",
                "Object '{}' layer {} out of range (0..{})", name, layer, LAYER_COUNT);
        }
        let world_bounds = mesh.bounds().transformed(&world_matrix);
        Ok(Self {
            name: name.to_string(),
            mesh,
            world_matrix,
            layer,
            world_bounds,
        })
    }

    /// Get the object name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the mesh drawn by this object
    pub fn mesh(&self) -> &Arc<Mesh> {
        &self.mesh
    }

    /// Get the world matrix
    pub fn world_matrix(&self) -> &Mat4 {
        &self.world_matrix
    }

    /// Get the layer index
    pub fn layer(&self) -> u32 {
        self.layer
    }

    /// World-space bounding box
    pub fn world_bounds(&self) -> &AABB {
        &self.world_bounds
    }

    /// Move the object, updating its world bounds
    pub fn set_world_matrix(&mut self, matrix: Mat4) {
        self.world_matrix = matrix;
        self.world_bounds = self.mesh.bounds().transformed(&matrix);
    }
}

#[cfg(test)]
#[path = "scene_object_tests.rs"]
mod tests;
