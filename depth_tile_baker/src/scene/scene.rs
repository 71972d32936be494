/// Scene: a collection of SceneObjects to capture.
///
/// Uses a SlotMap for O(1) insert/remove with stable keys.
/// Objects are stored contiguously for cache-friendly iteration.

use std::sync::Arc;
use slotmap::SlotMap;
use glam::Mat4;
use crate::error::Result;
use crate::resource::Mesh;
use super::scene_object::{SceneObject, SceneObjectKey};

/// A scene containing SceneObjects.
///
/// Objects are managed via stable keys (SceneObjectKey).
/// Keys remain valid even after other objects are removed.
#[derive(Default)]
pub struct Scene {
    objects: SlotMap<SceneObjectKey, SceneObject>,
}

impl Scene {
    /// Create a new empty scene
    pub fn new() -> Self {
        Self {
            objects: SlotMap::with_key(),
        }
    }

    /// Create a SceneObject from a mesh and add it to the scene
    ///
    /// Returns a stable key that remains valid until the object is removed.
    ///
    /// # Arguments
    ///
    /// * `name` - Object name (for logs)
    /// * `mesh` - Shared mesh resource
    /// * `world_matrix` - World transform matrix
    /// * `layer` - Layer index (0..32)
    pub fn add_object(
        &mut self,
        name: &str,
        mesh: Arc<Mesh>,
        world_matrix: Mat4,
        layer: u32,
    ) -> Result<SceneObjectKey> {
        let object = SceneObject::new(name, mesh, world_matrix, layer)?;
        Ok(self.objects.insert(object))
    }

    /// Remove a SceneObject. Returns the removed object, or None if the key is invalid.
    pub fn remove_object(&mut self, key: SceneObjectKey) -> Option<SceneObject> {
        self.objects.remove(key)
    }

    /// Get a SceneObject by key
    pub fn object(&self, key: SceneObjectKey) -> Option<&SceneObject> {
        self.objects.get(key)
    }

    /// Set the world matrix of an object. Returns false if key is invalid.
    pub fn set_world_matrix(&mut self, key: SceneObjectKey, matrix: Mat4) -> bool {
        if let Some(object) = self.objects.get_mut(key) {
            object.set_world_matrix(matrix);
            true
        } else {
            false
        }
    }

    /// Iterate over all objects (key, object)
    pub fn objects(&self) -> impl Iterator<Item = (SceneObjectKey, &SceneObject)> {
        self.objects.iter()
    }

    /// Iterate over all object keys
    pub fn object_keys(&self) -> impl Iterator<Item = SceneObjectKey> + '_ {
        self.objects.keys()
    }

    /// Get the number of objects
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Remove all objects
    pub fn clear(&mut self) {
        self.objects.clear();
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
