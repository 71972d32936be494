/// RenderView: result of culling.
///
/// Created by a `CameraCuller`. Contains a snapshot of the camera at
/// culling time and the list of visible object keys.
///
/// Ephemeral: lives for one capture. No Arc, no Mutex.

use crate::scene::SceneObjectKey;
use super::camera::Camera;

/// Result of culling. Ephemeral: lives for one capture.
#[derive(Debug, Clone)]
pub struct RenderView {
    camera: Camera,
    visible_objects: Vec<SceneObjectKey>,
}

impl RenderView {
    /// Create a new RenderView (crate-internal: only cullers create these).
    pub(crate) fn new(camera: Camera, visible_objects: Vec<SceneObjectKey>) -> Self {
        Self {
            camera,
            visible_objects,
        }
    }

    /// Camera snapshot at the time of culling.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Keys of visible SceneObjects in the Scene.
    pub fn visible_objects(&self) -> &[SceneObjectKey] {
        &self.visible_objects
    }

    /// Number of visible objects.
    pub fn visible_count(&self) -> usize {
        self.visible_objects.len()
    }
}

#[cfg(test)]
#[path = "render_view_tests.rs"]
mod tests;
