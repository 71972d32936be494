/// Camera culling strategies.
///
/// A CameraCuller determines which SceneObjects are visible from a
/// given camera under a layer mask. Objects whose layer is not in the
/// mask are never visible.

use crate::camera::{Camera, RenderView};
use super::layer_mask::LayerMask;
use super::scene::Scene;
use super::scene_object::SceneObjectKey;

/// Strategy for determining visible objects from a camera.
///
/// Called once per capture before drawing. The returned RenderView
/// is ephemeral and consumed by the scene pass.
///
/// `&mut self` allows stateful implementations (e.g. caching)
/// to maintain state across captures.
pub trait CameraCuller: Send + Sync {
    /// Cull the scene against the camera and return visible objects.
    fn cull(&mut self, scene: &Scene, camera: &Camera, mask: LayerMask) -> RenderView;
}

/// Brute-force culler: layer mask only, no frustum test.
///
/// Suitable for small scenes or as a baseline for comparison.
pub struct BruteForceCuller;

impl BruteForceCuller {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BruteForceCuller {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraCuller for BruteForceCuller {
    fn cull(&mut self, scene: &Scene, camera: &Camera, mask: LayerMask) -> RenderView {
        let visible: Vec<SceneObjectKey> = scene.objects()
            .filter(|(_, object)| mask.contains_layer(object.layer()))
            .map(|(key, _)| key)
            .collect();
        RenderView::new(camera.clone(), visible)
    }
}

/// Frustum culler: layer mask, then world AABB against the camera frustum.
pub struct FrustumCuller;

impl FrustumCuller {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FrustumCuller {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraCuller for FrustumCuller {
    fn cull(&mut self, scene: &Scene, camera: &Camera, mask: LayerMask) -> RenderView {
        let frustum = camera.frustum();
        let visible = scene.objects()
            .filter_map(|(key, object)| {
                if mask.contains_layer(object.layer())
                    && frustum.intersects_aabb(object.world_bounds())
                {
                    Some(key)
                } else {
                    None
                }
            })
            .collect();

        RenderView::new(camera.clone(), visible)
    }
}

#[cfg(test)]
#[path = "culler_tests.rs"]
mod tests;
