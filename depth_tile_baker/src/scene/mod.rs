//! Scene module
//!
//! Provides the captured scene (objects on layers), layer masks,
//! and culling strategies.

mod layer_mask;
mod scene_object;
mod scene;
mod culler;

pub use layer_mask::{LayerMask, LAYER_COUNT};
pub use scene_object::{SceneObject, SceneObjectKey, AABB};
pub use scene::Scene;
pub use culler::{CameraCuller, BruteForceCuller, FrustumCuller};
