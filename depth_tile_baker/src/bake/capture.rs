/// Offscreen capture.
///
/// Renders the scene depth of a request footprint from a temporary
/// top-down orthographic camera, then encodes it, in one command list
/// and one submission. The caller owns the returned targets.

use std::sync::Arc;
use glam::Mat4;
use crate::error::Result;
use crate::baker_bail;
use crate::camera::Camera;
use crate::render_graph::{CustomAction, RenderGraph};
use crate::renderer::{Renderer, Shader};
use crate::resource::Mesh;
use crate::scene::{CameraCuller, FrustumCuller, Scene};
use super::depth_encode::DepthEncodePass;
use super::render_target::{
    CaptureTargets, ENCODED_DEPTH_TARGET, SCENE_COLOR_TARGET, SCENE_DEPTH_TARGET,
};
use super::request::CaptureRequest;

/// Name of the scene depth pass in the capture graph
pub const SCENE_DEPTH_PASS: &str = "scene_depth";

/// Temporary camera of a request
///
/// Placed `height_offset` above the center, looking straight down with
/// its up axis on world -Z: image columns grow along +X and the first
/// image row is the -Z edge of the footprint.
pub fn capture_camera(request: &CaptureRequest) -> Camera {
    Camera::top_down(
        request.eye(),
        request.footprint_size() * 0.5,
        request.near_plane(),
        request.far_plane(),
        request.tile_resolution(),
    )
}

/// Scene depth capture stage
pub struct OffscreenCapture {
    culler: Box<dyn CameraCuller>,
}

impl OffscreenCapture {
    /// Capture stage culling by layer mask and frustum
    pub fn new() -> Self {
        Self::with_culler(Box::new(FrustumCuller::new()))
    }

    /// Capture stage with a custom culling strategy
    pub fn with_culler(culler: Box<dyn CameraCuller>) -> Self {
        Self { culler }
    }

    /// Render and encode the depth of `request` into fresh targets
    ///
    /// # Errors
    ///
    /// - `ResourceLoad` if `shader` is `None`; nothing is allocated
    /// - any renderer error from allocation, recording or submission
    pub fn capture(
        &mut self,
        renderer: &mut dyn Renderer,
        scene: &Scene,
        request: &CaptureRequest,
        shader: Option<&Arc<dyn Shader>>,
    ) -> Result<CaptureTargets> {
        let Some(shader) = shader else {
            baker_bail!(ResourceLoad, "baker::Capture", "Failed to load depth shader for baking");
        };

        let camera = capture_camera(request);
        let view = self.culler.cull(scene, &camera, request.culling_mask());
        let draws: Vec<(Arc<Mesh>, Mat4)> = view.visible_objects().iter()
            .filter_map(|&key| scene.object(key))
            .map(|object| (Arc::clone(object.mesh()), *object.world_matrix()))
            .collect();

        if draws.is_empty() {
            crate::baker_warn!("baker::Capture",
                "No visible geometry under mask {:#010x}, tile will be empty",
                request.culling_mask().bits());
        } else {
            crate::baker_debug!("baker::Capture", "{} of {} objects visible",
                draws.len(), scene.object_count());
        }

        let targets = CaptureTargets::allocate(renderer, request.tile_resolution())?;

        let mut graph = RenderGraph::new("depth_capture");
        graph.add_target(SCENE_COLOR_TARGET, Arc::clone(&targets.color))?;
        graph.add_target(SCENE_DEPTH_TARGET, Arc::clone(&targets.depth))?;
        graph.add_target(ENCODED_DEPTH_TARGET, Arc::clone(&targets.encoded))?;

        let view_projection = camera.view_projection_matrix();
        graph.add_pass(
            SCENE_DEPTH_PASS,
            &[],
            &[SCENE_COLOR_TARGET, SCENE_DEPTH_TARGET],
            Box::new(CustomAction::new(move |cmd, _| {
                cmd.set_view_projection(view_projection)?;
                for (mesh, world) in &draws {
                    cmd.draw_mesh(mesh, *world)?;
                }
                Ok(())
            })),
        )?;
        DepthEncodePass::add_to_graph(
            &mut graph,
            shader,
            request,
            SCENE_DEPTH_TARGET,
            ENCODED_DEPTH_TARGET,
        )?;

        let mut cmd = renderer.create_command_list()?;
        cmd.begin()?;
        graph.execute(cmd.as_mut())?;
        cmd.end()?;
        renderer.submit(&[cmd.as_ref()])?;

        crate::baker_debug!("baker::Capture", "Captured {}x{} depth tile",
            request.tile_resolution(), request.tile_resolution());
        Ok(targets)
    }
}

impl Default for OffscreenCapture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "capture_tests.rs"]
mod tests;
