/// Depth-encode pass.
///
/// Fullscreen blit reading the capture depth attachment and writing
/// linear depth, normalized by the far plane, into the single-channel
/// encoded target. Declared in the same render graph as the scene pass,
/// reading the target the scene pass writes, so it always runs after it.

use std::sync::Arc;
use crate::error::Result;
use crate::render_graph::{FullscreenAction, RenderGraph};
use crate::renderer::{DepthEncodeParams, Shader};
use super::request::CaptureRequest;

/// Builder of the depth-encode graph pass
pub struct DepthEncodePass;

impl DepthEncodePass {
    /// Name of the pass in the capture graph
    pub const NAME: &'static str = "depth_encode";

    /// Shader parameters for a request (orthographic capture)
    pub fn params(request: &CaptureRequest) -> DepthEncodeParams {
        DepthEncodeParams::orthographic(request.near_plane(), request.far_plane())
    }

    /// Fullscreen action binding `shader` with the request parameters
    pub fn action(shader: &Arc<dyn Shader>, request: &CaptureRequest) -> FullscreenAction {
        let params = Self::params(request);
        FullscreenAction::new(Arc::clone(shader), bytemuck::bytes_of(&params).to_vec())
    }

    /// Add the pass to `graph`, reading `depth_target` and writing `encoded_target`
    pub fn add_to_graph(
        graph: &mut RenderGraph,
        shader: &Arc<dyn Shader>,
        request: &CaptureRequest,
        depth_target: &str,
        encoded_target: &str,
    ) -> Result<usize> {
        graph.add_pass(
            Self::NAME,
            &[depth_target],
            &[encoded_target],
            Box::new(Self::action(shader, request)),
        )
    }
}

#[cfg(test)]
#[path = "depth_encode_tests.rs"]
mod tests;
